use std::fs::File;
use std::io;
use std::io::Read;
use std::path::Path;

/// Reads a corpus file and returns one string per line.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
/// - Trims trailing whitespace and skips empty lines
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(&filename)?.read_to_string(&mut contents)?;

	let lines: Vec<String> = contents
		.lines()
		.map(str::trim_end)
		.filter(|line| !line.is_empty())
		.map(str::to_owned)
		.collect();

	log::debug!("read_corpus: {} strings from {}", lines.len(), filename.as_ref().display());
	Ok(lines)
}
