use rs_bigram_core::corpus::read_corpus;
use rs_bigram_core::{Alphabet, GreedyPredictor, SamplingPredictor, SequenceGenerator, TransitionMatrix};

/// Sentinel used to pad every name on both sides
const SENTINEL: char = '.';

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set RUST_LOG=debug to see matrix and generation summaries
    env_logger::init();

    // One name per line
    let names = read_corpus(concat!(env!("CARGO_MANIFEST_DIR"), "/data/names.txt"))?;

    // Sentinel first, then every letter used by the corpus
    let alphabet = Alphabet::from_corpus(names.iter().map(|name| name.chars()), SENTINEL);

    // Count every adjacent pair of the padded names
    let matrix = TransitionMatrix::from_alphabet(names.iter().map(|name| name.chars()), &alphabet)?;
    log::info!(
        "{} names, {} symbols, {} transitions",
        names.len(),
        alphabet.len(),
        matrix.total()
    );

    // Most frequent followers of the sentinel, i.e. the usual first letters
    let first_letters = matrix.row(alphabet.sentinel_index()).unwrap_or_default();
    for (index, count) in first_letters.iter().enumerate().filter(|(_, count)| **count > 0) {
        if let Some(symbol) = alphabet.symbol(index) {
            println!("'{}' starts {} names", symbol, count);
        }
    }

    // Bigram model: the predictor only needs one symbol of context,
    // names are capped at 12 letters
    let generator = SequenceGenerator::for_alphabet(&alphabet, 1)?.with_max_size(12);

    // The greedy predictor always produces the same name
    let mut greedy = GreedyPredictor::new(&matrix, &alphabet)?;
    let greedy_name: String = generator.generate(&mut greedy).into_iter().collect();
    println!("Greedy name: {}", greedy_name);

    // Weighted sampling, with add-one smoothing so unseen pairs stay possible
    let mut sampler = SamplingPredictor::thread_local(&matrix, &alphabet)?.with_smoothing(1);
    for i in 0..10 {
        let name: String = generator.generate(&mut sampler).into_iter().collect();
        println!("Generated name {}: {}", i + 1, name);
    }

    // Invalid alphabets are rejected before anything is counted
    match TransitionMatrix::build(names.iter().map(|name| name.chars()), vec!['a', 'b', 'a'], SENTINEL) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected alphabet: {}", e),
    }

    Ok(())
}
