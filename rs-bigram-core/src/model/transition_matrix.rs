use serde::Serialize;

use super::alphabet::{Alphabet, Symbol};
use crate::error::{BigramError, Result};

/// Counts of adjacent symbol pairs observed in a corpus.
///
/// Cell `(a, b)` holds how many times symbol index `b` directly followed
/// symbol index `a` once every string was padded with the sentinel on both
/// sides. Row and column indices are alphabet indices.
///
/// # Responsibilities
/// - Count transitions from a corpus against a fixed alphabet
/// - Expose read-only access to cells, rows and totals
///
/// # Invariants
/// - The matrix is square: `counts.len() == size * size`
/// - `size >= 1` (the alphabet always holds the sentinel)
/// - `total()` equals the sum over strings of `len + 1`
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TransitionMatrix {
	/// Number of rows (and columns), equal to the alphabet length.
	size: usize,

	/// Row-major cells.
	counts: Vec<usize>,
}

impl TransitionMatrix {
	/// Builds a matrix from a corpus, an ordered symbol list and its sentinel.
	///
	/// Each corpus item is one string, given as its sequence of symbols
	/// (for character models: `corpus.iter().map(|s| s.chars())`).
	///
	/// # Errors
	/// - `DuplicateSymbol` / `MissingSentinel` if the alphabet is invalid
	/// - `UnknownSymbol` if a string uses a symbol outside the alphabet
	///
	/// Nothing is returned on failure; the matrix only exists once every
	/// string has been counted.
	pub fn build<S, I, W>(corpus: I, symbols: Vec<S>, sentinel: S) -> Result<Self>
	where
		S: Symbol,
		I: IntoIterator<Item = W>,
		W: IntoIterator<Item = S>,
	{
		let alphabet = Alphabet::new(symbols, sentinel)?;
		Self::from_alphabet(corpus, &alphabet)
	}

	/// Builds a matrix against an already validated alphabet.
	pub fn from_alphabet<S, I, W>(corpus: I, alphabet: &Alphabet<S>) -> Result<Self>
	where
		S: Symbol,
		I: IntoIterator<Item = W>,
		W: IntoIterator<Item = S>,
	{
		let size = alphabet.len();
		let sentinel = alphabet.sentinel_index();
		let mut counts = vec![0; size * size];
		let mut strings = 0;

		for (line, word) in corpus.into_iter().enumerate() {
			// Padded as [sentinel, *word, sentinel]
			let mut previous = sentinel;
			for symbol in word {
				let current = alphabet.index_of(&symbol).ok_or_else(|| BigramError::UnknownSymbol {
					symbol: format!("{:?}", symbol),
					line,
				})?;
				counts[previous * size + current] += 1;
				previous = current;
			}
			counts[previous * size + sentinel] += 1;
			strings += 1;
		}

		let matrix = Self { size, counts };
		log::debug!(
			"transition matrix: {} strings, {}x{} cells, {} transitions",
			strings,
			size,
			size,
			matrix.total()
		);
		Ok(matrix)
	}

	/// Number of rows, equal to the number of columns.
	pub fn size(&self) -> usize {
		self.size
	}

	/// Returns the count of transitions `from -> to`.
	///
	/// # Panics
	/// Panics if either index is `>= size()`.
	pub fn get(&self, from: usize, to: usize) -> usize {
		assert!(from < self.size && to < self.size, "cell ({from}, {to}) out of a {0}x{0} matrix", self.size);
		self.counts[from * self.size + to]
	}

	/// Returns every outgoing count from symbol index `from`, indexed by target.
	pub fn row(&self, from: usize) -> Option<&[usize]> {
		if from >= self.size {
			return None;
		}
		Some(&self.counts[from * self.size..(from + 1) * self.size])
	}

	/// Iterates over the rows in index order.
	pub fn rows(&self) -> impl Iterator<Item = &[usize]> {
		self.counts.chunks(self.size)
	}

	/// Sum of a row: how many transitions leave symbol index `from`.
	pub fn row_total(&self, from: usize) -> usize {
		self.row(from).map_or(0, |row| row.iter().sum())
	}

	/// Sum of every cell.
	pub fn total(&self) -> usize {
		self.counts.iter().sum()
	}
}

/// Builds a transition matrix from raw inputs.
///
/// Shorthand for [`TransitionMatrix::build`].
pub fn build_transition_matrix<S, I, W>(strings: I, alphabet: Vec<S>, sentinel: S) -> Result<TransitionMatrix>
where
	S: Symbol,
	I: IntoIterator<Item = W>,
	W: IntoIterator<Item = S>,
{
	TransitionMatrix::build(strings, alphabet, sentinel)
}
