use rand::Rng;
use rand::rngs::ThreadRng;

use super::alphabet::{Alphabet, Symbol};
use super::transition_matrix::TransitionMatrix;
use crate::error::{BigramError, Result};

/// Capability returning the next symbol for a context window.
///
/// The generator hands over exactly `block_size` symbols, oldest first.
/// Implementations must only return members of the alphabet the caller
/// works with; the generator does not check this, and any later lookup of
/// an unknown symbol (e.g. a matrix index) is the caller's problem.
///
/// Any `FnMut(&[S]) -> S` closure is a predictor.
pub trait Predictor<S> {
	fn predict_next(&mut self, context: &[S]) -> S;
}

impl<S, F> Predictor<S> for F
where
	F: FnMut(&[S]) -> S,
{
	fn predict_next(&mut self, context: &[S]) -> S {
		self(context)
	}
}

/// Checks that a matrix was built over an alphabet of the same size.
fn check_dimensions<S: Symbol>(matrix: &TransitionMatrix, alphabet: &Alphabet<S>) -> Result<()> {
	if matrix.size() != alphabet.len() {
		return Err(BigramError::DimensionMismatch { matrix: matrix.size(), alphabet: alphabet.len() });
	}
	Ok(())
}

/// Row of the last context symbol, if the context is non-empty and known.
fn context_row<'a, S: Symbol>(matrix: &'a TransitionMatrix, alphabet: &Alphabet<S>, context: &[S]) -> Option<&'a [usize]> {
	let last = context.last()?;
	matrix.row(alphabet.index_of(last)?)
}

/// Always picks the most frequent follower of the last context symbol.
///
/// Ties go to the lowest alphabet index. An unseen or unknown context
/// yields the sentinel, which ends generation.
#[derive(Debug, Clone)]
pub struct GreedyPredictor<'a, S: Symbol> {
	matrix: &'a TransitionMatrix,
	alphabet: &'a Alphabet<S>,
}

impl<'a, S: Symbol> GreedyPredictor<'a, S> {
	/// # Errors
	/// Returns `DimensionMismatch` if `matrix` was not built over an
	/// alphabet of this size.
	pub fn new(matrix: &'a TransitionMatrix, alphabet: &'a Alphabet<S>) -> Result<Self> {
		check_dimensions(matrix, alphabet)?;
		Ok(Self { matrix, alphabet })
	}
}

impl<S: Symbol> Predictor<S> for GreedyPredictor<'_, S> {
	fn predict_next(&mut self, context: &[S]) -> S {
		let best = context_row(self.matrix, self.alphabet, context).and_then(|row| {
			row.iter()
				.enumerate()
				.filter(|(_, count)| **count > 0)
				.fold(None, |best: Option<(usize, usize)>, (index, count)| match best {
					Some((_, best_count)) if best_count >= *count => best,
					_ => Some((index, *count)),
				})
		});

		match best.and_then(|(index, _)| self.alphabet.symbol(index)) {
			Some(symbol) => symbol.clone(),
			None => self.alphabet.sentinel().clone(),
		}
	}
}

/// Samples the next symbol proportionally to the transition counts
/// leaving the last context symbol.
///
/// An optional add-k smoothing gives every transition `k` extra virtual
/// occurrences, so unseen pairs remain possible.
///
/// Returns the sentinel when the row has no weight at all (unseen context
/// without smoothing, or a context symbol outside the alphabet).
#[derive(Debug, Clone)]
pub struct SamplingPredictor<'a, S: Symbol, R: Rng> {
	matrix: &'a TransitionMatrix,
	alphabet: &'a Alphabet<S>,
	rng: R,
	smoothing: usize,
}

impl<'a, S: Symbol, R: Rng> SamplingPredictor<'a, S, R> {
	/// Creates a sampler drawing from `rng`.
	///
	/// # Errors
	/// Returns `DimensionMismatch` if `matrix` was not built over an
	/// alphabet of this size.
	pub fn new(matrix: &'a TransitionMatrix, alphabet: &'a Alphabet<S>, rng: R) -> Result<Self> {
		check_dimensions(matrix, alphabet)?;
		Ok(Self { matrix, alphabet, rng, smoothing: 0 })
	}

	/// Adds `k` to every count before sampling.
	pub fn with_smoothing(mut self, k: usize) -> Self {
		self.smoothing = k;
		self
	}

	pub fn smoothing(&self) -> usize {
		self.smoothing
	}
}

impl<'a, S: Symbol> SamplingPredictor<'a, S, ThreadRng> {
	/// Creates a sampler backed by the thread-local generator.
	pub fn thread_local(matrix: &'a TransitionMatrix, alphabet: &'a Alphabet<S>) -> Result<Self> {
		Self::new(matrix, alphabet, rand::rng())
	}
}

impl<S: Symbol, R: Rng> Predictor<S> for SamplingPredictor<'_, S, R> {
	fn predict_next(&mut self, context: &[S]) -> S {
		let Some(row) = context_row(self.matrix, self.alphabet, context) else {
			return self.alphabet.sentinel().clone();
		};

		let total: usize = row.iter().map(|count| count + self.smoothing).sum();
		if total == 0 {
			return self.alphabet.sentinel().clone();
		}

		// Cumulative subtraction over the row, in index order
		let mut r = self.rng.random_range(0..total);
		for (index, count) in row.iter().enumerate() {
			let weight = count + self.smoothing;
			if r < weight {
				if let Some(symbol) = self.alphabet.symbol(index) {
					return symbol.clone();
				}
				break;
			}
			r -= weight;
		}

		self.alphabet.sentinel().clone()
	}
}
