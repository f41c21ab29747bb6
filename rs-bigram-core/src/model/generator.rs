use serde::{Deserialize, Serialize};

use super::alphabet::{Alphabet, Symbol};
use super::predictor::Predictor;
use crate::error::{BigramError, Result};

/// Default upper bound on the number of emitted symbols.
pub const DEFAULT_MAX_SIZE: usize = 20;

fn default_max_size() -> usize {
	DEFAULT_MAX_SIZE
}

/// Generation parameters, as they would arrive from a caller.
///
/// An absent `max_size` deserializes to [`DEFAULT_MAX_SIZE`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GeneratorConfig<S> {
	/// Width of the context window handed to the predictor.
	pub block_size: usize,

	/// Symbol marking the start and the end of a string.
	pub sentinel: S,

	/// Maximum number of symbols to emit.
	#[serde(default = "default_max_size")]
	pub max_size: usize,
}

impl<S> GeneratorConfig<S> {
	pub fn new(block_size: usize, sentinel: S) -> Self {
		Self { block_size, sentinel, max_size: DEFAULT_MAX_SIZE }
	}
}

/// Why a generation stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stop {
	Sentinel,
	MaxSize,
}

/// Bounded generation loop around a [`Predictor`].
///
/// # Behavior
/// - The working buffer starts as `block_size` copies of the sentinel.
/// - Each step hands the last `block_size` symbols to the predictor.
/// - A predicted sentinel stops generation and is not emitted.
/// - Any other symbol is appended.
/// - Generation also stops once `max_size` symbols were appended, so a
///   predictor that never predicts the sentinel still terminates.
///
/// The bound counts symbols, not characters, so multi-character tokens are
/// bounded the same way as single characters.
///
/// # Invariants
/// - `block_size >= 1`
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceGenerator<S: Symbol> {
	block_size: usize,
	sentinel: S,
	max_size: usize,
}

impl<S: Symbol> SequenceGenerator<S> {
	/// Creates a generator with the default `max_size`.
	///
	/// # Errors
	/// Returns `InvalidBlockSize` if `block_size == 0`.
	pub fn new(block_size: usize, sentinel: S) -> Result<Self> {
		if block_size == 0 {
			return Err(BigramError::InvalidBlockSize);
		}
		Ok(Self { block_size, sentinel, max_size: DEFAULT_MAX_SIZE })
	}

	/// Creates a generator from a deserialized configuration.
	pub fn from_config(config: GeneratorConfig<S>) -> Result<Self> {
		Ok(Self::new(config.block_size, config.sentinel)?.with_max_size(config.max_size))
	}

	/// Creates a generator using the sentinel of `alphabet`.
	pub fn for_alphabet(alphabet: &Alphabet<S>, block_size: usize) -> Result<Self> {
		Self::new(block_size, alphabet.sentinel().clone())
	}

	/// Replaces the emitted-symbol bound. `0` makes every generation empty.
	pub fn with_max_size(mut self, max_size: usize) -> Self {
		self.max_size = max_size;
		self
	}

	pub fn block_size(&self) -> usize {
		self.block_size
	}

	pub fn sentinel(&self) -> &S {
		&self.sentinel
	}

	pub fn max_size(&self) -> usize {
		self.max_size
	}

	/// Generates one sequence, without the leading padding.
	///
	/// The predictor is consulted at most `max_size + 1` times. Output is
	/// deterministic whenever the predictor is.
	pub fn generate<P>(&self, predictor: &mut P) -> Vec<S>
	where
		P: Predictor<S> + ?Sized,
	{
		let mut word: Vec<S> = vec![self.sentinel.clone(); self.block_size];

		let stop = loop {
			if word.len() - self.block_size >= self.max_size {
				break Stop::MaxSize;
			}

			let context = &word[word.len() - self.block_size..];
			let next = predictor.predict_next(context);
			log::trace!("generate: {:?} -> {:?}", context, next);

			if next == self.sentinel {
				break Stop::Sentinel;
			}
			word.push(next);
		};

		let generated = word.split_off(self.block_size);
		log::debug!("generate: {} symbols, stopped on {:?}", generated.len(), stop);
		generated
	}
}

impl<S: Symbol> TryFrom<GeneratorConfig<S>> for SequenceGenerator<S> {
	type Error = BigramError;

	fn try_from(config: GeneratorConfig<S>) -> Result<Self> {
		Self::from_config(config)
	}
}

/// Builds a generator from its three parameters.
pub fn make_generator<S: Symbol>(block_size: usize, sentinel: S, max_size: usize) -> Result<SequenceGenerator<S>> {
	SequenceGenerator::from_config(GeneratorConfig { block_size, sentinel, max_size })
}

#[cfg(test)]
mod tests {
	use super::*;

	fn token(s: &str) -> String {
		s.to_owned()
	}

	#[test]
	fn follows_the_predictor_until_the_sentinel() {
		let generator = make_generator(1, token("<E>"), DEFAULT_MAX_SIZE).unwrap();
		let mut predictor = |context: &[String]| match context[0].as_str() {
			"<E>" => token("a"),
			"a" => token("b"),
			_ => token("<E>"),
		};

		assert_eq!(generator.generate(&mut predictor).concat(), "ab");
	}

	#[test]
	fn immediate_sentinel_gives_empty_sequence() {
		let generator = SequenceGenerator::new(3, '.').unwrap();
		let mut calls = 0;
		let mut predictor = |_: &[char]| {
			calls += 1;
			'.'
		};

		assert!(generator.generate(&mut predictor).is_empty());
		assert_eq!(calls, 1);
	}

	#[test]
	fn stops_at_max_size() {
		let generator = SequenceGenerator::new(2, '.').unwrap().with_max_size(5);
		let mut calls = 0;
		let mut predictor = |_: &[char]| {
			calls += 1;
			'x'
		};

		assert_eq!(generator.generate(&mut predictor), vec!['x'; 5]);
		assert_eq!(calls, 5);
	}

	#[test]
	fn default_bound_is_twenty() {
		let generator = SequenceGenerator::new(1, '.').unwrap();
		assert_eq!(generator.max_size(), 20);
		assert_eq!(generator.generate(&mut |_: &[char]| 'z').len(), 20);
	}

	#[test]
	fn zero_max_size_never_consults_the_predictor() {
		let generator = make_generator(1, '.', 0).unwrap();
		let mut predictor = |_: &[char]| -> char { panic!("predictor must not be called") };
		assert!(generator.generate(&mut predictor).is_empty());
	}

	#[test]
	fn context_is_a_sliding_window() {
		let generator = SequenceGenerator::new(3, '.').unwrap().with_max_size(4);
		let mut seen: Vec<String> = Vec::new();
		let mut counter = 0u8;
		let mut predictor = |context: &[char]| {
			seen.push(context.iter().collect());
			counter += 1;
			(b'a' + counter - 1) as char
		};

		assert_eq!(generator.generate(&mut predictor), vec!['a', 'b', 'c', 'd']);
		assert_eq!(seen, vec!["...", "..a", ".ab", "abc"]);
	}

	#[test]
	fn max_size_counts_symbols_not_characters() {
		let generator = make_generator(1, token("<E>"), 3).unwrap();
		let generated = generator.generate(&mut |_: &[String]| token("ab"));
		assert_eq!(generated.len(), 3);
		assert_eq!(generated.concat(), "ababab");
	}

	#[test]
	fn rejects_zero_block_size() {
		assert_eq!(SequenceGenerator::new(0, '.').unwrap_err(), BigramError::InvalidBlockSize);
		assert!(SequenceGenerator::try_from(GeneratorConfig::new(0, '.')).is_err());
	}

	#[test]
	fn uses_the_alphabet_sentinel() {
		let alphabet = Alphabet::new(vec!['a', '#'], '#').unwrap();
		let generator = SequenceGenerator::for_alphabet(&alphabet, 2).unwrap();
		assert_eq!(*generator.sentinel(), '#');
		assert_eq!(generator.block_size(), 2);
	}

	#[test]
	fn config_defaults_max_size() {
		let config: GeneratorConfig<String> = serde_json::from_str(r#"{"block_size":2,"sentinel":"<E>"}"#).unwrap();
		assert_eq!(config, GeneratorConfig::new(2, token("<E>")));

		let generator = SequenceGenerator::from_config(config).unwrap();
		assert_eq!(generator.max_size(), DEFAULT_MAX_SIZE);

		let config: GeneratorConfig<char> = serde_json::from_str(r#"{"block_size":1,"sentinel":".","max_size":4}"#).unwrap();
		assert_eq!(config.max_size, 4);
	}
}
