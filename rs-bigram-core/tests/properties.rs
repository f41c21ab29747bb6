//! Property tests for pair counting and bounded generation.
//!
//! 1. **Conservation**: the matrix total equals the sum of `len + 1` per string
//! 2. **Order independence**: permuting the corpus leaves the matrix unchanged
//! 3. **Validation**: duplicate symbols or a missing sentinel always fail
//! 4. **Termination**: generation never emits more than `max_size` symbols

use proptest::prelude::*;
use rs_bigram_core::{Alphabet, BigramError, SequenceGenerator, TransitionMatrix};

const SENTINEL: char = '.';
const LETTERS: [char; 4] = ['a', 'b', 'c', 'd'];

fn alphabet() -> Vec<char> {
	let mut symbols = vec![SENTINEL];
	symbols.extend(LETTERS);
	symbols
}

fn word() -> impl Strategy<Value = String> {
	prop::collection::vec(prop::sample::select(LETTERS.to_vec()), 0..12).prop_map(|chars| chars.into_iter().collect())
}

fn corpus() -> impl Strategy<Value = Vec<String>> {
	prop::collection::vec(word(), 0..20)
}

fn build(corpus: &[String]) -> TransitionMatrix {
	TransitionMatrix::build(corpus.iter().map(|s| s.chars()), alphabet(), SENTINEL).unwrap()
}

proptest! {
	#[test]
	fn total_counts_len_plus_one_per_string(corpus in corpus()) {
		let matrix = build(&corpus);
		let expected: usize = corpus.iter().map(|s| s.chars().count() + 1).sum();
		prop_assert_eq!(matrix.total(), expected);
	}

	#[test]
	fn corpus_order_does_not_matter(corpus in corpus().prop_shuffle()) {
		let mut sorted = corpus.clone();
		sorted.sort();
		prop_assert_eq!(build(&corpus), build(&sorted));
	}

	#[test]
	fn sentinel_row_and_column_count_strings(corpus in corpus()) {
		let matrix = build(&corpus);
		let column: usize = matrix.rows().map(|row| row[0]).sum();
		prop_assert_eq!(matrix.row_total(0), corpus.len());
		prop_assert_eq!(column, corpus.len());
	}

	#[test]
	fn duplicate_symbols_are_rejected(corpus in corpus(), position in 0..LETTERS.len()) {
		let mut symbols = alphabet();
		symbols.push(LETTERS[position]);
		let result = TransitionMatrix::build(corpus.iter().map(|s| s.chars()), symbols, SENTINEL);
		let is_duplicate = matches!(result, Err(BigramError::DuplicateSymbol { .. }));
		prop_assert!(is_duplicate);
	}

	#[test]
	fn missing_sentinel_is_rejected(corpus in corpus()) {
		let result = TransitionMatrix::build(corpus.iter().map(|s| s.chars()), LETTERS.to_vec(), SENTINEL);
		let is_missing = matches!(result, Err(BigramError::MissingSentinel { .. }));
		prop_assert!(is_missing);
	}

	#[test]
	fn generation_respects_max_size(
		block_size in 1usize..5,
		max_size in 0usize..30,
		outputs in prop::collection::vec(prop::sample::select(alphabet()), 1..40),
	) {
		let generator = SequenceGenerator::new(block_size, SENTINEL).unwrap().with_max_size(max_size);
		let mut step = 0;
		let mut predictor = |context: &[char]| {
			assert_eq!(context.len(), block_size);
			let next = outputs[step % outputs.len()];
			step += 1;
			next
		};

		let generated = generator.generate(&mut predictor);
		prop_assert!(generated.len() <= max_size);
		prop_assert!(!generated.contains(&SENTINEL));
	}

	#[test]
	fn from_corpus_alphabet_accepts_its_corpus(corpus in corpus()) {
		let alphabet = Alphabet::from_corpus(corpus.iter().map(|s| s.chars()), SENTINEL);
		let matrix = TransitionMatrix::from_alphabet(corpus.iter().map(|s| s.chars()), &alphabet).unwrap();
		prop_assert_eq!(matrix.size(), alphabet.len());
		prop_assert_eq!(alphabet.symbol(0), Some(&SENTINEL));
	}
}

#[test]
fn two_symbol_example() {
	let alphabet = vec!["a".to_owned(), "b".to_owned(), "<E>".to_owned()];
	let corpus = vec![vec!["a".to_owned(), "b".to_owned()]];
	let matrix = TransitionMatrix::build(corpus, alphabet, "<E>".to_owned()).unwrap();

	let expected: [[usize; 3]; 3] = [[0, 1, 0], [0, 0, 1], [1, 0, 0]];
	for (row, expected_row) in matrix.rows().zip(expected) {
		assert_eq!(row, expected_row);
	}
	assert_eq!(matrix.total(), 3);
}
