use std::collections::{BTreeSet, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;

use crate::error::{BigramError, Result};

/// A value usable as an alphabet member.
///
/// Implemented for every type that can be cloned, compared and hashed,
/// typically `char` or `String` tokens such as `"<E>"`.
pub trait Symbol: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Symbol for T {}

/// Ordered set of distinct symbols with one designated sentinel.
///
/// The position of a symbol in the alphabet is its index in any
/// `TransitionMatrix` built from it.
///
/// # Invariants
/// - No symbol appears twice
/// - The sentinel is a member
/// - `index` maps every symbol back to its position in `symbols`
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Alphabet<S: Symbol> {
	symbols: Vec<S>,
	#[serde(skip)]
	index: HashMap<S, usize>,
	/// Index of the sentinel in `symbols`.
	sentinel: usize,
}

impl<S: Symbol> Alphabet<S> {
	/// Creates an alphabet from an ordered list of symbols.
	///
	/// # Errors
	/// - `DuplicateSymbol` if a symbol is listed twice
	/// - `MissingSentinel` if `sentinel` is not listed
	pub fn new(symbols: Vec<S>, sentinel: S) -> Result<Self> {
		let mut index = HashMap::with_capacity(symbols.len());
		for (position, symbol) in symbols.iter().enumerate() {
			if let Some(first) = index.insert(symbol.clone(), position) {
				return Err(BigramError::DuplicateSymbol {
					symbol: format!("{:?}", symbol),
					first,
					second: position,
				});
			}
		}

		let sentinel = match index.get(&sentinel) {
			Some(position) => *position,
			None => {
				return Err(BigramError::MissingSentinel { sentinel: format!("{:?}", sentinel) });
			}
		};

		Ok(Self { symbols, index, sentinel })
	}

	/// Derives an alphabet from the symbols used by a corpus.
	///
	/// The sentinel takes index 0, followed by every distinct corpus symbol
	/// in ascending order. Occurrences of the sentinel inside the corpus are
	/// not listed twice.
	pub fn from_corpus<I, W>(corpus: I, sentinel: S) -> Self
	where
		S: Ord,
		I: IntoIterator<Item = W>,
		W: IntoIterator<Item = S>,
	{
		let distinct: BTreeSet<S> = corpus.into_iter().flatten().filter(|s| *s != sentinel).collect();

		let mut symbols = Vec::with_capacity(distinct.len() + 1);
		symbols.push(sentinel);
		symbols.extend(distinct);

		let index = symbols.iter().cloned().enumerate().map(|(i, s)| (s, i)).collect();
		Self { symbols, index, sentinel: 0 }
	}

	/// Returns the index of `symbol`, or `None` if it is not a member.
	pub fn index_of(&self, symbol: &S) -> Option<usize> {
		self.index.get(symbol).copied()
	}

	/// Returns the symbol stored at `index`.
	pub fn symbol(&self, index: usize) -> Option<&S> {
		self.symbols.get(index)
	}

	pub fn contains(&self, symbol: &S) -> bool {
		self.index.contains_key(symbol)
	}

	pub fn sentinel(&self) -> &S {
		&self.symbols[self.sentinel]
	}

	pub fn sentinel_index(&self) -> usize {
		self.sentinel
	}

	/// All symbols in index order.
	pub fn symbols(&self) -> &[S] {
		&self.symbols
	}

	pub fn len(&self) -> usize {
		self.symbols.len()
	}

	/// Always `false` for a validated alphabet, since the sentinel is a member.
	pub fn is_empty(&self) -> bool {
		self.symbols.is_empty()
	}
}
