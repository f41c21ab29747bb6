use thiserror::Error;

/// Errors raised while validating an alphabet, building a matrix
/// or configuring a generator.
///
/// Every variant is detected before any counting starts, so a failed call
/// never hands back a partially filled matrix.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BigramError {
	/// The same symbol appears twice in the alphabet.
	#[error("duplicate symbol {symbol} in alphabet at positions {first} and {second}")]
	DuplicateSymbol {
		symbol: String,
		first: usize,
		second: usize,
	},

	/// The sentinel is not a member of the alphabet.
	#[error("sentinel {sentinel} is not a member of the alphabet")]
	MissingSentinel { sentinel: String },

	/// A corpus string uses a symbol the alphabet does not contain.
	#[error("corpus string {line} contains symbol {symbol} which is not in the alphabet")]
	UnknownSymbol { symbol: String, line: usize },

	/// A matrix and an alphabet of different sizes were paired.
	#[error("matrix is {matrix}x{matrix} but the alphabet holds {alphabet} symbols")]
	DimensionMismatch { matrix: usize, alphabet: usize },

	/// The generator context window must hold at least one symbol.
	#[error("block_size must be >= 1")]
	InvalidBlockSize,
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, BigramError>;
