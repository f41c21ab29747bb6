//! Top-level module for the bigram generation system.
//!
//! - An indexed symbol set (`Alphabet`)
//! - Pair counting over a corpus (`TransitionMatrix`)
//! - The next-symbol capability and matrix-backed strategies (`Predictor`)
//! - A bounded generation loop (`SequenceGenerator`)

/// Ordered, duplicate-free symbol set with a sentinel.
///
/// Gives each symbol the stable index used to address matrix cells.
pub mod alphabet;

/// Square matrix of adjacent-pair counts.
pub mod transition_matrix;

/// Next-symbol prediction capability.
///
/// Also hosts greedy and weighted-sampling strategies reading a matrix row.
pub mod predictor;

/// Bounded generation loop.
pub mod generator;
