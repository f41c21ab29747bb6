//! Bigram-based text generation library.
//!
//! This crate provides the building blocks of a symbol-level bigram
//! generator:
//! - An indexed alphabet with a designated sentinel symbol
//! - A transition matrix counting adjacent symbol pairs over a corpus
//! - A bounded generation loop driven by a pluggable predictor
//! - Reference predictors (greedy, weighted sampling) derived from a matrix
//!
//! The matrix builder and the generator are independent; the caller
//! composes them by deriving a predictor from a matrix.

/// Alphabet, transition matrix, predictors and generation loop.
pub mod model;

/// Corpus loading helpers.
pub mod corpus;

/// Error taxonomy shared by the model components.
pub mod error;

pub use error::{BigramError, Result};
pub use model::alphabet::{Alphabet, Symbol};
pub use model::generator::{make_generator, GeneratorConfig, SequenceGenerator, DEFAULT_MAX_SIZE};
pub use model::predictor::{GreedyPredictor, Predictor, SamplingPredictor};
pub use model::transition_matrix::{build_transition_matrix, TransitionMatrix};
