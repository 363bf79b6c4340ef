//! Frequency-driven pseudo-random text generation library.
//!
//! This crate generates text by sampling tokens from empirically observed
//! frequency distributions, including:
//! - Bigram (two-character) generation from a frequency table
//! - Word generation from a frequency dictionary
//! - A per-token analysis report comparing empirical vs. theoretical frequency
//! - Internal utilities for line-oriented file I/O
//!
//! This is a statistical simulation, not a language model: every draw is an
//! independent sampling step with no context and no learning.
//!
//! Only the high-level API is exposed publicly. Low-level components
//! are kept internal to ensure consistency and prevent misuse.

/// Frequency tables, samplers and generation logic.
///
/// This module exposes the high-level generator interface while keeping
/// report rendering internal.
pub mod model;

/// I/O utilities (line reading, text writing).
///
/// Not exposed
pub(crate) mod io;
