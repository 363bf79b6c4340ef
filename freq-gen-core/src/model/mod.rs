//! Top-level module for the frequency-driven generation system.
//!
//! This crate provides two structurally identical generators, including:
//! - An ordered token frequency table (`FrequencyTable`)
//! - Bigram text generation (`BigramGenerator`)
//! - Word sequence generation (`WordFrequencyGenerator`)
//! - Internal analysis report rendering (`analysis`)

/// Ordered mapping from token to observed frequency.
///
/// Owns the cumulative-frequency sampling engine shared by both
/// generators, plus the two line-format loaders.
pub mod frequency_table;

/// Bigram (two-character token) text generator.
///
/// Loads a bigram frequency table from a file, draws tokens proportionally
/// to their frequency and concatenates them without separators.
pub mod bigram_generator;

/// Word sequence generator.
///
/// Loads a word frequency dictionary from a file, draws words proportionally
/// to their frequency and joins them with single spaces.
pub mod word_generator;

/// Internal observed-vs-expected frequency report rendering.
///
/// This module is not exposed publicly.
mod analysis;

/// Default number of tokens drawn per generation run.
pub const DEFAULT_TOKEN_COUNT: usize = 1000;
