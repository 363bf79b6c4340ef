use std::collections::HashMap;

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Ordered mapping from token to its observed frequency.
///
/// A `FrequencyTable` stores `(token, frequency)` pairs in first-insertion
/// order together with a cached total frequency sum. It is built once from a
/// line-oriented source and never mutated afterward.
///
/// Entries are kept in an explicit `Vec` rather than a map so that the
/// cumulative-frequency sampler and the analysis report both walk the same
/// reproducible order.
///
/// ## Responsibilities
/// - Parse the two supported line formats (bigram table, word dictionary)
/// - Keep the total frequency sum in sync with the entries
/// - Draw one token proportionally to its frequency (weighted sampling)
///
/// ## Invariants
/// - Each token appears at most once; a duplicate in the source overwrites
///   the earlier frequency (last write wins) but keeps the original position
/// - `total` always equals the sum of all entry frequencies
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct FrequencyTable {
	/// `(token, frequency)` pairs in first-insertion order.
	entries: Vec<(String, u64)>,
	/// Token -> position in `entries`, used for duplicate overwrite.
	index: HashMap<String, usize>,
	/// Cached sum of all frequencies.
	total: u64,
}

impl FrequencyTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts a token with its frequency.
	///
	/// - If the token is new, it is appended at the end of the entry list.
	/// - If the token already exists, its frequency is overwritten in place
	///   (last write wins) and the cached total is adjusted.
	pub fn insert(&mut self, token: String, frequency: u64) {
		match self.index.get(&token) {
			Some(&position) => {
				self.total -= self.entries[position].1;
				self.total += frequency;
				self.entries[position].1 = frequency;
			}
			None => {
				self.index.insert(token.clone(), self.entries.len());
				self.entries.push((token, frequency));
				self.total += frequency;
			}
		}
	}

	/// Builds a table from bigram-format lines.
	///
	/// Expected fields per line (whitespace/tab separated):
	/// `<index> <two-character-token> <integer-frequency>`.
	/// Only fields 2 and 3 are used.
	///
	/// # Behavior
	/// - The token is lowercased; it must be exactly two characters.
	/// - Lines with fewer than 3 fields, a token of the wrong length or a
	///   non-integer frequency are skipped silently.
	pub fn from_bigram_lines(lines: &[String]) -> Self {
		let mut table = Self::new();
		let mut skipped = 0usize;

		for line in lines {
			let fields: Vec<&str> = line.split_whitespace().collect();
			if fields.len() < 3 {
				skipped += 1;
				continue;
			}

			let token = fields[1].trim().to_lowercase();
			if token.chars().count() != 2 {
				skipped += 1;
				continue;
			}

			match fields[2].parse::<u64>() {
				Ok(frequency) => table.insert(token, frequency),
				Err(_) => skipped += 1,
			}
		}

		if skipped > 0 {
			debug!("Skipped {} malformed bigram line(s) out of {}", skipped, lines.len());
		}
		table
	}

	/// Builds a table from word-dictionary lines.
	///
	/// Expected fields per line (whitespace/tab separated):
	/// `<index> <word> <unused> <unused> <float-frequency>`.
	/// Only fields 2 and 5 are used.
	///
	/// # Behavior
	/// - The frequency is parsed as a float (the source data carries
	///   fractional values) and truncated to an integer sampling weight.
	/// - Lines with fewer than 5 fields or an unparsable/negative frequency
	///   are skipped silently.
	pub fn from_word_lines(lines: &[String]) -> Self {
		let mut table = Self::new();
		let mut skipped = 0usize;

		for line in lines {
			let fields: Vec<&str> = line.split_whitespace().collect();
			if fields.len() < 5 {
				skipped += 1;
				continue;
			}

			match fields[4].parse::<f64>() {
				Ok(frequency) if frequency >= 0.0 => {
					table.insert(fields[1].to_owned(), frequency as u64);
				}
				_ => skipped += 1,
			}
		}

		if skipped > 0 {
			debug!("Skipped {} malformed word line(s) out of {}", skipped, lines.len());
		}
		table
	}

	/// Returns the number of distinct tokens.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if the table holds no tokens.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns the cached sum of all frequencies.
	pub fn total_frequency(&self) -> u64 {
		self.total
	}

	/// Returns the frequency stored for `token`, if any.
	pub fn get(&self, token: &str) -> Option<u64> {
		self.index.get(token).map(|&position| self.entries[position].1)
	}

	/// Iterates over `(token, frequency)` pairs in first-insertion order.
	pub fn entries(&self) -> impl Iterator<Item = (&str, u64)> {
		self.entries.iter().map(|(token, frequency)| (token.as_str(), *frequency))
	}

	/// Draws one token with probability proportional to its frequency.
	///
	/// Picks a uniform integer in `[0, total)` and walks the entries in
	/// insertion order, subtracting each frequency until the draw lands in a
	/// bucket (an O(n) cumulative scan).
	///
	/// Returns `None` if the table is empty or the total frequency is zero.
	pub fn sample<R: Rng>(&self, rng: &mut R) -> Option<&str> {
		if self.entries.is_empty() || self.total == 0 {
			return None;
		}

		let mut r = rng.random_range(0..self.total);
		for (token, frequency) in &self.entries {
			if r < *frequency {
				return Some(token);
			}
			r -= frequency;
		}

		// Fallback: should not happen, but kept for safety.
		self.entries.first().map(|(token, _)| token.as_str())
	}
}
