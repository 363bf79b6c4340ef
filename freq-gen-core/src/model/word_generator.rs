use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::analysis::frequency_report;
use super::frequency_table::FrequencyTable;
use crate::io;

/// Word sequence generator.
///
/// Loads a word frequency dictionary, then produces a sequence by repeatedly
/// drawing a word proportionally to its frequency and joining the draws with
/// single spaces.
///
/// # Responsibilities
/// - Load and own one immutable `FrequencyTable` (word line format, float
///   frequencies truncated to integer weights)
/// - Draw exactly the requested number of words per run
/// - Write the generated sequence and the observed-vs-expected analysis
///   report
///
/// # Notes
/// - Observed counts are recomputed after the fact by splitting the final
///   output on spaces, unlike the bigram generator's live tracking.
/// - An empty table (or zero total frequency) yields an explicit empty
///   result rather than an error; see `generate_text`.
#[derive(Debug)]
pub struct WordFrequencyGenerator {
	table: FrequencyTable,
	analysis_path: PathBuf,
	rng: StdRng,
}

impl WordFrequencyGenerator {
	/// Creates a generator with an OS-seeded randomness source.
	///
	/// # Errors
	/// Returns an error if the dictionary file cannot be read (in particular
	/// when it does not exist). Malformed lines inside the file are skipped,
	/// not reported.
	pub fn new<PT, PA>(table_path: PT, analysis_path: PA) -> Result<Self, Box<dyn std::error::Error>>
	where
		PT: AsRef<Path>,
		PA: AsRef<Path>,
	{
		Self::with_rng(table_path, analysis_path, StdRng::from_os_rng())
	}

	/// Creates a generator with an explicitly provided randomness source.
	///
	/// Passing a seeded `StdRng` makes generation reproducible.
	///
	/// # Errors
	/// Same conditions as [`WordFrequencyGenerator::new`].
	pub fn with_rng<PT, PA>(
		table_path: PT,
		analysis_path: PA,
		rng: StdRng,
	) -> Result<Self, Box<dyn std::error::Error>>
	where
		PT: AsRef<Path>,
		PA: AsRef<Path>,
	{
		let lines = io::read_file(table_path)?;
		Ok(Self {
			table: FrequencyTable::from_word_lines(&lines),
			analysis_path: analysis_path.as_ref().to_path_buf(),
			rng,
		})
	}

	/// Returns the loaded frequency table.
	pub fn table(&self) -> &FrequencyTable {
		&self.table
	}

	/// Returns the cached sum of all word frequencies.
	pub fn total_frequency(&self) -> u64 {
		self.table.total_frequency()
	}

	/// Generates `word_count` words joined by single spaces.
	///
	/// If no words are loaded (or the total frequency is zero) the result is
	/// an empty string. This is an explicit empty result, not a failure: the
	/// word generator deliberately degrades to "nothing to say" where the
	/// bigram generator reports an invalid state.
	pub fn generate_text(&mut self, word_count: usize) -> String {
		let mut words: Vec<&str> = Vec::with_capacity(word_count);

		for _ in 0..word_count {
			match self.table.sample(&mut self.rng) {
				Some(word) => words.push(word),
				None => return String::new(),
			}
		}

		words.join(" ")
	}

	/// Generates a sequence, writes it to `output_path` and writes the
	/// analysis report to the configured analysis path.
	///
	/// This is the single combined entry point: one call produces both
	/// artifacts. The generated sequence is also returned to the caller.
	///
	/// Observed counts are tabulated from the final text in a second pass,
	/// by splitting on spaces and counting duplicates. An empty result
	/// (empty table) still writes both files; the report then carries a zero
	/// empirical frequency for every known word.
	///
	/// # Errors
	/// Returns an error on I/O failure while writing either file.
	pub fn generate_and_save<P: AsRef<Path>>(
		&mut self,
		output_path: P,
		word_count: usize,
	) -> Result<String, Box<dyn std::error::Error>> {
		let text = self.generate_text(word_count);
		io::write_file(output_path, &text)?;

		let mut observed: HashMap<String, u64> = HashMap::new();
		let mut drawn_total = 0usize;
		if !text.is_empty() {
			for word in text.split(' ') {
				*observed.entry(word.to_owned()).or_insert(0) += 1;
				drawn_total += 1;
			}
		}

		let report = frequency_report(&self.table, &observed, drawn_total);
		io::write_file(&self.analysis_path, &report)?;

		Ok(text)
	}
}
