use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::DEFAULT_TOKEN_COUNT;
use super::analysis::frequency_report;
use super::frequency_table::FrequencyTable;
use crate::io;

/// Bigram text generator.
///
/// Loads a table of two-character tokens with integer frequencies, then
/// produces text by repeatedly drawing a bigram proportionally to its
/// frequency and concatenating the draws without separators.
///
/// # Responsibilities
/// - Load and own one immutable `FrequencyTable` (bigram line format)
/// - Draw exactly `text_length` bigrams per run, tracking observed counts
///   live as generation proceeds
/// - Write the generated text and the observed-vs-expected analysis report
///
/// # Notes
/// - The generator owns its randomness source; tests inject a seeded
///   `StdRng` through `with_rng`.
/// - An empty table (or zero total frequency) is an invalid state: every
///   generation call returns `Err`.
#[derive(Debug)]
pub struct BigramGenerator {
	table: FrequencyTable,
	analysis_path: PathBuf,
	text_length: usize,
	rng: StdRng,
}

impl BigramGenerator {
	/// Creates a generator with the default token count (1000) and an
	/// OS-seeded randomness source.
	///
	/// # Errors
	/// Returns an error if the table file cannot be read (in particular when
	/// it does not exist). Malformed lines inside the file are skipped, not
	/// reported.
	pub fn new<PT, PA>(table_path: PT, analysis_path: PA) -> Result<Self, Box<dyn std::error::Error>>
	where
		PT: AsRef<Path>,
		PA: AsRef<Path>,
	{
		Self::with_length(table_path, analysis_path, DEFAULT_TOKEN_COUNT)
	}

	/// Creates a generator drawing `text_length` bigrams per run.
	///
	/// # Errors
	/// Same conditions as [`BigramGenerator::new`].
	pub fn with_length<PT, PA>(
		table_path: PT,
		analysis_path: PA,
		text_length: usize,
	) -> Result<Self, Box<dyn std::error::Error>>
	where
		PT: AsRef<Path>,
		PA: AsRef<Path>,
	{
		Self::with_rng(table_path, analysis_path, text_length, StdRng::from_os_rng())
	}

	/// Creates a generator with an explicitly provided randomness source.
	///
	/// Passing a seeded `StdRng` makes generation reproducible.
	///
	/// # Errors
	/// Same conditions as [`BigramGenerator::new`].
	pub fn with_rng<PT, PA>(
		table_path: PT,
		analysis_path: PA,
		text_length: usize,
		rng: StdRng,
	) -> Result<Self, Box<dyn std::error::Error>>
	where
		PT: AsRef<Path>,
		PA: AsRef<Path>,
	{
		let lines = io::read_file(table_path)?;
		Ok(Self {
			table: FrequencyTable::from_bigram_lines(&lines),
			analysis_path: analysis_path.as_ref().to_path_buf(),
			text_length,
			rng,
		})
	}

	/// Returns the loaded frequency table.
	pub fn table(&self) -> &FrequencyTable {
		&self.table
	}

	/// Returns the cached sum of all bigram frequencies.
	pub fn total_frequency_sum(&self) -> u64 {
		self.table.total_frequency()
	}

	/// Draws one bigram with probability proportional to its frequency.
	///
	/// # Errors
	/// Returns an error if the table is empty or its total frequency is zero.
	pub fn random_bigram(&mut self) -> Result<&str, String> {
		self.table
			.sample(&mut self.rng)
			.ok_or_else(|| "No bigrams available for generation".to_owned())
	}

	/// Generates the configured number of bigrams as one concatenated string.
	///
	/// The output character length is exactly twice the configured token
	/// count.
	///
	/// # Errors
	/// Returns an error if the table is empty or its total frequency is zero.
	pub fn generate_text(&mut self) -> Result<String, String> {
		self.generate().map(|(text, _)| text)
	}

	/// Generates text and the per-bigram observed counts for one run.
	///
	/// Counts are tracked live, one increment per draw.
	fn generate(&mut self) -> Result<(String, HashMap<String, u64>), String> {
		if self.table.is_empty() || self.table.total_frequency() == 0 {
			return Err("No bigrams available for generation".to_owned());
		}

		let mut text = String::with_capacity(self.text_length * 2);
		let mut observed: HashMap<String, u64> = HashMap::new();

		for _ in 0..self.text_length {
			// The guard above makes an empty draw unreachable
			let bigram = self
				.table
				.sample(&mut self.rng)
				.ok_or_else(|| "No bigrams available for generation".to_owned())?;
			*observed.entry(bigram.to_owned()).or_insert(0) += 1;
			text.push_str(bigram);
		}

		Ok((text, observed))
	}

	/// Generates text, writes it to `output_path` and writes the analysis
	/// report to the configured analysis path.
	///
	/// This is the single combined entry point: one call produces both
	/// artifacts. The generated text is also returned to the caller.
	///
	/// # Errors
	/// - Invalid state (empty table) from generation
	/// - I/O failure while writing either file
	pub fn generate_and_save<P: AsRef<Path>>(
		&mut self,
		output_path: P,
	) -> Result<String, Box<dyn std::error::Error>> {
		let (text, observed) = self.generate()?;
		io::write_file(output_path, &text)?;

		let report = frequency_report(&self.table, &observed, self.text_length);
		io::write_file(&self.analysis_path, &report)?;

		Ok(text)
	}
}
