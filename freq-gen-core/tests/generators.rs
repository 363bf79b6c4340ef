use std::fs;
use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

use freq_gen_core::model::bigram_generator::BigramGenerator;
use freq_gen_core::model::frequency_table::FrequencyTable;
use freq_gen_core::model::word_generator::WordFrequencyGenerator;

fn write_table(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
	let path = dir.path().join(name);
	fs::write(&path, contents).unwrap();
	path
}

#[test]
fn bigram_constructor_loads_table() {
	let dir = TempDir::new().unwrap();
	let table = write_table(&dir, "bigrams.txt", "1 аб 100\n2 бв 200\n3 вг 300");
	let analysis = dir.path().join("analysis.txt");

	let generator = BigramGenerator::new(&table, &analysis).unwrap();

	assert_eq!(generator.table().len(), 3);
	assert_eq!(generator.total_frequency_sum(), 600);
}

#[test]
fn bigram_constructor_fails_on_missing_file() {
	let dir = TempDir::new().unwrap();
	let missing = dir.path().join("does_not_exist.txt");
	let analysis = dir.path().join("analysis.txt");

	assert!(BigramGenerator::new(&missing, &analysis).is_err());
}

#[test]
fn bigram_text_has_twice_the_token_count_in_chars() {
	let dir = TempDir::new().unwrap();
	let table = write_table(&dir, "bigrams.txt", "1 аб 100\n2 бв 200\n3 вг 300");
	let analysis = dir.path().join("analysis.txt");

	let mut generator =
		BigramGenerator::with_rng(&table, &analysis, 500, StdRng::seed_from_u64(1)).unwrap();
	let text = generator.generate_text().unwrap();

	assert_eq!(text.chars().count(), 1000);
}

#[test]
fn random_bigram_is_a_known_token() {
	let dir = TempDir::new().unwrap();
	let table = write_table(&dir, "bigrams.txt", "1 аб 100\n2 бв 200");
	let analysis = dir.path().join("analysis.txt");

	let mut generator =
		BigramGenerator::with_rng(&table, &analysis, 10, StdRng::seed_from_u64(2)).unwrap();

	for _ in 0..100 {
		let bigram = generator.random_bigram().unwrap().to_owned();
		assert!(generator.table().get(&bigram).is_some());
	}
}

#[test]
fn bigram_generation_fails_on_empty_table() {
	let dir = TempDir::new().unwrap();
	let table = write_table(&dir, "bigrams.txt", "no valid\nlines here\n# comment");
	let analysis = dir.path().join("analysis.txt");

	let mut generator = BigramGenerator::new(&table, &analysis).unwrap();

	assert!(generator.table().is_empty());
	assert!(generator.generate_text().is_err());
	assert!(generator.random_bigram().is_err());
}

#[test]
fn bigram_generate_and_save_writes_both_artifacts() {
	let dir = TempDir::new().unwrap();
	let table = write_table(&dir, "bigrams.txt", "1 аб 100\n2 бв 200");
	let analysis = dir.path().join("analysis.txt");
	let output = dir.path().join("output.txt");

	let mut generator =
		BigramGenerator::with_rng(&table, &analysis, 10, StdRng::seed_from_u64(3)).unwrap();
	let text = generator.generate_and_save(&output).unwrap();

	assert_eq!(fs::read_to_string(&output).unwrap(), text);

	let report = fs::read_to_string(&analysis).unwrap();
	let lines: Vec<&str> = report.lines().collect();
	assert_eq!(lines.len(), 2);

	for line in lines {
		let fields: Vec<&str> = line.split(' ').collect();
		assert_eq!(fields.len(), 3);
		assert_eq!(fields[0].chars().count(), 2);
		let empirical: f64 = fields[1].parse().unwrap();
		let theoretical: f64 = fields[2].parse().unwrap();
		assert!((0.0..=1.0).contains(&empirical));
		assert!((0.0..=1.0).contains(&theoretical));
	}
}

#[test]
fn bigram_scenario_three_tokens_500_draws() {
	let dir = TempDir::new().unwrap();
	let table = write_table(&dir, "bigrams.txt", "1 аб 100\n2 бв 200\n3 вг 300");
	let analysis = dir.path().join("analysis.txt");
	let output = dir.path().join("output.txt");

	let mut generator =
		BigramGenerator::with_rng(&table, &analysis, 500, StdRng::seed_from_u64(4)).unwrap();
	let text = generator.generate_and_save(&output).unwrap();

	assert_eq!(text.chars().count(), 1000);
	assert_eq!(fs::read_to_string(&analysis).unwrap().lines().count(), 3);
}

#[test]
fn word_constructor_loads_dictionary() {
	let dir = TempDir::new().unwrap();
	let table = write_table(&dir, "words.txt", "1 слово 0.1 0.1 100\n2 тест 0.1 0.2 200");
	let analysis = dir.path().join("analysis.txt");

	let generator = WordFrequencyGenerator::new(&table, &analysis).unwrap();

	assert_eq!(generator.table().len(), 2);
	assert_eq!(generator.total_frequency(), 300);
}

#[test]
fn word_constructor_fails_on_missing_file() {
	let dir = TempDir::new().unwrap();
	let missing = dir.path().join("does_not_exist.txt");
	let analysis = dir.path().join("analysis.txt");

	assert!(WordFrequencyGenerator::new(&missing, &analysis).is_err());
}

#[test]
fn word_text_has_exactly_the_requested_word_count() {
	let dir = TempDir::new().unwrap();
	let table = write_table(&dir, "words.txt", "1 слово 100 0.1 100\n2 тест 200 0.2 200");
	let analysis = dir.path().join("analysis.txt");

	let mut generator =
		WordFrequencyGenerator::with_rng(&table, &analysis, StdRng::seed_from_u64(5)).unwrap();
	let text = generator.generate_text(50);

	let words: Vec<&str> = text.split(' ').collect();
	assert_eq!(words.len(), 50);
	for word in words {
		assert!(word == "слово" || word == "тест");
	}
}

#[test]
fn word_generation_returns_empty_on_empty_table() {
	let dir = TempDir::new().unwrap();
	let table = write_table(&dir, "words.txt", "");
	let analysis = dir.path().join("analysis.txt");

	let mut generator = WordFrequencyGenerator::new(&table, &analysis).unwrap();

	assert_eq!(generator.generate_text(10), "");
}

#[test]
fn word_generation_returns_empty_on_all_malformed_input() {
	let dir = TempDir::new().unwrap();
	let table = write_table(&dir, "words.txt", "garbage\nmore garbage\n1 слово 0.1 0.1 x");
	let analysis = dir.path().join("analysis.txt");

	let mut generator = WordFrequencyGenerator::new(&table, &analysis).unwrap();

	assert!(generator.table().is_empty());
	assert_eq!(generator.generate_text(10), "");
}

#[test]
fn word_loader_skips_invalid_lines() {
	let dir = TempDir::new().unwrap();
	let table = write_table(
		&dir,
		"words.txt",
		"1 слово 100 0.1 100\ninvalid line\n2 тест 200 0.2 200",
	);
	let analysis = dir.path().join("analysis.txt");

	let generator = WordFrequencyGenerator::new(&table, &analysis).unwrap();

	assert_eq!(generator.table().len(), 2);
}

#[test]
fn word_generate_and_save_writes_both_artifacts() {
	let dir = TempDir::new().unwrap();
	let table = write_table(&dir, "words.txt", "1 слово 100 0.1 100\n2 тест 200 0.2 200");
	let analysis = dir.path().join("analysis.txt");
	let output = dir.path().join("output.txt");

	let mut generator =
		WordFrequencyGenerator::with_rng(&table, &analysis, StdRng::seed_from_u64(6)).unwrap();
	let text = generator.generate_and_save(&output, 100).unwrap();

	assert_eq!(fs::read_to_string(&output).unwrap(), text);
	assert_eq!(text.split(' ').count(), 100);

	let report = fs::read_to_string(&analysis).unwrap();
	let lines: Vec<&str> = report.lines().collect();
	assert_eq!(lines.len(), 2);

	for line in lines {
		let fields: Vec<&str> = line.split(' ').collect();
		assert_eq!(fields.len(), 3);
		assert!(!fields[0].is_empty());
		let empirical: f64 = fields[1].parse().unwrap();
		let theoretical: f64 = fields[2].parse().unwrap();
		assert!((0.0..=1.0).contains(&empirical));
		assert!((0.0..=1.0).contains(&theoretical));
	}
}

#[test]
fn loaded_table_survives_a_snapshot_round_trip() {
	let dir = TempDir::new().unwrap();
	let table_path = write_table(&dir, "bigrams.txt", "1 аб 100\n2 бв 200\n3 вг 300");
	let analysis = dir.path().join("analysis.txt");

	let generator = BigramGenerator::new(&table_path, &analysis).unwrap();

	let bytes = postcard::to_stdvec(generator.table()).unwrap();
	let restored: FrequencyTable = postcard::from_bytes(&bytes).unwrap();

	assert_eq!(&restored, generator.table());
}
