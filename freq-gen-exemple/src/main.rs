use freq_gen_core::model::DEFAULT_TOKEN_COUNT;
use freq_gen_core::model::bigram_generator::BigramGenerator;
use freq_gen_core::model::word_generator::WordFrequencyGenerator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Output files land next to the input data
    std::fs::create_dir_all("results")?;

    // Bigram generation: 1000 two-character tokens, concatenated
    let mut bigrams = BigramGenerator::new("data/bigrams_data.txt", "results/gen-1-analysis.txt")?;
    log::info!(
        "Loaded {} bigrams (total frequency {})",
        bigrams.table().len(),
        bigrams.total_frequency_sum()
    );

    let text = bigrams.generate_and_save("results/gen-1.txt")?;
    println!(
        "Bigram text generated ({} characters) and saved to results/gen-1.txt",
        text.chars().count()
    );
    println!("\nSample of generated text (first 100 chars):");
    println!("{}", text.chars().take(100).collect::<String>());

    // Word generation: 1000 words, space separated
    let mut words = WordFrequencyGenerator::new("data/words_data.txt", "results/gen-2-analysis.txt")?;
    log::info!(
        "Loaded {} words (total frequency {})",
        words.table().len(),
        words.total_frequency()
    );

    let text = words.generate_and_save("results/gen-2.txt", DEFAULT_TOKEN_COUNT)?;
    let word_count = if text.is_empty() { 0 } else { text.split(' ').count() };
    println!(
        "\nWord text generated ({} words) and saved to results/gen-2.txt",
        word_count
    );
    println!("Sample of generated text (first 10 words):");
    println!("{}", text.split(' ').take(10).collect::<Vec<_>>().join(" "));

    Ok(())
}
