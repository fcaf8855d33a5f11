use std::{env, fs};

use anyhow::Context;
use studygen::extract::extractor_for;
use studygen::generate::{generate_corpus, Vocabulary};

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";
const DEFAULT_OUTPUT: &str = "corpus.json";

pub struct Config {
    pub locator: String,
    pub output: String,
    pub vocabulary: Option<String>,
}

fn parse_config(mut args: impl Iterator<Item = String>) -> anyhow::Result<Config> {
    let locator = args
        .next()
        .context("document locator is required, either a path to an extracted-document JSON file or an extraction service URL")?;
    let output = args.next().unwrap_or(DEFAULT_OUTPUT.to_string());
    let vocabulary = args.next();

    Ok(Config {
        locator,
        output,
        vocabulary,
    })
}

fn main() -> anyhow::Result<()> {
    let args = env::args().skip(1);

    let config = match parse_config(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Usage: studygen <document> [output] [vocab.yaml]");
            return Err(e);
        }
    };

    let document = extractor_for(&config.locator)
        .extract(&config.locator)
        .context(format!("failed to extract document '{}'", config.locator))?;

    let vocabulary = match config.vocabulary.as_deref() {
        Some(path) => Vocabulary::from_yaml_file(path).context("failed to load vocabulary")?,
        None => Vocabulary::default(),
    };

    let corpus = generate_corpus(&document, &vocabulary);

    let serialized =
        serde_json::to_string_pretty(&corpus).context("failed to serialize corpus")?;
    fs::write(&config.output, serialized)
        .context(format!("failed to write corpus to '{}'", config.output))?;

    let mcqs: usize = corpus.topics.iter().map(|t| t.mcqs.len()).sum();
    let flashcards: usize = corpus.topics.iter().map(|t| t.flashcards.len()).sum();

    println!(
        "generated {BOLD}{}{RESET} topics ({} MCQs, {} flashcards) from {BOLD}{}{RESET} pages into {BOLD}{}{RESET}",
        corpus.topics.len(),
        mcqs,
        flashcards,
        document.page_count,
        &config.output
    );

    Ok(())
}
