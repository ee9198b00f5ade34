use clap::Parser;
use std::path::PathBuf;

use quizsql::conversion::{ConvertConfig, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
use quizsql::ConversionEngine;

/// Quiz JSON to SQL Converter
#[derive(Parser, Debug)]
#[command(name = "quizsql")]
#[command(about = "Convert quiz JSON documents into SQL INSERT statements")]
#[command(version = "0.1.0")]
struct CliArgs {
    /// Input quiz JSON file (default: IslamicDB.json)
    #[arg()]
    input: Option<PathBuf>,

    /// Output SQL file path (default: islamic_quiz_output.sql)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(long)]
    quiet: bool,
}

/// Number of output lines echoed in the sample block
const SAMPLE_LINES: usize = 2;

fn main() {
    let args = CliArgs::parse();

    let input = args
        .input
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_FILE));
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));

    let config = ConvertConfig::new().with_quiet(args.quiet);
    let engine = ConversionEngine::new(config);

    // Failures were already reported on the diagnostic stream
    let content = match engine.convert_file(&input, Some(&output)) {
        Ok(result) => result.content,
        Err(_) => String::new(),
    };

    if content.is_empty() {
        println!("No output generated");
    } else if !args.quiet {
        print_sample(&content);
    }
}

fn print_sample(content: &str) {
    println!(
        "\n=== Sample Output (first {} statements) ===",
        SAMPLE_LINES
    );
    for (index, line) in sample_lines(content).iter().enumerate() {
        println!("{}. {}", index + 1, line);
    }
}

fn sample_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(SAMPLE_LINES)
        .collect()
}
