//! utf8scrub CLI tool for validating, repairing and transliterating text.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod text_bench;
mod text_clean;
mod text_generators;
mod text_validate;

#[derive(Debug, Parser)]
#[command(name = "utf8scrub")]
#[command(about = "UTF-8 validation, repair and ASCII transliteration", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate files for UTF-8 compliance
    Validate(text_validate::ValidateArgs),
    /// Repair invalid UTF-8 and optionally normalize whitespace
    Clean(text_clean::CleanArgs),
    /// Transliterate text to ASCII
    Ascii(text_clean::AsciiArgs),
    /// List the whitespace codepoints that normalization rewrites
    Whitespace(text_clean::WhitespaceArgs),
    /// Generate synthetic text corpora for benchmarking and testing
    Generate(GenerateText),
    /// Benchmark validation, cleanup and transliteration throughput
    Bench(BenchArgs),
}

/// Generate synthetic text corpora for benchmarking and testing
#[derive(Debug, Parser)]
struct GenerateText {
    /// Size of text to generate (supports b, kb, mb, gb - case insensitive)
    /// Examples: 1024, 1kb, 512MB, 2Gb
    #[arg(value_parser = parse_size)]
    size: usize,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Text pattern to generate
    #[arg(short, long, default_value = "mixed")]
    pattern: PatternArg,

    /// Random seed for reproducible generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Fraction of positions that receive a malformed byte sequence (0.0-1.0)
    #[arg(long, default_value = "0.0")]
    invalid_density: f64,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PatternArg {
    /// Pure ASCII prose
    Ascii,
    /// Latin letters with diacritics (2-byte sequences)
    Latin,
    /// Greek and Cyrillic words (2-byte sequences)
    GreekCyrillic,
    /// Chinese, Japanese and Korean (3-byte sequences)
    Cjk,
    /// Arabic, Hebrew and Devanagari words
    RightToLeft,
    /// Emoji and symbols (4-byte sequences)
    Emoji,
    /// Whitespace-heavy text using every Unicode space separator
    Whitespace,
    /// Mixed realistic content (prose with occasional non-ASCII)
    Mixed,
    /// Uniform mix of all sequence lengths (1-4 bytes)
    AllLengths,
    /// Only malformed bytes (orphans, bad leads, legacy sequences)
    Garbage,
}

impl From<PatternArg> for text_generators::TextPattern {
    fn from(arg: PatternArg) -> Self {
        use text_generators::TextPattern;
        match arg {
            PatternArg::Ascii => TextPattern::Ascii,
            PatternArg::Latin => TextPattern::Latin,
            PatternArg::GreekCyrillic => TextPattern::GreekCyrillic,
            PatternArg::Cjk => TextPattern::Cjk,
            PatternArg::RightToLeft => TextPattern::RightToLeft,
            PatternArg::Emoji => TextPattern::Emoji,
            PatternArg::Whitespace => TextPattern::Whitespace,
            PatternArg::Mixed => TextPattern::Mixed,
            PatternArg::AllLengths => TextPattern::AllLengths,
            PatternArg::Garbage => TextPattern::Garbage,
        }
    }
}

/// Benchmark validation, cleanup and transliteration throughput
#[derive(Debug, Parser)]
struct BenchArgs {
    /// Read corpora from DIR/<pattern>/<size>.txt instead of generating them
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Write one JSON result per line to this file
    #[arg(long)]
    jsonl: Option<PathBuf>,

    /// Write a markdown summary to this file
    #[arg(long)]
    markdown: Option<PathBuf>,

    /// Comma-separated sizes to benchmark
    #[arg(long, value_delimiter = ',', default_value = "1kb,64kb,1mb")]
    sizes: Vec<String>,

    /// Benchmark runs per corpus (the median is reported)
    #[arg(long, default_value = "3")]
    runs: usize,

    /// Malformed byte density for generated corpora
    #[arg(long, default_value = "0.01")]
    invalid_density: f64,
}

/// Parse size string like "1mb", "512KB", "2GB", "1024" (case insensitive)
fn parse_size(s: &str) -> Result<usize, String> {
    let s = s.trim().to_lowercase();

    // Try parsing as plain number first
    if let Ok(bytes) = s.parse::<usize>() {
        return Ok(bytes);
    }

    // Parse with unit suffix
    let (num_str, unit) = if s.ends_with("gb") {
        (s.trim_end_matches("gb"), 1024 * 1024 * 1024)
    } else if s.ends_with("mb") {
        (s.trim_end_matches("mb"), 1024 * 1024)
    } else if s.ends_with("kb") {
        (s.trim_end_matches("kb"), 1024)
    } else if s.ends_with('b') {
        (s.trim_end_matches('b'), 1)
    } else {
        return Err(format!(
            "Invalid size format: '{}'. Use format like '1mb', '512KB', or '1024'",
            s
        ));
    };

    num_str
        .trim()
        .parse::<usize>()
        .map(|n| n * unit)
        .map_err(|_| format!("Invalid number in size: '{}'", s))
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match cli.command {
        Command::Validate(args) => text_validate::run(args)?,
        Command::Clean(args) => text_clean::run_clean(args)?,
        Command::Ascii(args) => text_clean::run_ascii(args)?,
        Command::Whitespace(args) => text_clean::run_whitespace(args)?,
        Command::Generate(args) => {
            if !(0.0..=1.0).contains(&args.invalid_density) {
                anyhow::bail!("--invalid-density must be between 0.0 and 1.0");
            }
            let text = text_generators::generate_text(
                args.size,
                args.pattern.into(),
                args.seed,
                args.invalid_density,
            );
            tracing::info!(
                bytes = text.len(),
                valid = utf8scrub::is_valid_utf8(&text),
                "generated corpus"
            );

            match args.output {
                Some(path) => {
                    std::fs::write(&path, &text)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("✓ Wrote {} bytes to {}", text.len(), path.display());
                }
                None => {
                    use std::io::Write;
                    std::io::stdout()
                        .write_all(&text)
                        .context("failed to write to stdout")?;
                }
            }
            text_validate::exit_codes::SUCCESS
        }
        Command::Bench(args) => {
            let config = text_bench::BenchConfig {
                data_dir: args.data_dir,
                sizes: args.sizes,
                benchmark_runs: args.runs.max(1),
                invalid_density: args.invalid_density,
                ..Default::default()
            };
            text_bench::run_benchmark(&config, args.jsonl.as_deref(), args.markdown.as_deref())?;
            text_validate::exit_codes::SUCCESS
        }
    };

    if exit_code != text_validate::exit_codes::SUCCESS {
        std::process::exit(exit_code);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        // Plain numbers
        assert_eq!(parse_size("1024").unwrap(), 1024);

        // Units (case insensitive)
        assert_eq!(parse_size("100B").unwrap(), 100);
        assert_eq!(parse_size("1kb").unwrap(), 1024);
        assert_eq!(parse_size("64KB").unwrap(), 64 * 1024);
        assert_eq!(parse_size("1Mb").unwrap(), 1024 * 1024);
        assert_eq!(parse_size("2gb").unwrap(), 2 * 1024 * 1024 * 1024);

        // With whitespace
        assert_eq!(parse_size(" 1mb ").unwrap(), 1024 * 1024);

        // Errors
        assert!(parse_size("abc").is_err());
        assert!(parse_size("1tb").is_err());
        assert!(parse_size("").is_err());
    }

    #[test]
    fn test_cli_parses_clean_flags() {
        let cli = Cli::try_parse_from([
            "utf8scrub",
            "-vv",
            "clean",
            "--normalize-whitespace",
            "--strip-bom",
            "--drop-invalid",
            "input.txt",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Clean(args) => {
                assert!(args.normalize_whitespace);
                assert!(args.strip_bom);
                assert!(args.drop_invalid);
                assert_eq!(args.files, vec![PathBuf::from("input.txt")]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_parses_bench_sizes() {
        let cli = Cli::try_parse_from(["utf8scrub", "bench", "--sizes", "1kb,2kb"]).unwrap();
        match cli.command {
            Command::Bench(args) => assert_eq!(args.sizes, vec!["1kb", "2kb"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
