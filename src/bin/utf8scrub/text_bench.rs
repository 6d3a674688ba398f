//! Throughput benchmark for validation, cleanup and transliteration.
//!
//! Corpora come from [`generate_text`] unless a data directory laid out as
//! `DIR/<pattern>/<size>.txt` is given.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use utf8scrub::{clean_with, to_ascii_bytes, validate_utf8, CleanOptions, Transliterator};

use crate::parse_size;
use crate::text_generators::{generate_text, TextPattern};

/// Benchmark result for a single operation on a single corpus
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub operation: String,
    pub pattern: String,
    pub size: String,
    pub filesize: u64,
    pub valid: bool,
    pub output_bytes: u64,
    pub wall_time_ms: f64,
    pub throughput_mib_s: f64,
}

/// The operations being measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Validate,
    Clean,
    Ascii,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Validate, Operation::Clean, Operation::Ascii];

    fn name(self) -> &'static str {
        match self {
            Operation::Validate => "validate",
            Operation::Clean => "clean",
            Operation::Ascii => "ascii",
        }
    }

    /// Run once, returning the output length.
    fn run(self, data: &[u8], options: &CleanOptions, translit: &Transliterator) -> usize {
        match self {
            Operation::Validate => usize::from(validate_utf8(data).is_ok()),
            Operation::Clean => clean_with(data, options).len(),
            Operation::Ascii => to_ascii_bytes(data, translit).len(),
        }
    }
}

/// Configuration for the benchmark
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub data_dir: Option<PathBuf>,
    pub patterns: Vec<TextPattern>,
    pub operations: Vec<Operation>,
    pub sizes: Vec<String>,
    pub warmup_runs: usize,
    pub benchmark_runs: usize,
    pub invalid_density: f64,
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            patterns: TextPattern::ALL.to_vec(),
            operations: Operation::ALL.to_vec(),
            sizes: vec!["1kb".into(), "64kb".into(), "1mb".into()],
            warmup_runs: 1,
            benchmark_runs: 3,
            invalid_density: 0.01,
            seed: 42,
        }
    }
}

/// Run the benchmark suite
pub fn run_benchmark(
    config: &BenchConfig,
    output_jsonl: Option<&Path>,
    output_md: Option<&Path>,
) -> Result<Vec<BenchmarkResult>> {
    let mut results = Vec::new();

    // Set up Ctrl+C handler
    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);
    ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
        eprintln!("\nInterrupted! Writing partial results...");
    })
    .context("Failed to set Ctrl+C handler")?;

    eprintln!("Running utf8scrub benchmark suite...");
    match &config.data_dir {
        Some(dir) => eprintln!("  Data directory: {}", dir.display()),
        None => eprintln!(
            "  Generated corpora (seed {}, invalid density {})",
            config.seed, config.invalid_density
        ),
    }
    eprintln!("  Warmup runs: {}", config.warmup_runs);
    eprintln!("  Benchmark runs: {}", config.benchmark_runs);
    eprintln!();

    let mut jsonl_file = output_jsonl
        .map(|p| {
            std::fs::File::create(p).with_context(|| format!("Failed to create {}", p.display()))
        })
        .transpose()?;

    let clean_options = CleanOptions::default().with_normalize_whitespace(true);
    let translit = Transliterator::default();

    'outer: for &pattern in &config.patterns {
        for size in &config.sizes {
            let Some(data) = load_corpus(config, pattern, size)? else {
                continue;
            };
            let valid = validate_utf8(&data).is_ok();

            for &operation in &config.operations {
                if interrupted.load(Ordering::SeqCst) {
                    break 'outer;
                }

                eprint!(
                    "  {:<8} {} {} ({})... ",
                    operation.name(),
                    pattern.name(),
                    size,
                    format_bytes(data.len())
                );
                std::io::stderr().flush()?;

                let result =
                    benchmark_corpus(&data, operation, config, &clean_options, &translit);
                let result = BenchmarkResult {
                    pattern: pattern.name().to_string(),
                    size: size.clone(),
                    valid,
                    ..result
                };
                eprintln!(
                    "{:.2}ms ({:.1} MiB/s){}",
                    result.wall_time_ms,
                    result.throughput_mib_s,
                    if result.valid { "" } else { " [INVALID]" }
                );

                // Write to JSONL immediately
                if let Some(ref mut f) = jsonl_file {
                    serde_json::to_writer(&mut *f, &result)?;
                    writeln!(f)?;
                    f.flush()?;
                }

                results.push(result);
            }
        }
    }

    if let Some(md_path) = output_md {
        write_markdown_summary(&results, md_path)?;
    }

    eprintln!();
    eprintln!("Completed {} benchmarks", results.len());

    Ok(results)
}

/// Read a corpus from the data directory, or generate it.
fn load_corpus(config: &BenchConfig, pattern: TextPattern, size: &str) -> Result<Option<Vec<u8>>> {
    match &config.data_dir {
        Some(dir) => {
            let file_path = dir.join(pattern.name()).join(format!("{}.txt", size));
            if !file_path.exists() {
                eprintln!("  Skipping {} (not found)", file_path.display());
                return Ok(None);
            }
            let data = std::fs::read(&file_path)
                .with_context(|| format!("Failed to read {}", file_path.display()))?;
            Ok(Some(data))
        }
        None => {
            let bytes = parse_size(size).map_err(anyhow::Error::msg)?;
            Ok(Some(generate_text(
                bytes,
                pattern,
                Some(config.seed),
                config.invalid_density,
            )))
        }
    }
}

/// Time one operation on one corpus and report the median run.
fn benchmark_corpus(
    data: &[u8],
    operation: Operation,
    config: &BenchConfig,
    options: &CleanOptions,
    translit: &Transliterator,
) -> BenchmarkResult {
    let filesize = data.len() as u64;

    for _ in 0..config.warmup_runs {
        std::hint::black_box(operation.run(data, options, translit));
    }

    let mut times = Vec::with_capacity(config.benchmark_runs);
    let mut output_bytes = 0;
    for _ in 0..config.benchmark_runs.max(1) {
        let start = Instant::now();
        output_bytes = std::hint::black_box(operation.run(data, options, translit));
        times.push(start.elapsed().as_secs_f64() * 1000.0);
    }
    times.sort_by(|a, b| a.total_cmp(b));
    let median = times[times.len() / 2];

    let throughput = if median > 0.0 {
        (filesize as f64 / (1024.0 * 1024.0)) / (median / 1000.0)
    } else {
        0.0
    };

    BenchmarkResult {
        operation: operation.name().to_string(),
        pattern: String::new(),
        size: String::new(),
        filesize,
        valid: false,
        output_bytes: output_bytes as u64,
        wall_time_ms: median,
        throughput_mib_s: throughput,
    }
}

/// Write markdown summary
fn write_markdown_summary(results: &[BenchmarkResult], path: &Path) -> Result<()> {
    std::fs::write(path, render_markdown(results))
        .with_context(|| format!("Failed to write {}", path.display()))
}

fn render_markdown(results: &[BenchmarkResult]) -> String {
    let mut md = String::new();

    md.push_str("# utf8scrub Benchmark Results\n\n");

    // Group by operation, in first-seen order
    let mut operations: Vec<&str> = Vec::new();
    for result in results {
        if !operations.contains(&result.operation.as_str()) {
            operations.push(&result.operation);
        }
    }

    for operation in operations {
        md.push_str(&format!("## {}\n\n", operation));
        md.push_str("| Pattern | Size | Valid | Time (ms) | Throughput (MiB/s) |\n");
        md.push_str("|---------|------|-------|-----------|--------------------|\n");

        for result in results.iter().filter(|r| r.operation == operation) {
            md.push_str(&format!(
                "| {} | {} | {} | {:.2} | {:.1} |\n",
                result.pattern,
                result.size,
                if result.valid { "yes" } else { "no" },
                result.wall_time_ms,
                result.throughput_mib_s
            ));
        }
        md.push('\n');
    }
    md
}

/// Format bytes as human-readable string
fn format_bytes(bytes: usize) -> String {
    if bytes >= 1024 * 1024 * 1024 {
        format!("{:.2} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if bytes >= 1024 * 1024 {
        format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.2} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1024), "1.00 KB");
        assert_eq!(format_bytes(1024 * 1024), "1.00 MB");
        assert_eq!(format_bytes(1024 * 1024 * 1024), "1.00 GB");
    }

    #[test]
    fn test_generated_corpus_has_requested_size() {
        let config = BenchConfig::default();
        let data = load_corpus(&config, TextPattern::Latin, "2kb").unwrap().unwrap();
        assert_eq!(data.len(), 2048);
    }

    #[test]
    fn test_operations_produce_output() {
        let data = generate_text(4096, TextPattern::Mixed, Some(3), 0.02);
        let options = CleanOptions::default();
        let translit = Transliterator::default();
        assert_eq!(Operation::Validate.run(&data, &options, &translit), 0);
        assert!(Operation::Clean.run(&data, &options, &translit) > 0);
        assert!(Operation::Ascii.run(&data, &options, &translit) > 0);
    }

    #[test]
    fn test_markdown_groups_by_operation() {
        let config = BenchConfig {
            benchmark_runs: 1,
            warmup_runs: 0,
            ..Default::default()
        };
        let data = generate_text(256, TextPattern::Ascii, Some(1), 0.0);
        let options = CleanOptions::default();
        let translit = Transliterator::default();
        let results: Vec<BenchmarkResult> = Operation::ALL
            .iter()
            .map(|&op| benchmark_corpus(&data, op, &config, &options, &translit))
            .collect();

        let md = render_markdown(&results);
        assert!(md.contains("## validate\n"));
        assert!(md.contains("## clean\n"));
        assert!(md.contains("## ascii\n"));
        assert_eq!(results[0].output_bytes, 1);
        assert_eq!(results[1].output_bytes, 256);
    }
}
