//! CLI handler for the `validate` command.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use utf8scrub::text::utf8::{self, Utf8Error, Utf8ErrorKind};
use utf8scrub::{clean, decode};

/// Validate files for UTF-8 compliance.
#[derive(Debug, Parser)]
pub struct ValidateArgs {
    /// Input files to validate (reads from stdin if none provided)
    #[arg(trailing_var_arg = true)]
    pub files: Vec<PathBuf>,

    /// Quiet mode: exit code only, no output
    #[arg(short, long)]
    pub quiet: bool,

    /// Also print a summary line with the number of malformed units
    #[arg(long)]
    pub count: bool,

    /// Force color output even when not a TTY
    #[arg(short = 'C', long = "color")]
    pub color: bool,

    /// Disable color output
    #[arg(short = 'M', long = "no-color")]
    pub no_color: bool,
}

/// Exit codes shared by every command.
pub mod exit_codes {
    /// Success (input valid, or command completed).
    pub const SUCCESS: i32 = 0;
    /// Input is not valid UTF-8.
    pub const INVALID: i32 = 1;
    /// I/O or configuration error.
    pub const IO_ERROR: i32 = 2;
}

/// ANSI color codes for error output.
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const LOCATION: &str = "\x1b[1;34m"; // Bold blue
    pub const LINE_NUM: &str = "\x1b[0;34m"; // Blue
    pub const CARET: &str = "\x1b[1;32m"; // Bold green
    pub const MESSAGE: &str = "\x1b[0;33m"; // Yellow
}

/// Color scheme that can be disabled.
pub struct ColorScheme {
    pub error: &'static str,
    location: &'static str,
    line_num: &'static str,
    caret: &'static str,
    message: &'static str,
    pub reset: &'static str,
}

impl ColorScheme {
    pub fn new(use_color: bool) -> Self {
        if use_color {
            Self {
                error: colors::ERROR,
                location: colors::LOCATION,
                line_num: colors::LINE_NUM,
                caret: colors::CARET,
                message: colors::MESSAGE,
                reset: colors::RESET,
            }
        } else {
            Self {
                error: "",
                location: "",
                line_num: "",
                caret: "",
                message: "",
                reset: "",
            }
        }
    }

    /// Resolve `--color`/`--no-color` against whether stderr is a terminal.
    pub fn from_flags(color: bool, no_color: bool) -> Self {
        let use_color = if no_color {
            false
        } else if color {
            true
        } else {
            atty::is(atty::Stream::Stderr)
        };
        Self::new(use_color)
    }
}

/// Run the validate command.
pub fn run(args: ValidateArgs) -> Result<i32> {
    let scheme = ColorScheme::from_flags(args.color, args.no_color);

    if args.files.is_empty() {
        let mut input = Vec::new();
        io::stdin()
            .read_to_end(&mut input)
            .context("failed to read from stdin")?;

        return Ok(validate_input(&input, None, &args, &scheme));
    }

    let mut any_invalid = false;
    let mut any_io_error = false;

    for path in &args.files {
        match fs::read(path) {
            Ok(input) => {
                let filename = path.to_string_lossy();
                if validate_input(&input, Some(&filename), &args, &scheme) == exit_codes::INVALID {
                    any_invalid = true;
                }
            }
            Err(e) => {
                any_io_error = true;
                if !args.quiet {
                    eprintln!(
                        "{}error{}: {}: {}",
                        scheme.error,
                        scheme.reset,
                        path.display(),
                        e
                    );
                }
            }
        }
    }

    if any_io_error {
        Ok(exit_codes::IO_ERROR)
    } else if any_invalid {
        Ok(exit_codes::INVALID)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}

/// Validate a single input and print errors.
fn validate_input(
    input: &[u8],
    filename: Option<&str>,
    args: &ValidateArgs,
    scheme: &ColorScheme,
) -> i32 {
    let err = match utf8::validate_utf8(input) {
        Ok(()) => {
            tracing::debug!(file = filename.unwrap_or("<stdin>"), bytes = input.len(), "valid");
            return exit_codes::SUCCESS;
        }
        Err(err) => err,
    };

    if !args.quiet {
        print_error(&err, input, filename, scheme);
        if args.count {
            let malformed = decode(input).filter(|unit| !unit.is_valid()).count();
            eprintln!(
                "{}: {} malformed sequence(s) in {} bytes",
                filename.unwrap_or("<stdin>"),
                malformed,
                input.len()
            );
        }
    }
    exit_codes::INVALID
}

/// Print a formatted error message with context snippet.
fn print_error(err: &Utf8Error, input: &[u8], filename: Option<&str>, scheme: &ColorScheme) {
    eprintln!(
        "{}error{}: {}",
        scheme.error,
        scheme.reset,
        format_error_kind(&err.kind, err.offset, input)
    );

    let location = match filename {
        Some(f) => format!("{}:{}:{}", f, err.line, err.column),
        None => format!("<stdin>:{}:{}", err.line, err.column),
    };
    eprintln!("  {}--> {}{}", scheme.location, location, scheme.reset);

    let snippet = error_snippet(input, err.offset, err.column);

    // Line number width (minimum 3 chars for alignment)
    let line_num_width = err.line.to_string().len().max(3);
    let blank_padding = " ".repeat(line_num_width + 2);

    eprintln!("{}{}|{}", blank_padding, scheme.line_num, scheme.reset);
    eprintln!(
        " {}{:>width$}{} {}|{} {}",
        scheme.line_num,
        err.line,
        scheme.reset,
        scheme.line_num,
        scheme.reset,
        snippet.line_content,
        width = line_num_width
    );

    let padding = " ".repeat(snippet.caret_offset);
    eprintln!(
        "{}{}|{} {}{}^{}{}",
        blank_padding,
        scheme.line_num,
        scheme.reset,
        padding,
        scheme.caret,
        scheme.reset,
        format_error_hint(&err.kind, scheme)
    );

    eprintln!();
}

/// Format the error kind as a human-readable message.
fn format_error_kind(kind: &Utf8ErrorKind, offset: usize, input: &[u8]) -> String {
    let byte_info = match input.get(offset) {
        Some(&byte) => format!(" (byte {})", utf8::format_byte(byte)),
        None => String::new(),
    };

    match kind {
        Utf8ErrorKind::InvalidLeadByte => format!("invalid UTF-8 lead byte{}", byte_info),
        Utf8ErrorKind::InvalidContinuationByte => {
            format!("invalid UTF-8 continuation byte{}", byte_info)
        }
        Utf8ErrorKind::OverlongEncoding => "overlong UTF-8 encoding".to_string(),
        Utf8ErrorKind::SurrogateCodepoint => "surrogate codepoint in UTF-8".to_string(),
        Utf8ErrorKind::OutOfRangeCodepoint => "codepoint above U+10FFFF".to_string(),
        Utf8ErrorKind::TruncatedSequence => "truncated UTF-8 sequence at end of input".to_string(),
    }
}

/// Format an additional hint for certain error types.
fn format_error_hint(kind: &Utf8ErrorKind, scheme: &ColorScheme) -> String {
    let hint = match kind {
        Utf8ErrorKind::InvalidLeadByte => Some("bytes 0x80-0xBF are continuation bytes"),
        Utf8ErrorKind::InvalidContinuationByte => Some("expected byte 0x80-0xBF"),
        Utf8ErrorKind::OverlongEncoding => Some("use shortest possible encoding"),
        Utf8ErrorKind::SurrogateCodepoint => Some("U+D800-U+DFFF are reserved for UTF-16"),
        Utf8ErrorKind::OutOfRangeCodepoint => Some("maximum is U+10FFFF"),
        Utf8ErrorKind::TruncatedSequence => None,
    };

    match hint {
        Some(h) => format!(" {}{}{}", scheme.message, h, scheme.reset),
        None => String::new(),
    }
}

/// The repaired line containing an error, and where to put the caret.
#[derive(Debug, PartialEq, Eq)]
struct ErrorSnippet {
    line_content: String,
    /// Characters before the caret.
    caret_offset: usize,
}

const MAX_SNIPPET_CHARS: usize = 80;

/// Render the line around `offset` with invalid bytes repaired.
///
/// `column` is the 1-indexed byte column of `offset`.
fn error_snippet(input: &[u8], offset: usize, column: usize) -> ErrorSnippet {
    let line_start = offset + 1 - column.max(1);
    let line_end = input[offset..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(input.len(), |i| offset + i);

    let before: Vec<char> = clean(&input[line_start..offset], false, false)
        .chars()
        .collect();
    let after: Vec<char> = clean(&input[offset..line_end], false, false)
        .chars()
        .collect();

    let half = MAX_SNIPPET_CHARS / 2;
    let (prefix, caret_offset) = if before.len() > half {
        let kept: String = before[before.len() - half..].iter().collect();
        (format!("...{}", kept), half + 3)
    } else {
        (before.iter().collect(), before.len())
    };
    let suffix: String = if after.len() > half {
        let kept: String = after[..half].iter().collect();
        format!("{}...", kept)
    } else {
        after.iter().collect()
    };

    ErrorSnippet {
        line_content: prefix + &suffix,
        caret_offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippet_for(input: &[u8]) -> ErrorSnippet {
        let err = utf8::validate_utf8(input).unwrap_err();
        error_snippet(input, err.offset, err.column)
    }

    #[test]
    fn test_snippet_counts_characters() {
        let mut input = "日本".as_bytes().to_vec();
        input.push(0xFF);
        input.extend_from_slice(b"x");
        let snippet = snippet_for(&input);
        assert_eq!(snippet.line_content, "日本\u{FFFD}x");
        assert_eq!(snippet.caret_offset, 2);
    }

    #[test]
    fn test_snippet_uses_error_line_only() {
        let snippet = snippet_for(b"first\nse\x80cond\nthird");
        // Orphan continuation bytes are dropped from the display
        assert_eq!(snippet.line_content, "second");
        assert_eq!(snippet.caret_offset, 2);
    }

    #[test]
    fn test_snippet_truncates_long_lines() {
        let mut input = vec![b'a'; 200];
        input[150] = 0xC0;
        let snippet = snippet_for(&input);
        assert!(snippet.line_content.starts_with("..."));
        assert!(snippet.line_content.ends_with("..."));
        assert_eq!(snippet.caret_offset, MAX_SNIPPET_CHARS / 2 + 3);
        assert_eq!(snippet.line_content.chars().nth(snippet.caret_offset), Some('\u{FFFD}'));
    }

    #[test]
    fn test_format_error_kind_includes_byte() {
        let msg = format_error_kind(&Utf8ErrorKind::InvalidLeadByte, 0, &[0xFF]);
        assert_eq!(msg, "invalid UTF-8 lead byte (byte 0xFF)");
        let msg = format_error_kind(&Utf8ErrorKind::TruncatedSequence, 1, &[0xC3]);
        assert_eq!(msg, "truncated UTF-8 sequence at end of input");
    }
}
