//! CLI handlers for the `clean`, `ascii` and `whitespace` commands.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use utf8scrub::text::whitespace::{INVISIBLE_CONTROLS, WHITESPACE_TABLE};
use utf8scrub::{clean_with_report, to_ascii_bytes, AsciiOptions, CleanOptions, Transliterator};

use crate::text_validate::{exit_codes, ColorScheme};

/// Repair invalid UTF-8 and optionally normalize whitespace.
#[derive(Debug, Parser)]
pub struct CleanArgs {
    /// Input files, concatenated in order (reads from stdin if none provided)
    #[arg(trailing_var_arg = true)]
    pub files: Vec<PathBuf>,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Load options from a JSON file; flags below override it
    #[arg(long)]
    pub options: Option<PathBuf>,

    /// Rewrite Unicode whitespace to ASCII space
    #[arg(short = 'w', long)]
    pub normalize_whitespace: bool,

    /// Remove a leading byte-order mark
    #[arg(short = 'b', long)]
    pub strip_bom: bool,

    /// Drop invalid sequences instead of replacing them
    #[arg(short = 'd', long)]
    pub drop_invalid: bool,

    /// Character substituted for invalid sequences
    #[arg(long)]
    pub replacement: Option<char>,

    /// Remove C0 control characters other than tab and newlines
    #[arg(long)]
    pub remove_invisible: bool,

    /// Rewrite typographic quotes, dashes and ellipses to ASCII
    #[arg(long)]
    pub msword: bool,

    /// Leave non-breaking spaces alone when normalizing whitespace
    #[arg(long)]
    pub keep_nbsp: bool,

    /// Print a JSON summary of the changes to stderr
    #[arg(long)]
    pub report: bool,

    /// Exit with status 1 if cleaning changed anything
    #[arg(long)]
    pub check: bool,
}

impl CleanArgs {
    /// Flags override (but never unset) options read from `--options`.
    fn to_options(&self) -> Result<CleanOptions> {
        let mut options = match &self.options {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                serde_json::from_str(&json)
                    .with_context(|| format!("invalid clean options in {}", path.display()))?
            }
            None => CleanOptions::default(),
        };

        options.normalize_whitespace |= self.normalize_whitespace;
        options.strip_bom |= self.strip_bom;
        options.remove_invisible |= self.remove_invisible;
        options.normalize_msword |= self.msword;
        options.keep_nbsp |= self.keep_nbsp;
        if self.drop_invalid {
            options.replace_invalid = false;
        }
        if let Some(replacement) = self.replacement {
            options.replacement = replacement;
        }
        Ok(options)
    }
}

/// Transliterate text to ASCII.
#[derive(Debug, Parser)]
pub struct AsciiArgs {
    /// Input files, concatenated in order (reads from stdin if none provided)
    #[arg(trailing_var_arg = true)]
    pub files: Vec<PathBuf>,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Text emitted for characters with no transliteration (must be ASCII)
    #[arg(short, long, default_value = "?")]
    pub placeholder: String,

    /// Use the strict transliteration backend when available
    #[arg(short, long)]
    pub strict: bool,

    /// Fail instead of falling back when no strict backend is compiled in
    #[arg(long, requires = "strict")]
    pub require_strict: bool,

    /// Disable color output
    #[arg(short = 'M', long = "no-color")]
    pub no_color: bool,
}

/// List the whitespace codepoints that normalization rewrites.
#[derive(Debug, Parser)]
pub struct WhitespaceArgs {
    /// Print the table as JSON
    #[arg(long)]
    pub json: bool,

    /// Also list the control characters removed by --remove-invisible
    #[arg(long)]
    pub invisible: bool,
}

/// Run the clean command.
pub fn run_clean(args: CleanArgs) -> Result<i32> {
    let options = args.to_options()?;
    let input = read_inputs(&args.files)?;

    let (text, report) = clean_with_report(&input, &options);
    tracing::info!(
        input_bytes = input.len(),
        output_bytes = text.len(),
        changed = report.changed(),
        "clean"
    );

    write_output(args.output.as_deref(), text.as_bytes())?;

    if args.report {
        let json = serde_json::to_string(&report).context("failed to serialize report")?;
        eprintln!("{}", json);
    }

    if args.check && report.changed() {
        Ok(exit_codes::INVALID)
    } else {
        Ok(exit_codes::SUCCESS)
    }
}

/// Run the ascii command.
pub fn run_ascii(args: AsciiArgs) -> Result<i32> {
    let options = AsciiOptions::default()
        .with_placeholder(args.placeholder.as_str())
        .with_strict(args.strict)
        .with_require_strict_backend(args.require_strict);

    let transliterator = match Transliterator::new(options) {
        Ok(transliterator) => transliterator,
        Err(e) => {
            let scheme = ColorScheme::from_flags(false, args.no_color);
            eprintln!("{}error{}: {}", scheme.error, scheme.reset, e);
            return Ok(exit_codes::IO_ERROR);
        }
    };
    tracing::debug!(backend = transliterator.backend_name(), "transliterating");

    let input = read_inputs(&args.files)?;
    let text = to_ascii_bytes(&input, &transliterator);
    write_output(args.output.as_deref(), text.as_bytes())?;
    Ok(exit_codes::SUCCESS)
}

/// Run the whitespace command.
pub fn run_whitespace(args: WhitespaceArgs) -> Result<i32> {
    let mut out = io::stdout().lock();

    if args.json {
        let json = if args.invisible {
            let controls: Vec<u32> = INVISIBLE_CONTROLS.iter().map(|&c| c as u32).collect();
            serde_json::to_string_pretty(&serde_json::json!({
                "whitespace": WHITESPACE_TABLE,
                "invisible": controls,
            }))
        } else {
            serde_json::to_string_pretty(&WHITESPACE_TABLE)
        }
        .context("failed to serialize whitespace table")?;
        writeln!(out, "{}", json)?;
        return Ok(exit_codes::SUCCESS);
    }

    for entry in WHITESPACE_TABLE.iter() {
        writeln!(out, "U+{:04X}  {}", entry.codepoint as u32, entry.name)?;
    }
    if args.invisible {
        writeln!(out)?;
        for &c in INVISIBLE_CONTROLS.iter() {
            writeln!(out, "U+{:04X}  {}", c as u32, control_name(c))?;
        }
    }
    Ok(exit_codes::SUCCESS)
}

/// Caret notation for a C0 control or DEL.
fn control_name(c: char) -> String {
    match c {
        '\u{7F}' => "^?".to_string(),
        _ => format!("^{}", ((c as u8) + b'@') as char),
    }
}

fn read_inputs(files: &[PathBuf]) -> Result<Vec<u8>> {
    let mut input = Vec::new();
    if files.is_empty() {
        io::stdin()
            .read_to_end(&mut input)
            .context("failed to read from stdin")?;
        return Ok(input);
    }
    for path in files {
        let mut file =
            fs::File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        file.read_to_end(&mut input)
            .with_context(|| format!("failed to read {}", path.display()))?;
    }
    Ok(input)
}

fn write_output(output: Option<&Path>, data: &[u8]) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, data).with_context(|| format!("failed to write {}", path.display()))
        }
        None => io::stdout()
            .lock()
            .write_all(data)
            .context("failed to write to stdout"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> CleanArgs {
        let mut full = vec!["clean"];
        full.extend_from_slice(argv);
        CleanArgs::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_defaults_only_repair() {
        assert_eq!(args(&[]).to_options().unwrap(), CleanOptions::default());
    }

    #[test]
    fn test_flags_map_to_options() {
        let options = args(&["-w", "-b", "-d", "--msword", "--replacement", "?"])
            .to_options()
            .unwrap();
        assert!(options.normalize_whitespace);
        assert!(options.strip_bom);
        assert!(!options.replace_invalid);
        assert!(options.normalize_msword);
        assert_eq!(options.replacement, '?');
    }

    #[test]
    fn test_control_names() {
        assert_eq!(control_name('\u{0}'), "^@");
        assert_eq!(control_name('\u{1B}'), "^[");
        assert_eq!(control_name('\u{7F}'), "^?");
    }

    #[test]
    fn test_require_strict_needs_strict() {
        assert!(AsciiArgs::try_parse_from(["ascii", "--require-strict"]).is_err());
        assert!(AsciiArgs::try_parse_from(["ascii", "--strict", "--require-strict"]).is_ok());
    }
}
