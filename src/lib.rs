//! # utf8scrub
//!
//! UTF-8 validation, repair and ASCII transliteration.
//!
//! Every operation is a pure function of its input: arbitrary bytes go in,
//! valid UTF-8 (or ASCII) comes out, and malformed input is never an error.
//!
//! ## Module Organization
//!
//! - [`table`] - Lead byte width and continuation bound tables
//! - [`text::utf8`] - Lazy decoder and validator
//! - [`text::clean`] - Repair of invalid bytes, whitespace and BOM cleanup
//! - [`text::whitespace`] - Whitespace and invisible control tables
//! - [`text::ascii`] - Transliteration to ASCII
//! - [`text::translit`] - Per-script transliteration tables
//! - [`error`] - Configuration errors
//!
//! ## Quick Start
//!
//! ```
//! use utf8scrub::{clean, is_valid_utf8, to_ascii};
//!
//! let bytes = b"caf\xC3\xA9 \xC3\x28 na\xEFve";
//! assert!(!is_valid_utf8(bytes));
//!
//! let repaired = clean(bytes, false, false);
//! assert_eq!(repaired, "café \u{FFFD}( na\u{FFFD}ve");
//! assert!(is_valid_utf8(repaired.as_bytes()));
//!
//! assert_eq!(to_ascii("café naïve"), "cafe naive");
//! ```
//!
//! ## Features
//!
//! - `std` (default) - Use the standard library; the core only needs `alloc`
//! - `serde` - Serialization of option structs and reports
//! - `deunicode` - Richer strict-mode transliteration backend
//! - `tracing` - Debug events from the repair and transliteration paths
//! - `cli` - The `utf8scrub` command-line tool

// Use no_std unless std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// When using no_std, we need to explicitly link the alloc crate
#[cfg(not(any(test, feature = "std")))]
extern crate alloc;

// When using std, re-export alloc types from std for compatibility
#[cfg(any(test, feature = "std"))]
extern crate std as alloc;

#[macro_use]
mod macros;

// =============================================================================
// Modules
// =============================================================================

/// Configuration errors.
pub mod error;

/// Static byte classification tables.
pub mod table;

/// Decoding, repair, whitespace and transliteration.
pub mod text;

// =============================================================================
// Public re-exports
// =============================================================================

pub use error::{Error, Result};
pub use text::ascii::{to_ascii, to_ascii_bytes, to_ascii_with, CharMapper, Transliterator};
pub use text::clean::{clean, clean_with, clean_with_report, CleanReport};
pub use text::config::{AsciiOptions, CleanOptions};
pub use text::utf8::{
    decode, is_ascii, is_valid_utf8, validate_utf8, DecodedUnit, Decoder, Unit,
};
pub use text::whitespace::whitespace_codepoints;
