//! Text processing primitives.
//!
//! The pipeline runs bytes through three stages, each usable on its own:
//!
//! 1. [`utf8`] decodes bytes into units, classifying every malformed byte.
//! 2. [`clean`] folds the units into a valid `String`, optionally normalizing
//!    whitespace (see [`whitespace`]) and stripping byte-order marks.
//! 3. [`ascii`] transliterates valid text to ASCII using the tables in
//!    [`translit`].
//!
//! ## UTF-8 Validation
//!
//! ```
//! use utf8scrub::text::utf8::{validate_utf8, Utf8ErrorKind};
//!
//! assert!(validate_utf8("日本語".as_bytes()).is_ok());
//!
//! let err = validate_utf8(&[0xED, 0xA0, 0x80]).unwrap_err();
//! assert_eq!(err.kind, Utf8ErrorKind::SurrogateCodepoint);
//! assert_eq!(err.offset, 0);
//! ```
//!
//! ## Repair and Transliteration
//!
//! ```
//! use utf8scrub::text::{ascii::to_ascii, clean::clean};
//!
//! let text = clean(b"\xEF\xBB\xBF\xE6\x97\xA5\xE3\x80\x80\xE6\x9C\xAC\xA0", true, true);
//! assert_eq!(text, "日 本");
//! assert_eq!(to_ascii(&text), "Ri  Ben ");
//! ```

pub mod ascii;
pub mod clean;
pub mod config;
pub mod translit;
pub mod utf8;
pub mod whitespace;

// Re-export commonly used types
pub use ascii::{to_ascii, Transliterator};
pub use clean::{clean, clean_with, CleanReport};
pub use config::{AsciiOptions, CleanOptions, REPLACEMENT_CHARACTER};
pub use utf8::{validate_utf8, Utf8Error, Utf8ErrorKind};
