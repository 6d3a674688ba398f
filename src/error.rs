//! Configuration errors.
//!
//! Malformed input is never an error: the decoder turns it into invalid units
//! and the cleanup engine repairs them. The only faults are option
//! combinations that would break an output guarantee, and they are rejected
//! before any text is processed.

use alloc::string::String;

/// A caller-supplied option that cannot be honored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The transliteration placeholder contains non-ASCII characters.
    #[error("placeholder {placeholder:?} is not ASCII (byte 0x{byte:02X} at offset {offset})")]
    NonAsciiPlaceholder {
        /// The rejected placeholder.
        placeholder: String,
        /// Offset of the first non-ASCII byte.
        offset: usize,
        /// The first non-ASCII byte.
        byte: u8,
    },

    /// Strict mode was required but no strict backend is compiled in.
    #[error("strict transliteration requested but no strict backend is available")]
    StrictBackendUnavailable,
}

/// Result type for configuration checks.
pub type Result<T> = core::result::Result<T, Error>;

/// Reject placeholders that would let non-ASCII bytes into the output.
pub(crate) fn check_placeholder(placeholder: &str) -> Result<()> {
    match placeholder.bytes().position(|b| !b.is_ascii()) {
        None => Ok(()),
        Some(offset) => Err(Error::NonAsciiPlaceholder {
            placeholder: String::from(placeholder),
            offset,
            byte: placeholder.as_bytes()[offset],
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_placeholders_accepted() {
        assert!(check_placeholder("?").is_ok());
        assert!(check_placeholder("").is_ok());
        assert!(check_placeholder("[unknown]").is_ok());
    }

    #[test]
    fn test_non_ascii_placeholder_rejected() {
        let err = check_placeholder("x\u{FFFD}").unwrap_err();
        assert_eq!(
            err,
            Error::NonAsciiPlaceholder {
                placeholder: "x\u{FFFD}".to_string(),
                offset: 1,
                byte: 0xEF,
            }
        );
        assert_eq!(
            err.to_string(),
            "placeholder \"x\u{FFFD}\" is not ASCII (byte 0xEF at offset 1)"
        );
    }
}
