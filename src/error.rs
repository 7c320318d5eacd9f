//! Error types for variant access and stream extraction.

use thiserror::Error;

/// A typed query did not match the active alternative.
///
/// # Stability
///
/// New variants may be added in minor versions (the enum is
/// `#[non_exhaustive]`).
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccessError {
    /// A listed alternative was requested while another one is active.
    #[error("bad variant access: alternative {requested} (`{ty}`) requested while alternative {active} is active")]
    Inactive {
        /// Index of the requested alternative.
        requested: usize,
        /// Type name of the requested alternative.
        ty: &'static str,
        /// Index of the active alternative.
        active: usize,
    },

    /// The active alternative cannot construct the conversion target.
    #[error("bad variant access: alternative {active} cannot be converted to `{target}`")]
    Unconvertible {
        /// Type name of the conversion target.
        target: &'static str,
        /// Index of the active alternative.
        active: usize,
    },
}

impl AccessError {
    /// Index of the alternative that was active when the access failed.
    pub fn active(&self) -> usize {
        match *self {
            AccessError::Inactive { active, .. } | AccessError::Unconvertible { active, .. } => {
                active
            }
        }
    }

    /// Check if this error comes from a failed conversion.
    pub fn is_conversion_error(&self) -> bool {
        matches!(self, AccessError::Unconvertible { .. })
    }
}

#[cfg(feature = "std")]
pub use self::read::ReadError;

#[cfg(feature = "std")]
mod read {
    use std::{boxed::Box, error::Error as StdError, io, string::String};

    use thiserror::Error;

    /// Reading a token into the active alternative failed.
    #[non_exhaustive]
    #[derive(Debug, Error)]
    pub enum ReadError {
        /// The underlying reader failed.
        #[error("failed to read from the stream")]
        Io(#[from] io::Error),

        /// The stream ended before any token was found.
        #[error("the stream ended before a token was read")]
        Eof,

        /// The token is not a valid value of the active alternative.
        #[error("failed to parse {input:?} as `{ty}`")]
        Parse {
            /// Type name of the active alternative.
            ty: &'static str,
            /// The token that failed to parse.
            input: String,
            /// The alternative's own parse error.
            #[source]
            source: Box<dyn StdError + Send + Sync>,
        },
    }

    impl ReadError {
        /// Check if this error is caused by malformed input rather than I/O.
        pub fn is_parse_error(&self) -> bool {
            matches!(self, ReadError::Parse { .. })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::string::ToString;

    use super::*;

    #[test]
    fn messages() {
        let err = AccessError::Inactive {
            requested: 1,
            ty: "f64",
            active: 0,
        };
        assert_eq!(
            err.to_string(),
            "bad variant access: alternative 1 (`f64`) requested while alternative 0 is active"
        );
        assert_eq!(err.active(), 0);
        assert!(!err.is_conversion_error());

        let err = AccessError::Unconvertible {
            target: "u8",
            active: 2,
        };
        assert_eq!(
            err.to_string(),
            "bad variant access: alternative 2 cannot be converted to `u8`"
        );
        assert!(err.is_conversion_error());
    }
}
