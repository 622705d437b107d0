//! Error types for secret generation.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::DocumentKind;

/// The main error type for secret manifest generation.
#[derive(Error, Debug)]
pub enum Scot4Error {
    /// One or both secret skeleton templates are absent
    #[error("Missing placeholder secret file(s): {}", DisplayPaths(.0))]
    MissingTemplate(Vec<PathBuf>),

    /// A template exists but does not have the expected shape
    #[error("Malformed template {}: {reason}", .path.display())]
    MalformedTemplate {
        /// Template path (or `<inline>` for in-memory input)
        path: PathBuf,
        /// What was wrong with it
        reason: String,
    },

    /// A field required by a link step is absent from its document
    #[error("Field '{field}' is missing from the {document} document")]
    MissingField {
        /// Document the field was expected in
        document: DocumentKind,
        /// Name of the absent field
        field: String,
    },

    /// Secret definition or generation error
    #[error("Secret error: {0}")]
    Secret(String),

    /// Configuration-related error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Internal bug - should never happen in production
    #[error("Bug detected: {0}\n\nThis is an internal error. Please report this issue.")]
    Bug(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for secret generation.
pub type Result<T> = std::result::Result<T, Scot4Error>;

struct DisplayPaths<'a>(&'a [PathBuf]);

impl fmt::Display for DisplayPaths<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, path) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", path.display())?;
        }
        Ok(())
    }
}

/// Helper macro to create and return a Scot4Error::Bug
///
/// This should be used for conditions that should never occur
/// in normal operation.
///
/// # Example
///
/// ```ignore
/// if some_impossible_condition {
///     bug!("This should never happen: {:?}", condition);
/// }
/// ```
#[macro_export]
macro_rules! bug {
    ($msg:expr) => {
        return Err($crate::Scot4Error::Bug($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Scot4Error::Bug(format!($fmt, $($arg)*)))
    };
}

/// Helper macro to bail out with a Scot4Error
///
/// This is used for expected error conditions.
///
/// # Example
///
/// ```ignore
/// if length == 0 {
///     bail!(Secret, "Length must be greater than 0 for {}", key);
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($variant:ident, $msg:expr) => {
        return Err($crate::Scot4Error::$variant($msg.to_string()))
    };
    ($variant:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::Scot4Error::$variant(format!($fmt, $($arg)*)))
    };
    ($msg:expr) => {
        return Err($crate::Scot4Error::Other($msg.to_string()))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Scot4Error::Other(format!($fmt, $($arg)*)))
    };
}
