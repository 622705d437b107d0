//! # SCOT4 Types
//!
//! Core types, traits, and errors shared across the SCOT4 secret generator
//! crates:
//!
//! - Error types and result aliases
//! - Enums for secret kinds and manifest documents
//! - The `Secret` generator trait
//!
//! ## Example
//!
//! ```
//! use scot4_types::{DocumentKind, SecretKind};
//!
//! assert_eq!(SecretKind::Uuid.to_string(), "uuid");
//! assert_eq!(DocumentKind::Flair.to_string(), "flair secrets");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod enums;
pub mod traits;

// Re-export common types for convenience
pub use errors::{Scot4Error, Result};
pub use enums::{DocumentKind, SecretKind};
pub use traits::{Secret, ValidationResult};
