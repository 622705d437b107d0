//! # SCOT4 Secrets
//!
//! Secret generation for the SCOT4 Kubernetes deployment.
//!
//! Reads the two secret skeletons (`secrets.yaml` and `flair-secrets.yaml`),
//! fills every `stringData` entry, keeps related credentials in step across
//! both documents, and writes the resulting manifests.
//!
//! Provides implementations for the secret kinds SCOT4 needs:
//! - Random passwords from a fixed alphabet
//! - UUID API keys
//! - Fixed placeholders for operator-supplied credentials
//!
//! ## Example
//!
//! ```no_run
//! use scot4_core::LayoutConfig;
//! use scot4_secrets::{SecretGenerator, SecretPlan};
//!
//! let generator = SecretGenerator::new(LayoutConfig::default(), SecretPlan::new(None));
//! let (_manifests, written) = generator.run()?;
//! for path in written {
//!     println!("wrote {}", path.display());
//! }
//! # Ok::<(), scot4_types::Scot4Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod document;
pub mod rules;
pub mod plan;
pub mod generator;
pub mod validator;

#[cfg(test)]
mod fixtures;

pub use types::*;
pub use document::SecretDocument;
pub use plan::{PlanReport, SecretPlan};
pub use generator::{GeneratedManifests, SecretGenerator};
pub use validator::{SecretValidator, ValidationSummary};
