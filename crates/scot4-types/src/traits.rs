//! Core trait definitions.

use crate::SecretKind;
use crate::errors::Result;

/// Validation result for secret values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Secret is valid
    Ok,
    /// Secret is missing
    Missing,
    /// Secret is invalid
    Error(Vec<String>),
}

/// Trait for secret generators.
///
/// Each generator produces the value for one `stringData` key.
pub trait Secret: Send + Sync {
    /// Get the secret kind.
    fn kind(&self) -> SecretKind;

    /// Get the `stringData` key this secret populates.
    fn key(&self) -> &str;

    /// Validate the secret definition.
    fn validate_definition(&self) -> Result<()>;

    /// Generate a new secret value.
    fn generate(&self) -> Result<String>;

    /// Validate an existing secret value.
    ///
    /// Checks length, character set, or format depending on the kind.
    fn validate_value(&self, value: &str) -> ValidationResult;
}
