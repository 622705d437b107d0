//! Fixed placeholder secret type implementation.

use scot4_types::{Scot4Error, Result, Secret, SecretKind, ValidationResult};

/// Placeholder written for credentials that come from outside the deployment.
pub const UPDATE_ME: &str = "UPDATE-ME";

/// Secret whose value is a fixed literal the operator replaces by hand.
#[derive(Debug, Clone)]
pub struct FixedSecret {
    key: String,
    value: String,
}

impl FixedSecret {
    /// Create a fixed secret.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a fixed secret holding [`UPDATE_ME`].
    pub fn update_me(key: impl Into<String>) -> Self {
        Self::new(key, UPDATE_ME)
    }
}

impl Secret for FixedSecret {
    fn kind(&self) -> SecretKind {
        SecretKind::Fixed
    }

    fn key(&self) -> &str {
        &self.key
    }

    fn validate_definition(&self) -> Result<()> {
        if self.value.is_empty() {
            return Err(Scot4Error::Secret(format!(
                "Fixed value for {} must not be empty",
                self.key
            )));
        }
        Ok(())
    }

    fn generate(&self) -> Result<String> {
        Ok(self.value.clone())
    }

    fn validate_value(&self, value: &str) -> ValidationResult {
        if value == self.value {
            ValidationResult::Ok
        } else {
            ValidationResult::Error(vec![format!("Expected {:?}", self.value)])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_me() {
        let secret = FixedSecret::update_me("ENRICHMENT_PASSWORD");
        assert_eq!(secret.generate().unwrap(), "UPDATE-ME");
        assert_eq!(secret.validate_value("UPDATE-ME"), ValidationResult::Ok);
        assert!(matches!(secret.validate_value("hunter2"), ValidationResult::Error(_)));
    }

    #[test]
    fn test_empty_value_rejected() {
        assert!(FixedSecret::new("KEY", "").validate_definition().is_err());
    }
}
