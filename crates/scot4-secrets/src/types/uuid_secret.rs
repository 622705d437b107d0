//! UUID secret type implementation.

use scot4_types::{Result, Secret, SecretKind, ValidationResult};
use uuid::Uuid;

/// UUID secret, used for API keys so they match the format SCOT4 issues itself.
#[derive(Debug, Clone)]
pub struct UuidSecret {
    key: String,
}

impl UuidSecret {
    /// Create a UUID secret for `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Secret for UuidSecret {
    fn kind(&self) -> SecretKind {
        SecretKind::Uuid
    }

    fn key(&self) -> &str {
        &self.key
    }

    fn validate_definition(&self) -> Result<()> {
        Ok(())
    }

    fn generate(&self) -> Result<String> {
        Ok(Uuid::new_v4().hyphenated().to_string())
    }

    fn validate_value(&self, value: &str) -> ValidationResult {
        // parse_str also accepts braced, urn and simple forms.
        match Uuid::try_parse(value) {
            Ok(uuid) if uuid.hyphenated().to_string() == value => ValidationResult::Ok,
            Ok(_) => ValidationResult::Error(vec![format!(
                "UUID is not in canonical 8-4-4-4-12 form: {}",
                value
            )]),
            Err(e) => ValidationResult::Error(vec![format!("Invalid UUID: {}", e)]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_canonical(value: &str) -> bool {
        let groups: Vec<&str> = value.split('-').collect();
        groups.len() == 5
            && groups
                .iter()
                .zip([8, 4, 4, 4, 12])
                .all(|(g, len)| g.len() == len && g.chars().all(|c| c.is_ascii_hexdigit()))
    }

    #[test]
    fn test_generates_canonical_uuid() {
        let secret = UuidSecret::new("FLAIR_API_KEY");
        let value = secret.generate().unwrap();

        assert!(is_canonical(&value), "not canonical: {}", value);
        assert_eq!(secret.validate_value(&value), ValidationResult::Ok);
    }

    #[test]
    fn test_rejects_non_canonical_forms() {
        let secret = UuidSecret::new("FIRST_SUPERUSER_APIKEY");
        assert!(matches!(
            secret.validate_value("67e5504410b1426f9247bb680e5fe0c8"),
            ValidationResult::Error(_)
        ));
        assert!(matches!(secret.validate_value("not-a-uuid"), ValidationResult::Error(_)));
    }
}
