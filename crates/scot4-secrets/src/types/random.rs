//! Random password/string secret type implementation.

use rand::rngs::OsRng;
use rand::Rng;
use scot4_types::{Scot4Error, Result, Secret, SecretKind, ValidationResult};

/// Characters random secrets are drawn from.
pub const ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!$^&*()";

/// Length used for every key without a more specific rule.
pub const DEFAULT_LENGTH: usize = 20;

/// Meilisearch refuses master keys shorter than 16 bytes; SCOT4 uses 50.
pub const MEILI_KEY_LENGTH: usize = 50;

/// Random password/string secret.
///
/// Values come straight from the operating system CSPRNG.
#[derive(Debug, Clone)]
pub struct RandomSecret {
    key: String,
    length: usize,
}

impl RandomSecret {
    /// Create a random secret of `length` characters.
    pub fn new(key: impl Into<String>, length: usize) -> Self {
        Self {
            key: key.into(),
            length,
        }
    }

    fn generate_random_string(&self) -> String {
        let alphabet = ALPHABET.as_bytes();
        let mut rng = OsRng;
        (0..self.length)
            .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
            .collect()
    }
}

impl Secret for RandomSecret {
    fn kind(&self) -> SecretKind {
        SecretKind::Random
    }

    fn key(&self) -> &str {
        &self.key
    }

    fn validate_definition(&self) -> Result<()> {
        if self.length == 0 {
            return Err(Scot4Error::Secret(format!(
                "Length must be greater than 0 for {}",
                self.key
            )));
        }
        Ok(())
    }

    fn generate(&self) -> Result<String> {
        self.validate_definition()?;
        Ok(self.generate_random_string())
    }

    fn validate_value(&self, value: &str) -> ValidationResult {
        let mut errors = Vec::new();

        let length = value.chars().count();
        if length != self.length {
            errors.push(format!("Length is {} but expected {}", length, self.length));
        }

        let foreign: String = value.chars().filter(|c| !ALPHABET.contains(*c)).collect();
        if !foreign.is_empty() {
            errors.push(format!("Contains characters outside the alphabet: {:?}", foreign));
        }

        if errors.is_empty() {
            ValidationResult::Ok
        } else {
            ValidationResult::Error(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_alphabet_composition() {
        assert_eq!(ALPHABET.len(), 26 + 26 + 10 + 7);
        for symbol in ['!', '$', '^', '&', '*', '(', ')'] {
            assert!(ALPHABET.contains(symbol));
        }
    }

    #[test]
    fn test_default_length() {
        let secret = RandomSecret::new("API_DB_PASSWORD", DEFAULT_LENGTH);
        let value = secret.generate().unwrap();
        assert_eq!(value.len(), DEFAULT_LENGTH);
        assert_eq!(secret.validate_value(&value), ValidationResult::Ok);
    }

    #[test]
    fn test_zero_length_rejected() {
        let secret = RandomSecret::new("EMPTY", 0);
        assert!(secret.validate_definition().is_err());
        assert!(secret.generate().is_err());
    }

    #[test]
    fn test_validate_value_reports_problems() {
        let secret = RandomSecret::new("KEY", 4);
        assert_eq!(secret.validate_value("aB3!"), ValidationResult::Ok);
        assert!(matches!(secret.validate_value("aB3"), ValidationResult::Error(_)));
        assert!(matches!(secret.validate_value("aB3#"), ValidationResult::Error(_)));
    }

    #[test]
    fn test_successive_values_differ() {
        let secret = RandomSecret::new("MEILI_MASTER_KEY", MEILI_KEY_LENGTH);
        assert_ne!(secret.generate().unwrap(), secret.generate().unwrap());
    }

    proptest! {
        #[test]
        fn prop_length_and_alphabet(length in 1usize..256) {
            let value = RandomSecret::new("KEY", length).generate().unwrap();
            prop_assert_eq!(value.len(), length);
            prop_assert!(value.chars().all(|c| ALPHABET.contains(c)));
        }
    }
}
