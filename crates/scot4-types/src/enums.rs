//! Common enumerations used throughout the generator.

use std::fmt;

/// Kinds of generated secret values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecretKind {
    /// Random string drawn from the password alphabet
    Random,
    /// Version 4 UUID
    Uuid,
    /// Fixed placeholder the operator must replace
    Fixed,
}

impl fmt::Display for SecretKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecretKind::Random => write!(f, "random"),
            SecretKind::Uuid => write!(f, "uuid"),
            SecretKind::Fixed => write!(f, "fixed"),
        }
    }
}

/// The two Kubernetes Secret manifests produced for a deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// SCOT4 API environment secrets (`secrets.yaml`)
    Environment,
    /// Flair secrets (`flair-secrets.yaml`)
    Flair,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Environment => write!(f, "environment secrets"),
            DocumentKind::Flair => write!(f, "flair secrets"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(SecretKind::Random.to_string(), "random");
        assert_eq!(SecretKind::Uuid.to_string(), "uuid");
        assert_eq!(DocumentKind::Environment.to_string(), "environment secrets");
        assert_eq!(DocumentKind::Flair.to_string(), "flair secrets");
    }
}
