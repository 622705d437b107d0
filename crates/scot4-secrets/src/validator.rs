//! Secret validation utilities.

use crate::document::SecretDocument;
use crate::plan::SecretPlan;
use crate::rules::{self, Link, PopulationRule};
use crate::types::RandomSecret;
use scot4_types::{DocumentKind, Secret, ValidationResult};

/// Secret validator.
pub struct SecretValidator;

impl SecretValidator {
    /// Validate every populated field against the rule that produced it.
    ///
    /// Results are keyed `<document>:<key>` and follow document order,
    /// environment keys first.
    pub fn validate_all(
        plan: &SecretPlan,
        env: &SecretDocument,
        flair: &SecretDocument,
    ) -> Vec<(String, ValidationResult)> {
        let mut results = Vec::new();
        let links = plan.links();

        for (key, value) in env.string_data() {
            // Copy targets are checked against their source below.
            let linked = links
                .iter()
                .any(|l| matches!(l, Link::Copy { to, .. } if *to == key.as_str()));
            if linked {
                continue;
            }

            let result = match PopulationRule::for_key(key).secret(key) {
                Some(secret) => secret.validate_value(value),
                None => Self::validate_database_uri(plan, value),
            };
            results.push((label(DocumentKind::Environment, key), result));
        }

        for link in &links {
            let (document, key) = link.target();
            // Substitution targets were already checked above.
            if matches!(link, Link::Substitute { .. }) {
                continue;
            }
            results.push((label(document, key), Self::validate_link(link, env, flair)));
        }

        results
    }

    /// Get summary of validation results.
    pub fn summary(
        plan: &SecretPlan,
        env: &SecretDocument,
        flair: &SecretDocument,
    ) -> ValidationSummary {
        let mut summary = ValidationSummary::default();

        for (path, result) in Self::validate_all(plan, env, flair) {
            match result {
                ValidationResult::Ok => summary.ok.push(path),
                ValidationResult::Missing => summary.missing.push(path),
                ValidationResult::Error(errors) => {
                    summary.errors.push((path, errors));
                }
            }
        }

        summary
    }

    fn validate_database_uri(plan: &SecretPlan, value: &str) -> ValidationResult {
        match plan.database_uri_override() {
            Some(uri) if value == uri => ValidationResult::Ok,
            Some(_) => ValidationResult::Error(vec![
                "Does not match the command-line override".to_string()
            ]),
            None if value.contains(rules::PLACEHOLDER_TOKEN) => ValidationResult::Error(vec![
                format!("Still contains {}", rules::PLACEHOLDER_TOKEN)
            ]),
            None => ValidationResult::Ok,
        }
    }

    fn validate_link(link: &Link, env: &SecretDocument, flair: &SecretDocument) -> ValidationResult {
        let (source, target, value) = match *link {
            Link::Copy { from, to } => (env.get(from), to, env.get(to)),
            Link::CopyAcross { from, to } => (env.get(from), to, flair.get(to)),
            Link::Generate { key, length } => {
                return match flair.get(key) {
                    Some(value) => RandomSecret::new(key, length).validate_value(value),
                    None => ValidationResult::Missing,
                };
            }
            Link::Substitute { target, .. } => {
                return if env.contains(target) {
                    ValidationResult::Ok
                } else {
                    ValidationResult::Missing
                };
            }
        };

        match (source, value) {
            (_, None) => ValidationResult::Missing,
            (Some(source), Some(value)) if source == value => ValidationResult::Ok,
            _ => ValidationResult::Error(vec![format!("{} does not match its source", target)]),
        }
    }
}

fn label(document: DocumentKind, key: &str) -> String {
    let prefix = match document {
        DocumentKind::Environment => "env",
        DocumentKind::Flair => "flair",
    };
    format!("{}:{}", prefix, key)
}

/// Summary of validation results.
#[derive(Debug, Default)]
pub struct ValidationSummary {
    /// Secrets that are valid
    pub ok: Vec<String>,
    /// Secrets that are missing
    pub missing: Vec<String>,
    /// Secrets with errors (path, errors)
    pub errors: Vec<(String, Vec<String>)>,
}

impl ValidationSummary {
    /// Check if all secrets are valid.
    pub fn is_all_valid(&self) -> bool {
        self.missing.is_empty() && self.errors.is_empty()
    }

    /// Get total count of secrets.
    pub fn total(&self) -> usize {
        self.ok.len() + self.missing.len() + self.errors.len()
    }

    /// One line per problem, for error reports.
    pub fn problems(&self) -> Vec<String> {
        self.missing
            .iter()
            .map(|path| format!("{}: missing", path))
            .chain(
                self.errors
                    .iter()
                    .map(|(path, errors)| format!("{}: {}", path, errors.join("; "))),
            )
            .collect()
    }
}
