//! Population rules for SCOT4 secret keys.
//!
//! Generation is split in two passes. [`PopulationRule`] decides the value of
//! every environment key on its own, without looking at other fields.
//! [`Link`] steps then derive the fields that depend on generated values, in
//! the listed order.

use crate::types::{FixedSecret, RandomSecret, UuidSecret, DEFAULT_LENGTH, MEILI_KEY_LENGTH};
use scot4_types::{DocumentKind, Secret};

/// Well-known `stringData` keys.
pub mod keys {
    /// Database connection string for the SCOT4 API
    pub const SQLALCHEMY_DATABASE_URI: &str = "SQLALCHEMY_DATABASE_URI";
    /// Password spliced into the database connection string
    pub const API_DB_PASSWORD: &str = "API_DB_PASSWORD";
    /// Enrichment service password, supplied by the operator
    pub const ENRICHMENT_PASSWORD: &str = "ENRICHMENT_PASSWORD";
    /// Meilisearch master key
    pub const MEILI_MASTER_KEY: &str = "MEILI_MASTER_KEY";
    /// Key the API uses to talk to Meilisearch
    pub const SEARCH_API_KEY: &str = "SEARCH_API_KEY";
    /// API key of the first superuser
    pub const FIRST_SUPERUSER_APIKEY: &str = "FIRST_SUPERUSER_APIKEY";
    /// API key Flair uses against SCOT4
    pub const FLAIR_API_KEY: &str = "FLAIR_API_KEY";
    /// Flair admin password
    pub const S4FLAIR_ADMIN_PASS: &str = "S4FLAIR_ADMIN_PASS";
    /// Flair's copy of the SCOT4 superuser API key
    pub const S4FLAIR_SCOT_API_KEY: &str = "S4FLAIR_SCOT_API_KEY";
    /// Flair's copy of its own SCOT4 API key
    pub const S4FLAIR_FLAIR_API_KEY: &str = "S4FLAIR_FLAIR_API_KEY";
}

/// Token in the database URI template replaced by the generated password.
pub const PLACEHOLDER_TOKEN: &str = "PLACEHOLDER";

/// How an environment secrets key is populated in the generate pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopulationRule {
    /// Command-line override, or the loaded template left for substitution
    DatabaseUri,
    /// Fixed literal
    Fixed(&'static str),
    /// Random string of the given length
    Random(usize),
    /// Version 4 UUID
    Uuid,
}

impl PopulationRule {
    /// Rule for an environment secrets key.
    pub fn for_key(key: &str) -> Self {
        match key {
            keys::SQLALCHEMY_DATABASE_URI => PopulationRule::DatabaseUri,
            keys::ENRICHMENT_PASSWORD => PopulationRule::Fixed(crate::types::UPDATE_ME),
            keys::MEILI_MASTER_KEY => PopulationRule::Random(MEILI_KEY_LENGTH),
            keys::FIRST_SUPERUSER_APIKEY | keys::FLAIR_API_KEY => PopulationRule::Uuid,
            _ => PopulationRule::Random(DEFAULT_LENGTH),
        }
    }

    /// Generator for `key`, or `None` when the value is not generated.
    pub fn secret(&self, key: &str) -> Option<Box<dyn Secret>> {
        match *self {
            PopulationRule::DatabaseUri => None,
            PopulationRule::Fixed(value) => Some(Box::new(FixedSecret::new(key, value))),
            PopulationRule::Random(length) => Some(Box::new(RandomSecret::new(key, length))),
            PopulationRule::Uuid => Some(Box::new(UuidSecret::new(key))),
        }
    }
}

/// A second-pass step deriving one field from already generated values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Link {
    /// Copy a field within the environment document
    Copy {
        /// Source key
        from: &'static str,
        /// Destination key
        to: &'static str,
    },
    /// Replace `token` in the environment field `target` with the value of `from`
    Substitute {
        /// Field holding the template
        target: &'static str,
        /// Literal token to replace
        token: &'static str,
        /// Field supplying the replacement
        from: &'static str,
    },
    /// Generate a random value into the flair document
    Generate {
        /// Destination key
        key: &'static str,
        /// Length of the random value
        length: usize,
    },
    /// Copy an environment field into the flair document
    CopyAcross {
        /// Source key in the environment document
        from: &'static str,
        /// Destination key in the flair document
        to: &'static str,
    },
}

impl Link {
    /// Document and key this step writes.
    pub fn target(&self) -> (DocumentKind, &'static str) {
        match *self {
            Link::Copy { to, .. } => (DocumentKind::Environment, to),
            Link::Substitute { target, .. } => (DocumentKind::Environment, target),
            Link::Generate { key, .. } => (DocumentKind::Flair, key),
            Link::CopyAcross { to, .. } => (DocumentKind::Flair, to),
        }
    }
}

/// Link steps in execution order.
///
/// The database URI substitution is skipped when an override was supplied.
pub fn links(substitute_database_uri: bool) -> Vec<Link> {
    let mut links = vec![Link::Copy {
        from: keys::MEILI_MASTER_KEY,
        to: keys::SEARCH_API_KEY,
    }];

    if substitute_database_uri {
        links.push(Link::Substitute {
            target: keys::SQLALCHEMY_DATABASE_URI,
            token: PLACEHOLDER_TOKEN,
            from: keys::API_DB_PASSWORD,
        });
    }

    links.extend([
        Link::Generate {
            key: keys::S4FLAIR_ADMIN_PASS,
            length: DEFAULT_LENGTH,
        },
        Link::CopyAcross {
            from: keys::FIRST_SUPERUSER_APIKEY,
            to: keys::S4FLAIR_SCOT_API_KEY,
        },
        Link::CopyAcross {
            from: keys::FLAIR_API_KEY,
            to: keys::S4FLAIR_FLAIR_API_KEY,
        },
    ]);

    links
}
