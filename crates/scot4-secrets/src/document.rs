//! Kubernetes Secret manifest documents.
//!
//! A [`SecretDocument`] keeps the whole manifest (`apiVersion`, `kind`,
//! `metadata`, ...) as an ordered mapping so it can be written back
//! unchanged, and exposes the `stringData` entries as a typed, ordered map.

use indexmap::IndexMap;
use scot4_core::util::{load_yaml, save_yaml_file, slurp};
use scot4_types::{DocumentKind, Result, Scot4Error};
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};

/// Field holding the secret key/value pairs.
pub const STRING_DATA: &str = "stringData";

/// A loaded secret manifest.
///
/// Every `stringData` value is held as a string. A template entry that YAML
/// reads as a number, boolean or `null` is written back as a quoted string
/// (`'5432'`, `'false'`, `''`), which is what Kubernetes expects under
/// `stringData` anyway.
#[derive(Debug, Clone, PartialEq)]
pub struct SecretDocument {
    kind: DocumentKind,
    source: PathBuf,
    manifest: Mapping,
    string_data: IndexMap<String, String>,
}

impl SecretDocument {
    /// Load a skeleton template from disk.
    pub fn load(kind: DocumentKind, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Scot4Error::MissingTemplate(vec![path.to_path_buf()]));
        }

        let content = slurp(path)?;
        let document = Self::parse(kind, &content, path)?;

        tracing::info!(
            "Loaded {} template {} ({} keys)",
            kind,
            path.display(),
            document.len()
        );
        Ok(document)
    }

    /// Parse a skeleton template. `source` is only used in error messages.
    pub fn parse(kind: DocumentKind, content: &str, source: impl Into<PathBuf>) -> Result<Self> {
        let source = source.into();
        let malformed = |reason: String| Scot4Error::MalformedTemplate {
            path: source.clone(),
            reason,
        };

        let manifest = match load_yaml(content) {
            Ok(Value::Mapping(manifest)) => manifest,
            Ok(_) => return Err(malformed("top level is not a mapping".to_string())),
            Err(e) => return Err(malformed(e.to_string())),
        };

        let entries = match manifest.get(STRING_DATA) {
            Some(Value::Mapping(entries)) => entries,
            Some(Value::Null) => return Err(malformed(format!("'{}' is empty", STRING_DATA))),
            Some(_) => return Err(malformed(format!("'{}' is not a mapping", STRING_DATA))),
            None => return Err(malformed(format!("missing '{}' field", STRING_DATA))),
        };

        let mut string_data = IndexMap::with_capacity(entries.len());
        for (key, value) in entries {
            let key = match key {
                Value::String(key) => key.clone(),
                other => {
                    return Err(malformed(format!(
                        "'{}' key {:?} is not a string",
                        STRING_DATA, other
                    )))
                }
            };
            let value = match value {
                Value::String(s) => s.clone(),
                // `KEY:` with nothing after it
                Value::Null => String::new(),
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                _ => {
                    return Err(malformed(format!(
                        "'{}.{}' is not a scalar",
                        STRING_DATA, key
                    )))
                }
            };
            string_data.insert(key, value);
        }

        Ok(Self {
            kind,
            source,
            manifest,
            string_data,
        })
    }

    /// Which manifest this is.
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Path the template was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Ordered `stringData` entries.
    pub fn string_data(&self) -> &IndexMap<String, String> {
        &self.string_data
    }

    /// `stringData` keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.string_data.keys().map(String::as_str)
    }

    /// Value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.string_data.get(key).map(String::as_str)
    }

    /// Value for `key`, or `MissingField`.
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key).ok_or_else(|| Scot4Error::MissingField {
            document: self.kind,
            field: key.to_string(),
        })
    }

    /// Whether `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.string_data.contains_key(key)
    }

    /// Set `key`, keeping its position if it already exists and appending otherwise.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.string_data.insert(key.into(), value.into());
    }

    /// Number of `stringData` entries.
    pub fn len(&self) -> usize {
        self.string_data.len()
    }

    /// True if `stringData` is empty.
    pub fn is_empty(&self) -> bool {
        self.string_data.is_empty()
    }

    /// The full manifest with the current `stringData` in its original position.
    pub fn to_value(&self) -> Value {
        let entries: Mapping = self
            .string_data
            .iter()
            .map(|(k, v)| (Value::String(k.clone()), Value::String(v.clone())))
            .collect();

        let mut manifest = self.manifest.clone();
        manifest.insert(Value::String(STRING_DATA.to_string()), Value::Mapping(entries));
        Value::Mapping(manifest)
    }

    /// Write the manifest to `path`, creating or truncating it.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        save_yaml_file(path, &self.to_value())?;
        tracing::info!("Wrote {} to {}", self.kind, path.display());
        Ok(())
    }
}
