//! Layout configuration.
//!
//! Describes where the secret skeleton templates are read from and where the
//! generated manifests are written. The defaults reproduce the fixed layout
//! of a SCOT4 deployment checkout:
//!
//! ```text
//! <base_dir>/scot4/secret-skeletons/secrets.yaml        (input)
//! <base_dir>/scot4/secret-skeletons/flair-secrets.yaml  (input)
//! <base_dir>/scot4/auto_gen_secrets.yaml                (output)
//! <base_dir>/scot4/auto_gen_flair_secrets.yaml          (output)
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use scot4_core::config::LayoutConfig;
//!
//! let layout = LayoutConfig::load("layout.yml")?.with_base_dir("deploy");
//! println!("{}", layout.env_output_path().display());
//! # Ok::<(), scot4_core::Scot4Error>(())
//! ```

use scot4_types::{Scot4Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Where templates live and where manifests are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Directory everything else is relative to
    pub base_dir: PathBuf,
    /// Directory holding the skeleton templates, relative to `base_dir`
    pub skeleton_dir: PathBuf,
    /// Directory receiving the generated manifests, relative to `base_dir`
    pub output_dir: PathBuf,
    /// Environment secrets skeleton file name
    pub env_template: String,
    /// Flair secrets skeleton file name
    pub flair_template: String,
    /// Generated environment secrets file name
    pub env_output: String,
    /// Generated flair secrets file name
    pub flair_output: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            skeleton_dir: PathBuf::from("scot4/secret-skeletons"),
            output_dir: PathBuf::from("scot4"),
            env_template: "secrets.yaml".to_string(),
            flair_template: "flair-secrets.yaml".to_string(),
            env_output: "auto_gen_secrets.yaml".to_string(),
            flair_output: "auto_gen_flair_secrets.yaml".to_string(),
        }
    }
}

impl LayoutConfig {
    /// Load a layout from a YAML file.
    ///
    /// Fields absent from the file keep their default values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|e| {
            Scot4Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let layout: Self = serde_yaml::from_str(&content).map_err(|e| {
            Scot4Error::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        tracing::debug!("Loaded layout configuration from {}", path.display());
        Ok(layout)
    }

    /// Replace the base directory.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Path of the environment secrets skeleton.
    pub fn env_template_path(&self) -> PathBuf {
        self.base_dir.join(&self.skeleton_dir).join(&self.env_template)
    }

    /// Path of the flair secrets skeleton.
    pub fn flair_template_path(&self) -> PathBuf {
        self.base_dir.join(&self.skeleton_dir).join(&self.flair_template)
    }

    /// Path the generated environment secrets are written to.
    pub fn env_output_path(&self) -> PathBuf {
        self.base_dir.join(&self.output_dir).join(&self.env_output)
    }

    /// Path the generated flair secrets are written to.
    pub fn flair_output_path(&self) -> PathBuf {
        self.base_dir.join(&self.output_dir).join(&self.flair_output)
    }

    /// Fail with `MissingTemplate` unless both skeletons are regular files.
    ///
    /// Every absent path is reported, not just the first.
    pub fn ensure_templates_exist(&self) -> Result<()> {
        let missing: Vec<PathBuf> = [self.env_template_path(), self.flair_template_path()]
            .into_iter()
            .filter(|p| !p.is_file())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Scot4Error::MissingTemplate(missing))
        }
    }
}
