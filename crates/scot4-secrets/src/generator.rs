//! Secret generation pipeline.
//!
//! Resolves the layout, loads both skeletons, populates and links them,
//! validates the result and writes the two manifests.

use crate::document::SecretDocument;
use crate::plan::{PlanReport, SecretPlan};
use crate::validator::SecretValidator;
use scot4_core::LayoutConfig;
use scot4_types::{DocumentKind, Result, Scot4Error};
use std::path::PathBuf;

/// Populated manifests ready to be written.
#[derive(Debug, Clone)]
pub struct GeneratedManifests {
    /// Environment secrets document
    pub env: SecretDocument,
    /// Flair secrets document
    pub flair: SecretDocument,
    /// What the plan did
    pub report: PlanReport,
}

/// Secret generator.
#[derive(Debug, Clone)]
pub struct SecretGenerator {
    layout: LayoutConfig,
    plan: SecretPlan,
}

impl SecretGenerator {
    /// Create a generator for `layout` running `plan`.
    pub fn new(layout: LayoutConfig, plan: SecretPlan) -> Self {
        Self { layout, plan }
    }

    /// Layout in use.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Load both skeletons. Fails before reading anything if either is absent.
    pub fn load(&self) -> Result<(SecretDocument, SecretDocument)> {
        self.layout.ensure_templates_exist()?;

        let env = SecretDocument::load(DocumentKind::Environment, self.layout.env_template_path())?;
        let flair = SecretDocument::load(DocumentKind::Flair, self.layout.flair_template_path())?;
        Ok((env, flair))
    }

    /// Load, populate and validate, without writing anything.
    pub fn generate(&self) -> Result<GeneratedManifests> {
        let (mut env, mut flair) = self.load()?;
        let report = self.plan.populate(&mut env, &mut flair)?;

        let summary = SecretValidator::summary(&self.plan, &env, &flair);
        if !summary.is_all_valid() {
            return Err(Scot4Error::Bug(format!(
                "generated secrets failed validation:\n  {}",
                summary.problems().join("\n  ")
            )));
        }
        tracing::debug!("Validated {} secrets", summary.total());

        Ok(GeneratedManifests { env, flair, report })
    }

    /// Write both manifests, returning the paths written.
    pub fn write(&self, manifests: &GeneratedManifests) -> Result<Vec<PathBuf>> {
        let env_path = self.layout.env_output_path();
        let flair_path = self.layout.flair_output_path();

        manifests.env.save(&env_path)?;
        manifests.flair.save(&flair_path)?;

        Ok(vec![env_path, flair_path])
    }

    /// Generate and write in one go.
    pub fn run(&self) -> Result<(GeneratedManifests, Vec<PathBuf>)> {
        let manifests = self.generate()?;
        let written = self.write(&manifests)?;
        Ok((manifests, written))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{ENV_SKELETON, FLAIR_SKELETON};
    use crate::rules::keys;
    use std::fs;
    use tempfile::TempDir;

    fn layout_with_skeletons() -> (TempDir, LayoutConfig) {
        let temp_dir = TempDir::new().unwrap();
        let layout = LayoutConfig::default().with_base_dir(temp_dir.path());
        fs::create_dir_all(temp_dir.path().join("scot4/secret-skeletons")).unwrap();
        fs::write(layout.env_template_path(), ENV_SKELETON).unwrap();
        fs::write(layout.flair_template_path(), FLAIR_SKELETON).unwrap();
        (temp_dir, layout)
    }

    #[test]
    fn test_run_writes_linked_manifests() {
        let (_temp_dir, layout) = layout_with_skeletons();
        let generator = SecretGenerator::new(layout.clone(), SecretPlan::new(None));

        let (manifests, written) = generator.run().unwrap();
        assert_eq!(written, vec![layout.env_output_path(), layout.flair_output_path()]);

        let env = SecretDocument::load(DocumentKind::Environment, &written[0]).unwrap();
        let flair = SecretDocument::load(DocumentKind::Flair, &written[1]).unwrap();

        assert_eq!(env.string_data(), manifests.env.string_data());
        assert_eq!(flair.string_data(), manifests.flair.string_data());
        assert_eq!(
            flair.get(keys::S4FLAIR_SCOT_API_KEY),
            env.get(keys::FIRST_SUPERUSER_APIKEY)
        );
    }

    #[test]
    fn test_missing_skeleton_writes_nothing() {
        let (_temp_dir, layout) = layout_with_skeletons();
        fs::remove_file(layout.flair_template_path()).unwrap();

        let generator = SecretGenerator::new(layout.clone(), SecretPlan::new(None));
        match generator.run() {
            Err(Scot4Error::MissingTemplate(paths)) => {
                assert_eq!(paths, vec![layout.flair_template_path()]);
            }
            other => panic!("expected MissingTemplate, got {:?}", other.map(|_| ())),
        }

        assert!(!layout.env_output_path().exists());
        assert!(!layout.flair_output_path().exists());
    }
}
