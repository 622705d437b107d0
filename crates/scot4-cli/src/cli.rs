//! CLI structure and argument definitions.

use anyhow::{Context, Result};
use clap::Parser;
use scot4_core::LayoutConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scot4-gen-secrets")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate the SCOT4 API and Flair Kubernetes secret manifests", long_about = None)]
#[command(after_help = r#"FILES:
    Reads   scot4/secret-skeletons/secrets.yaml
            scot4/secret-skeletons/flair-secrets.yaml
    Writes  scot4/auto_gen_secrets.yaml
            scot4/auto_gen_flair_secrets.yaml

All paths are relative to --base-dir (default: current directory)."#)]
pub struct Cli {
    /// SQLALCHEMY_DATABASE_URI to write verbatim instead of filling in the
    /// skeleton's PLACEHOLDER with the generated API_DB_PASSWORD
    #[arg(value_name = "DATABASE_URI")]
    pub database_uri: Option<String>,

    /// Directory containing the scot4/ deployment tree
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// YAML file overriding template and output locations
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Log filter implied by the verbosity flags.
    pub fn log_directive(&self) -> &'static str {
        scot4_core::log::directive_for(self.verbose, self.debug, self.quiet)
    }

    /// Resolve the layout from `--config` and `--base-dir`.
    pub fn layout(&self) -> Result<LayoutConfig> {
        let layout = match &self.config {
            Some(path) => LayoutConfig::load(path)
                .with_context(|| format!("Failed to load layout from {}", path.display()))?,
            None => LayoutConfig::default(),
        };

        Ok(match &self.base_dir {
            Some(base_dir) => layout.with_base_dir(base_dir),
            None => layout,
        })
    }

    pub fn execute(&self) -> Result<()> {
        use crate::commands::*;

        let layout = self.layout()?;
        generate::execute(self.database_uri.as_deref(), layout, self.quiet)
    }
}
