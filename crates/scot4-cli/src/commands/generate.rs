//! Generate the SCOT4 secret manifests.

use anyhow::{Context, Result};
use colored::Colorize;
use scot4_core::LayoutConfig;
use scot4_secrets::{SecretGenerator, SecretPlan};

pub fn execute(database_uri: Option<&str>, layout: LayoutConfig, quiet: bool) -> Result<()> {
    let plan = SecretPlan::new(database_uri.map(String::from));
    if plan.database_uri_override().is_some() {
        tracing::info!("Using SQLALCHEMY_DATABASE_URI from the command line");
    }

    let generator = SecretGenerator::new(layout, plan);
    let (manifests, written) = generator
        .run()
        .context("Failed to generate SCOT4 secrets")?;

    tracing::debug!(
        "Generated: {}",
        manifests.report.generated.join(", ")
    );

    if quiet {
        return Ok(());
    }

    println!(
        "{} Secrets created for SCOT4 API and Flair",
        "✓".green().bold()
    );
    for path in &written {
        println!("  {}", path.display().to_string().cyan());
    }

    println!("\nTo install the secrets with kubectl:\n");
    if !manifests.report.override_applied {
        println!(
            "  {} - Populate the secrets for DB credentials and enrichment password",
            "FIRST".yellow().bold()
        );
    } else {
        println!(
            "  {} - Populate the enrichment password",
            "FIRST".yellow().bold()
        );
    }
    for path in &written {
        println!("  kubectl -n scot4 apply -f {}", path.display());
    }

    Ok(())
}
