//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use corecoding_core::config::defaults::AGREEMENT_FEATURES;
use corecoding_engine::EngineConfig;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file for your treebank");
        println!("2. Validate your configuration:");
        println!("   corecoding validate -c {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   corecoding process -i treebank.conllu -c {}",
            self.output.display()
        );

        Ok(())
    }
}

/// Generate template configuration content
pub fn generate_template() -> String {
    let features = AGREEMENT_FEATURES
        .iter()
        .map(|name| format!("\"{name}\""))
        .collect::<Vec<_>>()
        .join(", ");
    let engine = EngineConfig::default();

    format!(
        r#"# corecoding configuration

[classifier]
# Report category: "subj", "obj", "iobj", "agreement" or "all"
arg = "all"

# Set to false for languages that do not mark finiteness with VerbForm;
# clause types are then left empty
verbform = true

# Print relation subtypes (nsubj:pass) instead of universal relations (nsubj)
full_deprel = false

# Features of verbs and auxiliaries reported on AGREEMENT lines
agreement_features = [{features}]

[output]
# "text" or "json"
format = "text"

[performance]
# Always classify in parallel, regardless of batch size
parallel = false

# Worker threads (0 = number of CPUs)
threads = 0

# Batches of at least this many sentences are classified in parallel
parallel_threshold = {threshold}

# Sentences read per batch
batch_size = {batch_size}
"#,
        threshold = engine.parallel_threshold,
        batch_size = engine.batch_size,
    )
}
