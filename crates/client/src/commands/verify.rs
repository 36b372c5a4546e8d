//! Check validation samples against the reconstruction.

use anyhow::{Result, bail};
use clap::Parser;
use satisfy_bootstrap::{ClientConfig, ContentOracleFactory};
use tracing::info;

/// Check validation samples against the reconstruction
#[derive(Parser)]
pub struct Verify {}

impl Verify {
    pub fn execute(self, config: ClientConfig) -> Result<()> {
        let content = ContentOracleFactory::from_config(&config).content();
        let tables = content.load_snapshot_with_context()?;
        let samples = content.load_samples()?;

        let mismatches = samples.check(&tables);
        info!(samples = samples.len(), mismatches = mismatches.len(), "checked samples");

        for mismatch in &mismatches {
            println!("MISMATCH {}", mismatch);
        }
        if !mismatches.is_empty() {
            bail!(
                "{} of {} samples disagree with the reconstruction",
                mismatches.len(),
                samples.len()
            );
        }

        println!("All {} samples match.", samples.len());
        Ok(())
    }
}
