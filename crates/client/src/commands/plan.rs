//! Print, and optionally simulate, the delivery plan of one NPC.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use satisfy_bootstrap::ClientConfig;
use satisfy_runtime::DeliveryStart;

use super::refreshed_setup;
use crate::render;
use crate::replay::DryRunExecutor;

/// Print the delivery plan for one NPC
#[derive(Parser)]
pub struct Plan {
    /// Captured live state (RON)
    #[arg(value_name = "LIVE")]
    capture: PathBuf,

    /// NPC index as listed by `show`
    #[arg(value_name = "NPC")]
    npc: usize,

    /// Run the plan against a logging executor
    #[arg(long)]
    simulate: bool,
}

impl Plan {
    pub async fn execute(self, config: ClientConfig) -> Result<()> {
        let mut setup = refreshed_setup(config, &self.capture)?;
        let session = &mut setup.session;

        let steps = session.plan_delivery(self.npc)?;
        print!("{}", render::plan_listing(&steps));

        if !self.simulate {
            return Ok(());
        }

        let executor = Arc::new(DryRunExecutor::default());
        if session.start_delivery(self.npc, executor.clone())? != DeliveryStart::Started {
            return Ok(());
        }

        let outcome = session.finish_delivery().await?;
        println!();
        for action in executor.actions() {
            println!("  {}", action);
        }
        if let Some(outcome) = outcome {
            println!("Outcome: {:?}", outcome);
        }
        Ok(())
    }
}
