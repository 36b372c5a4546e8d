//! Render the delivery tables for a captured live state.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use satisfy_bootstrap::ClientConfig;

use super::refreshed_setup;
use crate::render;

/// Render the delivery and currency tables
#[derive(Parser)]
pub struct Show {
    /// Captured live state (RON)
    #[arg(value_name = "LIVE")]
    capture: PathBuf,
}

impl Show {
    pub fn execute(self, config: ClientConfig) -> Result<()> {
        let mut setup = refreshed_setup(config, &self.capture)?;
        let session = &mut setup.session;

        println!("{}", render::npc_table(session.state()));
        println!(
            "{}",
            render::currency_table(&session.currency_views(), session.oracles().items())
        );

        if setup.settings.show_debug_ui {
            println!("{}", render::debug_dump(session.state(), session.live()));
        }

        if let Some(open) = session.observe_visibility(setup.settings.auto_show_if_incomplete) {
            println!(
                "Window on login: {}",
                if open { "opens" } else { "stays closed" }
            );
        }
        Ok(())
    }
}
