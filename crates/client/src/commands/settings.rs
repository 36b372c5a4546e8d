//! Show the effective user settings.

use anyhow::Result;
use clap::Parser;
use satisfy_bootstrap::{ClientConfig, Settings as UserSettings};
use tracing::warn;

/// Print the effective settings
#[derive(Parser)]
pub struct Settings {}

impl Settings {
    pub fn execute(self, config: ClientConfig) -> Result<()> {
        let path = config.settings_path();
        let settings = UserSettings::load(&path).unwrap_or_else(|err| {
            warn!(path = %path.display(), "using default settings: {:#}", err);
            UserSettings::default()
        });

        println!("Settings file:            {}", path.display());
        println!("Auto show if incomplete:  {}", settings.auto_show_if_incomplete);
        println!("Show debug UI:            {}", settings.show_debug_ui);
        println!("Craft job choice:         {}", settings.craft_job_choice);
        println!("Selected craft job:       {}", settings.selected_craft_job);
        Ok(())
    }
}
