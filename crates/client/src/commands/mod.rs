//! Subcommand implementations.

mod plan;
mod settings;
mod show;
mod verify;

pub use plan::Plan;
pub use settings::Settings;
pub use show::Show;
pub use verify::Verify;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use satisfy_bootstrap::{ClientConfig, RuntimeBuilder, RuntimeSetup};

use crate::replay::CaptureReader;

/// Builds a session over `capture` and runs one refresh.
fn refreshed_setup(config: ClientConfig, capture: &Path) -> Result<RuntimeSetup> {
    let reader = CaptureReader::load(capture)?;
    let mut setup = RuntimeBuilder::new(config)
        .live_reader(Arc::new(reader))
        .build()?;
    setup.session.refresh()?;
    Ok(setup)
}
