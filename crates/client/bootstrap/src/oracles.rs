//! Helpers for constructing the oracle manager consumed by the session.
use std::path::PathBuf;

use anyhow::{Result, bail};
use satisfy_content::ContentFactory;
use satisfy_core::TableSnapshot;
use satisfy_runtime::OracleManager;
use tracing::info;

use crate::config::ClientConfig;

pub trait OracleFactory: Send + Sync {
    fn build(&self) -> Result<OracleManager>;
}

/// Oracle factory that loads the static tables from data files.
///
/// # Directory Structure
///
/// The factory expects the following files in the data directory:
/// ```text
/// data_dir/
/// ├── npcs.ron
/// ├── supply.ron
/// ├── rewards.ron
/// ├── guarantees.ron
/// ├── items.ron
/// └── samples.ron (used by `verify` only)
/// ```
#[derive(Clone, Debug)]
pub struct ContentOracleFactory {
    data_dir: PathBuf,
}

impl ContentOracleFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Uses the configured data directory, else [`Self::default_paths`].
    pub fn from_config(config: &ClientConfig) -> Self {
        config
            .data_dir
            .clone()
            .map(Self::new)
            .unwrap_or_else(Self::default_paths)
    }

    /// Bundled data set.
    ///
    /// This tries to find the data directory in the following order:
    /// 1. Relative to current executable (../../crates/game/content/data)
    /// 2. Relative to current directory (crates/game/content/data)
    pub fn default_paths() -> Self {
        let relative = PathBuf::from("crates/game/content/data");
        let data_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| {
                exe.parent()
                    .and_then(|p| p.parent())
                    .and_then(|p| p.parent())
                    .map(|root| root.join(&relative))
            })
            .filter(|dir| dir.exists())
            .unwrap_or(relative);

        Self::new(data_dir)
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn content(&self) -> ContentFactory {
        ContentFactory::new(&self.data_dir)
    }
}

impl OracleFactory for ContentOracleFactory {
    fn build(&self) -> Result<OracleManager> {
        if !self.data_dir.exists() {
            bail!(
                "Content data directory not found: {}\n\
                 Set CONTENT_DATA_DIR environment variable to override.",
                self.data_dir.display()
            );
        }

        let snapshot = self.content().load_snapshot_with_context()?;
        info!(
            dir = %self.data_dir.display(),
            npcs = snapshot.npcs.len(),
            supply_tables = snapshot.supply.len(),
            "loaded static tables"
        );
        Ok(OracleManager::from_snapshot(snapshot))
    }
}

/// Oracle factory over tables already held in memory.
#[derive(Clone, Debug, Default)]
pub struct SnapshotOracleFactory {
    snapshot: TableSnapshot,
}

impl SnapshotOracleFactory {
    pub fn new(snapshot: TableSnapshot) -> Self {
        Self { snapshot }
    }
}

impl OracleFactory for SnapshotOracleFactory {
    fn build(&self) -> Result<OracleManager> {
        Ok(OracleManager::from_snapshot(self.snapshot.clone()))
    }
}
