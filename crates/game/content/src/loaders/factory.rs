//! Content factory for building oracle snapshots from data files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use satisfy_core::{GuaranteeRow, ItemNames, NpcDefinition, RewardRow, SupplyRow, TableSnapshot};

use crate::loaders::{
    GuaranteeLoader, ItemLoader, LoadResult, NpcLoader, RewardLoader, SampleLoader, SupplyLoader,
};
use crate::samples::ValidationSamples;

/// Content factory that loads all static tables from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── npcs.ron
/// ├── supply.ron
/// ├── rewards.ron
/// ├── guarantees.ron
/// ├── items.ron
/// └── samples.ron      (optional, validation only)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load NPC definitions from `npcs.ron`.
    pub fn load_npcs(&self) -> LoadResult<Vec<NpcDefinition>> {
        NpcLoader::load(&self.data_dir.join("npcs.ron"))
    }

    /// Load supply tables from `supply.ron`.
    pub fn load_supply(&self) -> LoadResult<BTreeMap<u32, Vec<SupplyRow>>> {
        SupplyLoader::load(&self.data_dir.join("supply.ron"))
    }

    /// Load reward rows from `rewards.ron`.
    pub fn load_rewards(&self) -> LoadResult<BTreeMap<u32, RewardRow>> {
        RewardLoader::load(&self.data_dir.join("rewards.ron"))
    }

    /// Load bonus guarantee rows from `guarantees.ron`.
    pub fn load_guarantees(&self) -> LoadResult<Vec<GuaranteeRow>> {
        GuaranteeLoader::load(&self.data_dir.join("guarantees.ron"))
    }

    /// Load name tables from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemNames> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load validation samples from `samples.ron`.
    pub fn load_samples(&self) -> LoadResult<ValidationSamples> {
        SampleLoader::load(&self.data_dir.join("samples.ron"))
    }

    /// Load every static table into one snapshot.
    ///
    /// Every NPC's supply tables must exist in `supply.ron`.
    pub fn load_snapshot(&self) -> LoadResult<TableSnapshot> {
        let snapshot = TableSnapshot {
            supply: self.load_supply()?,
            rewards: self.load_rewards()?,
            guarantees: self.load_guarantees()?,
            npcs: self.load_npcs()?,
            items: self.load_items()?,
        };

        for npc in &snapshot.npcs {
            // Rank 0 means locked and never draws from its table.
            for supply_id in npc.supply_ids.iter().skip(1) {
                if !snapshot.supply.contains_key(supply_id) {
                    anyhow::bail!("NPC {} references unknown supply table {}", npc.name, supply_id);
                }
            }
        }

        Ok(snapshot)
    }

    /// Like [`Self::load_snapshot`], with the data directory in the error.
    pub fn load_snapshot_with_context(&self) -> LoadResult<TableSnapshot> {
        self.load_snapshot()
            .with_context(|| format!("loading static tables from {}", self.data_dir.display()))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
