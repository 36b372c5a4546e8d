//! Reward table loader.

use std::collections::BTreeMap;
use std::path::Path;

use satisfy_core::RewardRow;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Reward rows keyed by reward id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardCatalog {
    pub rewards: BTreeMap<u32, RewardRow>,
}

/// Loader for reward rows from RON files.
pub struct RewardLoader;

impl RewardLoader {
    pub fn load(path: &Path) -> LoadResult<BTreeMap<u32, RewardRow>> {
        let content = read_file(path)?;
        let catalog: RewardCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse reward RON: {}", e))?;

        Ok(catalog.rewards)
    }
}
