//! NPC definition loader.

use std::path::Path;

use satisfy_core::NpcDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// NPC catalog structure for RON files; list position is the NPC index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpcCatalog {
    pub npcs: Vec<NpcDefinition>,
}

/// Loader for NPC definitions from RON files.
pub struct NpcLoader;

impl NpcLoader {
    /// Load NPC definitions from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing NpcCatalog
    ///
    /// # Returns
    ///
    /// Returns the definitions ordered by NPC index.
    pub fn load(path: &Path) -> LoadResult<Vec<NpcDefinition>> {
        let content = read_file(path)?;
        let catalog: NpcCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse NPC catalog RON: {}", e))?;

        for (index, npc) in catalog.npcs.iter().enumerate() {
            if npc.supply_ids.is_empty() {
                anyhow::bail!("NPC {} ({}) has no supply tables", index, npc.name);
            }
        }

        Ok(catalog.npcs)
    }
}
