//! Supply table loader.

use std::collections::BTreeMap;
use std::path::Path;

use satisfy_core::{DeliveryConfig, SupplyRow};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Supply tables keyed by supply id; list position is the subrow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplyCatalog {
    pub tables: BTreeMap<u32, Vec<SupplyRow>>,
}

/// Loader for supply tables from RON files.
pub struct SupplyLoader;

impl SupplyLoader {
    /// Load supply tables from a RON file.
    ///
    /// Empty tables and rows whose slot lies outside `1..=3` are rejected.
    pub fn load(path: &Path) -> LoadResult<BTreeMap<u32, Vec<SupplyRow>>> {
        let content = read_file(path)?;
        let catalog: SupplyCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse supply RON: {}", e))?;

        let slots = 1..=DeliveryConfig::SLOT_COUNT as u8;
        for (supply_id, rows) in &catalog.tables {
            if rows.is_empty() {
                anyhow::bail!("supply table {} has no rows", supply_id);
            }
            if let Some((subrow, row)) = rows
                .iter()
                .enumerate()
                .find(|(_, row)| !slots.contains(&row.slot))
            {
                anyhow::bail!(
                    "supply table {} subrow {} has invalid slot {}",
                    supply_id,
                    subrow,
                    row.slot
                );
            }
        }

        Ok(catalog.tables)
    }
}
