//! In-memory oracle data.
//!
//! [`TableSnapshot`] holds a complete copy of the static tables the core
//! reads and implements every oracle trait on top of it. Loaders deserialize
//! it from data files; tests build it directly.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{
    GuaranteeOracle, GuaranteeRow, ItemOracle, NpcDefinition, NpcOracle, RewardOracle, RewardRow,
    SupplyOracle, SupplyRow,
};

/// Complete snapshot of the static game tables.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TableSnapshot {
    /// Supply tables keyed by supply id; vector position is the subrow.
    pub supply: BTreeMap<u32, Vec<SupplyRow>>,
    pub rewards: BTreeMap<u32, RewardRow>,
    /// Guarantee rows; vector position is the row id.
    pub guarantees: Vec<GuaranteeRow>,
    /// NPC definitions; vector position is the NPC index.
    pub npcs: Vec<NpcDefinition>,
    pub items: ItemNames,
}

/// Name tables backing [`ItemOracle`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemNames {
    pub items: BTreeMap<u32, String>,
    /// Currency id to the inventory item holding it.
    pub currencies: BTreeMap<u32, u32>,
    pub fishing_spots: BTreeMap<u32, String>,
    pub spearfishing_spots: BTreeMap<u32, String>,
}

impl TableSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a supply table, replacing any existing table with the same id.
    pub fn with_supply(mut self, supply_id: u32, rows: Vec<SupplyRow>) -> Self {
        self.supply.insert(supply_id, rows);
        self
    }

    pub fn with_reward(mut self, reward_id: u32, row: RewardRow) -> Self {
        self.rewards.insert(reward_id, row);
        self
    }

    pub fn with_guarantee(mut self, row: GuaranteeRow) -> Self {
        self.guarantees.push(row);
        self
    }

    pub fn with_npc(mut self, npc: NpcDefinition) -> Self {
        self.npcs.push(npc);
        self
    }
}

impl SupplyOracle for TableSnapshot {
    fn subrow_count(&self, supply_id: u32) -> Option<u32> {
        self.supply.get(&supply_id).map(|rows| rows.len() as u32)
    }

    fn row(&self, supply_id: u32, subrow: u32) -> Option<SupplyRow> {
        self.supply
            .get(&supply_id)
            .and_then(|rows| rows.get(subrow as usize))
            .copied()
    }
}

impl RewardOracle for TableSnapshot {
    fn reward(&self, reward_id: u32) -> Option<RewardRow> {
        self.rewards.get(&reward_id).copied()
    }
}

impl GuaranteeOracle for TableSnapshot {
    fn row_count(&self) -> u32 {
        self.guarantees.len() as u32
    }

    fn row(&self, row_id: u32) -> Option<GuaranteeRow> {
        self.guarantees.get(row_id as usize).copied()
    }
}

impl NpcOracle for TableSnapshot {
    fn npc_count(&self) -> usize {
        self.npcs.len()
    }

    fn npc(&self, index: usize) -> Option<NpcDefinition> {
        self.npcs.get(index).cloned()
    }
}

impl ItemOracle for TableSnapshot {
    fn item_name(&self, item_id: u32) -> Option<String> {
        self.items.items.get(&item_id).cloned()
    }

    fn currency_item(&self, currency: u32) -> Option<u32> {
        self.items.currencies.get(&currency).copied()
    }

    fn spot_name(&self, spot_id: u32, spearfish: bool) -> Option<String> {
        let spots = if spearfish {
            &self.items.spearfishing_spots
        } else {
            &self.items.fishing_spots
        };
        spots.get(&spot_id).cloned()
    }
}
