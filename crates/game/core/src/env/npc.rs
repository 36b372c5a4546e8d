//! Static NPC definitions and oracle interface.
//!
//! A definition carries everything about a delivery NPC that never changes
//! during a session: its name, weekly delivery limit, the supply table used at
//! each rank, and the world locations the automation needs.

use crate::config::DeliveryConfig;
use crate::state::Position;

/// Where and to whom crafted or gathered items are handed in.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CraftData {
    pub turn_in_location: Position,
    /// Game object instance of the NPC at the turn-in location.
    pub turn_in_instance_id: u32,
}

/// Fishing metadata for the NPC's fish slot.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FishData {
    pub fish_item_id: u32,
    pub territory_id: u32,
    /// Centre of the fishing hole.
    pub center: Position,
    pub is_spearfish: bool,
    pub fish_spot_id: u32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpcDefinition {
    pub name: String,
    pub deliveries_per_week: u8,
    /// Supply table id used at each rank, indexed by rank.
    pub supply_ids: Vec<u32>,
    /// Zone the NPC lives in.
    pub territory_id: u32,
    /// Item accepted for each slot by the turn-in dialog.
    pub turn_in_items: [u32; DeliveryConfig::SLOT_COUNT],
    pub craft: Option<CraftData>,
    pub fish: Option<FishData>,
}

impl NpcDefinition {
    /// Minimal definition without automation metadata.
    pub fn simple(name: impl Into<String>, deliveries_per_week: u8, supply_ids: Vec<u32>) -> Self {
        Self {
            name: name.into(),
            deliveries_per_week,
            supply_ids,
            territory_id: 0,
            turn_in_items: [0; DeliveryConfig::SLOT_COUNT],
            craft: None,
            fish: None,
        }
    }
}

/// Oracle providing NPC definitions by 0-based index.
pub trait NpcOracle: Send + Sync {
    fn npc_count(&self) -> usize;

    fn npc(&self, index: usize) -> Option<NpcDefinition>;
}
