//! Per-NPC delivery state.

use arrayvec::ArrayVec;

use crate::config::DeliveryConfig;
use crate::env::{CraftData, FishData, NpcDefinition};

/// Requested subrows, one per active delivery slot.
pub type RequestedSlots = ArrayVec<u32, { DeliveryConfig::SLOT_COUNT }>;

/// Per-slot flags.
pub type SlotFlags = [bool; DeliveryConfig::SLOT_COUNT];

/// Delivery state of one NPC.
///
/// Identity and metadata are copied from the static definition once at
/// session start; the remaining fields are rebuilt on every refresh.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NpcState {
    /// Stable 0-based index, equal to the position in the live arrays.
    pub index: usize,
    pub name: String,
    pub max_deliveries: u8,
    pub supply_ids: Vec<u32>,
    pub territory_id: u32,
    pub turn_in_items: [u32; DeliveryConfig::SLOT_COUNT],
    pub craft: Option<CraftData>,
    pub fish: Option<FishData>,

    // ===== refreshed every tick =====
    pub rank: u8,
    pub used_deliveries: u8,
    /// Supply subrow requested in each slot; empty while the NPC is locked.
    pub requests: RequestedSlots,
    /// Slots forced to bonus by the weekly guarantee.
    pub is_bonus_override: SlotFlags,
    /// Slots paying the bonus reward (override or static flag).
    pub is_bonus_effective: SlotFlags,
    /// Resolved reward row per slot; 0 for slots without a request.
    pub rewards: [u32; DeliveryConfig::SLOT_COUNT],
}

impl NpcState {
    pub fn from_definition(index: usize, definition: NpcDefinition) -> Self {
        Self {
            index,
            name: definition.name,
            max_deliveries: definition.deliveries_per_week,
            supply_ids: definition.supply_ids,
            territory_id: definition.territory_id,
            turn_in_items: definition.turn_in_items,
            craft: definition.craft,
            fish: definition.fish,
            rank: 0,
            used_deliveries: 0,
            requests: RequestedSlots::new(),
            is_bonus_override: [false; DeliveryConfig::SLOT_COUNT],
            is_bonus_effective: [false; DeliveryConfig::SLOT_COUNT],
            rewards: [0; DeliveryConfig::SLOT_COUNT],
        }
    }

    /// 1-based index used by static tables that reference NPCs.
    pub const fn sheet_index(&self) -> usize {
        self.index + 1
    }

    /// Supply table for the current rank.
    pub fn supply_id(&self) -> Option<u32> {
        self.supply_ids.get(self.rank as usize).copied()
    }

    pub const fn is_unlocked(&self) -> bool {
        self.rank > 0
    }

    /// Deliveries left this week.
    pub const fn remaining_deliveries(&self) -> u32 {
        self.max_deliveries.saturating_sub(self.used_deliveries) as u32
    }

    /// Deliveries left for `slot`; zero when nothing is requested there.
    pub fn remaining_turnins(&self, slot: usize) -> u32 {
        if slot < self.requests.len() {
            self.remaining_deliveries()
        } else {
            0
        }
    }

    /// Fraction of the weekly deliveries already used, in `[0, 1]`.
    pub fn delivery_progress(&self) -> f32 {
        if self.max_deliveries == 0 {
            return 0.0;
        }
        f32::from(self.used_deliveries) / f32::from(self.max_deliveries)
    }

    /// Clears every refreshed per-slot field.
    pub fn clear_slots(&mut self) {
        self.requests.clear();
        self.is_bonus_override = [false; DeliveryConfig::SLOT_COUNT];
        self.is_bonus_effective = [false; DeliveryConfig::SLOT_COUNT];
        self.rewards = [0; DeliveryConfig::SLOT_COUNT];
    }
}
