//! Supply tables: candidate turn-in items per NPC rank.

/// One subrow of a supply table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SupplyRow {
    /// Item the NPC asks for.
    pub item_id: u32,
    /// Delivery slot this row competes for (1-based, 1..=3).
    pub slot: u8,
    /// Selection weight in percent among rows of the same slot.
    pub probability_percent: u8,
    /// Reward row paid for delivering this item.
    pub reward_id: u32,
    /// Whether the static table marks this row as the bonus variant.
    pub is_bonus: bool,
}

impl SupplyRow {
    /// Zero-based slot index used by per-slot arrays.
    pub const fn slot_index(&self) -> usize {
        self.slot.saturating_sub(1) as usize
    }
}

/// Oracle providing supply tables keyed by supply id and subrow.
pub trait SupplyOracle: Send + Sync {
    /// Number of subrows in a supply table, `None` if the table is unknown.
    fn subrow_count(&self, supply_id: u32) -> Option<u32>;

    fn row(&self, supply_id: u32, subrow: u32) -> Option<SupplyRow>;
}
