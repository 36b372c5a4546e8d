/// Delivery rules and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryConfig {
    /// Rank at which an NPC takes part in the weekly bonus guarantee.
    pub guarantee_rank: u8,
}

impl DeliveryConfig {
    // ===== compile-time constants used as type parameters =====
    /// Number of delivery slots every NPC requests per cycle.
    pub const SLOT_COUNT: usize = 3;
    /// Number of reward entries carried by one reward row.
    pub const REWARD_ENTRIES: usize = 2;
    /// Candidate NPCs per slot in one bonus guarantee row.
    pub const GUARANTEE_NPCS_PER_SLOT: usize = 2;

    /// Delivery slot whose items are caught by fishing.
    pub const FISH_SLOT: usize = 2;
    /// Live bonus guarantee indicator meaning "not decided yet".
    pub const GUARANTEE_UNDETERMINED: u8 = 0xFF;
    /// Weekly reset anchor (Tuesday 2022-07-05 08:00 UTC), in unix seconds.
    pub const GUARANTEE_EPOCH: i64 = 1_657_008_000;
    pub const SECONDS_PER_WEEK: i64 = 7 * 24 * 3600;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_GUARANTEE_RANK: u8 = 5;

    pub fn new() -> Self {
        Self {
            guarantee_rank: Self::DEFAULT_GUARANTEE_RANK,
        }
    }
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self::new()
    }
}
