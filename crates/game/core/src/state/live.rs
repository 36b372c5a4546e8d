//! Values read from the running game every refresh.

use crate::config::DeliveryConfig;

/// One captured frame of live game state.
///
/// Per-NPC arrays are indexed by NPC index and must be at least as long as
/// the static NPC table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LiveSnapshot {
    /// Whether a character is logged in and its data is readable.
    pub player_loaded: bool,
    pub ranks: Vec<u8>,
    pub used_deliveries: Vec<u8>,
    /// Weekly seed shared by every NPC's request draw.
    pub supply_seed: u32,
    /// Raw bonus guarantee row; [`DeliveryConfig::GUARANTEE_UNDETERMINED`]
    /// when the game has not decided it yet.
    pub guarantee_row: u8,
    /// Hours added to the server clock before deriving the weekly period.
    pub time_adjustment: i32,
    /// Server time in unix seconds.
    pub server_time: i64,
    /// Deliveries the player may still make this week across all NPCs.
    pub remaining_allowance: u32,
    pub holdings: Vec<CurrencyHolding>,
}

impl LiveSnapshot {
    /// Live guarantee row, `None` while it is undetermined.
    pub fn guarantee_row(&self) -> Option<u32> {
        (self.guarantee_row != DeliveryConfig::GUARANTEE_UNDETERMINED)
            .then_some(u32::from(self.guarantee_row))
    }

    pub fn holding(&self, currency: u32) -> Option<&CurrencyHolding> {
        self.holdings.iter().find(|holding| holding.currency == currency)
    }

    /// Number of NPCs the live arrays describe.
    pub fn npc_count(&self) -> usize {
        self.ranks.len()
    }
}

/// Amount of one currency the player holds and the most it can hold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrencyHolding {
    pub currency: u32,
    pub count: u32,
    pub max: u32,
}
