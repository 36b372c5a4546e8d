//! Reward rows describing the currency paid per delivery.

use crate::config::DeliveryConfig;

/// One currency payout of a reward row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardEntry {
    /// Currency id; 0 marks an unused entry.
    pub currency: u32,
    /// Base quantity before the percentage scalar is applied.
    pub quantity: u32,
}

impl RewardEntry {
    pub const fn is_empty(&self) -> bool {
        self.currency == 0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardRow {
    pub entries: [RewardEntry; DeliveryConfig::REWARD_ENTRIES],
    /// Percentage applied to every entry's base quantity.
    pub percent_scalar: u32,
}

impl RewardRow {
    /// Per-delivery amount of an entry: `quantity * percent_scalar / 100`.
    pub const fn projected_amount(&self, entry: &RewardEntry) -> u32 {
        entry.quantity.saturating_mul(self.percent_scalar) / 100
    }
}

/// Oracle providing reward rows keyed by reward id.
pub trait RewardOracle: Send + Sync {
    fn reward(&self, reward_id: u32) -> Option<RewardRow>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projected_amount_truncates() {
        let row = RewardRow {
            entries: [
                RewardEntry {
                    currency: 2,
                    quantity: 105,
                },
                RewardEntry::default(),
            ],
            percent_scalar: 150,
        };
        assert_eq!(row.projected_amount(&row.entries[0]), 157);
        assert!(row.entries[1].is_empty());
    }
}
