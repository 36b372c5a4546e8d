//! Aggregation of projected rewards across NPCs.

use crate::state::RewardProjection;

/// Scratch set merging projections by exact `(currency, amount)`.
#[derive(Clone, Debug, Default)]
pub struct RewardAccumulator {
    entries: Vec<RewardProjection>,
}

impl RewardAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` deliveries paying `amount` of `currency`.
    pub fn add(&mut self, currency: u32, amount: u32, count: u32) {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.currency == currency && entry.amount == amount)
        {
            Some(entry) => entry.count = entry.count.saturating_add(count),
            None => self
                .entries
                .push(RewardProjection::new(currency, amount, count)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorts and clamps the merged set against `allowance`.
    pub fn finish(self, allowance: u32) -> Vec<RewardProjection> {
        clamp_sorted(self.entries, allowance)
    }
}

/// Merges, sorts and clamps raw projections.
///
/// Entries are ordered by currency, then by descending amount. Walking that
/// order, the first entry of a currency is clamped to `allowance` and every
/// following entry of the same currency is folded into it, re-clamping the
/// merged count. Each currency is clamped on its own.
pub fn aggregate(
    entries: impl IntoIterator<Item = RewardProjection>,
    allowance: u32,
) -> Vec<RewardProjection> {
    let mut accumulator = RewardAccumulator::new();
    for entry in entries {
        accumulator.add(entry.currency, entry.amount, entry.count);
    }
    accumulator.finish(allowance)
}

fn clamp_sorted(mut entries: Vec<RewardProjection>, allowance: u32) -> Vec<RewardProjection> {
    entries.sort_by(|a, b| {
        a.currency
            .cmp(&b.currency)
            .then_with(|| b.amount.cmp(&a.amount))
    });

    let mut retained: Vec<RewardProjection> = Vec::with_capacity(entries.len());
    for entry in entries {
        match retained.last_mut() {
            Some(previous) if previous.currency == entry.currency => {
                previous.count = allowance.min(previous.count.saturating_add(entry.count));
            }
            _ => retained.push(RewardProjection {
                count: entry.count.min(allowance),
                ..entry
            }),
        }
    }
    retained
}
