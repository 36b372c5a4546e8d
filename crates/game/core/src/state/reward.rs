//! Projected currency gains and their display view.

use super::CurrencyHolding;

/// A potential currency gain: `count` deliveries paying `amount` each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardProjection {
    pub currency: u32,
    pub amount: u32,
    pub count: u32,
}

impl RewardProjection {
    pub const fn new(currency: u32, amount: u32, count: u32) -> Self {
        Self {
            currency,
            amount,
            count,
        }
    }

    /// Total projected gain, `amount * count`.
    pub const fn gain(&self) -> u64 {
        self.amount as u64 * self.count as u64
    }
}

/// One display row of the currency table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrencyView {
    pub currency: u32,
    pub holdings: u32,
    pub cap: u32,
    pub gain: u64,
    /// Amount the gain would exceed the cap by; `None` when it fits.
    pub overcap: Option<u64>,
    /// Space left before the cap, zero once holdings reach it.
    pub headroom: u32,
    /// Gain that can actually be banked.
    pub capped_gain: u64,
}

impl CurrencyView {
    /// Builds the view of a projection; a missing holding counts as empty
    /// with no cap room.
    pub fn new(projection: &RewardProjection, holding: Option<&CurrencyHolding>) -> Self {
        let (holdings, cap) = holding.map_or((0, 0), |h| (h.count, h.max));
        let gain = projection.gain();
        let total = u64::from(holdings) + gain;
        let overcap = total
            .checked_sub(u64::from(cap))
            .filter(|&excess| excess > 0);
        let headroom = cap.saturating_sub(holdings);

        Self {
            currency: projection.currency,
            holdings,
            cap,
            gain,
            overcap,
            headroom,
            capped_gain: gain.min(u64::from(headroom)),
        }
    }

    pub const fn is_overcapped(&self) -> bool {
        self.overcap.is_some()
    }
}
