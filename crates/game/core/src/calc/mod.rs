//! Deterministic reconstruction of the weekly delivery board.
//!
//! Data flows one way: the request draw picks a subrow per slot, the resolver
//! maps each subrow to the reward it pays, and the aggregator folds those
//! rewards into capped projections. [`RefreshPass`] runs the whole chain.
mod aggregate;
mod error;
mod guarantee;
mod refresh;
mod requests;
mod resolver;

pub use aggregate::{RewardAccumulator, aggregate};
pub use error::RefreshError;
pub use guarantee::{
    calculate_guarantee_row, guarantee_period, override_flags, resolve_guarantee_row,
};
pub use refresh::RefreshPass;
pub use requests::{requested_slots, requests_in_rows, supply_rows};
pub use resolver::{ResolvedReward, resolve_in_rows, resolve_reward};
