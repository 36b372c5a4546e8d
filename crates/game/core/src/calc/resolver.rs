//! Reward resolution for requested supply rows.

use tracing::trace;

use super::requests::supply_rows;
use crate::env::{OracleError, RewardOracle, RewardRow, SupplyOracle, SupplyRow};

/// Reward paid for one requested slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedReward {
    pub reward_id: u32,
    /// Whether the slot pays the bonus variant.
    pub is_bonus_effective: bool,
    pub row: RewardRow,
}

/// Resolves the reward of `subrow` in supply table `supply_id`.
///
/// # Errors
///
/// Fails when the supply table, the subrow, or the chosen reward row is
/// missing.
pub fn resolve_reward(
    supply: &dyn SupplyOracle,
    rewards: &dyn RewardOracle,
    supply_id: u32,
    subrow: u32,
    is_bonus_override: bool,
) -> Result<ResolvedReward, OracleError> {
    let rows = supply_rows(supply, supply_id)?;
    resolve_in_rows(&rows, rewards, supply_id, subrow, is_bonus_override)
}

/// Same as [`resolve_reward`] over an already loaded supply table.
///
/// When the guarantee forces bonus onto a row the table does not mark as
/// bonus, the row of the same slot flagged as bonus is paid instead. Without
/// such a row the requested row's reward stands.
///
/// # Errors
///
/// Fails when `subrow` is outside `rows` or the reward row is missing.
pub fn resolve_in_rows(
    rows: &[SupplyRow],
    rewards: &dyn RewardOracle,
    supply_id: u32,
    subrow: u32,
    is_bonus_override: bool,
) -> Result<ResolvedReward, OracleError> {
    let requested = rows
        .get(subrow as usize)
        .ok_or(OracleError::SupplyRowNotFound { supply_id, subrow })?;

    let source = if is_bonus_override && !requested.is_bonus {
        rows.iter()
            .find(|row| row.slot == requested.slot && row.is_bonus)
            .unwrap_or(requested)
    } else {
        requested
    };
    trace!(
        supply_id,
        subrow,
        requested = requested.reward_id,
        resolved = source.reward_id,
        "resolved reward"
    );

    let row = rewards
        .reward(source.reward_id)
        .ok_or(OracleError::RewardNotFound(source.reward_id))?;

    Ok(ResolvedReward {
        reward_id: source.reward_id,
        is_bonus_effective: is_bonus_override || requested.is_bonus,
        row,
    })
}
