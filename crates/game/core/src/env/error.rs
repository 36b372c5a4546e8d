//! Oracle access errors.
//!
//! Errors related to oracle availability and static table lookups.

use crate::error::{ErrorSeverity, SatisfyError};

/// Errors that occur when accessing oracle data.
///
/// Lookups are by exact integer key and are expected to always succeed for a
/// data set that matches the live game version. A miss therefore means version
/// skew and is never retried.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// SupplyOracle is not available in the environment.
    #[error("SupplyOracle not available")]
    SupplyNotAvailable,

    /// RewardOracle is not available in the environment.
    #[error("RewardOracle not available")]
    RewardsNotAvailable,

    /// GuaranteeOracle is not available in the environment.
    #[error("GuaranteeOracle not available")]
    GuaranteesNotAvailable,

    /// NpcOracle is not available in the environment.
    #[error("NpcOracle not available")]
    NpcsNotAvailable,

    /// ItemOracle is not available in the environment.
    #[error("ItemOracle not available")]
    ItemsNotAvailable,

    /// Supply table id has no rows.
    #[error("supply table {0} not found")]
    SupplyTableNotFound(u32),

    /// Supply table exists but the subrow does not.
    #[error("supply table {supply_id} has no subrow {subrow}")]
    SupplyRowNotFound { supply_id: u32, subrow: u32 },

    /// Supply table has no candidate row for a delivery slot.
    #[error("supply table {supply_id} has no candidates for slot {slot}")]
    EmptySlot { supply_id: u32, slot: u8 },

    /// Reward row was not found.
    #[error("reward row {0} not found")]
    RewardNotFound(u32),

    /// Bonus guarantee row was not found.
    #[error("bonus guarantee row {0} not found")]
    GuaranteeRowNotFound(u32),
}

impl SatisfyError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        // Every oracle failure means the static data cannot describe the live game.
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            SupplyNotAvailable => "ORACLE_SUPPLY_NOT_AVAILABLE",
            RewardsNotAvailable => "ORACLE_REWARDS_NOT_AVAILABLE",
            GuaranteesNotAvailable => "ORACLE_GUARANTEES_NOT_AVAILABLE",
            NpcsNotAvailable => "ORACLE_NPCS_NOT_AVAILABLE",
            ItemsNotAvailable => "ORACLE_ITEMS_NOT_AVAILABLE",
            SupplyTableNotFound(_) => "ORACLE_SUPPLY_TABLE_NOT_FOUND",
            SupplyRowNotFound { .. } => "ORACLE_SUPPLY_ROW_NOT_FOUND",
            EmptySlot { .. } => "ORACLE_EMPTY_SLOT",
            RewardNotFound(_) => "ORACLE_REWARD_NOT_FOUND",
            GuaranteeRowNotFound(_) => "ORACLE_GUARANTEE_ROW_NOT_FOUND",
        }
    }
}
