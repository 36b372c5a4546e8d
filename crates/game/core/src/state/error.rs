//! State initialization errors.
//!
//! Errors raised when live game state and static tables cannot be lined up.

use crate::error::{ErrorSeverity, SatisfyError};

/// Errors that occur while building or refreshing per-NPC state.
///
/// Every variant means the static data set does not describe the running
/// game; no projection is computed for the session until it is fixed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InitializationError {
    /// Live NPC count differs from the static NPC table.
    #[error("npc count mismatch between live state ({live}) and static table ({table})")]
    NpcCountMismatch { live: usize, table: usize },

    /// Static NPC table has a hole.
    #[error("npc definition {0} missing from static table")]
    NpcDefinitionMissing(usize),

    /// A live per-NPC array is shorter than the NPC list.
    #[error("live {field} has {len} entries, expected {expected}")]
    LiveArrayTooShort {
        field: &'static str,
        len: usize,
        expected: usize,
    },

    /// Live rank has no supply table in the NPC definition.
    #[error("npc {npc} has rank {rank} but only {ranks} supply tables")]
    RankOutOfRange { npc: usize, rank: u8, ranks: usize },

    /// Live used deliveries exceed the weekly maximum.
    #[error("npc {npc} used {used} deliveries of {max}")]
    DeliveriesExceeded { npc: usize, used: u8, max: u8 },
}

impl SatisfyError for InitializationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use InitializationError::*;
        match self {
            NpcCountMismatch { .. } => "INIT_NPC_COUNT_MISMATCH",
            NpcDefinitionMissing(_) => "INIT_NPC_DEFINITION_MISSING",
            LiveArrayTooShort { .. } => "INIT_LIVE_ARRAY_TOO_SHORT",
            RankOutOfRange { .. } => "INIT_RANK_OUT_OF_RANGE",
            DeliveriesExceeded { .. } => "INIT_DELIVERIES_EXCEEDED",
        }
    }
}
