use satisfy_core::{ErrorSeverity, SatisfyError};
use thiserror::Error;

use super::SequencerState;
use crate::api::ExecutorError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SequencerError {
    /// Raised before any external call.
    #[error("npc {npc_index} has no fishing data")]
    MissingFishData { npc_index: usize },

    /// Raised before any external call.
    #[error("npc {npc_index} has no turn-in data")]
    MissingCraftData { npc_index: usize },

    #[error("unknown npc {0}")]
    UnknownNpc(usize),

    #[error("{state} step failed")]
    Executor {
        state: SequencerState,
        #[source]
        source: ExecutorError,
    },
}

impl SatisfyError for SequencerError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingFishData { .. } | Self::MissingCraftData { .. } => ErrorSeverity::Fatal,
            Self::UnknownNpc(_) => ErrorSeverity::Validation,
            Self::Executor { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingFishData { .. } => "SEQ_MISSING_FISH_DATA",
            Self::MissingCraftData { .. } => "SEQ_MISSING_CRAFT_DATA",
            Self::UnknownNpc(_) => "SEQ_UNKNOWN_NPC",
            Self::Executor { .. } => "SEQ_EXECUTOR_FAILED",
        }
    }
}
