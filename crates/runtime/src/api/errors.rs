//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the refresh pass, the live state reader, and the
//! automation worker so clients can bubble them up with consistent context.
use satisfy_core::{ErrorSeverity, InitializationError, RefreshError, SatisfyError};
use thiserror::Error;

use super::providers::LiveStateError;
use crate::sequencer::SequencerError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session requires oracles to be configured before building")]
    MissingOracles,

    #[error("session requires a live state reader before building")]
    MissingLiveReader,

    #[error("failed to initialize session state from oracles")]
    InitialState(#[source] InitializationError),

    #[error(transparent)]
    Refresh(#[from] RefreshError),

    #[error("failed to read live game state")]
    LiveState(#[from] LiveStateError),

    #[error(transparent)]
    Sequencer(#[from] SequencerError),

    #[error("automation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}

impl SatisfyError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingOracles | Self::MissingLiveReader => ErrorSeverity::Validation,
            Self::InitialState(err) => err.severity(),
            Self::Refresh(err) => err.severity(),
            Self::LiveState(_) => ErrorSeverity::Recoverable,
            Self::Sequencer(err) => err.severity(),
            Self::WorkerJoin(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingOracles => "RUNTIME_MISSING_ORACLES",
            Self::MissingLiveReader => "RUNTIME_MISSING_LIVE_READER",
            Self::InitialState(err) => err.error_code(),
            Self::Refresh(err) => err.error_code(),
            Self::LiveState(_) => "RUNTIME_LIVE_STATE",
            Self::Sequencer(err) => err.error_code(),
            Self::WorkerJoin(_) => "RUNTIME_WORKER_JOIN",
        }
    }
}
