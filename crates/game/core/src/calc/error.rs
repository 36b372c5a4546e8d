use crate::env::OracleError;
use crate::error::{ErrorSeverity, SatisfyError};
use crate::state::InitializationError;

/// Failure of a refresh pass. The previous state is left untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RefreshError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Initialization(#[from] InitializationError),
}

impl SatisfyError for RefreshError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(err) => err.severity(),
            Self::Initialization(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(err) => err.error_code(),
            Self::Initialization(err) => err.error_code(),
        }
    }
}
