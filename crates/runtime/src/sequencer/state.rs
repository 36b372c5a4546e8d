use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};

/// Phase of an automated delivery run.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, IntoStaticStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
pub enum SequencerState {
    #[default]
    Idle,
    TeleportingToSource,
    MovingToSource,
    /// Reported only; catching is left to the player.
    Fishing,
    TeleportingToDelivery,
    MovingToDelivery,
    Delivering,
}

impl SequencerState {
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Observable status of the sequencer: its phase plus display text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SequencerStatus {
    pub state: SequencerState,
    pub text: String,
}

impl SequencerStatus {
    pub fn new(state: SequencerState, text: impl Into<String>) -> Self {
        Self {
            state,
            text: text.into(),
        }
    }

    pub fn idle(text: impl Into<String>) -> Self {
        Self::new(SequencerState::Idle, text)
    }
}
