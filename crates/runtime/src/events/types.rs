//! Event types for different topics.

use satisfy_core::GuaranteeSource;
use serde::{Deserialize, Serialize};

use crate::sequencer::{SequenceOutcome, SequencerState};

/// Result of one refresh pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefreshEvent {
    /// State was rebuilt
    Refreshed {
        npcs: usize,
        projections: usize,
        guarantee_row: Option<u32>,
        guarantee_source: GuaranteeSource,
    },

    /// The pass failed and the previous state was kept
    Failed { code: String, error: String },
}

/// Progress of a delivery run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutomationEvent {
    Started {
        npc_index: usize,
        steps: usize,
    },
    StepStarted {
        npc_index: usize,
        state: SequencerState,
        status: String,
    },
    Finished {
        npc_index: usize,
        outcome: SequenceOutcome,
    },
    Failed {
        npc_index: usize,
        state: SequencerState,
        error: String,
    },
}
