//! Per-session delivery state.
//!
//! This module owns the data structures that describe every delivery NPC and
//! the projected rewards of the current week. Runtime layers read this state
//! but mutate it exclusively through [`crate::calc::RefreshPass`].
mod common;
mod error;
mod live;
mod npc;
mod reward;

pub use common::Position;
pub use error::InitializationError;
pub use live::{CurrencyHolding, LiveSnapshot};
pub use npc::{NpcState, RequestedSlots, SlotFlags};
pub use reward::{CurrencyView, RewardProjection};

use crate::env::NpcOracle;

/// Where the active bonus guarantee row came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GuaranteeSource {
    /// Read from the game.
    Live,
    /// Recomputed from the weekly period.
    Computed,
    /// Neither available; no slot is overridden.
    #[default]
    Undetermined,
}

/// Canonical snapshot of one session's delivery state.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionState {
    /// Every delivery NPC, ordered by index.
    pub npcs: Vec<NpcState>,
    /// Aggregated projections, ordered by currency then descending amount.
    pub rewards: Vec<RewardProjection>,
    pub guarantee_row: Option<u32>,
    pub guarantee_source: GuaranteeSource,
}

impl SessionState {
    /// Builds the NPC list from the static table, sized by the live NPC count.
    ///
    /// # Errors
    ///
    /// Returns [`InitializationError::NpcCountMismatch`] when the live game
    /// and the static table disagree, and
    /// [`InitializationError::NpcDefinitionMissing`] when a row is absent.
    pub fn from_oracle(
        npcs: &dyn NpcOracle,
        live_count: usize,
    ) -> Result<Self, InitializationError> {
        let table = npcs.npc_count();
        if live_count != table {
            return Err(InitializationError::NpcCountMismatch {
                live: live_count,
                table,
            });
        }

        let npcs = (0..table)
            .map(|index| {
                npcs.npc(index)
                    .map(|definition| NpcState::from_definition(index, definition))
                    .ok_or(InitializationError::NpcDefinitionMissing(index))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            npcs,
            ..Self::default()
        })
    }

    pub fn npc(&self, index: usize) -> Option<&NpcState> {
        self.npcs.get(index)
    }

    pub fn npc_count(&self) -> usize {
        self.npcs.len()
    }
}
