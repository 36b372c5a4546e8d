//! Interfaces to the running game.
//!
//! The runtime never reads game memory or drives the character itself. Hosts
//! plug in a [`LiveStateReader`] for the values the refresh pass needs and a
//! [`TravelExecutor`] that performs teleports, movement and turn-ins.
use async_trait::async_trait;
use bitflags::bitflags;
use satisfy_core::{LiveSnapshot, Position};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Synchronous access to live game values.
pub trait LiveStateReader: Send + Sync {
    /// Captures the values for one refresh.
    fn snapshot(&self) -> Result<LiveSnapshot, LiveStateError>;

    /// Number of `item_id` in the player's inventory.
    fn inventory_count(&self, item_id: u32) -> u32;
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LiveStateError {
    #[error("live state unavailable: {0}")]
    Unavailable(String),
}

bitflags! {
    /// Movement options passed through to the executor.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MoveFlags: u8 {
        /// Fly when the zone allows it.
        const FLY = 1 << 0;
        /// Mount up before moving.
        const MOUNT = 1 << 1;
        /// Land at the destination when flying.
        const LAND = 1 << 2;
    }
}

/// One turn-in at an NPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnInRequest {
    pub npc_index: usize,
    /// Game object instance of the NPC.
    pub instance_id: u32,
    pub item_id: u32,
    /// Zero-based delivery slot.
    pub slot: usize,
    pub quantity: u32,
}

/// Performs the in-game actions of a delivery.
///
/// Every method suspends until its external precondition holds: the
/// teleport finished, the destination was reached, or the turn-in animation
/// completed. Timeouts are the implementation's business.
#[async_trait]
pub trait TravelExecutor: Send + Sync {
    async fn teleport_to(&self, territory_id: u32, position: Position) -> Result<(), ExecutorError>;

    async fn move_to(
        &self,
        position: Position,
        tolerance: f32,
        flags: MoveFlags,
    ) -> Result<(), ExecutorError>;

    async fn turn_in(&self, request: TurnInRequest) -> Result<(), ExecutorError>;
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExecutorError {
    #[error("teleport to territory {territory_id} failed: {reason}")]
    Teleport { territory_id: u32, reason: String },

    #[error("movement failed: {0}")]
    Movement(String),

    #[error("turn-in failed: {0}")]
    TurnIn(String),
}
