//! Deterministic delivery logic and data types shared across clients.
//!
//! `satisfy-core` reconstructs the weekly custom delivery board from a live
//! game seed and the static tables: which items every NPC requests, which
//! slots pay a bonus, and how much currency the remaining deliveries can
//! still earn. Everything here is pure and synchronous; all state mutation
//! flows through [`calc::RefreshPass`].
pub mod calc;
pub mod config;
pub mod env;
pub mod error;
pub mod state;

pub use calc::{RefreshError, RefreshPass, ResolvedReward, RewardAccumulator};
pub use config::DeliveryConfig;
pub use env::{
    CraftData, FishData, GuaranteeOracle, GuaranteeRow, ItemNames, ItemOracle, NpcDefinition,
    NpcOracle, OracleError, RewardEntry, RewardOracle, RewardRow, SupplyOracle, SupplyRow,
    TableEnv, TableSnapshot, Xorshift128,
};
pub use error::{ErrorSeverity, SatisfyError};
pub use state::{
    CurrencyHolding, CurrencyView, GuaranteeSource, InitializationError, LiveSnapshot, NpcState,
    Position, RequestedSlots, RewardProjection, SessionState, SlotFlags,
};
