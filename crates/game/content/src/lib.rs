//! Data-driven static tables and loaders.
//!
//! This crate provides loaders for the RON data files describing the
//! delivery minigame:
//! - NPC definitions with per-rank supply tables and automation metadata
//! - Supply tables (candidate turn-in items per slot)
//! - Reward rows and bonus guarantee rows
//! - Item, currency and fishing spot names
//! - Validation samples pinning the request reconstruction
//!
//! Content is consumed by runtime oracles and never appears in session state.

pub mod samples;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use samples::{GuaranteeSample, RequestSample, SampleMismatch, ValidationSamples};

#[cfg(feature = "loaders")]
pub use loaders::{
    ContentFactory, GuaranteeLoader, ItemLoader, LoadResult, NpcLoader, RewardLoader,
    SampleLoader, SupplyLoader,
};
