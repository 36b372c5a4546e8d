//! Traits describing read-only game tables.
//!
//! Oracles expose the static supply, reward, bonus guarantee, NPC and name
//! tables. The [`TableEnv`] aggregate bundles them so the calculations can
//! access everything they need without hard coupling to concrete
//! implementations.
mod error;
mod guarantee;
mod items;
mod npc;
mod rewards;
mod rng;
mod snapshot;
mod supply;

pub use error::OracleError;
pub use guarantee::{GuaranteeOracle, GuaranteeRow};
pub use items::ItemOracle;
pub use npc::{CraftData, FishData, NpcDefinition, NpcOracle};
pub use rewards::{RewardEntry, RewardOracle, RewardRow};
pub use rng::{Xorshift128, request_seed};
pub use snapshot::{ItemNames, TableSnapshot};
pub use supply::{SupplyOracle, SupplyRow};

/// Aggregates the read-only oracles required by the refresh pass.
#[derive(Clone, Copy)]
pub struct TableEnv<'a> {
    supply: Option<&'a dyn SupplyOracle>,
    rewards: Option<&'a dyn RewardOracle>,
    guarantees: Option<&'a dyn GuaranteeOracle>,
    npcs: Option<&'a dyn NpcOracle>,
    items: Option<&'a dyn ItemOracle>,
}

impl<'a> TableEnv<'a> {
    pub fn new(
        supply: Option<&'a dyn SupplyOracle>,
        rewards: Option<&'a dyn RewardOracle>,
        guarantees: Option<&'a dyn GuaranteeOracle>,
        npcs: Option<&'a dyn NpcOracle>,
        items: Option<&'a dyn ItemOracle>,
    ) -> Self {
        Self {
            supply,
            rewards,
            guarantees,
            npcs,
            items,
        }
    }

    pub fn with_all(
        supply: &'a dyn SupplyOracle,
        rewards: &'a dyn RewardOracle,
        guarantees: &'a dyn GuaranteeOracle,
        npcs: &'a dyn NpcOracle,
        items: &'a dyn ItemOracle,
    ) -> Self {
        Self::new(
            Some(supply),
            Some(rewards),
            Some(guarantees),
            Some(npcs),
            Some(items),
        )
    }

    /// Environment where a single snapshot backs every oracle.
    pub fn from_snapshot(snapshot: &'a TableSnapshot) -> Self {
        Self::with_all(snapshot, snapshot, snapshot, snapshot, snapshot)
    }

    pub fn empty() -> Self {
        Self {
            supply: None,
            rewards: None,
            guarantees: None,
            npcs: None,
            items: None,
        }
    }

    /// Returns the SupplyOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SupplyNotAvailable` if no supply oracle was provided.
    pub fn supply(&self) -> Result<&'a dyn SupplyOracle, OracleError> {
        self.supply.ok_or(OracleError::SupplyNotAvailable)
    }

    /// Returns the RewardOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RewardsNotAvailable` if no reward oracle was provided.
    pub fn rewards(&self) -> Result<&'a dyn RewardOracle, OracleError> {
        self.rewards.ok_or(OracleError::RewardsNotAvailable)
    }

    /// Returns the GuaranteeOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::GuaranteesNotAvailable` if no guarantee oracle was provided.
    pub fn guarantees(&self) -> Result<&'a dyn GuaranteeOracle, OracleError> {
        self.guarantees.ok_or(OracleError::GuaranteesNotAvailable)
    }

    /// Returns the NpcOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::NpcsNotAvailable` if no NPC oracle was provided.
    pub fn npcs(&self) -> Result<&'a dyn NpcOracle, OracleError> {
        self.npcs.ok_or(OracleError::NpcsNotAvailable)
    }

    /// Returns the ItemOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::ItemsNotAvailable` if no item oracle was provided.
    pub fn items(&self) -> Result<&'a dyn ItemOracle, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }
}
