//! Runtime wrappers around static game table oracles.
//!
//! The [`OracleManager`] bundles shared oracle implementations so the
//! session can build [`satisfy_core::TableEnv`] views on demand. The data is
//! immutable at runtime; dynamic state lives in
//! [`satisfy_core::SessionState`].

use std::sync::Arc;

use satisfy_core::{
    GuaranteeOracle, ItemOracle, NpcOracle, RewardOracle, SupplyOracle, TableEnv, TableSnapshot,
};

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) supply: Arc<dyn SupplyOracle>,
    pub(crate) rewards: Arc<dyn RewardOracle>,
    pub(crate) guarantees: Arc<dyn GuaranteeOracle>,
    pub(crate) npcs: Arc<dyn NpcOracle>,
    pub(crate) items: Arc<dyn ItemOracle>,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(
        supply: Arc<dyn SupplyOracle>,
        rewards: Arc<dyn RewardOracle>,
        guarantees: Arc<dyn GuaranteeOracle>,
        npcs: Arc<dyn NpcOracle>,
        items: Arc<dyn ItemOracle>,
    ) -> Self {
        Self {
            supply,
            rewards,
            guarantees,
            npcs,
            items,
        }
    }

    /// Oracle manager where one snapshot backs every table.
    pub fn from_snapshot(snapshot: TableSnapshot) -> Self {
        let snapshot = Arc::new(snapshot);
        Self::new(
            snapshot.clone(),
            snapshot.clone(),
            snapshot.clone(),
            snapshot.clone(),
            snapshot,
        )
    }

    /// Borrows the oracles as a [`TableEnv`] for satisfy-core.
    pub fn as_env(&self) -> TableEnv<'_> {
        TableEnv::with_all(
            self.supply.as_ref(),
            self.rewards.as_ref(),
            self.guarantees.as_ref(),
            self.npcs.as_ref(),
            self.items.as_ref(),
        )
    }

    pub fn npcs(&self) -> &dyn NpcOracle {
        self.npcs.as_ref()
    }

    pub fn items(&self) -> &dyn ItemOracle {
        self.items.as_ref()
    }
}
