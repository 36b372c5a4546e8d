//! Builds the session, oracles, and settings bundle used by front-ends.
use std::sync::Arc;

use anyhow::{Context, Result};
use satisfy_runtime::{LiveStateReader, Session};
use tracing::warn;

use crate::config::ClientConfig;
use crate::oracles::{ContentOracleFactory, OracleFactory};
use crate::settings::Settings;

/// Builder that assembles session state, oracles, and settings for clients.
pub struct RuntimeBuilder {
    config: ClientConfig,
    oracle_factory: Arc<dyn OracleFactory>,
    live: Option<Arc<dyn LiveStateReader>>,
}

impl RuntimeBuilder {
    pub fn new(config: ClientConfig) -> Self {
        let default_factory = ContentOracleFactory::from_config(&config);
        Self {
            config,
            oracle_factory: Arc::new(default_factory),
            live: None,
        }
    }

    /// Provide a custom oracle factory (e.g., in-memory tables).
    pub fn oracle_factory(mut self, factory: impl OracleFactory + 'static) -> Self {
        self.oracle_factory = Arc::new(factory);
        self
    }

    pub fn live_reader(mut self, live: Arc<dyn LiveStateReader>) -> Self {
        self.live = Some(live);
        self
    }

    /// Loads settings and tables, then builds the session.
    ///
    /// Unreadable settings are logged and replaced by the defaults.
    pub fn build(self) -> Result<RuntimeSetup> {
        let settings_path = self.config.settings_path();
        let settings = Settings::load(&settings_path).unwrap_or_else(|err| {
            warn!(path = %settings_path.display(), "falling back to default settings: {:#}", err);
            Settings::default()
        });

        let oracles = self.oracle_factory.build()?;
        let live = self.live.context("live state reader not configured")?;

        let session = Session::builder()
            .config(self.config.runtime_config())
            .oracles(oracles)
            .live_reader(live)
            .build()?;

        Ok(RuntimeSetup {
            config: self.config,
            settings,
            session,
        })
    }
}

pub struct RuntimeSetup {
    pub config: ClientConfig,
    pub settings: Settings,
    pub session: Session,
}
