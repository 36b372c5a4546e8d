//! Session orchestrator.
//!
//! The session exclusively owns the delivery state and is its only writer:
//! [`Session::refresh`] rebuilds it from the live reader, everything else
//! reads it. It also hosts the automation slot and the event bus.

use std::sync::Arc;

use satisfy_core::{
    CurrencyView, DeliveryConfig, LiveSnapshot, RefreshPass, SatisfyError, SessionState,
};
use tokio::sync::broadcast;
use tracing::{debug, error, info};

use crate::api::{LiveStateReader, Result, RuntimeError, TravelExecutor};
use crate::events::{Event, EventBus, RefreshEvent, Topic};
use crate::oracle::OracleManager;
use crate::sequencer::{
    AutomationSlot, SequenceOutcome, SequencerError, SequencerStatus, Step, plan_delivery,
};
use crate::visibility::VisibilityTracker;

/// Runtime configuration shared across the session and automation.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub delivery: DeliveryConfig,
    pub event_buffer_size: usize,
    /// Delivery slot the automation works on.
    pub automation_slot: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            delivery: DeliveryConfig::default(),
            event_buffer_size: EventBus::DEFAULT_CAPACITY,
            automation_slot: DeliveryConfig::FISH_SLOT,
        }
    }
}

/// Result of asking the session to start a delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStart {
    Started,
    /// Another run is still in progress; nothing changed.
    AlreadyRunning,
    /// No turn-ins remain; no external call was made.
    NothingToDo,
}

pub struct Session {
    config: RuntimeConfig,
    state: SessionState,
    pass: RefreshPass,
    oracles: OracleManager,
    live: Arc<dyn LiveStateReader>,
    last_live: Option<LiveSnapshot>,
    bus: EventBus,
    automation: AutomationSlot,
    visibility: VisibilityTracker,
}

impl Session {
    /// Create a new session builder
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Reads live values and rebuilds the delivery state.
    ///
    /// On failure the previous state is kept and a
    /// [`RefreshEvent::Failed`] is published.
    pub fn refresh(&mut self) -> Result<()> {
        let live = self.live.snapshot()?;
        let env = self.oracles.as_env();

        if let Err(err) = self.pass.run(&env, &live, &mut self.state) {
            error!(code = err.error_code(), %err, "refresh failed");
            self.bus.publish(Event::Refresh(RefreshEvent::Failed {
                code: err.error_code().to_string(),
                error: err.to_string(),
            }));
            return Err(err.into());
        }

        self.bus.publish(Event::Refresh(RefreshEvent::Refreshed {
            npcs: self.state.npc_count(),
            projections: self.state.rewards.len(),
            guarantee_row: self.state.guarantee_row,
            guarantee_source: self.state.guarantee_source,
        }));
        self.last_live = Some(live);
        Ok(())
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Live values used by the last successful refresh.
    pub fn live(&self) -> Option<&LiveSnapshot> {
        self.last_live.as_ref()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    /// Currency table rows for the current projections.
    pub fn currency_views(&self) -> Vec<CurrencyView> {
        self.state
            .rewards
            .iter()
            .map(|projection| {
                let holding = self
                    .last_live
                    .as_ref()
                    .and_then(|live| live.holding(projection.currency));
                CurrencyView::new(projection, holding)
            })
            .collect()
    }

    /// Plans the delivery of `npc_index` without running it.
    pub fn plan_delivery(&self, npc_index: usize) -> Result<Vec<Step>> {
        let npc = self
            .state
            .npc(npc_index)
            .ok_or(SequencerError::UnknownNpc(npc_index))?;
        let held = npc
            .fish
            .map_or(0, |fish| self.live.inventory_count(fish.fish_item_id));

        Ok(plan_delivery(
            npc,
            self.config.automation_slot,
            held,
            self.oracles.items(),
        )?)
    }

    /// Plans and starts the delivery of `npc_index` on the tokio runtime.
    pub fn start_delivery(
        &mut self,
        npc_index: usize,
        executor: Arc<dyn TravelExecutor>,
    ) -> Result<DeliveryStart> {
        if self.automation.is_running() {
            return Ok(DeliveryStart::AlreadyRunning);
        }

        let steps = self.plan_delivery(npc_index)?;
        if steps.is_empty() {
            debug!(npc = npc_index, "no turn-ins remaining");
            return Ok(DeliveryStart::NothingToDo);
        }

        if self.automation.start(npc_index, steps, executor) {
            Ok(DeliveryStart::Started)
        } else {
            Ok(DeliveryStart::AlreadyRunning)
        }
    }

    pub fn cancel_delivery(&self) {
        if self.automation.is_running() {
            info!("cancelling delivery");
        }
        self.automation.cancel();
    }

    /// Waits for the current delivery run to end.
    pub async fn finish_delivery(&mut self) -> Result<Option<SequenceOutcome>> {
        self.automation.finish().await
    }

    pub fn is_delivering(&self) -> bool {
        self.automation.is_running()
    }

    pub fn automation_status(&self) -> SequencerStatus {
        self.automation.status()
    }

    /// Feeds the last live values to the visibility tracker.
    pub fn observe_visibility(&mut self, auto_show: bool) -> Option<bool> {
        let (loaded, allowance) = self
            .last_live
            .as_ref()
            .map_or((false, 0), |live| (live.player_loaded, live.remaining_allowance));
        self.visibility.observe(loaded, allowance, auto_show)
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.bus.subscribe(topic)
    }
}

/// Builder for [`Session`] with flexible configuration.
pub struct SessionBuilder {
    config: RuntimeConfig,
    oracles: Option<OracleManager>,
    live: Option<Arc<dyn LiveStateReader>>,
}

impl SessionBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            oracles: None,
            live: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set required oracle manager
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Set required live state reader
    pub fn live_reader(mut self, live: Arc<dyn LiveStateReader>) -> Self {
        self.live = Some(live);
        self
    }

    /// Build the session
    ///
    /// The NPC list is sized by the live NPC count, which must match the
    /// static table.
    pub fn build(self) -> Result<Session> {
        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;
        let live = self.live.ok_or(RuntimeError::MissingLiveReader)?;

        let snapshot = live.snapshot()?;
        let state = SessionState::from_oracle(oracles.npcs(), snapshot.npc_count())
            .inspect_err(|err| error!(%err, "session initialization failed"))
            .map_err(RuntimeError::InitialState)?;

        let bus = EventBus::with_capacity(self.config.event_buffer_size);
        info!(npcs = state.npc_count(), "session initialized");

        Ok(Session {
            pass: RefreshPass::new(self.config.delivery.clone()),
            automation: AutomationSlot::new(bus.clone()),
            config: self.config,
            state,
            oracles,
            live,
            last_live: None,
            bus,
            visibility: VisibilityTracker::new(),
        })
    }
}
