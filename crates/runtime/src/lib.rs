//! Runtime orchestration for the delivery tracker.
//!
//! This crate wires together live game access, oracle access, the refresh
//! pass and the delivery automation into a cohesive session API. Consumers
//! embed [`Session`] to refresh the delivery board, subscribe to events, and
//! start scripted deliveries.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session and its builder
//! - [`api`] exposes the traits and errors downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`sequencer`] plans and executes cancellable delivery runs
//! - [`oracle`] bundles the static table oracles
//! - [`visibility`] decides when the delivery window opens
pub mod api;
pub mod events;
pub mod oracle;
pub mod sequencer;
pub mod session;
pub mod visibility;

pub use api::{
    ExecutorError, LiveStateError, LiveStateReader, MoveFlags, Result, RuntimeError,
    TravelExecutor, TurnInRequest,
};
pub use events::{AutomationEvent, Event, EventBus, RefreshEvent, Topic};
pub use oracle::OracleManager;
pub use sequencer::{
    AutomationSlot, SequenceOutcome, SequencerError, SequencerState, SequencerStatus, Step,
    StepKind, TaskSequencer, plan_delivery,
};
pub use session::{DeliveryStart, RuntimeConfig, Session, SessionBuilder};
pub use visibility::VisibilityTracker;
