//! Task sequencer for scripted deliveries.
//!
//! A delivery run is planned up front as an ordered list of [`Step`]s and
//! then executed by [`TaskSequencer`], one step at a time, with a
//! cancellation token checked at every suspension point.
//! [`AutomationSlot`] hosts at most one run on the tokio runtime.
mod error;
mod plan;
mod runner;
mod slot;
mod state;

pub use error::SequencerError;
pub use plan::{DELIVERY_TOLERANCE, SOURCE_TOLERANCE, Step, StepKind, plan_delivery};
pub use runner::{SequenceOutcome, TaskSequencer};
pub use slot::AutomationSlot;
pub use state::{SequencerState, SequencerStatus};
