//! Step-by-step execution of a delivery plan.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use super::{SequencerError, SequencerState, SequencerStatus, Step, StepKind};
use crate::api::{ExecutorError, TravelExecutor};
use crate::events::{AutomationEvent, Event, EventBus};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequenceOutcome {
    Completed,
    Cancelled,
}

/// Executes plans one step at a time.
///
/// Every step publishes its status before it starts. Cancellation is
/// checked before each step and raced against every suspension; actions
/// that already completed are not undone.
#[derive(Clone)]
pub struct TaskSequencer {
    npc_index: usize,
    status: Arc<watch::Sender<SequencerStatus>>,
    bus: EventBus,
}

impl TaskSequencer {
    pub fn new(npc_index: usize, status: Arc<watch::Sender<SequencerStatus>>, bus: EventBus) -> Self {
        Self {
            npc_index,
            status,
            bus,
        }
    }

    pub async fn run(
        &self,
        steps: Vec<Step>,
        executor: &dyn TravelExecutor,
        cancel: &CancellationToken,
    ) -> Result<SequenceOutcome, SequencerError> {
        for step in steps {
            if cancel.is_cancelled() {
                return Ok(self.cancelled(step.state));
            }

            info!(npc = self.npc_index, state = %step.state, "{}", step.status);
            self.publish(SequencerStatus::new(step.state, step.status.clone()));
            self.bus.publish(Event::Automation(AutomationEvent::StepStarted {
                npc_index: self.npc_index,
                state: step.state,
                status: step.status.clone(),
            }));

            let result = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Ok(self.cancelled(step.state)),
                result = execute_step(executor, &step.kind) => result,
            };

            if let Err(source) = result {
                warn!(npc = self.npc_index, state = %step.state, error = %source, "step failed");
                self.publish(SequencerStatus::idle(format!("Failed: {}", source)));
                self.bus.publish(Event::Automation(AutomationEvent::Failed {
                    npc_index: self.npc_index,
                    state: step.state,
                    error: source.to_string(),
                }));
                return Err(SequencerError::Executor {
                    state: step.state,
                    source,
                });
            }
        }

        self.publish(SequencerStatus::idle("Done"));
        self.bus.publish(Event::Automation(AutomationEvent::Finished {
            npc_index: self.npc_index,
            outcome: SequenceOutcome::Completed,
        }));
        Ok(SequenceOutcome::Completed)
    }

    fn cancelled(&self, state: SequencerState) -> SequenceOutcome {
        info!(npc = self.npc_index, %state, "delivery cancelled");
        self.publish(SequencerStatus::idle("Cancelled"));
        self.bus.publish(Event::Automation(AutomationEvent::Finished {
            npc_index: self.npc_index,
            outcome: SequenceOutcome::Cancelled,
        }));
        SequenceOutcome::Cancelled
    }

    fn publish(&self, status: SequencerStatus) {
        // A dropped receiver only means nobody watches the status.
        self.status.send_replace(status);
    }
}

async fn execute_step(executor: &dyn TravelExecutor, kind: &StepKind) -> Result<(), ExecutorError> {
    match kind {
        StepKind::Teleport {
            territory_id,
            position,
        } => executor.teleport_to(*territory_id, *position).await,
        StepKind::MoveTo {
            position,
            tolerance,
            flags,
        } => executor.move_to(*position, *tolerance, *flags).await,
        StepKind::Fish { .. } => Ok(()),
        StepKind::TurnIn(request) => executor.turn_in(*request).await,
    }
}
