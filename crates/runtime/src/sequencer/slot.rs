//! Background slot running at most one delivery at a time.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::{SequenceOutcome, SequencerError, SequencerStatus, Step, TaskSequencer};
use crate::api::{Result, RuntimeError, TravelExecutor};
use crate::events::{AutomationEvent, Event, EventBus};

struct RunningTask {
    npc_index: usize,
    cancel: CancellationToken,
    handle: JoinHandle<std::result::Result<SequenceOutcome, SequencerError>>,
}

/// Owns the automation task and its observable status.
pub struct AutomationSlot {
    status: Arc<watch::Sender<SequencerStatus>>,
    running: Option<RunningTask>,
    bus: EventBus,
}

impl AutomationSlot {
    pub fn new(bus: EventBus) -> Self {
        let (status, _) = watch::channel(SequencerStatus::default());
        Self {
            status: Arc::new(status),
            running: None,
            bus,
        }
    }

    /// Spawns a run of `steps` unless one is still in progress.
    ///
    /// Returns whether a new run began. Must be called inside a tokio
    /// runtime.
    pub fn start(
        &mut self,
        npc_index: usize,
        steps: Vec<Step>,
        executor: Arc<dyn TravelExecutor>,
    ) -> bool {
        if let Some(task) = self.running.as_ref().filter(|task| !task.handle.is_finished()) {
            debug!(running = task.npc_index, requested = npc_index, "automation already running");
            return false;
        }

        info!(npc = npc_index, steps = steps.len(), "starting delivery");
        self.bus.publish(Event::Automation(AutomationEvent::Started {
            npc_index,
            steps: steps.len(),
        }));

        let cancel = CancellationToken::new();
        let sequencer = TaskSequencer::new(npc_index, Arc::clone(&self.status), self.bus.clone());
        let token = cancel.clone();
        let handle = tokio::spawn(async move { sequencer.run(steps, executor.as_ref(), &token).await });

        self.running = Some(RunningTask {
            npc_index,
            cancel,
            handle,
        });
        true
    }

    /// Requests cancellation of the current run, if any.
    pub fn cancel(&self) {
        if let Some(task) = &self.running {
            task.cancel.cancel();
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
            .as_ref()
            .is_some_and(|task| !task.handle.is_finished())
    }

    pub fn status(&self) -> SequencerStatus {
        self.status.borrow().clone()
    }

    /// Waits for the current run; `None` when nothing was started.
    pub async fn finish(&mut self) -> Result<Option<SequenceOutcome>> {
        let Some(task) = self.running.take() else {
            return Ok(None);
        };
        let outcome = task.handle.await.map_err(RuntimeError::WorkerJoin)??;
        Ok(Some(outcome))
    }
}

impl Drop for AutomationSlot {
    fn drop(&mut self) {
        self.cancel();
    }
}
