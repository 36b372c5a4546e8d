//! Captured live state and a logging executor for offline runs.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use async_trait::async_trait;
use satisfy_core::{LiveSnapshot, Position};
use satisfy_runtime::{
    ExecutorError, LiveStateError, LiveStateReader, MoveFlags, TravelExecutor, TurnInRequest,
};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Live values captured from the game at one point in time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveCapture {
    pub snapshot: LiveSnapshot,
    /// Item id to held count.
    pub inventory: BTreeMap<u32, u32>,
}

impl LiveCapture {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read capture: {}", path.display()))?;
        ron::from_str(&text).with_context(|| format!("Failed to parse capture: {}", path.display()))
    }
}

/// Live state reader replaying a capture.
#[derive(Debug, Clone)]
pub struct CaptureReader {
    capture: LiveCapture,
}

impl CaptureReader {
    pub fn new(capture: LiveCapture) -> Self {
        Self { capture }
    }

    pub fn load(path: &Path) -> Result<Self> {
        LiveCapture::load(path).map(Self::new)
    }
}

impl LiveStateReader for CaptureReader {
    fn snapshot(&self) -> Result<LiveSnapshot, LiveStateError> {
        Ok(self.capture.snapshot.clone())
    }

    fn inventory_count(&self, item_id: u32) -> u32 {
        self.capture
            .inventory
            .get(&item_id)
            .copied()
            .unwrap_or_default()
    }
}

/// Executor that logs every action and completes it at once.
#[derive(Debug, Default)]
pub struct DryRunExecutor {
    actions: Mutex<Vec<String>>,
}

impl DryRunExecutor {
    /// Actions performed so far, in order.
    pub fn actions(&self) -> Vec<String> {
        self.actions
            .lock()
            .map(|actions| actions.clone())
            .unwrap_or_default()
    }

    fn record(&self, action: String) {
        info!("dry run: {}", action);
        if let Ok(mut actions) = self.actions.lock() {
            actions.push(action);
        }
    }
}

#[async_trait]
impl TravelExecutor for DryRunExecutor {
    async fn teleport_to(&self, territory_id: u32, position: Position) -> Result<(), ExecutorError> {
        self.record(format!("teleport to territory {} near {}", territory_id, position));
        Ok(())
    }

    async fn move_to(
        &self,
        position: Position,
        tolerance: f32,
        flags: MoveFlags,
    ) -> Result<(), ExecutorError> {
        self.record(format!("move to {} within {} ({:?})", position, tolerance, flags));
        Ok(())
    }

    async fn turn_in(&self, request: TurnInRequest) -> Result<(), ExecutorError> {
        self.record(format!(
            "turn in {}x item {} at npc {}",
            request.quantity, request.item_id, request.npc_index
        ));
        Ok(())
    }
}
