//! Shared fixtures: the shipped data set, a scripted live reader and a
//! recording executor.
#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use satisfy_content::ContentFactory;
use satisfy_core::{CurrencyHolding, DeliveryConfig, LiveSnapshot, Position, TableSnapshot};
use satisfy_runtime::{
    ExecutorError, LiveStateError, LiveStateReader, MoveFlags, OracleManager, Session,
    TravelExecutor, TurnInRequest,
};
use tokio::sync::Notify;

pub const SEED: u32 = 0x3A5F_10C2;
/// Fish caught for the first NPC's fishing slot.
pub const FISH_ITEM: u32 = 10206;

pub fn tables() -> TableSnapshot {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../game/content/data");
    ContentFactory::new(dir)
        .load_snapshot()
        .expect("shipped data set loads")
}

/// Three NPCs: one at guarantee rank with deliveries left, one done for the
/// week, one still locked.
pub fn live() -> LiveSnapshot {
    LiveSnapshot {
        player_loaded: true,
        ranks: vec![5, 3, 0],
        used_deliveries: vec![2, 6, 0],
        supply_seed: SEED,
        guarantee_row: DeliveryConfig::GUARANTEE_UNDETERMINED,
        time_adjustment: 0,
        server_time: 1_700_000_000,
        remaining_allowance: 12,
        holdings: vec![
            CurrencyHolding {
                currency: 2,
                count: 3_900,
                max: 4_000,
            },
            CurrencyHolding {
                currency: 4,
                count: 100,
                max: 4_000,
            },
        ],
    }
}

/// Live reader returning a replaceable snapshot and fixed inventory.
pub struct ScriptedLive {
    pub snapshot: Mutex<LiveSnapshot>,
    pub inventory: HashMap<u32, u32>,
    /// When set, snapshots fail as if the game went away.
    pub offline: AtomicBool,
}

impl ScriptedLive {
    pub fn new(snapshot: LiveSnapshot) -> Self {
        Self {
            snapshot: Mutex::new(snapshot),
            inventory: HashMap::new(),
            offline: AtomicBool::new(false),
        }
    }

    pub fn with_item(mut self, item_id: u32, count: u32) -> Self {
        self.inventory.insert(item_id, count);
        self
    }
}

impl LiveStateReader for ScriptedLive {
    fn snapshot(&self) -> Result<LiveSnapshot, LiveStateError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(LiveStateError::Unavailable("game client closed".into()));
        }
        Ok(self.snapshot.lock().expect("lock").clone())
    }

    fn inventory_count(&self, item_id: u32) -> u32 {
        self.inventory.get(&item_id).copied().unwrap_or_default()
    }
}

pub fn session(live: ScriptedLive) -> Session {
    Session::builder()
        .oracles(OracleManager::from_snapshot(tables()))
        .live_reader(Arc::new(live))
        .build()
        .expect("session builds")
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Teleport(u32),
    MoveTo(f32, MoveFlags),
    TurnIn(TurnInRequest),
}

/// Executor recording every call. Teleports can be held until released and
/// movement can be made to fail.
#[derive(Default)]
pub struct RecordingExecutor {
    pub calls: Mutex<Vec<Call>>,
    pub hold_teleport: bool,
    pub fail_move: bool,
    pub release: Notify,
    pub teleport_started: Notify,
}

impl RecordingExecutor {
    pub fn holding() -> Self {
        Self {
            hold_teleport: true,
            ..Self::default()
        }
    }

    pub fn failing_move() -> Self {
        Self {
            fail_move: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("lock").clone()
    }
}

#[async_trait]
impl TravelExecutor for RecordingExecutor {
    async fn teleport_to(&self, territory_id: u32, _position: Position) -> Result<(), ExecutorError> {
        self.calls.lock().expect("lock").push(Call::Teleport(territory_id));
        self.teleport_started.notify_one();
        if self.hold_teleport {
            self.release.notified().await;
        }
        Ok(())
    }

    async fn move_to(
        &self,
        _position: Position,
        tolerance: f32,
        flags: MoveFlags,
    ) -> Result<(), ExecutorError> {
        self.calls.lock().expect("lock").push(Call::MoveTo(tolerance, flags));
        if self.fail_move {
            return Err(ExecutorError::Movement("path blocked".into()));
        }
        Ok(())
    }

    async fn turn_in(&self, request: TurnInRequest) -> Result<(), ExecutorError> {
        self.calls.lock().expect("lock").push(Call::TurnIn(request));
        Ok(())
    }
}
