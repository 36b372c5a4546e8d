//! Planning of a delivery run.
//!
//! Planning is pure: it looks at the NPC's remaining turn-ins and the items
//! already held, and lays out the steps the runner will execute.

use std::fmt;

use satisfy_core::{ItemOracle, NpcState, Position};

use super::{SequencerError, SequencerState};
use crate::api::{MoveFlags, TurnInRequest};

/// Arrival distance around the fishing hole centre.
pub const SOURCE_TOLERANCE: f32 = 10.0;
/// Arrival distance around the turn-in NPC.
pub const DELIVERY_TOLERANCE: f32 = 3.0;

/// External action performed by one step.
#[derive(Debug, Clone, PartialEq)]
pub enum StepKind {
    Teleport {
        territory_id: u32,
        position: Position,
    },
    MoveTo {
        position: Position,
        tolerance: f32,
        flags: MoveFlags,
    },
    /// Status only; no external call.
    Fish { spot_id: u32, spearfish: bool },
    TurnIn(TurnInRequest),
}

/// One step of a delivery run.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub state: SequencerState,
    /// Text published while the step runs.
    pub status: String,
    pub kind: StepKind,
}

impl Step {
    fn new(state: SequencerState, status: impl Into<String>, kind: StepKind) -> Self {
        Self {
            state,
            status: status.into(),
            kind,
        }
    }

    /// Whether running this step calls the executor.
    pub fn is_external(&self) -> bool {
        !matches!(self.kind, StepKind::Fish { .. })
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Teleport {
                territory_id,
                position,
            } => write!(f, "teleport to territory {} near {}", territory_id, position),
            Self::MoveTo {
                position,
                tolerance,
                flags,
            } => write!(f, "move to {} (within {}, {:?})", position, tolerance, flags),
            Self::Fish { spot_id, spearfish } => {
                let kind = if *spearfish { "spearfish" } else { "fish" };
                write!(f, "{} at spot {}", kind, spot_id)
            }
            Self::TurnIn(request) => write!(
                f,
                "turn in {}x item {} to npc {} (slot {})",
                request.quantity, request.item_id, request.npc_index, request.slot
            ),
        }
    }
}

/// Lays out the delivery run for `slot` of `npc`.
///
/// With nothing left to turn in the plan is empty. When fewer items are held
/// than remain to be delivered the plan travels to the fishing spot and
/// stops there; otherwise it travels to the NPC and turns in the exact
/// remaining quantity.
///
/// # Errors
///
/// Fails when the NPC lacks fishing or turn-in metadata.
pub fn plan_delivery(
    npc: &NpcState,
    slot: usize,
    held_items: u32,
    items: &dyn ItemOracle,
) -> Result<Vec<Step>, SequencerError> {
    let remaining = npc.remaining_turnins(slot);
    if remaining == 0 {
        return Ok(Vec::new());
    }

    let fish = npc.fish.ok_or(SequencerError::MissingFishData {
        npc_index: npc.index,
    })?;
    let craft = npc.craft.ok_or(SequencerError::MissingCraftData {
        npc_index: npc.index,
    })?;
    let item_name = items.item_label(fish.fish_item_id);

    let missing = remaining.saturating_sub(held_items);
    if missing > 0 {
        let spot = items
            .spot_name(fish.fish_spot_id, fish.is_spearfish)
            .unwrap_or_else(|| format!("spot #{}", fish.fish_spot_id));
        let verb = if fish.is_spearfish {
            "Spearfishing"
        } else {
            "Fishing"
        };

        return Ok(vec![
            Step::new(
                SequencerState::TeleportingToSource,
                "Travelling to fishing spot",
                StepKind::Teleport {
                    territory_id: fish.territory_id,
                    position: fish.center,
                },
            ),
            Step::new(
                SequencerState::MovingToSource,
                format!("{} at {}", verb, spot),
                StepKind::MoveTo {
                    position: fish.center,
                    tolerance: SOURCE_TOLERANCE,
                    flags: MoveFlags::FLY | MoveFlags::MOUNT | MoveFlags::LAND,
                },
            ),
            Step::new(
                SequencerState::Fishing,
                format!("Catch {}x {} at {}", missing, item_name, spot),
                StepKind::Fish {
                    spot_id: fish.fish_spot_id,
                    spearfish: fish.is_spearfish,
                },
            ),
        ]);
    }

    let delivering = format!("Delivering {}x {}", remaining, item_name);
    Ok(vec![
        Step::new(
            SequencerState::TeleportingToDelivery,
            "Travelling to delivery point",
            StepKind::Teleport {
                territory_id: npc.territory_id,
                position: craft.turn_in_location,
            },
        ),
        Step::new(
            SequencerState::MovingToDelivery,
            delivering.clone(),
            StepKind::MoveTo {
                position: craft.turn_in_location,
                tolerance: DELIVERY_TOLERANCE,
                flags: MoveFlags::empty(),
            },
        ),
        Step::new(
            SequencerState::Delivering,
            delivering,
            StepKind::TurnIn(TurnInRequest {
                npc_index: npc.index,
                instance_id: craft.turn_in_instance_id,
                item_id: npc.turn_in_items.get(slot).copied().unwrap_or_default(),
                slot,
                quantity: remaining,
            }),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use satisfy_core::{CraftData, DeliveryConfig, FishData, NpcDefinition, TableSnapshot};

    use super::*;

    const SLOT: usize = DeliveryConfig::FISH_SLOT;

    fn npc() -> NpcState {
        let mut definition = NpcDefinition::simple("Ehll Tou", 6, vec![0, 1]);
        definition.territory_id = 820;
        definition.turn_in_items = [11, 12, 13];
        definition.craft = Some(CraftData {
            turn_in_location: Position::new(1.0, 2.0, 3.0),
            turn_in_instance_id: 77,
        });
        definition.fish = Some(FishData {
            fish_item_id: 500,
            territory_id: 821,
            center: Position::new(-4.0, 0.0, 9.0),
            is_spearfish: false,
            fish_spot_id: 31,
        });
        let mut npc = NpcState::from_definition(4, definition);
        npc.rank = 1;
        npc.used_deliveries = 3;
        npc.requests.extend([0, 1, 2]);
        npc
    }

    fn names() -> TableSnapshot {
        let mut tables = TableSnapshot::new();
        tables.items.items.insert(500, "Deep Velodyna Carp".into());
        tables.items.fishing_spots.insert(31, "Mok Oogl Island".into());
        tables
    }

    #[test]
    fn nothing_remaining_plans_nothing() {
        let mut npc = npc();
        npc.used_deliveries = 6;
        assert!(plan_delivery(&npc, SLOT, 0, &names()).expect("plans").is_empty());

        let mut locked = self::npc();
        locked.fish = None;
        locked.requests.clear();
        assert!(plan_delivery(&locked, SLOT, 0, &names()).expect("plans").is_empty());
    }

    #[test]
    fn missing_items_head_to_fishing_spot() {
        let steps = plan_delivery(&npc(), SLOT, 1, &names()).expect("plans");
        let states: Vec<_> = steps.iter().map(|step| step.state).collect();

        assert_eq!(
            states,
            [
                SequencerState::TeleportingToSource,
                SequencerState::MovingToSource,
                SequencerState::Fishing,
            ]
        );
        assert_eq!(steps[1].status, "Fishing at Mok Oogl Island");
        assert_eq!(steps[2].status, "Catch 2x Deep Velodyna Carp at Mok Oogl Island");
        assert!(!steps[2].is_external());
    }

    #[test]
    fn held_items_are_turned_in_exactly() {
        let steps = plan_delivery(&npc(), SLOT, 5, &names()).expect("plans");

        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].state, SequencerState::TeleportingToDelivery);
        assert_eq!(
            steps[2].kind,
            StepKind::TurnIn(TurnInRequest {
                npc_index: 4,
                instance_id: 77,
                item_id: 13,
                slot: SLOT,
                quantity: 3,
            })
        );
        assert_eq!(steps[2].status, "Delivering 3x Deep Velodyna Carp");
    }

    #[test]
    fn missing_metadata_fails_before_any_step() {
        let mut npc = npc();
        npc.fish = None;
        assert_eq!(
            plan_delivery(&npc, SLOT, 0, &names()).unwrap_err(),
            SequencerError::MissingFishData { npc_index: 4 }
        );

        let mut npc = self::npc();
        npc.craft = None;
        assert_eq!(
            plan_delivery(&npc, SLOT, 0, &names()).unwrap_err(),
            SequencerError::MissingCraftData { npc_index: 4 }
        );
    }
}
