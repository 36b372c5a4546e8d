//! The refresh pass: rebuilds every mutable field of [`SessionState`] from
//! live game values and the static tables.

use tracing::{debug, error};

use super::aggregate::RewardAccumulator;
use super::guarantee::{override_flags, resolve_guarantee_row};
use super::requests::{requests_in_rows, supply_rows};
use super::resolver::resolve_in_rows;
use super::RefreshError;
use crate::config::DeliveryConfig;
use crate::env::{GuaranteeRow, OracleError, RewardOracle, SupplyOracle, TableEnv};
use crate::state::{InitializationError, LiveSnapshot, NpcState, SessionState};

/// Single writer of [`SessionState`].
///
/// The pass is deterministic: running it twice on unchanged input yields an
/// identical state. On error the state keeps its previous contents.
#[derive(Clone, Debug, Default)]
pub struct RefreshPass {
    config: DeliveryConfig,
}

impl RefreshPass {
    pub fn new(config: DeliveryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DeliveryConfig {
        &self.config
    }

    /// Recomputes requests, bonus flags, rewards and projections.
    ///
    /// # Errors
    ///
    /// Returns [`RefreshError`] on live/static mismatches and table lookup
    /// misses. Nothing is written in that case.
    pub fn run(
        &self,
        env: &TableEnv<'_>,
        live: &LiveSnapshot,
        state: &mut SessionState,
    ) -> Result<(), RefreshError> {
        let npc_count = state.npcs.len();
        check_len("ranks", live.ranks.len(), npc_count)?;
        check_len("used_deliveries", live.used_deliveries.len(), npc_count)?;

        let supply = env.supply()?;
        let rewards = env.rewards()?;
        let guarantees = env.guarantees()?;

        let (guarantee_id, guarantee_source) = resolve_guarantee_row(live, guarantees);
        let guarantee = guarantee_id
            .map(|id| {
                guarantees
                    .row(id)
                    .ok_or(OracleError::GuaranteeRowNotFound(id))
            })
            .transpose()?;

        let mut npcs = state.npcs.clone();
        let mut accumulator = RewardAccumulator::new();
        for npc in &mut npcs {
            let rank = live.ranks[npc.index];
            let used = live.used_deliveries[npc.index];
            self.refresh_npc(
                npc,
                rank,
                used,
                live.supply_seed,
                guarantee.as_ref(),
                supply,
                rewards,
                &mut accumulator,
            )
            .inspect_err(|err| error!(npc = npc.index, name = %npc.name, %err, "refresh failed"))?;
        }

        state.npcs = npcs;
        state.rewards = accumulator.finish(live.remaining_allowance);
        state.guarantee_row = guarantee_id;
        state.guarantee_source = guarantee_source;

        debug!(
            npcs = npc_count,
            seed = live.supply_seed,
            guarantee = ?state.guarantee_row,
            source = ?state.guarantee_source,
            projections = state.rewards.len(),
            "refreshed delivery state"
        );
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn refresh_npc(
        &self,
        npc: &mut NpcState,
        rank: u8,
        used: u8,
        seed: u32,
        guarantee: Option<&GuaranteeRow>,
        supply: &dyn SupplyOracle,
        rewards: &dyn RewardOracle,
        accumulator: &mut RewardAccumulator,
    ) -> Result<(), RefreshError> {
        if used > npc.max_deliveries {
            return Err(InitializationError::DeliveriesExceeded {
                npc: npc.index,
                used,
                max: npc.max_deliveries,
            }
            .into());
        }

        npc.clear_slots();
        npc.rank = rank;
        npc.used_deliveries = used;
        npc.is_bonus_override = override_flags(guarantee, npc.index, rank, &self.config);

        if !npc.is_unlocked() {
            return Ok(());
        }

        let supply_id = npc.supply_id().ok_or(InitializationError::RankOutOfRange {
            npc: npc.index,
            rank,
            ranks: npc.supply_ids.len(),
        })?;
        let rows = supply_rows(supply, supply_id)?;
        npc.requests = requests_in_rows(&rows, supply_id, seed)?;

        let remaining = npc.remaining_deliveries();
        for (slot, &subrow) in npc.requests.iter().enumerate() {
            let resolved = resolve_in_rows(
                &rows,
                rewards,
                supply_id,
                subrow,
                npc.is_bonus_override[slot],
            )?;
            npc.is_bonus_effective[slot] = resolved.is_bonus_effective;
            npc.rewards[slot] = resolved.reward_id;

            for entry in resolved.row.entries.iter().filter(|entry| !entry.is_empty()) {
                accumulator.add(
                    entry.currency,
                    resolved.row.projected_amount(entry),
                    remaining,
                );
            }
        }

        Ok(())
    }
}

fn check_len(field: &'static str, len: usize, expected: usize) -> Result<(), InitializationError> {
    if len < expected {
        return Err(InitializationError::LiveArrayTooShort {
            field,
            len,
            expected,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{NpcDefinition, RewardEntry, RewardRow, SupplyRow, TableSnapshot};
    use crate::state::RewardProjection;

    fn supply_row(slot: u8, probability_percent: u8, reward_id: u32, is_bonus: bool) -> SupplyRow {
        SupplyRow {
            item_id: 2000 + reward_id,
            slot,
            probability_percent,
            reward_id,
            is_bonus,
        }
    }

    fn reward(entries: [(u32, u32); 2]) -> RewardRow {
        RewardRow {
            entries: entries.map(|(currency, quantity)| RewardEntry { currency, quantity }),
            percent_scalar: 100,
        }
    }

    fn tables() -> TableSnapshot {
        // Bonus rows carry no weight, so the draw always lands on the first
        // candidate of each slot.
        TableSnapshot::new()
            .with_supply(
                100,
                vec![
                    supply_row(1, 100, 10, false),
                    supply_row(1, 0, 11, true),
                    supply_row(2, 100, 20, false),
                    supply_row(3, 100, 30, false),
                ],
            )
            .with_reward(10, reward([(1, 100), (0, 0)]))
            .with_reward(11, reward([(1, 150), (0, 0)]))
            .with_reward(20, reward([(1, 100), (2, 40)]))
            .with_reward(30, reward([(2, 60), (0, 0)]))
            .with_guarantee(GuaranteeRow {
                slots: [[1, 0], [0, 0], [0, 0]],
            })
            .with_npc(NpcDefinition::simple("Anden", 6, vec![0, 100, 100, 100, 100, 100]))
            .with_npc(NpcDefinition::simple("Margrat", 6, vec![0, 100]))
    }

    fn live() -> LiveSnapshot {
        LiveSnapshot {
            player_loaded: true,
            ranks: vec![5, 0],
            used_deliveries: vec![2, 0],
            supply_seed: 0xDEAD_BEEF,
            guarantee_row: 0,
            remaining_allowance: 10,
            ..LiveSnapshot::default()
        }
    }

    fn refreshed() -> (TableSnapshot, SessionState) {
        let tables = tables();
        let mut state = SessionState::from_oracle(&tables, 2).expect("counts match");
        RefreshPass::default()
            .run(&TableEnv::from_snapshot(&tables), &live(), &mut state)
            .expect("refresh succeeds");
        (tables, state)
    }

    #[test]
    fn guaranteed_slot_pays_bonus_row() {
        let (_, state) = refreshed();
        let npc = &state.npcs[0];

        assert_eq!(npc.requests.as_slice(), &[0, 2, 3]);
        assert_eq!(npc.is_bonus_override, [true, false, false]);
        assert_eq!(npc.is_bonus_effective, [true, false, false]);
        assert_eq!(npc.rewards, [11, 20, 30]);
        assert_eq!(state.guarantee_source, crate::state::GuaranteeSource::Live);
    }

    #[test]
    fn locked_npc_has_no_slots() {
        let (_, state) = refreshed();
        let npc = &state.npcs[1];

        assert!(npc.requests.is_empty());
        assert_eq!(npc.rewards, [0; 3]);
        assert_eq!(npc.is_bonus_effective, [false; 3]);
    }

    #[test]
    fn projections_merge_per_currency() {
        let (_, state) = refreshed();
        assert_eq!(
            state.rewards,
            vec![
                RewardProjection::new(1, 150, 8),
                RewardProjection::new(2, 60, 8),
            ]
        );
    }

    #[test]
    fn second_run_changes_nothing() {
        let (tables, state) = refreshed();
        let mut again = state.clone();
        RefreshPass::default()
            .run(&TableEnv::from_snapshot(&tables), &live(), &mut again)
            .expect("refresh succeeds");
        assert_eq!(state, again);
    }

    #[test]
    fn failures_leave_state_untouched() {
        let (tables, state) = refreshed();
        let mut failed = state.clone();
        let live = LiveSnapshot {
            used_deliveries: vec![7, 0],
            ..live()
        };

        let err = RefreshPass::default()
            .run(&TableEnv::from_snapshot(&tables), &live, &mut failed)
            .unwrap_err();
        assert_eq!(
            err,
            RefreshError::Initialization(InitializationError::DeliveriesExceeded {
                npc: 0,
                used: 7,
                max: 6
            })
        );
        assert_eq!(failed, state);
    }

    #[test]
    fn short_live_arrays_are_rejected() {
        let tables = tables();
        let mut state = SessionState::from_oracle(&tables, 2).expect("counts match");
        let live = LiveSnapshot {
            ranks: vec![5],
            ..live()
        };
        let err = RefreshPass::default()
            .run(&TableEnv::from_snapshot(&tables), &live, &mut state)
            .unwrap_err();
        assert!(matches!(
            err,
            RefreshError::Initialization(InitializationError::LiveArrayTooShort { field: "ranks", .. })
        ));
    }

    #[test]
    fn rank_beyond_supply_tables_is_rejected() {
        let tables = tables();
        let mut state = SessionState::from_oracle(&tables, 2).expect("counts match");
        let live = LiveSnapshot {
            ranks: vec![5, 3],
            ..live()
        };
        let err = RefreshPass::default()
            .run(&TableEnv::from_snapshot(&tables), &live, &mut state)
            .unwrap_err();
        assert_eq!(
            err,
            RefreshError::Initialization(InitializationError::RankOutOfRange {
                npc: 1,
                rank: 3,
                ranks: 2
            })
        );
    }

    #[test]
    fn missing_oracle_is_reported() {
        let tables = tables();
        let mut state = SessionState::from_oracle(&tables, 2).expect("counts match");
        let err = RefreshPass::default()
            .run(&TableEnv::empty(), &live(), &mut state)
            .unwrap_err();
        assert_eq!(err, RefreshError::Oracle(OracleError::SupplyNotAvailable));
    }
}
