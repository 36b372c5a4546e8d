//! Weekly bonus guarantee selection.
//!
//! The game picks one guarantee row per week. When the live indicator is
//! still undetermined the row is recomputed from the weekly period, using the
//! same generator as the request draw.

use tracing::debug;

use crate::config::DeliveryConfig;
use crate::env::{GuaranteeOracle, GuaranteeRow, Xorshift128};
use crate::state::{GuaranteeSource, LiveSnapshot, SlotFlags};

/// Index of the week containing `server_time`, shifted by
/// `time_adjustment` hours. `None` before the weekly reset anchor.
pub fn guarantee_period(server_time: i64, time_adjustment: i32) -> Option<u32> {
    let adjusted = server_time
        .checked_add(i64::from(time_adjustment) * 3600)?
        .checked_sub(DeliveryConfig::GUARANTEE_EPOCH)?;
    if adjusted < 0 {
        return None;
    }
    u32::try_from(adjusted / DeliveryConfig::SECONDS_PER_WEEK).ok()
}

/// Guarantee row drawn for `period`; `None` when the table is empty.
pub fn calculate_guarantee_row(period: u32, row_count: u32) -> Option<u32> {
    if row_count == 0 {
        return None;
    }
    Some(Xorshift128::new(period).next_u32() % row_count)
}

/// Active guarantee row and where it came from.
pub fn resolve_guarantee_row(
    live: &LiveSnapshot,
    guarantees: &dyn GuaranteeOracle,
) -> (Option<u32>, GuaranteeSource) {
    if let Some(row) = live.guarantee_row() {
        return (Some(row), GuaranteeSource::Live);
    }

    let computed = guarantee_period(live.server_time, live.time_adjustment)
        .and_then(|period| calculate_guarantee_row(period, guarantees.row_count()));
    debug!(?computed, "guarantee row undetermined, recomputed");

    match computed {
        Some(row) => (Some(row), GuaranteeSource::Computed),
        None => (None, GuaranteeSource::Undetermined),
    }
}

/// Slots of one NPC forced to bonus by the guarantee row.
///
/// Only NPCs at the guarantee rank take part; static bonus flags never
/// contribute here.
pub fn override_flags(
    row: Option<&GuaranteeRow>,
    npc_index: usize,
    rank: u8,
    config: &DeliveryConfig,
) -> SlotFlags {
    let mut flags = [false; DeliveryConfig::SLOT_COUNT];
    let Some(row) = row else {
        return flags;
    };
    if rank != config.guarantee_rank {
        return flags;
    }

    for (slot, flag) in flags.iter_mut().enumerate() {
        *flag = row.covers(npc_index, slot);
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::TableSnapshot;

    const WEEK: i64 = DeliveryConfig::SECONDS_PER_WEEK;
    const EPOCH: i64 = DeliveryConfig::GUARANTEE_EPOCH;

    #[test]
    fn period_counts_whole_weeks_from_anchor() {
        assert_eq!(guarantee_period(EPOCH, 0), Some(0));
        assert_eq!(guarantee_period(EPOCH + WEEK - 1, 0), Some(0));
        assert_eq!(guarantee_period(EPOCH + WEEK, 0), Some(1));
        assert_eq!(guarantee_period(EPOCH - 1, 0), None);
    }

    #[test]
    fn time_adjustment_shifts_by_hours() {
        assert_eq!(guarantee_period(EPOCH + WEEK - 3600, 1), Some(1));
        assert_eq!(guarantee_period(EPOCH, -1), None);
    }

    #[test]
    fn row_is_none_for_empty_table() {
        assert_eq!(calculate_guarantee_row(10, 0), None);
        let row = calculate_guarantee_row(10, 7).expect("non-empty table");
        assert!(row < 7);
        assert_eq!(calculate_guarantee_row(10, 7), Some(row));
    }

    #[test]
    fn live_row_wins_over_computation() {
        let tables = TableSnapshot::new().with_guarantee(GuaranteeRow::default());
        let live = LiveSnapshot {
            guarantee_row: 3,
            ..LiveSnapshot::default()
        };
        assert_eq!(
            resolve_guarantee_row(&live, &tables),
            (Some(3), GuaranteeSource::Live)
        );
    }

    #[test]
    fn undetermined_row_is_recomputed() {
        let tables = TableSnapshot::new()
            .with_guarantee(GuaranteeRow::default())
            .with_guarantee(GuaranteeRow::default());
        let live = LiveSnapshot {
            guarantee_row: DeliveryConfig::GUARANTEE_UNDETERMINED,
            server_time: EPOCH + 5 * WEEK,
            ..LiveSnapshot::default()
        };
        let (row, source) = resolve_guarantee_row(&live, &tables);
        assert_eq!(source, GuaranteeSource::Computed);
        assert_eq!(row, calculate_guarantee_row(5, 2));
    }

    #[test]
    fn overrides_require_guarantee_rank() {
        let row = GuaranteeRow {
            slots: [[2, 0], [0, 0], [1, 2]],
        };
        let config = DeliveryConfig::default();

        assert_eq!(override_flags(Some(&row), 1, 5, &config), [true, false, true]);
        assert_eq!(override_flags(Some(&row), 1, 4, &config), [false; 3]);
        assert_eq!(override_flags(None, 1, 5, &config), [false; 3]);
        assert_eq!(override_flags(Some(&row), 0, 5, &config), [false, false, true]);
    }
}
