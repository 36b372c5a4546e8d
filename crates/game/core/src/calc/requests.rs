//! Reconstruction of the items each NPC requests this week.

use tracing::trace;

use crate::config::DeliveryConfig;
use crate::env::{OracleError, SupplyOracle, SupplyRow, Xorshift128, request_seed};
use crate::state::RequestedSlots;

/// Reads every subrow of a supply table in order.
///
/// # Errors
///
/// Fails when the table or one of its subrows is missing.
pub fn supply_rows(supply: &dyn SupplyOracle, supply_id: u32) -> Result<Vec<SupplyRow>, OracleError> {
    let count = supply
        .subrow_count(supply_id)
        .ok_or(OracleError::SupplyTableNotFound(supply_id))?;

    (0..count)
        .map(|subrow| {
            supply
                .row(supply_id, subrow)
                .ok_or(OracleError::SupplyRowNotFound { supply_id, subrow })
        })
        .collect()
}

/// Subrows requested for every delivery slot, in slot order.
///
/// One roll in `0..100` is drawn per slot; the candidates of that slot are
/// walked in subrow order, accumulating their probabilities, and the first
/// whose running total exceeds the roll wins. When the weights sum below the
/// roll the last candidate is taken.
///
/// # Errors
///
/// Fails on a missing table or subrow, and with [`OracleError::EmptySlot`]
/// when a slot has no candidate at all.
pub fn requested_slots(
    supply: &dyn SupplyOracle,
    supply_id: u32,
    seed: u32,
) -> Result<RequestedSlots, OracleError> {
    let rows = supply_rows(supply, supply_id)?;
    requests_in_rows(&rows, supply_id, seed)
}

/// Same as [`requested_slots`] over an already loaded supply table.
///
/// # Errors
///
/// Fails with [`OracleError::EmptySlot`] when a slot has no candidate.
pub fn requests_in_rows(
    rows: &[SupplyRow],
    supply_id: u32,
    seed: u32,
) -> Result<RequestedSlots, OracleError> {
    let mut rng = Xorshift128::new(request_seed(seed, supply_id));
    let mut requests = RequestedSlots::new();

    for slot in 1..=DeliveryConfig::SLOT_COUNT as u8 {
        let roll = rng.next_below(100);
        let subrow = pick_subrow(rows, slot, roll)
            .ok_or(OracleError::EmptySlot { supply_id, slot })?;
        trace!(supply_id, slot, roll, subrow, "picked request");
        requests.push(subrow);
    }

    Ok(requests)
}

fn pick_subrow(rows: &[SupplyRow], slot: u8, roll: u32) -> Option<u32> {
    let mut cumulative = 0u32;
    let mut last = None;

    for (subrow, row) in rows.iter().enumerate().filter(|(_, row)| row.slot == slot) {
        let subrow = subrow as u32;
        cumulative += u32::from(row.probability_percent);
        if roll < cumulative {
            return Some(subrow);
        }
        last = Some(subrow);
    }

    last
}
