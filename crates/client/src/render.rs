//! Plain-text tables for the terminal.

use std::fmt::Write;

use satisfy_core::{CurrencyView, DeliveryConfig, ItemOracle, LiveSnapshot, NpcState, SessionState};
use satisfy_runtime::Step;

/// One mark per slot: `G` guaranteed bonus, `B` table bonus, `.` plain,
/// `-` nothing requested.
fn bonus_marks(npc: &NpcState) -> String {
    (0..DeliveryConfig::SLOT_COUNT)
        .map(|slot| {
            if slot >= npc.requests.len() {
                '-'
            } else if npc.is_bonus_override[slot] {
                'G'
            } else if npc.is_bonus_effective[slot] {
                'B'
            } else {
                '.'
            }
        })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn npc_table(state: &SessionState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<3} {:<20} {:>4} {:<7} {:>8}", "#", "NPC", "Rank", "Bonus", "Progress");
    for npc in &state.npcs {
        let rank = if npc.is_unlocked() {
            npc.rank.to_string()
        } else {
            "-".to_string()
        };
        let _ = writeln!(
            out,
            "{:<3} {:<20} {:>4} {:<7} {:>8}",
            npc.index,
            npc.name,
            rank,
            bonus_marks(npc),
            format!("{}/{}", npc.used_deliveries, npc.max_deliveries),
        );
    }
    out
}

pub fn currency_table(views: &[CurrencyView], items: &dyn ItemOracle) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<28} {:>11} {:>9} {:>8}",
        "Currency", "Current", "Max gain", "Overcap"
    );
    if views.is_empty() {
        let _ = writeln!(out, "(nothing left to earn)");
    }
    for view in views {
        let overcap = view
            .overcap
            .map_or_else(|| "---".to_string(), |excess| excess.to_string());
        let _ = writeln!(
            out,
            "{:<28} {:>11} {:>9} {:>8}",
            items.currency_label(view.currency),
            format!("{}/{}", view.holdings, view.cap),
            view.gain,
            overcap,
        );
    }
    out
}

pub fn plan_listing(steps: &[Step]) -> String {
    if steps.is_empty() {
        return "Nothing left to deliver.\n".to_string();
    }

    let mut out = String::new();
    for (index, step) in steps.iter().enumerate() {
        let _ = writeln!(out, "{}. [{}] {}", index + 1, step.state, step.status);
        let _ = writeln!(out, "   {}", step.kind);
    }
    out
}

pub fn debug_dump(state: &SessionState, live: Option<&LiveSnapshot>) -> String {
    let mut out = String::new();
    if let Some(live) = live {
        let _ = writeln!(
            out,
            "seed {:#010x}, guarantee indicator {}, allowance {}",
            live.supply_seed, live.guarantee_row, live.remaining_allowance
        );
    }
    let _ = writeln!(
        out,
        "guarantee row {:?} ({:?})",
        state.guarantee_row, state.guarantee_source
    );
    for npc in &state.npcs {
        let _ = writeln!(
            out,
            "{} {:?}: supply {:?}, requests {:?}, rewards {:?}",
            npc.index,
            npc.name,
            npc.supply_id(),
            npc.requests.as_slice(),
            npc.rewards
        );
    }
    for projection in &state.rewards {
        let _ = writeln!(
            out,
            "currency {}: {} x {}",
            projection.currency, projection.amount, projection.count
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use satisfy_core::{CurrencyHolding, NpcDefinition, RewardProjection, TableSnapshot};

    use super::*;

    fn state() -> SessionState {
        let mut active = NpcState::from_definition(0, NpcDefinition::simple("Ameliance", 6, vec![0, 7]));
        active.rank = 1;
        active.used_deliveries = 2;
        active.requests.extend([0, 3, 5]);
        active.is_bonus_override = [true, false, false];
        active.is_bonus_effective = [true, false, true];

        let locked = NpcState::from_definition(1, NpcDefinition::simple("Anden", 6, vec![0, 8]));

        SessionState {
            npcs: vec![active, locked],
            rewards: vec![RewardProjection::new(2, 54, 4)],
            ..SessionState::default()
        }
    }

    #[test]
    fn npc_rows_show_flags_and_progress() {
        let table = npc_table(&state());
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Ameliance"));
        assert!(lines[1].contains("G . B"));
        assert!(lines[1].contains("2/6"));
        assert!(lines[2].contains("- - -"));
    }

    #[test]
    fn currency_rows_show_overcap_or_dashes() {
        let mut items = TableSnapshot::new();
        items.items.currencies.insert(2, 33913);
        items.items.items.insert(33913, "Purple Crafters' Scrip".into());

        let projection = RewardProjection::new(2, 54, 4);
        let over = CurrencyView::new(
            &projection,
            Some(&CurrencyHolding {
                currency: 2,
                count: 3_900,
                max: 4_000,
            }),
        );
        let fits = CurrencyView::new(
            &projection,
            Some(&CurrencyHolding {
                currency: 2,
                count: 0,
                max: 4_000,
            }),
        );

        let table = currency_table(&[over, fits], &items);
        let lines: Vec<_> = table.lines().collect();
        assert!(lines[1].starts_with("Purple Crafters' Scrip"));
        assert!(lines[1].ends_with("116"));
        assert!(lines[2].ends_with("---"));
    }

    #[test]
    fn empty_plan_says_so() {
        assert_eq!(plan_listing(&[]), "Nothing left to deliver.\n");
    }

    #[test]
    fn debug_dump_lists_projections() {
        let dump = debug_dump(&state(), None);
        assert!(dump.contains("currency 2: 54 x 4"));
        assert!(dump.contains("\"Anden\""));
    }
}
