//! Weekly bonus guarantee rows.

use crate::config::DeliveryConfig;

/// One bonus guarantee row: for every slot, the NPCs whose delivery of that
/// slot is forced to count as bonus this period.
///
/// Entries are 1-based NPC sheet indices (NPC index + 1); 0 means "nobody".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuaranteeRow {
    pub slots: [[u8; DeliveryConfig::GUARANTEE_NPCS_PER_SLOT]; DeliveryConfig::SLOT_COUNT],
}

impl GuaranteeRow {
    /// Whether the NPC at `npc_index` is guaranteed a bonus in `slot`.
    pub fn covers(&self, npc_index: usize, slot: usize) -> bool {
        let Some(candidates) = self.slots.get(slot) else {
            return false;
        };
        candidates
            .iter()
            .any(|&sheet_index| sheet_index != 0 && sheet_index as usize == npc_index + 1)
    }
}

/// Oracle providing bonus guarantee rows.
pub trait GuaranteeOracle: Send + Sync {
    fn row_count(&self) -> u32;

    fn row(&self, row_id: u32) -> Option<GuaranteeRow>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_uses_one_based_sheet_indices() {
        let row = GuaranteeRow {
            slots: [[1, 0], [0, 0], [3, 2]],
        };
        assert!(row.covers(0, 0));
        assert!(!row.covers(1, 0));
        assert!(row.covers(1, 2));
        assert!(row.covers(2, 2));
        assert!(!row.covers(0, 1));
        assert!(!row.covers(0, 7));
    }
}
