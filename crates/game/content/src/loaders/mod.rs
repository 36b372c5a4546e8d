//! Content loaders for reading static tables from files.
//!
//! This module provides loaders that convert RON files into the in-memory
//! [`satisfy_core::TableSnapshot`] backing every oracle.

pub mod factory;
pub mod guarantee;
pub mod item;
pub mod npc;
pub mod rewards;
pub mod samples;
pub mod supply;

pub use factory::ContentFactory;
pub use guarantee::GuaranteeLoader;
pub use item::ItemLoader;
pub use npc::NpcLoader;
pub use rewards::RewardLoader;
pub use samples::SampleLoader;
pub use supply::SupplyLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    use satisfy_core::{
        CraftData, FishData, GuaranteeRow, ItemNames, NpcDefinition, Position, RewardEntry,
        RewardRow, SupplyRow,
    };
    use serde::Serialize;

    use super::*;
    use crate::loaders::guarantee::GuaranteeCatalog;
    use crate::loaders::npc::NpcCatalog;
    use crate::loaders::rewards::RewardCatalog;
    use crate::loaders::supply::SupplyCatalog;
    use crate::samples::{GuaranteeSample, RequestSample, ValidationSamples};

    fn write_ron<T: Serialize>(dir: &tempfile::TempDir, name: &str, value: &T) -> PathBuf {
        let path = dir.path().join(name);
        let text = ron::to_string(value).expect("serialize catalog");
        std::fs::write(&path, text).expect("write catalog");
        path
    }

    fn shipped(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
    }

    fn npc() -> NpcDefinition {
        NpcDefinition {
            name: "Zhloe Aliapoh".into(),
            deliveries_per_week: 6,
            supply_ids: vec![0, 101, 102],
            territory_id: 478,
            turn_in_items: [10201, 10204, 10206],
            craft: Some(CraftData {
                turn_in_location: Position {
                    x: -72.5,
                    y: -0.5,
                    z: -4.3,
                },
                turn_in_instance_id: 1_019_615,
            }),
            fish: Some(FishData {
                fish_item_id: 10206,
                territory_id: 479,
                center: Position {
                    x: 24.1,
                    y: -8.4,
                    z: 211.5,
                },
                is_spearfish: false,
                fish_spot_id: 204,
            }),
        }
    }

    #[test]
    fn catalogs_round_trip_through_loaders() {
        let dir = tempfile::tempdir().expect("tempdir");

        let npcs = NpcCatalog { npcs: vec![npc()] };
        let path = write_ron(&dir, "npcs.ron", &npcs);
        assert_eq!(NpcLoader::load(&path).expect("npcs"), npcs.npcs);

        let supply = SupplyCatalog {
            tables: BTreeMap::from([(
                101,
                vec![SupplyRow {
                    item_id: 10101,
                    slot: 1,
                    probability_percent: 100,
                    reward_id: 4,
                    is_bonus: false,
                }],
            )]),
        };
        let path = write_ron(&dir, "supply.ron", &supply);
        assert_eq!(SupplyLoader::load(&path).expect("supply"), supply.tables);

        let rewards = RewardCatalog {
            rewards: BTreeMap::from([(
                4,
                RewardRow {
                    entries: [
                        RewardEntry {
                            currency: 2,
                            quantity: 48,
                        },
                        RewardEntry {
                            currency: 1,
                            quantity: 36,
                        },
                    ],
                    percent_scalar: 200,
                },
            )]),
        };
        let path = write_ron(&dir, "rewards.ron", &rewards);
        assert_eq!(RewardLoader::load(&path).expect("rewards"), rewards.rewards);

        let guarantees = GuaranteeCatalog {
            rows: vec![GuaranteeRow {
                slots: [[2, 1], [0, 0], [3, 0]],
            }],
        };
        let path = write_ron(&dir, "guarantees.ron", &guarantees);
        assert_eq!(GuaranteeLoader::load(&path).expect("guarantees"), guarantees.rows);

        let mut items = ItemNames::default();
        items.items.insert(10206, "Rarefied Lava Snail".into());
        items.currencies.insert(2, 33913);
        items.fishing_spots.insert(204, "Lake".into());
        let path = write_ron(&dir, "items.ron", &items);
        assert_eq!(ItemLoader::load(&path).expect("items"), items);

        let samples = ValidationSamples {
            requests: vec![RequestSample {
                supply_id: 101,
                seed: 7,
                expected: vec![0, 2, 4],
            }],
            guarantees: vec![GuaranteeSample {
                server_time: 1_700_000_000,
                time_adjustment: -8,
                expected_row: Some(5),
            }],
        };
        let path = write_ron(&dir, "samples.ron", &samples);
        assert_eq!(SampleLoader::load(&path).expect("samples"), samples);
    }

    #[test]
    fn fixed_size_arrays_are_written_as_tuples() {
        let row = GuaranteeRow {
            slots: [[2, 1], [0, 0], [3, 0]],
        };
        let text = ron::to_string(&row).expect("serialize row");
        assert!(text.contains("((2,1),(0,0),(3,0))"), "{text}");
    }

    #[test]
    fn each_shipped_table_parses() {
        NpcLoader::load(&shipped("npcs.ron")).expect("npcs.ron");
        SupplyLoader::load(&shipped("supply.ron")).expect("supply.ron");
        RewardLoader::load(&shipped("rewards.ron")).expect("rewards.ron");
        GuaranteeLoader::load(&shipped("guarantees.ron")).expect("guarantees.ron");
        ItemLoader::load(&shipped("items.ron")).expect("items.ron");
        SampleLoader::load(&shipped("samples.ron")).expect("samples.ron");
    }
}
