//! Loads the shipped data set and replays its regression samples.

use std::fs;
use std::path::PathBuf;

use satisfy_content::ContentFactory;
use satisfy_core::{ItemOracle, NpcOracle, SupplyOracle};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

#[test]
fn shipped_tables_load() {
    let snapshot = ContentFactory::new(data_dir())
        .load_snapshot()
        .expect("shipped data set loads");

    assert_eq!(snapshot.npc_count(), 3);
    assert!(snapshot.guarantees.len() > 1);
    for npc in &snapshot.npcs {
        assert_eq!(npc.supply_ids.len(), 6, "{} covers every rank", npc.name);
        assert!(npc.fish.is_some() && npc.craft.is_some());
        assert!(snapshot.subrow_count(npc.supply_ids[5]).is_some());
    }
    assert_eq!(snapshot.currency_label(2), "Purple Crafters' Scrip");
}

#[test]
fn regression_samples_still_match() {
    let factory = ContentFactory::new(data_dir());
    let snapshot = factory.load_snapshot().expect("shipped data set loads");
    let samples = factory.load_samples().expect("samples load");

    assert!(!samples.is_empty());
    let mismatches = samples.check(&snapshot);
    assert!(mismatches.is_empty(), "mismatches: {:?}", mismatches);
}

#[test]
fn invalid_slot_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    for name in ["npcs.ron", "rewards.ron", "guarantees.ron", "items.ron"] {
        fs::copy(data_dir().join(name), dir.path().join(name)).expect("copy table");
    }
    fs::write(
        dir.path().join("supply.ron"),
        "SupplyCatalog(tables: {101: [(item_id: 1, slot: 4, probability_percent: 100, reward_id: 1, is_bonus: false)]})",
    )
    .expect("write supply");

    let err = ContentFactory::new(dir.path()).load_snapshot().unwrap_err();
    assert!(err.to_string().contains("invalid slot 4"), "{err}");
}

#[test]
fn unknown_supply_reference_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    for name in ["npcs.ron", "rewards.ron", "guarantees.ron", "items.ron"] {
        fs::copy(data_dir().join(name), dir.path().join(name)).expect("copy table");
    }
    fs::write(dir.path().join("supply.ron"), "SupplyCatalog(tables: {})").expect("write supply");

    let err = ContentFactory::new(dir.path()).load_snapshot().unwrap_err();
    assert!(err.to_string().contains("unknown supply table 101"), "{err}");
}

#[test]
fn empty_supply_table_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    for name in ["npcs.ron", "rewards.ron", "guarantees.ron", "items.ron"] {
        fs::copy(data_dir().join(name), dir.path().join(name)).expect("copy table");
    }
    fs::write(dir.path().join("supply.ron"), "SupplyCatalog(tables: {101: []})")
        .expect("write supply");

    let err = ContentFactory::new(dir.path()).load_snapshot().unwrap_err();
    assert!(err.to_string().contains("supply table 101 has no rows"), "{err}");
}
