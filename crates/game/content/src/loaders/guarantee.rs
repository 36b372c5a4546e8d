//! Bonus guarantee table loader.

use std::path::Path;

use satisfy_core::GuaranteeRow;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Guarantee rows; list position is the row id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuaranteeCatalog {
    pub rows: Vec<GuaranteeRow>,
}

/// Loader for bonus guarantee rows from RON files.
pub struct GuaranteeLoader;

impl GuaranteeLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<GuaranteeRow>> {
        let content = read_file(path)?;
        let catalog: GuaranteeCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse guarantee RON: {}", e))?;

        Ok(catalog.rows)
    }
}
