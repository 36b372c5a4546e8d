//! Item and currency name loader.

use std::path::Path;

use satisfy_core::ItemNames;

use crate::loaders::{LoadResult, read_file};

/// Loader for item, currency and fishing spot names from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load the name tables from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing ItemNames
    pub fn load(path: &Path) -> LoadResult<ItemNames> {
        let content = read_file(path)?;
        let names: ItemNames = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item names RON: {}", e))?;

        Ok(names)
    }
}
