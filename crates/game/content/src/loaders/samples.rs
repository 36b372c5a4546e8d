//! Validation sample loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::samples::ValidationSamples;

/// Loader for validation samples from RON files.
pub struct SampleLoader;

impl SampleLoader {
    pub fn load(path: &Path) -> LoadResult<ValidationSamples> {
        let content = read_file(path)?;
        let samples: ValidationSamples = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse samples RON: {}", e))?;

        Ok(samples)
    }
}
