//! Layout acquisition
//!
//! Layout acquisition is a pluggable capability with one method, so a
//! real GDS-II decoder can later replace the mock without touching the
//! planner. The mock checks that the path exists and then returns a
//! fixed five-layer CMOS fixture; it never reads the file contents.

use std::path::Path;

use log::debug;

use super::model::{BoundingBox, Layer, Layout, Units};
use crate::error::{FabError, Result};

/// Source of Layout values.
pub trait LayoutProvider: Send + Sync {
    /// Load the layout at `path`.
    ///
    /// # Errors
    /// * `FileNotFound` - If the path does not exist
    fn load(&self, path: &Path) -> Result<Layout>;
}

/// Stand-in for a real layout decoder.
///
/// Returns the same fixture geometry for every existing path: the five
/// standard CMOS mask layers over a 1000 x 1000 user-unit die. Only the
/// filename reflects the requested path.
pub struct MockLayoutProvider;

impl MockLayoutProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockLayoutProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutProvider for MockLayoutProvider {
    fn load(&self, path: &Path) -> Result<Layout> {
        if !path.exists() {
            return Err(FabError::FileNotFound {
                path: path.display().to_string(),
                source: None,
            });
        }

        debug!("Returning mock layout for {}", path.display());

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| path.display().to_string());

        Ok(Layout {
            filename,
            layers: vec![
                Layer::new(1, "ACTIVE", 150),
                Layer::new(2, "POLY", 200),
                Layer::new(3, "CONTACT", 300),
                Layer::new(4, "METAL1", 180),
                Layer::new(5, "VIA1", 120),
            ],
            feature_count: 950,
            units: Units::default(),
            bounding_box: BoundingBox::new(0.0, 0.0, 1000.0, 1000.0),
        })
    }
}
