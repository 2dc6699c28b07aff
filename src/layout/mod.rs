//! Layout Module
//!
//! Data model for fabrication layouts plus the acquisition seam:
//! - Model: layers, units, bounding box, derived statistics
//! - Provider: pluggable `load(path)` capability (mock decoder shipped)

mod model;
mod provider;

pub use model::{BoundingBox, Layer, Layout, LayoutStats, Units};
pub use provider::{LayoutProvider, MockLayoutProvider};
