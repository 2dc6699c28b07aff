//! Layout data model
//!
//! A Layout is the set of mask layers and geometry-derived metrics
//! describing one fabrication design. Layouts are value objects: the
//! provider builds one per invocation and nothing mutates it afterwards.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One lithographic mask pattern within a layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Layer number as assigned in the layout database.
    pub number: u32,

    /// Layout-defined identifier (e.g., "ACTIVE", "METAL1").
    /// Stored case-sensitively; recipe steps match it exactly.
    pub name: String,

    /// Number of geometric features drawn on this layer.
    pub feature_count: u64,
}

impl Layer {
    pub fn new(number: u32, name: &str, feature_count: u64) -> Self {
        Self {
            number,
            name: name.to_string(),
            feature_count,
        }
    }
}

/// Database and user units of the layout file, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Units {
    /// Size of one database unit (typically 1 nm).
    pub database_unit: f64,

    /// Size of one user unit (typically 1 um).
    pub user_unit: f64,
}

impl Default for Units {
    fn default() -> Self {
        Self {
            database_unit: 1e-9,
            user_unit: 1e-6,
        }
    }
}

/// Axis-aligned extents of the layout geometry, in user units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Die area from the min-adjusted extents.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

/// One fabrication design: ordered mask layers plus aggregate metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Name of the file this layout was read from.
    pub filename: String,

    /// Mask layers in provider order. The order carries no meaning for
    /// planning; duplicate names resolve to the later entry.
    pub layers: Vec<Layer>,

    /// Aggregate feature count across the whole layout. Recorded by the
    /// provider; not required to equal the sum of per-layer counts.
    pub feature_count: u64,

    /// Layout file units.
    pub units: Units,

    /// Geometry extents in user units.
    pub bounding_box: BoundingBox,
}

impl Layout {
    /// Build a name-keyed index of the layers.
    ///
    /// Insertion follows sequence order, so when two layers share a name
    /// the later one wins.
    pub fn layer_index(&self) -> HashMap<&str, &Layer> {
        let mut index = HashMap::with_capacity(self.layers.len());
        for layer in &self.layers {
            index.insert(layer.name.as_str(), layer);
        }
        index
    }

    /// Summarize the layout geometry.
    ///
    /// Unlike the planner's analysis heuristics, the die area here is
    /// computed from min-adjusted extents.
    pub fn stats(&self) -> LayoutStats {
        let die_area = self.bounding_box.area();
        LayoutStats {
            filename: self.filename.clone(),
            layer_count: self.layers.len(),
            total_features: self.feature_count,
            die_area,
            feature_density: self.feature_count as f64 / die_area,
        }
    }
}

/// Geometry summary derived from a layout on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutStats {
    /// Name of the layout file.
    pub filename: String,

    /// Number of mask layers.
    pub layer_count: usize,

    /// Aggregate feature count as recorded by the provider.
    pub total_features: u64,

    /// Die area in square user units, min-adjusted.
    pub die_area: f64,

    /// Features per square user unit over the min-adjusted area.
    pub feature_density: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_layout() -> Layout {
        Layout {
            filename: "chip.gds".to_string(),
            layers: vec![
                Layer::new(1, "ACTIVE", 150),
                Layer::new(2, "POLY", 200),
            ],
            feature_count: 350,
            units: Units::default(),
            bounding_box: BoundingBox::new(100.0, 100.0, 600.0, 1100.0),
        }
    }

    #[test]
    fn test_layer_index_keys() {
        let layout = sample_layout();
        let index = layout.layer_index();

        assert_eq!(index.len(), 2);
        assert_eq!(index["ACTIVE"].number, 1);
        assert_eq!(index["POLY"].feature_count, 200);
        assert!(!index.contains_key("active"));
    }

    #[test]
    fn test_layer_index_duplicate_names_later_wins() {
        let mut layout = sample_layout();
        layout.layers.push(Layer::new(7, "ACTIVE", 999));

        let index = layout.layer_index();
        assert_eq!(index["ACTIVE"].number, 7);
        assert_eq!(index["ACTIVE"].feature_count, 999);
    }

    #[test]
    fn test_stats_uses_min_adjusted_area() {
        let layout = sample_layout();
        let stats = layout.stats();

        // 500 x 1000, not 600 x 1100
        assert_eq!(stats.die_area, 500_000.0);
        assert_eq!(stats.layer_count, 2);
        assert_eq!(stats.total_features, 350);
        assert!((stats.feature_density - 350.0 / 500_000.0).abs() < 1e-12);
    }

    #[test]
    fn test_stats_degenerate_box_is_nonfinite() {
        let mut layout = sample_layout();
        layout.bounding_box = BoundingBox::new(0.0, 0.0, 0.0, 0.0);

        let stats = layout.stats();
        assert!(!stats.feature_density.is_finite());
    }
}
