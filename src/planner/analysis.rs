//! Layout analysis heuristics
//!
//! Suggests a process type from layer-name evidence. The rules form an
//! ordered list evaluated first-match-wins, so adding a device family
//! means adding one rule, not restructuring a conditional tree. Names
//! are compared uppercased; the layout keeps its original casing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::layout::Layout;

/// Device complexity class. Analysis only ever produces these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Medium,
    High,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Complexity::Medium => write!(f, "medium"),
            Complexity::High => write!(f, "high"),
        }
    }
}

/// Heuristic summary of one layout. Recomputed on demand, never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutAnalysis {
    /// Process type the layer evidence points to.
    pub suggested_process: String,

    /// Why that process was suggested.
    pub reason: String,

    /// Complexity class of the device.
    pub complexity: Complexity,

    /// Estimated minimum feature size in user units, one decimal.
    pub min_feature_size: f64,

    /// Number of layers in the layout.
    pub layer_count: usize,

    /// Features per square user unit.
    pub feature_density: f64,
}

/// Outcome of one analysis rule.
struct Suggestion {
    process: &'static str,
    reason: &'static str,
    complexity: Complexity,
}

/// Uppercased layer names, prepared once per analysis.
struct LayerNames {
    names: Vec<String>,
}

impl LayerNames {
    fn from_layout(layout: &Layout) -> Self {
        Self {
            names: layout
                .layers
                .iter()
                .map(|layer| layer.name.to_uppercase())
                .collect(),
        }
    }

    fn any_contains(&self, needle: &str) -> bool {
        self.names.iter().any(|name| name.contains(needle))
    }

    fn has_exact(&self, wanted: &str) -> bool {
        self.names.iter().any(|name| name == wanted)
    }
}

fn mems_rule(names: &LayerNames, _layout: &Layout) -> Option<Suggestion> {
    if !names.any_contains("CANTILEVER") && !names.any_contains("MEMBRANE") {
        return None;
    }
    if names.any_contains("ELECTRODE") {
        Some(Suggestion {
            process: "mems_cantilever",
            reason: "MEMS structural layers with electrodes detected",
            complexity: Complexity::High,
        })
    } else {
        Some(Suggestion {
            process: "mems_pressure_sensor",
            reason: "MEMS structural layers detected",
            complexity: Complexity::High,
        })
    }
}

fn photonics_rule(names: &LayerNames, _layout: &Layout) -> Option<Suggestion> {
    if names.any_contains("WAVEGUIDE") || names.any_contains("GRATING") {
        Some(Suggestion {
            process: "photonics_waveguide",
            reason: "Waveguide or grating layers detected",
            complexity: Complexity::High,
        })
    } else {
        None
    }
}

fn cmos_rule(names: &LayerNames, layout: &Layout) -> Option<Suggestion> {
    if names.has_exact("POLY") && names.has_exact("ACTIVE") {
        let complexity = if layout.feature_count > 1000 {
            Complexity::High
        } else {
            Complexity::Medium
        };
        Some(Suggestion {
            process: "cmos_standard",
            reason: "POLY and ACTIVE layers indicate a standard CMOS stack",
            complexity,
        })
    } else {
        None
    }
}

/// Rules in priority order; the first to match decides.
const RULES: &[fn(&LayerNames, &Layout) -> Option<Suggestion>] =
    &[mems_rule, photonics_rule, cmos_rule];

/// Suggest a process type and derive geometry metrics for a layout.
///
/// Pure function of the layout; safe to call from multiple threads.
/// Degenerate geometry (zero features, zero-extent bounding box) yields
/// non-finite metrics rather than an error.
pub fn analyze_layout(layout: &Layout) -> LayoutAnalysis {
    let names = LayerNames::from_layout(layout);
    let suggestion = RULES
        .iter()
        .find_map(|rule| rule(&names, layout))
        .unwrap_or(Suggestion {
            process: "cmos_standard",
            reason: "No characteristic layers found; defaulting to standard CMOS",
            complexity: Complexity::Medium,
        });

    // Both metrics use the raw max extents, not the min-adjusted die
    // area; Layout::stats() carries the adjusted figure.
    let raw_extent = layout.bounding_box.max_x * layout.bounding_box.max_y;
    let features = layout.feature_count as f64;
    let min_feature_size = ((raw_extent / features).sqrt() * 10.0).round() / 10.0;
    let feature_density = features / raw_extent;

    LayoutAnalysis {
        suggested_process: suggestion.process.to_string(),
        reason: suggestion.reason.to_string(),
        complexity: suggestion.complexity,
        min_feature_size,
        layer_count: layout.layers.len(),
        feature_density,
    }
}
