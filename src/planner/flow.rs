//! Mapped steps and the process flow they assemble into
//!
//! A MappedStep is a recipe step template joined against one layout's
//! layer index. Mapping never fails: a step whose layer is absent from
//! the layout degrades to a warning carried in the output.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::layout::Layer;
use crate::recipe::StepTemplate;

/// How a step template related to the layout it was mapped against.
/// Exactly one status holds per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    /// The template named a layer and the layout has it.
    Matched,
    /// The template named a layer the layout does not have.
    LayerMissing,
    /// The template named no layer.
    LayerIndependent,
}

/// A recipe step joined with one layout's layer data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappedStep {
    /// 1-based position copied from the template.
    pub step: u32,

    /// Process-operation kind copied from the template.
    pub operation: String,

    /// Description copied from the template.
    pub description: String,

    /// Layer name the template asked for, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness_nm: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_c: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_min: Option<f64>,

    /// Outcome of matching the template's layer against the layout.
    pub status: StepStatus,

    /// Layout layer number, set only when matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_layer: Option<u32>,

    /// Feature count of the matched layer, set only when matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_count: Option<u64>,

    /// Soft warning, set only when the named layer is missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl MappedStep {
    /// Join one step template against a name-keyed layer index.
    pub fn from_template(template: &StepTemplate, layers: &HashMap<&str, &Layer>) -> Self {
        let mut mapped = Self {
            step: template.step,
            operation: template.operation.clone(),
            description: template.description.clone(),
            layer: template.layer.clone(),
            material: template.material.clone(),
            method: template.method.clone(),
            thickness_nm: template.thickness_nm,
            temperature_c: template.temperature_c,
            duration_min: template.duration_min,
            status: StepStatus::LayerIndependent,
            layout_layer: None,
            feature_count: None,
            warning: None,
        };

        if let Some(wanted) = template.layer.as_deref() {
            match layers.get(wanted) {
                Some(layer) => {
                    mapped.status = StepStatus::Matched;
                    mapped.layout_layer = Some(layer.number);
                    mapped.feature_count = Some(layer.feature_count);
                }
                None => {
                    mapped.status = StepStatus::LayerMissing;
                    mapped.warning = Some(format!("Layer {} not found in layout", wanted));
                }
            }
        }

        mapped
    }
}

/// A recipe merged with a specific layout, plus the computed duration.
/// The sole artifact the formatters consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessFlow {
    /// Display name of the recipe.
    pub name: String,

    /// Process-type identifier the recipe was looked up by.
    pub process_type: String,

    /// Technology node, or "N/A" when the recipe has none.
    pub technology_node: String,

    /// Application, or "General" when the recipe has none.
    pub application: String,

    /// Name of the layout file the flow was planned against.
    pub layout_file: String,

    /// Number of layers in the layout (sequence length, not matches).
    pub layers_used: usize,

    /// Mapped steps in recipe order.
    pub steps: Vec<MappedStep>,

    /// Number of steps, always equal to the recipe's step count.
    pub total_steps: usize,

    /// Total planned duration in hours, rounded to 1 decimal.
    pub estimated_duration_hours: f64,
}
