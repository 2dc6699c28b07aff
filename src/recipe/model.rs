//! Recipe data model
//!
//! A Recipe is an ordered template of fabrication steps for one named
//! process type. Recipes come out of the store read-only; the planner
//! never mutates them.

use serde::{Deserialize, Serialize};

/// One templated fabrication step within a recipe.
///
/// Only `step`, `operation` and `description` are always present. The
/// remaining attributes are recipe-author options; absent values stay
/// absent through mapping and serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepTemplate {
    /// 1-based position within the recipe. Unique per recipe.
    pub step: u32,

    /// Process-operation kind (e.g., "lithography", "etch",
    /// "deposition"). The set is known but open; unknown kinds still
    /// plan with the fallback duration.
    pub operation: String,

    /// Human-readable description of the step.
    pub description: String,

    /// Name of the layout layer this step depends on. Absent means the
    /// step is layer-independent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer: Option<String>,

    /// Material consumed or deposited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,

    /// Tool or chemistry used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    /// Target thickness in nanometers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thickness_nm: Option<f64>,

    /// Process temperature in degrees Celsius.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature_c: Option<f64>,

    /// Step duration in minutes. When absent the planner falls back to
    /// the per-operation default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_min: Option<f64>,
}

/// An ordered template of fabrication steps for one process type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Display name of the recipe.
    pub name: String,

    /// Technology node (e.g., "180nm"). Reported as "N/A" when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technology_node: Option<String>,

    /// Intended application. Reported as "General" when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,

    /// Steps in execution order.
    pub steps: Vec<StepTemplate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_template_optional_fields_skip_when_absent() {
        let step = StepTemplate {
            step: 1,
            operation: "strip".to_string(),
            description: "Strip resist".to_string(),
            layer: None,
            material: None,
            method: None,
            thickness_nm: None,
            temperature_c: None,
            duration_min: None,
        };

        let json = serde_json::to_value(&step).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert!(!obj.contains_key("layer"));
        assert!(!obj.contains_key("duration_min"));
    }

    #[test]
    fn test_step_template_missing_keys_deserialize_as_none() {
        let step: StepTemplate = serde_json::from_str(
            r#"{"step": 2, "operation": "etch", "description": "Etch gate", "layer": "POLY"}"#,
        )
        .unwrap();

        assert_eq!(step.layer.as_deref(), Some("POLY"));
        assert_eq!(step.duration_min, None);
        assert_eq!(step.material, None);
    }
}
