//! Markdown rendering of process flows

use crate::planner::{ProcessFlow, StepStatus};

/// Render a process flow as a Markdown document.
///
/// Same field order and conditional inclusion as the text renderer,
/// but operation names keep the recipe's casing.
pub fn format_markdown(flow: &ProcessFlow) -> String {
    let mut out = format!("# Process Flow: {}\n\n", flow.name);
    out.push_str(&format!("- **Process type:** {}\n", flow.process_type));
    out.push_str(&format!("- **Technology node:** {}\n", flow.technology_node));
    out.push_str(&format!("- **Application:** {}\n", flow.application));
    out.push_str(&format!("- **Layout:** {}\n", flow.layout_file));
    out.push_str(&format!("- **Layers used:** {}\n", flow.layers_used));
    out.push_str(&format!("- **Total steps:** {}\n", flow.total_steps));
    out.push_str(&format!(
        "- **Estimated duration:** {:.1} hours\n",
        flow.estimated_duration_hours
    ));
    out.push_str("\n## Steps\n");

    for step in &flow.steps {
        out.push_str(&format!("\n### Step {}: {}\n\n", step.step, step.operation));
        out.push_str(&format!("{}\n\n", step.description));

        if let Some(material) = &step.material {
            out.push_str(&format!("- Material: {}\n", material));
        }
        if let Some(method) = &step.method {
            out.push_str(&format!("- Method: {}\n", method));
        }
        if let Some(thickness) = step.thickness_nm {
            out.push_str(&format!("- Thickness: {} nm\n", thickness));
        }
        if let Some(temperature) = step.temperature_c {
            out.push_str(&format!("- Temperature: {} C\n", temperature));
        }
        if let Some(duration) = step.duration_min {
            out.push_str(&format!("- Duration: {} min\n", duration));
        }

        if let Some(layer) = &step.layer {
            if step.status == StepStatus::Matched {
                out.push_str(&format!(
                    "- Layer: {} (layout layer {}, {} features)\n",
                    layer,
                    step.layout_layer.unwrap_or_default(),
                    step.feature_count.unwrap_or_default()
                ));
            } else {
                out.push_str(&format!("- Layer: {}\n", layer));
            }
        }
        if let Some(warning) = &step.warning {
            out.push_str(&format!("- **Warning:** {}\n", warning));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{BoundingBox, Layer, Layout, Units};
    use crate::planner::ProcessPlanner;
    use crate::recipe::RecipeStore;

    fn sample_flow() -> ProcessFlow {
        let layout = Layout {
            filename: "demo_chip.gds".to_string(),
            layers: vec![Layer::new(1, "WAVEGUIDE", 40), Layer::new(2, "GRATING", 12)],
            feature_count: 52,
            units: Units::default(),
            bounding_box: BoundingBox::new(0.0, 0.0, 200.0, 200.0),
        };
        ProcessPlanner::new(RecipeStore::builtin().unwrap())
            .generate_flow(&layout, "photonics_waveguide")
            .unwrap()
    }

    #[test]
    fn test_document_structure() {
        let md = format_markdown(&sample_flow());
        assert!(md.starts_with("# Process Flow: Photonic Waveguide Process\n"));
        assert!(md.contains("- **Process type:** photonics_waveguide"));
        assert!(md.contains("- **Technology node:** SOI 220nm"));
        assert!(md.contains("\n## Steps\n"));
        assert!(md.contains("- **Estimated duration:** 8.3 hours"));
    }

    #[test]
    fn test_operations_keep_recipe_casing() {
        let md = format_markdown(&sample_flow());
        assert!(md.contains("### Step 1: lithography"));
        assert!(!md.contains("LITHOGRAPHY"));
    }

    #[test]
    fn test_matched_layer_bullet() {
        let md = format_markdown(&sample_flow());
        assert!(md.contains("- Layer: WAVEGUIDE (layout layer 1, 40 features)"));
    }
}
