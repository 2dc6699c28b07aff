//! Plain-text rendering of process flows

use crate::planner::{ProcessFlow, StepStatus};

/// Render a process flow as a human-readable text report.
///
/// Operation names are uppercased here; the other renderers keep the
/// recipe's casing. Optional step fields are omitted when absent.
pub fn format_text(flow: &ProcessFlow) -> String {
    let mut out = format!("=== Process Flow: {} ===\n", flow.name);
    out.push_str(&format!("Process type: {}\n", flow.process_type));
    out.push_str(&format!("Technology node: {}\n", flow.technology_node));
    out.push_str(&format!("Application: {}\n", flow.application));
    out.push_str(&format!("Layout: {}\n", flow.layout_file));
    out.push_str(&format!("Layers used: {}\n", flow.layers_used));
    out.push_str(&format!("Total steps: {}\n", flow.total_steps));
    out.push_str(&format!(
        "Estimated duration: {:.1} hours\n",
        flow.estimated_duration_hours
    ));
    out.push_str(&format!("{:-<60}\n", ""));

    for step in &flow.steps {
        out.push_str(&format!(
            "Step {}: {}\n",
            step.step,
            step.operation.to_uppercase()
        ));
        out.push_str(&format!("  {}\n", step.description));

        if let Some(material) = &step.material {
            out.push_str(&format!("  Material: {}\n", material));
        }
        if let Some(method) = &step.method {
            out.push_str(&format!("  Method: {}\n", method));
        }
        if let Some(thickness) = step.thickness_nm {
            out.push_str(&format!("  Thickness: {} nm\n", thickness));
        }
        if let Some(temperature) = step.temperature_c {
            out.push_str(&format!("  Temperature: {} C\n", temperature));
        }
        if let Some(duration) = step.duration_min {
            out.push_str(&format!("  Duration: {} min\n", duration));
        }

        if let Some(layer) = &step.layer {
            if step.status == StepStatus::Matched {
                out.push_str(&format!(
                    "  Layer: {} (layout layer {}, {} features)\n",
                    layer,
                    step.layout_layer.unwrap_or_default(),
                    step.feature_count.unwrap_or_default()
                ));
            } else {
                out.push_str(&format!("  Layer: {}\n", layer));
            }
        }
        if let Some(warning) = &step.warning {
            out.push_str(&format!("  WARNING: {}\n", warning));
        }
    }

    out
}
