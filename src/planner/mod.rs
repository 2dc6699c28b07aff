//! Process planning
//!
//! Turns a layout plus a recipe into a concrete process flow: each
//! recipe step is matched against the layout's layers, durations are
//! aggregated, and heuristics suggest a process type when the caller
//! has none. Planning is read-only with respect to both inputs.

mod analysis;
mod duration;
mod flow;

pub use analysis::{analyze_layout, Complexity, LayoutAnalysis};
pub use duration::{
    default_operation_hours, estimate_total_hours, round_to_tenth, step_hours,
};
pub use flow::{MappedStep, ProcessFlow, StepStatus};

use log::{info, warn};

use crate::error::Result;
use crate::layout::Layout;
use crate::recipe::RecipeStore;

/// Process type used when the caller does not pick one.
pub const DEFAULT_PROCESS_TYPE: &str = "cmos_standard";

/// Plans process flows from a recipe store.
///
/// Holds no per-layout state, so one planner can serve any number of
/// layouts.
pub struct ProcessPlanner {
    store: RecipeStore,
}

impl ProcessPlanner {
    pub fn new(store: RecipeStore) -> Self {
        Self { store }
    }

    /// The recipe store this planner draws from.
    pub fn store(&self) -> &RecipeStore {
        &self.store
    }

    /// Generate a process flow for `layout` using the named recipe.
    ///
    /// Steps keep recipe order. A step whose layer is absent from the
    /// layout is kept with a warning rather than dropped, so the flow
    /// always has exactly as many steps as the recipe.
    pub fn generate_flow(&self, layout: &Layout, process_type: &str) -> Result<ProcessFlow> {
        let recipe = self.store.lookup(process_type)?;
        let index = layout.layer_index();

        let steps: Vec<MappedStep> = recipe
            .steps
            .iter()
            .map(|template| MappedStep::from_template(template, &index))
            .collect();

        for step in &steps {
            if let Some(warning) = &step.warning {
                warn!("{}: {}", process_type, warning);
            }
        }

        let total_steps = steps.len();
        let estimated_duration_hours = estimate_total_hours(&steps);
        info!(
            "Planned {} steps for '{}' against {} ({:.1} h estimated)",
            total_steps, process_type, layout.filename, estimated_duration_hours
        );

        Ok(ProcessFlow {
            name: recipe.name.clone(),
            process_type: process_type.to_string(),
            technology_node: recipe
                .technology_node
                .clone()
                .unwrap_or_else(|| "N/A".to_string()),
            application: recipe
                .application
                .clone()
                .unwrap_or_else(|| "General".to_string()),
            layout_file: layout.filename.clone(),
            layers_used: layout.layers.len(),
            steps,
            total_steps,
            estimated_duration_hours,
        })
    }

    /// Suggest a process type for a layout. Never fails; degenerate
    /// layouts produce non-finite metrics.
    pub fn analyze(&self, layout: &Layout) -> LayoutAnalysis {
        analyze_layout(layout)
    }
}
