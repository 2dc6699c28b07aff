//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::fs;
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::layout::{Layout, LayoutProvider, MockLayoutProvider};
use crate::planner::ProcessPlanner;
use crate::recipe::RecipeStore;
use crate::report::{render, OutputFormat};

fn load_layout(path: &Path) -> Result<Layout> {
    let provider = MockLayoutProvider::new();
    provider.load(path)
}

fn load_store(recipes: Option<&Path>) -> Result<RecipeStore> {
    match recipes {
        Some(path) => RecipeStore::from_path(path),
        None => RecipeStore::builtin(),
    }
}

/// Plan a process flow and print or write the rendered report.
pub fn plan(
    layout_path: &Path,
    process_type: &str,
    format: &str,
    output: Option<&Path>,
    recipes: Option<&Path>,
) -> Result<()> {
    info!(
        "Planning {} flow for: {}",
        process_type,
        layout_path.display()
    );

    let layout = load_layout(layout_path)?;
    let store = load_store(recipes)?;
    let planner = ProcessPlanner::new(store);

    let flow = planner.generate_flow(&layout, process_type)?;

    // Render and write only after planning succeeded; a failed lookup
    // must leave no output file behind.
    let report = render(&flow, OutputFormat::from_name(format))?;

    match output {
        Some(path) => {
            fs::write(path, &report)?;
            info!("Wrote process flow report to {}", path.display());
            println!("Process flow written: {}", path.display());
        }
        None => println!("{}", report.trim_end()),
    }

    Ok(())
}

/// Suggest a process type for a layout.
pub fn analyze(layout_path: &Path, format: &str) -> Result<()> {
    info!("Analyzing layout: {}", layout_path.display());

    let layout = load_layout(layout_path)?;
    let planner = ProcessPlanner::new(RecipeStore::builtin()?);
    let analysis = planner.analyze(&layout);

    if OutputFormat::from_name(format) == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    println!("=== Layout Analysis: {} ===", layout.filename);
    println!("Suggested process: {}", analysis.suggested_process);
    println!("Reason: {}", analysis.reason);
    println!("Complexity: {}", analysis.complexity);
    println!("Min feature size: {} um", analysis.min_feature_size);
    println!("Layer count: {}", analysis.layer_count);
    println!(
        "Feature density: {:.6} features/um^2",
        analysis.feature_density
    );

    Ok(())
}

/// Print geometry statistics for a layout.
pub fn stats(layout_path: &Path) -> Result<()> {
    info!("Collecting stats for: {}", layout_path.display());

    let layout = load_layout(layout_path)?;
    let stats = layout.stats();

    println!("=== Layout Stats: {} ===", stats.filename);
    println!("Layers: {}", stats.layer_count);
    println!("Total features: {}", stats.total_features);
    println!("Die area: {:.1} um^2", stats.die_area);
    println!(
        "Feature density: {:.6} features/um^2",
        stats.feature_density
    );
    println!("{:-<60}", "");

    for layer in &layout.layers {
        println!(
            "  {} (layer {}): {} features",
            layer.name, layer.number, layer.feature_count
        );
    }

    Ok(())
}

/// List the process types a recipe store offers.
pub fn list_recipes(recipes: Option<&Path>) -> Result<()> {
    let store = load_store(recipes)?;

    println!("Available process types:");
    for process_type in store.process_types() {
        let recipe = store.lookup(process_type)?;
        println!(
            "  {} - {} ({} steps)",
            process_type,
            recipe.name,
            recipe.steps.len()
        );
    }

    Ok(())
}
