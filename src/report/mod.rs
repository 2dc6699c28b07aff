//! Process flow rendering
//!
//! Three representations of one ProcessFlow: a plain-text report, a
//! Markdown document, and pretty-printed JSON. Rendering is pure; the
//! caller decides whether the string goes to stdout or a file.

mod markdown;
mod text;

pub use markdown::format_markdown;
pub use text::format_text;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::planner::ProcessFlow;

/// Output representation for a rendered process flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Markdown,
    Json,
}

impl OutputFormat {
    /// Parse a caller-supplied format name.
    ///
    /// Unrecognized names fall back to text with a warning instead of
    /// failing; the format choice is presentation, not correctness.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "text" | "txt" => OutputFormat::Text,
            "markdown" | "md" => OutputFormat::Markdown,
            "json" => OutputFormat::Json,
            other => {
                warn!("Unknown output format '{}', falling back to text", other);
                OutputFormat::Text
            }
        }
    }

    /// Canonical file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Markdown => "md",
            OutputFormat::Json => "json",
        }
    }
}

/// Render a flow in the requested format.
///
/// Only JSON serialization can fail; the hand-written renderers are
/// infallible.
pub fn render(flow: &ProcessFlow, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_text(flow)),
        OutputFormat::Markdown => Ok(format_markdown(flow)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(flow)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{BoundingBox, Layout, Units};
    use crate::planner::ProcessPlanner;
    use crate::recipe::RecipeStore;

    fn empty_layout() -> Layout {
        Layout {
            filename: "blank.gds".to_string(),
            layers: Vec::new(),
            feature_count: 0,
            units: Units::default(),
            bounding_box: BoundingBox::new(0.0, 0.0, 100.0, 100.0),
        }
    }

    #[test]
    fn test_from_name_accepts_aliases() {
        assert_eq!(OutputFormat::from_name("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::from_name("TXT"), OutputFormat::Text);
        assert_eq!(OutputFormat::from_name("Markdown"), OutputFormat::Markdown);
        assert_eq!(OutputFormat::from_name("md"), OutputFormat::Markdown);
        assert_eq!(OutputFormat::from_name("json"), OutputFormat::Json);
    }

    #[test]
    fn test_from_name_falls_back_to_text() {
        assert_eq!(OutputFormat::from_name("yaml"), OutputFormat::Text);
        assert_eq!(OutputFormat::from_name(""), OutputFormat::Text);
    }

    #[test]
    fn test_render_json_round_trips() {
        let planner = ProcessPlanner::new(RecipeStore::builtin().unwrap());
        let flow = planner
            .generate_flow(&empty_layout(), "mems_pressure_sensor")
            .unwrap();

        let json = render(&flow, OutputFormat::Json).unwrap();
        let parsed: ProcessFlow = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, flow);
    }

    #[test]
    fn test_render_dispatch() {
        let planner = ProcessPlanner::new(RecipeStore::builtin().unwrap());
        let flow = planner
            .generate_flow(&empty_layout(), "cmos_standard")
            .unwrap();

        let text = render(&flow, OutputFormat::Text).unwrap();
        assert!(text.starts_with("=== Process Flow:"));

        let md = render(&flow, OutputFormat::Markdown).unwrap();
        assert!(md.starts_with("# Process Flow:"));

        let json = render(&flow, OutputFormat::Json).unwrap();
        assert!(json.trim_start().starts_with('{'));
    }

    #[test]
    fn test_extensions() {
        assert_eq!(OutputFormat::Text.extension(), "txt");
        assert_eq!(OutputFormat::Markdown.extension(), "md");
        assert_eq!(OutputFormat::Json.extension(), "json");
    }
}
