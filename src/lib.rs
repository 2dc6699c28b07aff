//! FabFlow - Fabrication Process Planning
//!
//! FabFlow merges mask-layout data with named process recipes:
//! 1. Layout acquisition - a pluggable provider supplies layer and
//!    geometry data for a layout file
//! 2. Process planning - recipe steps are matched against layout layers
//!    and durations are aggregated into a process flow
//!
//! # Architecture
//!
//! Data flows one way through the crate:
//! - Layout Provider: loads a Layout for a path (mock fixture today)
//! - Recipe Store: immutable process-type to Recipe table, loaded once
//! - Process Planner: pure mapping and aggregation over the two inputs
//! - Report: renders the resulting ProcessFlow as text, Markdown or JSON

pub mod cli;
pub mod error;
pub mod layout;
pub mod planner;
pub mod recipe;
pub mod report;

pub use error::{FabError, Result};
