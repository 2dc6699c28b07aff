//! CLI Module
//!
//! Command-line interface for the FabFlow process planner.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::planner::DEFAULT_PROCESS_TYPE;

/// FabFlow - fabrication process planning from layout files
#[derive(Parser, Debug)]
#[command(name = "fabflow")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Plan a process flow for a layout
    #[command(name = "plan")]
    Plan {
        /// Path to the layout file
        layout: PathBuf,

        /// Process type to plan for
        #[arg(short, long, default_value = DEFAULT_PROCESS_TYPE)]
        process: String,

        /// Output format: text, markdown or json
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Write the report to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Recipe table to use instead of the built-in one
        #[arg(short, long)]
        recipes: Option<PathBuf>,
    },

    /// Suggest a process type for a layout
    #[command(name = "analyze")]
    Analyze {
        /// Path to the layout file
        layout: PathBuf,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show geometry statistics for a layout
    #[command(name = "stats")]
    Stats {
        /// Path to the layout file
        layout: PathBuf,
    },

    /// List available process types
    #[command(name = "recipes")]
    Recipes {
        /// Recipe table to use instead of the built-in one
        #[arg(short, long)]
        recipes: Option<PathBuf>,
    },
}
