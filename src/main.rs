//! FabFlow CLI - Fabrication Process Planner
//!
//! Command-line interface for the FabFlow process planning system.

use clap::Parser;
use env_logger::Env;
use log::info;

use fabflow::cli::{Cli, Commands};
use fabflow::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // --verbose raises the default filter; RUST_LOG still wins
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    info!("FabFlow Process Planner v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(cmd) => handle_command(cmd),
        None => {
            println!("FabFlow Process Planner v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Plan {
            layout,
            process,
            format,
            output,
            recipes,
        } => fabflow::cli::commands::plan(
            &layout,
            &process,
            &format,
            output.as_deref(),
            recipes.as_deref(),
        ),
        Commands::Analyze { layout, format } => {
            fabflow::cli::commands::analyze(&layout, &format)
        }
        Commands::Stats { layout } => fabflow::cli::commands::stats(&layout),
        Commands::Recipes { recipes } => {
            fabflow::cli::commands::list_recipes(recipes.as_deref())
        }
    }
}
