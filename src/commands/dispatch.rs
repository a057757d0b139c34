//! Command dispatch logic for towngraph
use std::time::Instant;

use towngraph_core::config::TownGraphConfig;
use towngraph_core::error::{GraphError, Result};
use towngraph_core::loader::{LoadOptions, LoadSummary};
use towngraph_core::{trace_time, TownGraphManager};

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, config: &TownGraphConfig, start: Instant) -> Result<()> {
    let (manager, summary) = load_manager(cli, config)?;
    trace_time!(start, "load_roads", towns = manager.graph().vertex_count());

    match &cli.command {
        Commands::Load => commands::load::execute(cli, &summary),
        Commands::Towns => commands::list::execute_towns(cli, &manager),
        Commands::Roads => commands::list::execute_roads(cli, &manager),
        Commands::Road { town1, town2 } => {
            commands::list::execute_road(cli, &manager, town1, town2)
        }
        Commands::Edges { town } => commands::list::execute_edges(cli, &manager, town),
        Commands::Path { from, to } => commands::path::execute(cli, &manager, from, to),
    }
}

/// Build the graph from `--file`, with `--strict` overriding the config
fn load_manager(cli: &Cli, config: &TownGraphConfig) -> Result<(TownGraphManager, LoadSummary)> {
    let path = cli.file.as_deref().ok_or_else(|| {
        GraphError::UsageError("a road data file is required (--file)".to_string())
    })?;

    let options = LoadOptions {
        strict: cli.strict || config.load_options().strict,
    };

    let mut manager = TownGraphManager::new();
    let summary = manager.populate_town_graph(path, &options)?;
    tracing::debug!(
        path = %path.display(),
        towns = summary.towns_added,
        roads = summary.roads_added,
        "loaded road data"
    );
    Ok((manager, summary))
}
