use towngraph_core::error::{GraphError, Result};
use towngraph_core::graph::DISTANCE_UNIT;
use towngraph_core::{PathOutcome, TownGraphManager};

use crate::cli::{Cli, OutputFormat};

/// Print the shortest route between two towns
pub fn execute(cli: &Cli, manager: &TownGraphManager, from: &str, to: &str) -> Result<()> {
    let outcome = manager.path_outcome(from, to);
    let total = match &outcome {
        PathOutcome::Found(_) => outcome.total_distance().unwrap_or_default(),
        PathOutcome::UnknownTown(town) => return Err(GraphError::not_found("town", town)),
        PathOutcome::Isolated(town) => return Err(GraphError::not_found("road from town", town)),
        PathOutcome::Unreachable => {
            return Err(GraphError::not_found("path", format!("{} to {}", from, to)))
        }
    };
    let descriptions = outcome.clone().into_descriptions();

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "from": from,
                "to": to,
                "total": total,
                "unit": DISTANCE_UNIT,
                "hops": outcome.hops(),
                "descriptions": descriptions,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for line in &descriptions {
                println!("{}", line);
            }
            if !cli.quiet {
                println!("total: {} {}", total, DISTANCE_UNIT);
            }
        }
    }
    Ok(())
}
