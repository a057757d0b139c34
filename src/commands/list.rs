//! Town and road listing commands

use serde::Serialize;
use towngraph_core::error::{GraphError, Result};
use towngraph_core::TownGraphManager;

use crate::cli::{Cli, OutputFormat};

#[derive(Serialize)]
struct EdgeEntry<'a> {
    road: &'a str,
    to: &'a str,
    weight: u32,
}

fn print_names(cli: &Cli, names: &[String]) -> Result<()> {
    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(names)?),
        OutputFormat::Human => {
            for name in names {
                println!("{}", name);
            }
        }
    }
    Ok(())
}

pub fn execute_towns(cli: &Cli, manager: &TownGraphManager) -> Result<()> {
    print_names(cli, &manager.all_towns())
}

pub fn execute_roads(cli: &Cli, manager: &TownGraphManager) -> Result<()> {
    print_names(cli, &manager.all_roads())
}

pub fn execute_road(cli: &Cli, manager: &TownGraphManager, town1: &str, town2: &str) -> Result<()> {
    let road = manager
        .get_road(town1, town2)
        .ok_or_else(|| GraphError::not_found("road", format!("{} - {}", town1, town2)))?;

    match cli.format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({ "town1": town1, "town2": town2, "road": road })
        ),
        OutputFormat::Human => println!("{}", road),
    }
    Ok(())
}

pub fn execute_edges(cli: &Cli, manager: &TownGraphManager, town: &str) -> Result<()> {
    let Some(stored) = manager.get_town(town) else {
        return Err(GraphError::not_found("town", town));
    };

    let entries: Vec<EdgeEntry<'_>> = manager
        .roads_of(town)
        .into_iter()
        .filter_map(|road| {
            road.other_end(stored).map(|other| EdgeEntry {
                road: road.name(),
                to: other.name(),
                weight: road.weight(),
            })
        })
        .collect();

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Human => {
            for entry in &entries {
                println!("{} to {} {} mi", entry.road, entry.to, entry.weight);
            }
        }
    }
    Ok(())
}
