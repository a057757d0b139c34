use towngraph_core::error::Result;
use towngraph_core::loader::LoadSummary;

use crate::cli::{Cli, OutputFormat};

/// Report the outcome of loading the road data
pub fn execute(cli: &Cli, summary: &LoadSummary) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(summary)?);
        }
        OutputFormat::Human => {
            println!("lines read: {}", summary.lines_read);
            println!("towns added: {}", summary.towns_added);
            println!("roads added: {}", summary.roads_added);
            println!("duplicates skipped: {}", summary.duplicates_skipped);
            println!("rejected: {}", summary.rejected.len());
            if !cli.quiet {
                for rejected in &summary.rejected {
                    println!("  line {}: {}", rejected.line, rejected.reason);
                }
            }
        }
    }
    Ok(())
}
