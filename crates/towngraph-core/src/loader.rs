//! Bulk loading of road data
//!
//! Each line reads `roadName,weight;town1Name;town2Name`. Both towns are
//! added when absent; the road is added only if the pair is not already
//! connected, so the first road seen for a pair wins.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, Town};

/// One parsed line of road data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadRecord {
    pub road: String,
    pub weight: i64,
    pub town1: String,
    pub town2: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Abort on the first bad line instead of skipping it
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedLine {
    pub line: usize,
    pub reason: String,
}

/// Counts reported after a load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub lines_read: usize,
    pub towns_added: usize,
    pub roads_added: usize,
    pub duplicates_skipped: usize,
    pub rejected: Vec<RejectedLine>,
}

/// Parse a single `roadName,weight;town1;town2` line.
///
/// `line_no` is only used for error messages. Road and town names are
/// trimmed, so `" Ada"` and `"Ada"` name the same town.
pub fn parse_line(line: &str, line_no: usize) -> Result<RoadRecord> {
    let (road, rest) = line
        .split_once(',')
        .ok_or_else(|| GraphError::malformed(line_no, "missing ',' after road name"))?;
    let (weight, towns) = rest
        .split_once(';')
        .ok_or_else(|| GraphError::malformed(line_no, "missing ';' after weight"))?;
    let (town1, town2) = towns
        .split_once(';')
        .ok_or_else(|| GraphError::malformed(line_no, "missing ';' between towns"))?;

    let weight = weight.trim().parse::<i64>().map_err(|_| {
        GraphError::malformed(
            line_no,
            format!("weight {:?} is not an integer", weight.trim()),
        )
    })?;

    Ok(RoadRecord {
        road: road.trim().to_string(),
        weight,
        town1: town1.trim().to_string(),
        town2: town2.trim().to_string(),
    })
}

/// Apply every line of `reader` to `graph`
#[tracing::instrument(skip(graph, reader), fields(strict = options.strict))]
pub fn load_into<R: BufRead>(
    graph: &mut Graph,
    reader: R,
    options: &LoadOptions,
) -> Result<LoadSummary> {
    let mut summary = LoadSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        summary.lines_read += 1;

        if line.trim().is_empty() {
            continue;
        }

        if let Err(err) = apply_line(graph, &line, line_no, &mut summary) {
            if options.strict {
                return Err(match err {
                    malformed @ GraphError::Malformed { .. } => malformed,
                    other => GraphError::malformed(line_no, other.to_string()),
                });
            }
            tracing::warn!(line = line_no, error = %err, "skipping road data line");
            summary.rejected.push(RejectedLine {
                line: line_no,
                reason: err.to_string(),
            });
        }
    }

    tracing::debug!(
        lines = summary.lines_read,
        towns = summary.towns_added,
        roads = summary.roads_added,
        duplicates = summary.duplicates_skipped,
        rejected = summary.rejected.len(),
        "load complete"
    );
    Ok(summary)
}

fn apply_line(
    graph: &mut Graph,
    line: &str,
    line_no: usize,
    summary: &mut LoadSummary,
) -> Result<()> {
    let record = parse_line(line, line_no)?;
    let town1 = Town::new(record.town1);
    let town2 = Town::new(record.town2);

    for town in [&town1, &town2] {
        if !graph.contains_vertex(town) && graph.add_vertex(town.clone()) {
            summary.towns_added += 1;
        }
    }

    if graph.contains_edge(&town1, &town2) {
        tracing::debug!(line = line_no, road = %record.road, "pair already connected");
        summary.duplicates_skipped += 1;
        return Ok(());
    }

    graph.add_edge(&town1, &town2, record.weight, &record.road)?;
    summary.roads_added += 1;
    Ok(())
}

/// Load road data from a file on disk
pub fn load_file(graph: &mut Graph, path: &Path, options: &LoadOptions) -> Result<LoadSummary> {
    let file = File::open(path).map_err(|source| GraphError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    load_into(graph, BufReader::new(file), options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let record = parse_line("Analytical Engine,3;Ada, Lovelace;Turing, Alan", 1).unwrap();
        assert_eq!(
            record,
            RoadRecord {
                road: "Analytical Engine".into(),
                weight: 3,
                town1: "Ada, Lovelace".into(),
                town2: "Turing, Alan".into(),
            }
        );
    }

    #[test]
    fn test_parse_line_malformed() {
        for (line, reason) in [
            ("no separators", "missing ','"),
            ("Road,3 Ada;", "missing ';' between towns"),
            ("Road,3", "missing ';' after weight"),
            ("Road,three;A;B", "not an integer"),
        ] {
            let err = parse_line(line, 7).unwrap_err();
            assert!(matches!(err, GraphError::Malformed { line: 7, .. }));
            assert!(err.to_string().contains(reason), "{line}: {err}");
        }
    }

    #[test]
    fn test_parse_negative_weight_is_well_formed() {
        let record = parse_line("Back,-4;A;B", 1).unwrap();
        assert_eq!(record.weight, -4);
    }

    #[test]
    fn test_load_first_road_wins() {
        let data = "\
Main,5;A;B
Other,1;B;A

Side,2;B;C
";
        let mut graph = Graph::new();
        let summary = load_into(&mut graph, data.as_bytes(), &LoadOptions::default()).unwrap();

        assert_eq!(summary.lines_read, 4);
        assert_eq!(summary.towns_added, 3);
        assert_eq!(summary.roads_added, 2);
        assert_eq!(summary.duplicates_skipped, 1);
        assert!(summary.rejected.is_empty());
        assert_eq!(
            graph.get_edge(&Town::new("A"), &Town::new("B")).unwrap().name(),
            "Main"
        );
    }

    #[test]
    fn test_lenient_load_records_rejections() {
        let data = "Main,5;A;B\ngarbage\nLoop,1;C;C\nBack,-2;A;D\nSide,2;B;D\n";
        let mut graph = Graph::new();
        let summary = load_into(&mut graph, data.as_bytes(), &LoadOptions::default()).unwrap();

        let lines: Vec<usize> = summary.rejected.iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![2, 3, 4]);
        assert_eq!(summary.roads_added, 2);
        assert_eq!(graph.edge_count(), 2);
        assert!(!graph.contains_edge(&Town::new("A"), &Town::new("D")));
    }

    #[test]
    fn test_strict_load_stops_at_first_bad_line() {
        let data = "Main,5;A;B\nLoop,1;C;C\nSide,2;B;D\n";
        let mut graph = Graph::new();
        let err =
            load_into(&mut graph, data.as_bytes(), &LoadOptions { strict: true }).unwrap_err();

        assert!(matches!(err, GraphError::Malformed { line: 2, .. }));
        assert!(err.to_string().contains("itself"));
        assert!(!graph.contains_vertex(&Town::new("D")));
    }

    #[test]
    fn test_load_missing_file() {
        let mut graph = Graph::new();
        let err = load_file(
            &mut graph,
            Path::new("/nonexistent/towns.txt"),
            &LoadOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, GraphError::ReadFile { .. }));
    }
}
