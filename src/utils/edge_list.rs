// Load delivery edges from comma-separated text

use crate::error::{PlannerError, PlannerResult};
use crate::models::{Edge, Weight};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Reads `origin,destination[,weight]` lines from a file
pub fn load_edge_list<P: AsRef<Path>>(path: P) -> PlannerResult<Vec<Edge<String>>> {
    let path = path.as_ref();
    let io_error = |source: std::io::Error| PlannerError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let edges = parse_edge_list(BufReader::new(file)).map_err(|err| match err {
        // Attach the file path to read failures surfaced by the parser
        PlannerError::Io { source, .. } => io_error(source),
        other => other,
    })?;

    debug!("loaded {} edges from {}", edges.len(), path.display());
    Ok(edges)
}

/// Parses edges from any buffered reader
///
/// Blank lines and `#` comments are skipped. The first data line is treated as
/// a header when its weight column is not a number at all, or when it has only
/// the two location columns and both carry a known column name. A missing
/// weight defaults to 1.
pub fn parse_edge_list<R: BufRead>(reader: R) -> PlannerResult<Vec<Edge<String>>> {
    let mut edges = Vec::new();
    let mut seen_data = false;

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source| PlannerError::Io {
            path: Default::default(),
            source,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        let is_first = !seen_data;
        seen_data = true;

        if is_first && looks_like_header(&parts) {
            debug!("skipping header line {}", line_number);
            continue;
        }

        edges.push(parse_edge(&parts, line_number)?);
    }

    Ok(edges)
}

const ORIGIN_COLUMNS: [&str; 5] = ["origin", "from", "source", "src", "start"];
const DESTINATION_COLUMNS: [&str; 6] = ["destination", "dest", "to", "target", "dst", "end"];

fn looks_like_header(parts: &[&str]) -> bool {
    match parts {
        // `4.5` is a malformed weight, not a column name
        [_, _, weight] => weight.parse::<f64>().is_err(),
        [origin, destination] => {
            is_column_name(&ORIGIN_COLUMNS, origin)
                && is_column_name(&DESTINATION_COLUMNS, destination)
        }
        _ => false,
    }
}

fn is_column_name(names: &[&str], field: &str) -> bool {
    names.iter().any(|name| name.eq_ignore_ascii_case(field))
}

fn parse_edge(parts: &[&str], line: usize) -> PlannerResult<Edge<String>> {
    let invalid = |reason: String| PlannerError::ParseEdge { line, reason };

    let (origin, destination, weight) = match parts {
        [origin, destination] => (*origin, *destination, None),
        [origin, destination, weight] => (*origin, *destination, Some(*weight)),
        _ => {
            return Err(invalid(format!(
                "expected 2 or 3 comma-separated fields, found {}",
                parts.len()
            )))
        }
    };

    if origin.is_empty() || destination.is_empty() {
        return Err(invalid("location names must not be empty".to_string()));
    }

    let weight: Weight = match weight {
        None => 1,
        Some(raw) => {
            let value = raw
                .parse::<i64>()
                .map_err(|_| invalid(format!("weight {:?} is not an integer", raw)))?;
            if value < 0 {
                return Err(PlannerError::NegativeWeight {
                    line,
                    weight: value,
                });
            }
            value as Weight
        }
    };

    Ok(Edge::new(origin.to_string(), destination.to_string(), weight))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> PlannerResult<Vec<Edge<String>>> {
        parse_edge_list(Cursor::new(text))
    }

    fn edge(origin: &str, destination: &str, weight: Weight) -> Edge<String> {
        Edge::new(origin.to_string(), destination.to_string(), weight)
    }

    #[test]
    fn test_parse_with_header_and_comments() {
        let edges = parse(
            "origin,destination,distance\n\
             # warehouse links\n\
             Depot, Mall, 4\n\
             \n\
             Mall,Park,3\n",
        )
        .unwrap();

        assert_eq!(edges, vec![edge("Depot", "Mall", 4), edge("Mall", "Park", 3)]);
    }

    #[test]
    fn test_missing_weight_defaults_to_one() {
        let edges = parse("A,B\nB,C,5\n").unwrap();
        assert_eq!(edges, vec![edge("A", "B", 1), edge("B", "C", 5)]);
    }

    #[test]
    fn test_bad_weight_after_first_line_is_an_error() {
        let result = parse("A,B,2\nB,C,far\n");
        match result {
            Err(PlannerError::ParseEdge { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_negative_weight_is_rejected() {
        let result = parse("A,B,-3\n");
        assert!(matches!(
            result,
            Err(PlannerError::NegativeWeight { line: 1, weight: -3 })
        ));
    }

    #[test]
    fn test_wrong_field_count() {
        assert!(matches!(
            parse("A\n"),
            Err(PlannerError::ParseEdge { line: 1, .. })
        ));
        assert!(matches!(
            parse("A,B,1,2\n"),
            Err(PlannerError::ParseEdge { line: 1, .. })
        ));
    }

    #[test]
    fn test_empty_location_name() {
        assert!(matches!(
            parse(" ,B,1\n"),
            Err(PlannerError::ParseEdge { line: 1, .. })
        ));
    }

    #[test]
    fn test_fractional_first_weight_is_an_error() {
        let result = parse("Depot,Mall,4.5\nMall,Park,3\n");
        match result {
            Err(PlannerError::ParseEdge { line, .. }) => assert_eq!(line, 1),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_two_column_header_is_skipped() {
        let edges = parse("origin,destination\nA,B\n").unwrap();
        assert_eq!(edges, vec![edge("A", "B", 1)]);

        let edges = parse("From, To\nA,B,2\n").unwrap();
        assert_eq!(edges, vec![edge("A", "B", 2)]);
    }

    #[test]
    fn test_two_column_first_edge_is_kept() {
        let edges = parse("Depot,Mall\nMall,Park,3\n").unwrap();
        assert_eq!(edges, vec![edge("Depot", "Mall", 1), edge("Mall", "Park", 3)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").unwrap().is_empty());
    }
}
