//! Text graph format.
//!
//! ```text
//! 3 1
//! 1 2,5 3,1
//! 3 2,1
//! ```
//!
//! The first two integers are the vertex count and the 1-based start vertex.
//! Every following line starts with a 1-based tail vertex and lists
//! `head,weight` pairs, each adding one directed edge from that tail. A tail
//! that is not a positive integer skips the line; a malformed pair or a head
//! below 1 ends the line, keeping the edges read before it.
//!
//! Text after the start vertex on the header line is treated as an edge line
//! of its own, so `3 1 2,5` adds no edge: `2,5` is not a valid tail.

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use log::debug;
use log::warn;
use thiserror::Error;

use crate::graph::Graph;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not open file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Could not read number of vertices the graph has.")]
    MissingVertexCount,
    #[error("Could not read the start vertex.")]
    MissingStartVertex,
    #[error("Cannot allocate a graph with {n} vertices.")]
    TooManyVertices { n: usize },
    #[error("Start vertex {start} is not in 1..={n}.")]
    StartOutOfRange { start: i64, n: usize },
    #[error("Line {line}: vertex {vertex} is not in 1..={n}.")]
    VertexOutOfRange { line: usize, vertex: i64, n: usize },
}

/// A parsed graph and its 0-based start vertex.
#[derive(Clone, Debug)]
pub struct GraphInput {
    pub graph: Graph,
    pub start: usize,
}

pub fn load_graph(path: impl AsRef<Path>) -> Result<GraphInput, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let input = parse_graph(&text)?;
    debug!(
        "loaded {}: {} vertices, {} edges, start {}",
        path.display(),
        input.graph.vertex_count(),
        input.graph.edge_count(),
        input.start + 1
    );
    Ok(input)
}

pub fn parse_graph(text: &str) -> Result<GraphInput, LoadError> {
    let mut lines = text.lines().enumerate();

    // The header may span lines; whatever follows the start vertex on its
    // line is read as an edge line.
    let mut header: Vec<&str> = Vec::with_capacity(2);
    let mut header_tail = None;
    while header.len() < 2 {
        let Some((idx, line)) = lines.next() else {
            break;
        };
        let mut rest = line;
        while header.len() < 2 {
            let trimmed = rest.trim_start();
            if trimmed.is_empty() {
                break;
            }
            let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
            header.push(&trimmed[..end]);
            rest = &trimmed[end..];
        }
        if header.len() == 2 {
            header_tail = Some((idx, rest));
        }
    }

    let n = header
        .first()
        .and_then(|tok| tok.parse::<usize>().ok())
        .ok_or(LoadError::MissingVertexCount)?;
    let start = header
        .get(1)
        .and_then(|tok| tok.parse::<i64>().ok())
        .ok_or(LoadError::MissingStartVertex)?;
    if start < 1 || start as u64 > n as u64 {
        return Err(LoadError::StartOutOfRange { start, n });
    }

    let mut graph = Graph::try_new(n).map_err(|_| LoadError::TooManyVertices { n })?;
    if let Some((idx, rest)) = header_tail.filter(|(_, rest)| !rest.trim().is_empty()) {
        warn!(
            "line {}: {:?} follows the start vertex and is read as an edge line",
            idx + 1,
            rest.trim()
        );
    }
    for (idx, line) in header_tail.into_iter().chain(lines) {
        parse_edge_line(&mut graph, idx + 1, line)?;
    }

    Ok(GraphInput {
        graph,
        start: (start - 1) as usize,
    })
}

fn parse_edge_line(graph: &mut Graph, line_no: usize, line: &str) -> Result<(), LoadError> {
    let n = graph.vertex_count();
    let mut tokens = line.split_ascii_whitespace();

    let Some(tail) = tokens.next().and_then(|tok| tok.parse::<i64>().ok()) else {
        return Ok(());
    };
    if tail < 1 {
        return Ok(());
    }
    let tail = checked_vertex(tail, n, line_no)?;

    for tok in tokens {
        let Some((head, weight)) = parse_arc(tok) else {
            warn!("line {line_no}: malformed arc {tok:?}, skipping rest of line");
            break;
        };
        if head < 1 {
            break;
        }
        let head = checked_vertex(head, n, line_no)?;
        graph.add_edge(tail, head, weight);
    }
    Ok(())
}

fn parse_arc(tok: &str) -> Option<(i64, u64)> {
    let (head, weight) = tok.split_once(',')?;
    Some((head.parse().ok()?, weight.parse().ok()?))
}

fn checked_vertex(vertex: i64, n: usize, line: usize) -> Result<usize, LoadError> {
    if vertex as u64 > n as u64 {
        return Err(LoadError::VertexOutOfRange { line, vertex, n });
    }
    Ok((vertex - 1) as usize)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::graph::Edge;

    #[test]
    fn parses_edges_per_line() {
        let input = parse_graph("3 1\n1 2,5 3,1\n3 2,1\n").unwrap();
        assert_eq!(input.start, 0);
        assert_eq!(input.graph.vertex_count(), 3);
        assert_eq!(input.graph.edges_vec(), vec![(0, 1, 5), (0, 2, 1), (2, 1, 1)]);
    }

    #[test]
    fn header_across_lines_and_trailing_arcs() {
        let input = parse_graph("4\n2 1,7\n\n1\t4,3\r\n").unwrap();
        assert_eq!(input.start, 1);
        assert_eq!(input.graph.edges_vec(), vec![(0, 3, 3)]);

        let input = parse_graph("2\n2 2,7\n").unwrap();
        // "2,7" after the start vertex is not a tail, so the line is skipped.
        assert_eq!(input.graph.edge_count(), 0);

        let input = parse_graph("3 1 2,5\n1 3,4\n").unwrap();
        assert_eq!(input.start, 0);
        assert_eq!(input.graph.edges_vec(), vec![(0, 2, 4)]);
    }

    #[test]
    fn bad_tokens_end_the_line() {
        let text = "3 1\n\
                    1 2,4 oops 3,1\n\
                    2 0,9 3,2\n\
                    3 1,-5 2,2\n\
                    0 1,1\n\
                    x 1,1\n";
        let input = parse_graph(text).unwrap();
        assert_eq!(input.graph.out_edges(0), &[Edge { to: 1, weight: 4 }]);
        assert!(input.graph.out_edges(1).is_empty());
        assert!(input.graph.out_edges(2).is_empty());
    }

    #[test]
    fn header_errors() {
        assert!(matches!(parse_graph(""), Err(LoadError::MissingVertexCount)));
        assert!(matches!(parse_graph("abc 1"), Err(LoadError::MissingVertexCount)));
        assert!(matches!(parse_graph("3\n"), Err(LoadError::MissingStartVertex)));
        assert!(matches!(parse_graph("3 z"), Err(LoadError::MissingStartVertex)));
        assert!(matches!(
            parse_graph("3 4"),
            Err(LoadError::StartOutOfRange { start: 4, n: 3 })
        ));
        assert!(matches!(
            parse_graph("0 1"),
            Err(LoadError::StartOutOfRange { start: 1, n: 0 })
        ));

        let huge = format!("{} 1\n", usize::MAX);
        let err = parse_graph(&huge).unwrap_err();
        assert!(matches!(err, LoadError::TooManyVertices { n } if n == usize::MAX));
        assert!(err.to_string().starts_with("Cannot allocate a graph"));
    }

    #[test]
    fn rejects_vertices_past_n() {
        let err = parse_graph("2 1\n1 2,1\n1 3,1\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::VertexOutOfRange {
                line: 3,
                vertex: 3,
                n: 2
            }
        ));
        assert!(matches!(
            parse_graph("2 1\n5 1,1\n"),
            Err(LoadError::VertexOutOfRange { vertex: 5, .. })
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "2 1").unwrap();
        writeln!(file, "1 2,5 2,2").unwrap();
        let input = load_graph(file.path()).unwrap();
        assert_eq!(input.graph.edges_vec(), vec![(0, 1, 5), (0, 1, 2)]);
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_graph(dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
        assert!(err.to_string().starts_with("Could not open file"));
    }
}
