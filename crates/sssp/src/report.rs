use std::io;
use std::io::Write;

use crate::LEGACY_SENTINEL;
use crate::dijkstra::ShortestPaths;
use crate::graph::Graph;

/// How an unreachable vertex is printed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum UnreachableStyle {
    /// The literal [`LEGACY_SENTINEL`], as older tooling expects.
    #[default]
    Sentinel,
    /// The word `unreachable`.
    Marker,
}

pub fn write_distances<W: Write>(
    out: &mut W,
    paths: &ShortestPaths,
    style: UnreachableStyle,
) -> io::Result<()> {
    let from = paths.start() + 1;
    for v in 0..paths.distances().len() {
        let to = v + 1;
        match (paths.distance(v), style) {
            (Some(d), _) => writeln!(out, "Shortest path from {from} to {to} is: {d}")?,
            (None, UnreachableStyle::Sentinel) => {
                writeln!(out, "Shortest path from {from} to {to} is: {LEGACY_SENTINEL}")?
            }
            (None, UnreachableStyle::Marker) => {
                writeln!(out, "Shortest path from {from} to {to} is: unreachable")?
            }
        }
    }
    Ok(())
}

pub fn write_graph<W: Write>(out: &mut W, graph: &Graph) -> io::Result<()> {
    writeln!(
        out,
        "Graph has {} vertices and {} arc(s).",
        graph.vertex_count(),
        graph.edge_count()
    )?;
    for v in 0..graph.vertex_count() {
        write!(out, "Vertex {} has arc(s) with: ", v + 1)?;
        let edges = graph.out_edges(v);
        if edges.is_empty() {
            write!(out, "nobody")?;
        }
        for edge in edges {
            write!(out, "{}({}) ", edge.to + 1, edge.weight)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
