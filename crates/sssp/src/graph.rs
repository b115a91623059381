use std::collections::TryReserveError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Edge {
    pub to: u32,
    pub weight: u64,
}

/// Directed weighted graph stored as one edge list per tail vertex.
///
/// Vertices are `0..vertex_count()`. Edges keep the order they were added in,
/// parallel edges and self-loops included.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

impl Graph {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_count: 0,
        }
    }

    /// Like [`Graph::new`], but reports a vertex count too large to allocate
    /// instead of aborting.
    pub fn try_new(vertex_count: usize) -> Result<Self, TryReserveError> {
        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(vertex_count)?;
        adjacency.resize_with(vertex_count, Vec::new);
        Ok(Self {
            adjacency,
            edge_count: 0,
        })
    }

    pub fn from_edges(vertex_count: usize, edges: &[(u32, u32, u64)]) -> Self {
        let mut graph = Self::new(vertex_count);
        for &(from, to, weight) in edges {
            graph.add_edge(from as usize, to as usize, weight);
        }
        graph
    }

    pub fn add_edge(&mut self, from: usize, to: usize, weight: u64) {
        let n = self.vertex_count();
        assert!(from < n, "from vertex out of range");
        assert!(to < n, "to vertex out of range");
        self.adjacency[from].push(Edge {
            to: to as u32,
            weight,
        });
        self.edge_count += 1;
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub fn out_degree(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }

    #[inline]
    pub fn out_edges(&self, v: usize) -> &[Edge] {
        &self.adjacency[v]
    }

    /// All edges as `(tail, edge)`, grouped by tail in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, Edge)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, out)| out.iter().map(move |&edge| (from, edge)))
    }

    pub fn edges_vec(&self) -> Vec<(u32, u32, u64)> {
        self.edges()
            .map(|(from, edge)| (from as u32, edge.to, edge.weight))
            .collect()
    }
}
