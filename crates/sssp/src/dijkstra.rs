use log::debug;
use log::trace;

use crate::INF;
use crate::graph::Graph;
use crate::heap::HeapNode;
use crate::heap::IndexedMinHeap;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Settled {
    pub vertex: usize,
    pub distance: u64,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RunStats {
    pub settled: usize,
    /// Edges examined whose head was still unsettled.
    pub relaxations: usize,
    pub decrease_keys: usize,
}

/// Final distances of one run. Unreachable vertices hold [`INF`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShortestPaths {
    start: usize,
    distances: Vec<u64>,
    settle_order: Vec<usize>,
    stats: RunStats,
}

impl ShortestPaths {
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn distances(&self) -> &[u64] {
        &self.distances
    }

    /// `None` when `v` cannot be reached from the start vertex.
    pub fn distance(&self, v: usize) -> Option<u64> {
        Some(self.distances[v]).filter(|&d| d < INF)
    }

    pub fn is_reachable(&self, v: usize) -> bool {
        self.distance(v).is_some()
    }

    /// Vertices in the order they were extracted from the heap.
    #[inline]
    pub fn settle_order(&self) -> &[usize] {
        &self.settle_order
    }

    #[inline]
    pub fn stats(&self) -> RunStats {
        self.stats
    }

    pub fn into_distances(self) -> Vec<u64> {
        self.distances
    }
}

/// Dijkstra over an [`IndexedMinHeap`] holding every vertex from the start.
///
/// Each step extracts the closest unsettled vertex, fixes its distance and
/// lowers the heap keys of its unsettled out-neighbours through
/// [`IndexedMinHeap::decrease_key`]. Weights are assumed non-negative and
/// path sums saturate at [`INF`].
pub struct ShortestPathEngine<'a> {
    graph: &'a Graph,
    start: usize,
    heap: IndexedMinHeap,
    visited: Vec<bool>,
    distances: Vec<u64>,
    settle_order: Vec<usize>,
    stats: RunStats,
}

impl<'a> ShortestPathEngine<'a> {
    pub fn new(graph: &'a Graph, start: usize) -> Self {
        let n = graph.vertex_count();
        assert!(start < n, "start vertex out of range");

        let mut heap = IndexedMinHeap::with_capacity(n);
        for v in 0..n {
            let key = if v == start { 0 } else { INF };
            heap.insert(HeapNode::new(v, start, key));
        }

        Self {
            graph,
            start,
            heap,
            visited: vec![false; n],
            distances: vec![INF; n],
            settle_order: Vec::with_capacity(n),
            stats: RunStats::default(),
        }
    }

    /// Settles one vertex and relaxes its outgoing edges. Returns `None` once
    /// every vertex is settled.
    pub fn settle_next(&mut self) -> Option<Settled> {
        if self.heap.is_empty() {
            return None;
        }

        let node = self.heap.extract_min();
        let (u, d) = (node.vertex, node.shortest_path);
        self.visited[u] = true;
        self.distances[u] = d;
        self.settle_order.push(u);
        self.stats.settled += 1;
        trace!("settled vertex {u} at distance {d}");

        let graph = self.graph;
        for edge in graph.out_edges(u) {
            let v = edge.to as usize;
            if self.visited[v] {
                continue;
            }
            self.stats.relaxations += 1;

            let cand = d.saturating_add(edge.weight).min(INF);
            if self.heap.key_of(v).is_some_and(|current| current > cand) {
                self.heap.decrease_key(v, cand);
                self.stats.decrease_keys += 1;
            }
        }

        Some(Settled {
            vertex: u,
            distance: d,
        })
    }

    pub fn run(mut self) -> ShortestPaths {
        while self.settle_next().is_some() {}
        debug_assert_eq!(self.stats.settled, self.graph.vertex_count());

        debug!(
            "shortest paths from {}: settled={} relaxations={} decrease_keys={}",
            self.start, self.stats.settled, self.stats.relaxations, self.stats.decrease_keys
        );

        ShortestPaths {
            start: self.start,
            distances: self.distances,
            settle_order: self.settle_order,
            stats: self.stats,
        }
    }
}

pub fn dijkstra_indexed_heap(graph: &Graph, source: usize) -> Vec<u64> {
    ShortestPathEngine::new(graph, source).run().into_distances()
}
