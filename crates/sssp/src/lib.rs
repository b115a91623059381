mod dijkstra;
pub mod generator;
pub mod graph;
pub mod heap;
pub mod loader;
pub mod report;

pub use dijkstra::RunStats;
pub use dijkstra::Settled;
pub use dijkstra::ShortestPathEngine;
pub use dijkstra::ShortestPaths;
pub use dijkstra::dijkstra_indexed_heap;
pub use graph::Edge;
pub use graph::Graph;
pub use heap::HeapNode;
pub use heap::IndexedMinHeap;
pub use loader::GraphInput;
pub use loader::LoadError;

/// Distance of a vertex the start cannot reach. Path sums saturate here.
pub const INF: u64 = u64::MAX / 4;

/// What the text report prints for an unreachable vertex by default.
pub const LEGACY_SENTINEL: u64 = 1_000_000;

#[cfg(test)]
mod tests {
    use crate::INF;
    use crate::ShortestPathEngine;
    use crate::dijkstra_indexed_heap;
    use crate::generator::GraphCase;
    use crate::generator::generate_case;
    use crate::graph::Graph;
    use crate::loader::parse_graph;

    fn bellman_ford(graph: &Graph, source: usize) -> Vec<u64> {
        let mut dist = vec![INF; graph.vertex_count()];
        dist[source] = 0;
        loop {
            let mut changed = false;
            for (u, edge) in graph.edges() {
                if dist[u] == INF {
                    continue;
                }
                let cand = (dist[u] + edge.weight).min(INF);
                let v = edge.to as usize;
                if cand < dist[v] {
                    dist[v] = cand;
                    changed = true;
                }
            }
            if !changed {
                return dist;
            }
        }
    }

    #[test]
    fn generated_cases_match_bellman_ford() {
        for (i, case) in GraphCase::ALL.into_iter().enumerate() {
            for size in [64, 400] {
                let input = generate_case(case, size, 0x5EED_0000 + i as u64);
                let expected = bellman_ford(&input.graph, input.source);
                let got = dijkstra_indexed_heap(&input.graph, input.source);
                assert_eq!(got, expected, "case={:?} size={size}", case);
            }
        }
    }

    #[test]
    fn islands_leave_vertices_unreachable() {
        let input = generate_case(GraphCase::Islands, 64, 7);
        let paths = ShortestPathEngine::new(&input.graph, input.source).run();
        for v in 0..input.graph.vertex_count() {
            if v % 4 != input.source % 4 {
                assert_eq!(paths.distances()[v], INF);
                assert_eq!(paths.distance(v), None);
            }
        }
    }

    #[test]
    fn parsed_scenarios() {
        let cases: [(&str, Vec<u64>); 4] = [
            ("3 1\n1 2,5 3,1\n3 2,1\n", vec![0, 2, 1]),
            ("1 1\n", vec![0]),
            ("3 1\n1 2,3\n3 2,1\n", vec![0, 3, INF]),
            ("2 1\n1 2,5\n1 2,2\n", vec![0, 2]),
        ];
        for (text, expected) in cases {
            let input = parse_graph(text).unwrap();
            assert_eq!(dijkstra_indexed_heap(&input.graph, input.start), expected, "{text:?}");
        }
    }
}
