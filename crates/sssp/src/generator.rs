use std::collections::HashSet;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::graph::Graph;

const C_MAX: u64 = 1_000_000_000;

/// Seeded graph families for tests and benches.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GraphCase {
    SparseRandom,
    DenseRandom,
    DenseZero,
    AlmostLine,
    GridRandom,
    /// Several components with no edges between them; most vertices are
    /// unreachable from the source.
    Islands,
}

impl GraphCase {
    pub const ALL: [GraphCase; 6] = [
        Self::SparseRandom,
        Self::DenseRandom,
        Self::DenseZero,
        Self::AlmostLine,
        Self::GridRandom,
        Self::Islands,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::SparseRandom => "sparse_random",
            Self::DenseRandom => "dense_random",
            Self::DenseZero => "dense_zero",
            Self::AlmostLine => "almost_line",
            Self::GridRandom => "grid_random",
            Self::Islands => "islands",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GeneratedGraph {
    pub graph: Graph,
    pub source: usize,
}

pub fn generate_case(case: GraphCase, size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    match case {
        GraphCase::SparseRandom => sparse_random(&mut rng, size.max(32), 4),
        GraphCase::DenseRandom => dense(&mut rng, floor_sqrt(size).max(8), |rng| {
            rng.random_range(0..=C_MAX)
        }),
        GraphCase::DenseZero => dense(&mut rng, floor_sqrt(size).max(8), |_| 0),
        GraphCase::AlmostLine => almost_line(&mut rng, size.max(8)),
        GraphCase::GridRandom => grid_random(&mut rng, size.max(64)),
        GraphCase::Islands => islands(&mut rng, size.max(32)),
    }
}

fn sparse_random(rng: &mut StdRng, n: usize, edge_factor: usize) -> GeneratedGraph {
    let m_target = n.saturating_mul(edge_factor).min(complete_edges(n));
    let mut edges = Vec::with_capacity(m_target);
    let mut used = HashSet::with_capacity(m_target * 2 + 1);

    while edges.len() < m_target {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        push_unique_edge(&mut edges, &mut used, u, v, rng.random_range(0..=C_MAX));
    }

    GeneratedGraph {
        graph: Graph::from_edges(n, &edges),
        source: rng.random_range(0..n),
    }
}

fn dense(rng: &mut StdRng, n: usize, mut weight: impl FnMut(&mut StdRng) -> u64) -> GeneratedGraph {
    let mut edges = Vec::with_capacity(complete_edges(n));
    for u in 0..n {
        for v in 0..n {
            if u != v {
                edges.push((u as u32, v as u32, weight(&mut *rng)));
            }
        }
    }

    GeneratedGraph {
        graph: Graph::from_edges(n, &edges),
        source: rng.random_range(0..n),
    }
}

/// A path `0 -> 1 -> ... -> n-1` plus short forward and backward chords,
/// with vertex ids shuffled.
fn almost_line(rng: &mut StdRng, n: usize) -> GeneratedGraph {
    let mut edges = Vec::with_capacity(n * 2);
    let mut used = HashSet::with_capacity(n * 4);

    for i in 0..(n - 1) {
        push_unique_edge(&mut edges, &mut used, i, i + 1, rng.random_range(0..=C_MAX));
    }

    let m_target = n.saturating_mul(2).min(complete_edges(n));
    while edges.len() < m_target {
        let a = rng.random_range(0..(n - 2));
        let b = (a + rng.random_range(2..=3)).min(n - 1);
        let (u, v) = if rng.random_bool(0.5) { (b, a) } else { (a, b) };
        push_unique_edge(&mut edges, &mut used, u, v, rng.random_range(0..=C_MAX));
    }

    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    for edge in &mut edges {
        edge.0 = perm[edge.0 as usize] as u32;
        edge.1 = perm[edge.1 as usize] as u32;
    }
    edges.shuffle(rng);

    GeneratedGraph {
        graph: Graph::from_edges(n, &edges),
        source: perm[0],
    }
}

/// Square grid with edges in all four directions.
fn grid_random(rng: &mut StdRng, size: usize) -> GeneratedGraph {
    let len = floor_sqrt(size).max(4);
    let n = len * len;
    let index = |i: usize, j: usize| (i * len + j) as u32;
    let mut edges = Vec::with_capacity(n * 4);

    for i in 0..len {
        for j in 0..len {
            let mut neighbours = Vec::with_capacity(4);
            if j + 1 < len {
                neighbours.push(index(i, j + 1));
            }
            if i + 1 < len {
                neighbours.push(index(i + 1, j));
            }
            if j > 0 {
                neighbours.push(index(i, j - 1));
            }
            if i > 0 {
                neighbours.push(index(i - 1, j));
            }
            for v in neighbours {
                edges.push((index(i, j), v, rng.random_range(0..=C_MAX)));
            }
        }
    }

    edges.shuffle(rng);
    GeneratedGraph {
        graph: Graph::from_edges(n, &edges),
        source: rng.random_range(0..n),
    }
}

fn islands(rng: &mut StdRng, n: usize) -> GeneratedGraph {
    let count = 4;
    let island_of = |v: usize| v % count;
    let m_target = n * 3;
    let mut edges = Vec::with_capacity(m_target);
    let mut used = HashSet::with_capacity(m_target * 2);

    while edges.len() < m_target {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        if island_of(u) == island_of(v) {
            push_unique_edge(&mut edges, &mut used, u, v, rng.random_range(0..=1_000));
        }
    }

    GeneratedGraph {
        graph: Graph::from_edges(n, &edges),
        source: rng.random_range(0..n),
    }
}

#[inline]
fn complete_edges(n: usize) -> usize {
    n.saturating_mul(n.saturating_sub(1))
}

#[inline]
fn floor_sqrt(value: usize) -> usize {
    (value as f64).sqrt().floor() as usize
}

#[inline]
fn push_unique_edge(
    edges: &mut Vec<(u32, u32, u64)>,
    used: &mut HashSet<u64>,
    u: usize,
    v: usize,
    weight: u64,
) -> bool {
    if u == v {
        return false;
    }
    let key = ((u as u64) << 32) | v as u64;
    if used.insert(key) {
        edges.push((u as u32, v as u32, weight));
        true
    } else {
        false
    }
}
