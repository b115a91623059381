/// One vertex's tentative distance from the run's start vertex.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HeapNode {
    pub vertex: usize,
    pub start_vertex: usize,
    pub shortest_path: u64,
}

impl HeapNode {
    pub fn new(vertex: usize, start_vertex: usize, shortest_path: u64) -> Self {
        Self {
            vertex,
            start_vertex,
            shortest_path,
        }
    }
}

/// Fixed-capacity binary min-heap of [`HeapNode`]s keyed by `shortest_path`,
/// with a vertex -> slot index so any vertex's entry can be found and removed
/// in O(log n).
///
/// Vertex ids must lie in `0..capacity` and each id may be present at most
/// once. Overflow, underflow and out-of-range positions are programming
/// errors and panic.
#[derive(Debug)]
pub struct IndexedMinHeap {
    nodes: Vec<HeapNode>,
    positions: Vec<usize>,
}

impl IndexedMinHeap {
    const ABSENT: usize = usize::MAX;

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            positions: vec![Self::ABSENT; capacity],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    #[inline]
    pub fn contains(&self, vertex: usize) -> bool {
        self.position(vertex).is_some()
    }

    /// Current slot of `vertex`, or `None` once it has been removed (or was
    /// never inserted).
    #[inline]
    pub fn position(&self, vertex: usize) -> Option<usize> {
        match self.positions.get(vertex) {
            Some(&pos) if pos != Self::ABSENT => Some(pos),
            _ => None,
        }
    }

    #[inline]
    pub fn get(&self, position: usize) -> &HeapNode {
        &self.nodes[position]
    }

    #[inline]
    pub fn peek(&self) -> Option<&HeapNode> {
        self.nodes.first()
    }

    pub fn key_of(&self, vertex: usize) -> Option<u64> {
        self.position(vertex).map(|pos| self.nodes[pos].shortest_path)
    }

    pub fn insert(&mut self, node: HeapNode) {
        assert!(!self.is_full(), "heap overflow");
        assert!(node.vertex < self.capacity(), "vertex out of range");
        assert!(!self.contains(node.vertex), "vertex already in heap");

        let idx = self.nodes.len();
        self.nodes.push(node);
        self.positions[node.vertex] = idx;
        self.sift_up(idx);
    }

    /// Removes and returns the entry with the smallest key. Ties go to
    /// whichever entry the heap layout puts at the root.
    pub fn extract_min(&mut self) -> HeapNode {
        assert!(!self.is_empty(), "extract_min on an empty heap");
        let min = self.take_slot(0);
        if !self.is_empty() {
            self.sift_down(0);
        }
        min
    }

    /// Removes the entry stored at slot `position`.
    ///
    /// The last entry is moved into the vacated slot and then sifted toward
    /// whichever side violates the heap order: up if it beats its new parent,
    /// down otherwise.
    pub fn delete_at(&mut self, position: usize) -> HeapNode {
        assert!(position < self.len(), "invalid heap position");
        let removed = self.take_slot(position);
        if position < self.len() {
            if position > 0
                && self.nodes[parent_of(position)].shortest_path
                    > self.nodes[position].shortest_path
            {
                self.sift_up(position);
            } else {
                self.sift_down(position);
            }
        }
        removed
    }

    /// Lowers `vertex`'s key by deleting its entry and reinserting it with
    /// `shortest_path` replaced.
    pub fn decrease_key(&mut self, vertex: usize, shortest_path: u64) {
        let pos = match self.position(vertex) {
            Some(pos) => pos,
            None => panic!("decrease_key on vertex {vertex} which is not in the heap"),
        };
        let mut node = self.delete_at(pos);
        debug_assert!(shortest_path <= node.shortest_path, "key must not increase");
        node.shortest_path = shortest_path;
        self.insert(node);
    }

    /// Moves the last entry into `position` and returns what was there.
    /// Leaves heap order at `position` unrestored.
    fn take_slot(&mut self, position: usize) -> HeapNode {
        let removed = self.nodes.swap_remove(position);
        self.positions[removed.vertex] = Self::ABSENT;
        if let Some(moved) = self.nodes.get(position) {
            self.positions[moved.vertex] = position;
        }
        removed
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = parent_of(idx);
            if self.nodes[parent].shortest_path <= self.nodes[idx].shortest_path {
                break;
            }
            self.swap_slots(parent, idx);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.nodes.len();
        loop {
            let left = 2 * idx + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut child = left;
            if right < len && self.nodes[right].shortest_path < self.nodes[left].shortest_path {
                child = right;
            }
            if self.nodes[child].shortest_path >= self.nodes[idx].shortest_path {
                break;
            }
            self.swap_slots(idx, child);
            idx = child;
        }
    }

    #[inline]
    fn swap_slots(&mut self, a: usize, b: usize) {
        self.nodes.swap(a, b);
        self.positions[self.nodes[a].vertex] = a;
        self.positions[self.nodes[b].vertex] = b;
    }

    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        for pos in 1..self.nodes.len() {
            let parent = &self.nodes[parent_of(pos)];
            assert!(
                parent.shortest_path <= self.nodes[pos].shortest_path,
                "heap order broken at slot {pos}"
            );
        }
        for (pos, node) in self.nodes.iter().enumerate() {
            assert_eq!(self.positions[node.vertex], pos, "stale index for {}", node.vertex);
        }
        let indexed = self.positions.iter().filter(|&&p| p != Self::ABSENT).count();
        assert_eq!(indexed, self.nodes.len(), "index tracks absent vertices");
    }
}

#[inline]
fn parent_of(idx: usize) -> usize {
    (idx - 1) / 2
}
