//! Sparse backing: one insertion-ordered edge-record sequence per vertex.
//!
//! Operations here are purely directional. Mirroring undirected edges and
//! keeping the logical edge count is the store's job.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `upsert` | \(O(\text{out-degree})\) | Checks for existence first |
//! | `remove` | \(O(\text{out-degree})\) | Order-preserving removal |
//! | `weight` | \(O(\text{out-degree})\) | Linear scan |
//! | `out_degree` | \(O(1)\) | `Vec::len` |
//! | `in_degree` | \(O(n + m)\) | Scans every sequence |

use crate::error::Result;
use crate::graph::edge::EdgeRecord;

pub(crate) struct AdjacencyList {
    lists: Vec<Vec<EdgeRecord>>,
}

impl AdjacencyList {
    /// Allocates one empty sequence per vertex.
    ///
    /// Empty `Vec`s do not allocate, so the only fallible step is the outer
    /// vector; on failure nothing has been built yet.
    pub(crate) fn new(vertex_count: usize) -> Result<Self> {
        let mut lists = Vec::new();
        lists.try_reserve_exact(vertex_count)?;
        lists.resize_with(vertex_count, Vec::new);
        Ok(Self { lists })
    }

    #[inline(always)]
    pub(crate) fn records(&self, vertex: usize) -> &[EdgeRecord] {
        &self.lists[vertex]
    }

    fn position(&self, from: usize, to: usize) -> Option<usize> {
        self.lists[from].iter().position(|r| r.to == to)
    }

    pub(crate) fn weight(&self, from: usize, to: usize) -> Option<f64> {
        self.lists[from].iter().find(|r| r.to == to).map(|r| r.weight)
    }

    pub(crate) fn contains(&self, from: usize, to: usize) -> bool {
        self.position(from, to).is_some()
    }

    /// Guarantees that one more record can be appended to `from` without allocating.
    pub(crate) fn reserve_slot(&mut self, from: usize) -> Result<()> {
        self.lists[from].try_reserve(1)?;
        Ok(())
    }

    /// Overwrites the weight of `from -> to` in place, or appends it.
    ///
    /// Returns `true` if a new record was appended. Call [`Self::reserve_slot`]
    /// first if the append must not allocate.
    pub(crate) fn upsert(&mut self, from: usize, to: usize, weight: f64) -> bool {
        match self.position(from, to) {
            Some(i) => {
                self.lists[from][i].weight = weight;
                false
            }
            None => {
                self.lists[from].push(EdgeRecord::new(to, weight));
                true
            }
        }
    }

    /// Removes `from -> to`, keeping the remaining records in order.
    pub(crate) fn remove(&mut self, from: usize, to: usize) -> bool {
        match self.position(from, to) {
            Some(i) => {
                self.lists[from].remove(i);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub(crate) fn out_degree(&self, vertex: usize) -> usize {
        self.lists[vertex].len()
    }

    pub(crate) fn in_degree(&self, vertex: usize) -> usize {
        self.lists
            .iter()
            .map(|list| list.iter().filter(|r| r.to == vertex).count())
            .sum()
    }

    /// Drops every record but keeps the per-vertex allocations for reuse.
    pub(crate) fn clear(&mut self) {
        for list in &mut self.lists {
            list.clear();
        }
    }
}
