//! Dense backing: a row-major `n × n` weight grid plus a parallel existence grid.
//!
//! A weight of `0.0` is a legitimate edge weight, so presence is tracked
//! separately instead of reserving a sentinel weight.

use crate::collections::try_filled;
use crate::error::{GraphError, Result};

pub(crate) struct AdjacencyMatrix {
    weights: Vec<f64>,
    exists: Vec<bool>,
    n: usize,
}

impl AdjacencyMatrix {
    /// Allocates both grids for `n` vertices.
    ///
    /// If the second grid cannot be allocated, the first one is dropped on the
    /// way out of `?`, so a failed construction leaves nothing behind.
    pub(crate) fn new(n: usize) -> Result<Self> {
        let cells = n
            .checked_mul(n)
            .ok_or(GraphError::CapacityOverflow { vertex_count: n })?;
        let weights = try_filled(cells, 0.0_f64)?;
        let exists = try_filled(cells, false)?;
        Ok(Self { weights, exists, n })
    }

    #[inline(always)]
    fn cell(&self, row: usize, col: usize) -> usize {
        row * self.n + col
    }

    #[inline]
    pub(crate) fn contains(&self, from: usize, to: usize) -> bool {
        self.exists[self.cell(from, to)]
    }

    #[inline]
    pub(crate) fn weight(&self, from: usize, to: usize) -> Option<f64> {
        let i = self.cell(from, to);
        self.exists[i].then(|| self.weights[i])
    }

    /// Writes `from -> to`. Returns `true` if the cell was previously empty.
    pub(crate) fn set(&mut self, from: usize, to: usize, weight: f64) -> bool {
        let i = self.cell(from, to);
        self.weights[i] = weight;
        !std::mem::replace(&mut self.exists[i], true)
    }

    /// Clears `from -> to`. Returns `true` if an edge was there.
    pub(crate) fn unset(&mut self, from: usize, to: usize) -> bool {
        let i = self.cell(from, to);
        self.weights[i] = 0.0;
        std::mem::replace(&mut self.exists[i], false)
    }

    /// Existence flags of one row, indexed by destination.
    #[inline]
    pub(crate) fn row(&self, vertex: usize) -> &[bool] {
        let start = self.cell(vertex, 0);
        &self.exists[start..start + self.n]
    }

    /// Weight stored at a cell, present or not.
    #[inline]
    pub(crate) fn raw_weight(&self, from: usize, to: usize) -> f64 {
        self.weights[self.cell(from, to)]
    }

    pub(crate) fn out_degree(&self, vertex: usize) -> usize {
        self.row(vertex).iter().filter(|&&set| set).count()
    }

    pub(crate) fn in_degree(&self, vertex: usize) -> usize {
        (0..self.n).filter(|&row| self.contains(row, vertex)).count()
    }

    pub(crate) fn clear(&mut self) {
        self.weights.fill(0.0);
        self.exists.fill(false);
    }
}
