//! Backing representations behind [`Graph`](crate::Graph).
//!
//! The two layouts are variants of one enum; each operation matches on the
//! variant once and then runs representation-specific code, so there is no
//! dynamic dispatch on the hot paths.

mod list;
mod matrix;

pub(crate) use list::AdjacencyList;
pub(crate) use matrix::AdjacencyMatrix;

use crate::error::Result;
use crate::graph::kind::Representation;

pub(crate) enum Storage {
    List(AdjacencyList),
    Matrix(AdjacencyMatrix),
}

impl Storage {
    pub(crate) fn new(vertex_count: usize, representation: Representation) -> Result<Self> {
        Ok(match representation {
            Representation::AdjacencyList => Storage::List(AdjacencyList::new(vertex_count)?),
            Representation::AdjacencyMatrix => {
                Storage::Matrix(AdjacencyMatrix::new(vertex_count)?)
            }
        })
    }

    pub(crate) fn representation(&self) -> Representation {
        match self {
            Storage::List(_) => Representation::AdjacencyList,
            Storage::Matrix(_) => Representation::AdjacencyMatrix,
        }
    }

    pub(crate) fn contains(&self, from: usize, to: usize) -> bool {
        match self {
            Storage::List(l) => l.contains(from, to),
            Storage::Matrix(m) => m.contains(from, to),
        }
    }

    pub(crate) fn weight(&self, from: usize, to: usize) -> Option<f64> {
        match self {
            Storage::List(l) => l.weight(from, to),
            Storage::Matrix(m) => m.weight(from, to),
        }
    }

    /// Makes sure inserting the given directional records cannot fail halfway.
    ///
    /// Matrices never allocate on insert. Lists reserve one slot per
    /// source vertex before anything is written.
    pub(crate) fn reserve_for(&mut self, sources: &[usize]) -> Result<()> {
        if let Storage::List(l) = self {
            for &from in sources {
                l.reserve_slot(from)?;
            }
        }
        Ok(())
    }

    /// Returns `true` if a new directional record was created.
    pub(crate) fn upsert(&mut self, from: usize, to: usize, weight: f64) -> bool {
        match self {
            Storage::List(l) => l.upsert(from, to, weight),
            Storage::Matrix(m) => m.set(from, to, weight),
        }
    }

    pub(crate) fn remove(&mut self, from: usize, to: usize) -> bool {
        match self {
            Storage::List(l) => l.remove(from, to),
            Storage::Matrix(m) => m.unset(from, to),
        }
    }

    pub(crate) fn out_degree(&self, vertex: usize) -> usize {
        match self {
            Storage::List(l) => l.out_degree(vertex),
            Storage::Matrix(m) => m.out_degree(vertex),
        }
    }

    pub(crate) fn in_degree(&self, vertex: usize) -> usize {
        match self {
            Storage::List(l) => l.in_degree(vertex),
            Storage::Matrix(m) => m.in_degree(vertex),
        }
    }

    pub(crate) fn clear(&mut self) {
        match self {
            Storage::List(l) => l.clear(),
            Storage::Matrix(m) => m.clear(),
        }
    }
}
