/*
 * Copyright (c) 2019-2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! The residual capacity matrix.
//!
//! A [`ResidualMatrix`] stores for every ordered pair `(u,v)` of nodes the
//! remaining capacity from `u` to `v`. It is the single mutable data
//! structure of a flow computation: the solver repeatedly decreases the
//! residual capacity along the edges of an augmenting path and increases it
//! on the paired reverse entries, which is what permits later flow
//! cancellation.
//!
//! For all pairs `(u,v)` the sum `residual(u,v) + residual(v,u)` is
//! invariant under [`augment`](ResidualMatrix::augment), it always equals
//! the total capacity installed on the pair at construction time.
//!
//! # Example
//!
//! ```
//! use flownet::ResidualMatrix;
//!
//! let mut resid = ResidualMatrix::from_edges(3, vec![(0, 1, 4), (1, 2, 7)]);
//! assert_eq!(resid.residual(0, 1), 4);
//! assert_eq!(resid.residual(1, 0), 0);
//!
//! resid.augment(0, 1, 3);
//! assert_eq!(resid.residual(0, 1), 1);
//! assert_eq!(resid.residual(1, 0), 3);
//! ```

use crate::num::traits::NumAssign;

/// A dense matrix of residual capacities.
///
/// The matrix is indexed by the internal node numbers `0..n`. It is a pure
/// value type that is exclusively owned by one flow computation, built
/// fresh per solve and discarded afterwards.
pub struct ResidualMatrix<F> {
    n: usize,
    cells: Vec<F>,
}

impl<F> ResidualMatrix<F>
where
    F: NumAssign + Ord + Copy,
{
    /// Create an `n` × `n` matrix with all residual capacities zero.
    pub fn new(n: usize) -> Self {
        ResidualMatrix {
            n,
            cells: vec![F::zero(); n * n],
        }
    }

    /// Create a matrix from a list of edges `(u, v, capacity)`.
    ///
    /// Equivalent to calling [`add_capacity`](Self::add_capacity) for each
    /// edge on a fresh matrix.
    pub fn from_edges<I>(n: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, F)>,
    {
        let mut resid = Self::new(n);
        for (u, v, cap) in edges {
            resid.add_capacity(u, v, cap);
        }
        resid
    }

    /// Return the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.n
    }

    /// Install additional capacity on the pair `(u,v)`.
    ///
    /// The capacity is *added* to the current entry, so parallel logical
    /// edges accumulate. A caller wanting replacement semantics must
    /// collapse duplicate pairs before building the matrix.
    ///
    /// Panics if `cap` is negative.
    pub fn add_capacity(&mut self, u: usize, v: usize, cap: F) {
        assert!(cap >= F::zero(), "Capacities must be non-negative");
        let idx = self.index(u, v);
        self.cells[idx] += cap;
    }

    /// Return the residual capacity from `u` to `v`.
    pub fn residual(&self, u: usize, v: usize) -> F {
        self.cells[self.index(u, v)]
    }

    /// Push `amount` units of flow over `(u,v)`.
    ///
    /// Decreases the residual capacity of `(u,v)` and increases the one of
    /// `(v,u)` by the same amount.
    ///
    /// Panics if `amount` is negative or exceeds the current residual
    /// capacity of `(u,v)`. Both indicate a defect in the calling solver,
    /// not invalid user input.
    pub fn augment(&mut self, u: usize, v: usize, amount: F) {
        assert!(amount >= F::zero(), "Augmentation amount must be non-negative");
        let fwd = self.index(u, v);
        assert!(
            amount <= self.cells[fwd],
            "Augmentation amount exceeds the residual capacity"
        );
        self.cells[fwd] -= amount;
        let bwd = self.index(v, u);
        self.cells[bwd] += amount;
    }

    fn index(&self, u: usize, v: usize) -> usize {
        debug_assert!(u < self.n && v < self.n);
        u * self.n + v
    }
}
