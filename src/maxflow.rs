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

//! This module implements the max flow algorithm of Edmonds-Karp.
//!
//! The solver repeatedly searches a shortest augmenting path with
//! [`augmenting_path`] and pushes the bottleneck amount of flow along it,
//! until the sink is no longer reachable in the residual matrix. With
//! breadth-first path selection the number of augmentations is bounded by
//! O(V·E) for arbitrary non-negative integral capacities. Non-integral
//! capacity types (e.g. ordered floating point wrappers) are accepted, but
//! this termination bound does not carry over to them.
//!
//! # Example
//!
//! ```
//! use flownet::ResidualMatrix;
//! use flownet::maxflow::EdmondsKarp;
//!
//! // two paths from 0 to 3, sharing no edge
//! let resid = ResidualMatrix::from_edges(4, vec![(0, 1, 10), (0, 2, 5), (1, 3, 8), (2, 3, 10)]);
//!
//! let mut maxflow = EdmondsKarp::new(resid);
//! maxflow.solve(0, 3);
//!
//! assert_eq!(maxflow.value(), 13);
//! assert_eq!(maxflow.flow(0, 1, 10), 8);
//! assert_eq!(maxflow.flow(0, 2, 5), 5);
//! assert_eq!(maxflow.mincut(), vec![0, 1]);
//! ```

use crate::num::traits::NumAssign;
use crate::residual::ResidualMatrix;
use crate::search::{augmenting_path, UNREACHED};

use std::cmp::min;

/// Max-flow algorithm of Edmonds and Karp.
///
/// The solver takes ownership of an initialized [`ResidualMatrix`] and
/// mutates it in place; after [`solve`](EdmondsKarp::solve) the matrix
/// holds the final residual capacities from which the per-edge flows are
/// derived.
pub struct EdmondsKarp<F> {
    resid: ResidualMatrix<F>,
    pred: Vec<usize>,
    value: F,
}

impl<F> EdmondsKarp<F>
where
    F: NumAssign + Ord + Copy,
{
    /// Create a new solver for the given residual matrix.
    pub fn new(resid: ResidualMatrix<F>) -> Self {
        let n = resid.num_nodes();
        EdmondsKarp {
            resid,
            pred: Vec::with_capacity(n),
            value: F::zero(),
        }
    }

    /// Return the residual matrix in its current state.
    pub fn as_matrix(&self) -> &ResidualMatrix<F> {
        &self.resid
    }

    /// Release the residual matrix.
    pub fn into_matrix(self) -> ResidualMatrix<F> {
        self.resid
    }

    /// Return the value of the latest computed maximum flow.
    pub fn value(&self) -> F {
        self.value
    }

    /// Compute the maximum flow from `src` to `snk`.
    pub fn solve(&mut self, src: usize, snk: usize) {
        self.solve_until(src, snk, || false);
    }

    /// Compute the maximum flow from `src` to `snk`, cooperatively
    /// cancellable.
    ///
    /// The callback `stop` is evaluated once per iteration, before the
    /// next augmenting-path search starts. If it returns `true` the
    /// computation is abandoned and the method returns `false`; the value
    /// and residual matrix then reflect the (feasible but not maximal)
    /// flow accumulated so far. Returns `true` if the maximum flow has
    /// been computed.
    ///
    /// This is the only cancellation point. A caller wanting a wall-clock
    /// bound must impose it through this callback.
    pub fn solve_until<S>(&mut self, src: usize, snk: usize, mut stop: S) -> bool
    where
        S: FnMut() -> bool,
    {
        assert_ne!(src, snk, "Source and sink node must not be equal");

        loop {
            if stop() {
                return false;
            }

            if !augmenting_path(&self.resid, src, snk, &mut self.pred) {
                return true;
            }

            // compute the bottleneck residual capacity along the path
            let mut v = snk;
            let mut df = self.resid.residual(self.pred[v], v);
            while v != src {
                let u = self.pred[v];
                df = min(df, self.resid.residual(u, v));
                v = u;
            }

            debug_assert!(df > F::zero());

            // now augment the flow
            let mut v = snk;
            while v != src {
                let u = self.pred[v];
                self.resid.augment(u, v, df);
                v = u;
            }

            self.value += df;
        }
    }

    /// Return the flow carried by an edge `(u,v)` of capacity `cap`.
    ///
    /// The flow is the installed capacity minus the final residual
    /// capacity, clipped to zero. Clipping matters for a pair of
    /// antiparallel edges, where the residual entry of one direction can
    /// exceed its own capacity because the opposite edge carries flow.
    pub fn flow(&self, u: usize, v: usize, cap: F) -> F {
        let resid = self.resid.residual(u, v);
        if resid >= cap {
            F::zero()
        } else {
            cap - resid
        }
    }

    /// Return the source side of a minimal cut associated with the last
    /// computed maximum flow.
    ///
    /// These are the nodes still reachable from the source in the final
    /// residual matrix, in ascending index order. The capacities of the
    /// edges leaving this set sum to the maximum flow value.
    pub fn mincut(&self) -> Vec<usize> {
        (0..self.pred.len()).filter(|&u| self.pred[u] != UNREACHED).collect()
    }
}

/// Solve the maxflow problem using the algorithm of Edmonds-Karp.
///
/// Computes the maximum flow from `src` to `snk` on the given residual
/// matrix and returns the flow value together with the final residual
/// matrix.
///
/// # Example
///
/// ```
/// use flownet::{edmondskarp, ResidualMatrix};
///
/// let resid = ResidualMatrix::from_edges(3, vec![(0, 1, 7), (1, 2, 4)]);
/// let (value, resid) = edmondskarp(resid, 0, 2);
/// assert_eq!(value, 4);
/// assert_eq!(resid.residual(1, 2), 0);
/// assert_eq!(resid.residual(0, 1), 3);
/// ```
pub fn edmondskarp<F>(resid: ResidualMatrix<F>, src: usize, snk: usize) -> (F, ResidualMatrix<F>)
where
    F: NumAssign + Ord + Copy,
{
    let mut maxflow = EdmondsKarp::new(resid);
    maxflow.solve(src, snk);
    (maxflow.value(), maxflow.into_matrix())
}
