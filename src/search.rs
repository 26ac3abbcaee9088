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

//! Breadth-first search for augmenting paths.
//!
//! An augmenting path is a path from the source to the sink along which
//! every edge has strictly positive residual capacity. The search uses a
//! plain breadth-first traversal over the residual matrix, so the path
//! found is one with the fewest edges. This is the selection rule of
//! Edmonds-Karp and the basis of its polynomial iteration bound.
//!
//! Unvisited neighbors are scanned in ascending node index order. Hence
//! repeated runs on identical input traverse identical paths and the whole
//! flow computation is reproducible.
//!
//! # Example
//!
//! ```
//! use flownet::ResidualMatrix;
//! use flownet::search::{augmenting_path, UNREACHED};
//!
//! let resid = ResidualMatrix::from_edges(4, vec![(0, 1, 1), (1, 3, 1), (0, 2, 1)]);
//!
//! let mut pred = vec![];
//! assert!(augmenting_path(&resid, 0, 3, &mut pred));
//! assert_eq!(pred[3], 1);
//! assert_eq!(pred[1], 0);
//!
//! // node 2 is reachable but no path continues to the sink from it
//! assert!(!augmenting_path(&resid, 2, 3, &mut pred));
//! assert_eq!(pred[3], UNREACHED);
//! ```

use crate::num::traits::NumAssign;
use crate::residual::ResidualMatrix;

use std::collections::VecDeque;

/// Predecessor entry of a node that has not been reached by the search.
pub const UNREACHED: usize = usize::max_value();

/// Search for a path from `src` to `snk` with positive residual capacity.
///
/// The predecessor buffer `pred` is resized to the number of nodes and
/// refilled on every call, so one buffer can be reused across the
/// iterations of a solver. After the call `pred[v]` contains the node from
/// which `v` was reached, [`UNREACHED`] if the search did not reach `v`,
/// and `src` itself for `v = src`.
///
/// Returns `true` iff `snk` has been reached. The search stops as soon as
/// this happens, so entries for nodes at a larger distance than `snk` may
/// be left [`UNREACHED`].
pub fn augmenting_path<F>(resid: &ResidualMatrix<F>, src: usize, snk: usize, pred: &mut Vec<usize>) -> bool
where
    F: NumAssign + Ord + Copy,
{
    let n = resid.num_nodes();
    pred.clear();
    pred.resize(n, UNREACHED);
    pred[src] = src;

    let mut queue = VecDeque::with_capacity(n);
    queue.push_back(src);
    while let Some(u) = queue.pop_front() {
        for v in 0..n {
            if pred[v] == UNREACHED && resid.residual(u, v) > F::zero() {
                pred[v] = u;
                if v == snk {
                    return true;
                }
                queue.push_back(v);
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::{augmenting_path, UNREACHED};
    use crate::residual::ResidualMatrix;

    #[test]
    fn test_shortest_path_is_found() {
        // two paths from 0 to 4: one over node 3, one over nodes 1 and 2
        let resid = ResidualMatrix::from_edges(
            5,
            vec![(0, 1, 1), (1, 2, 1), (2, 4, 1), (0, 3, 1), (3, 4, 1)],
        );
        let mut pred = vec![];
        assert!(augmenting_path(&resid, 0, 4, &mut pred));
        assert_eq!(pred[4], 3);
        assert_eq!(pred[3], 0);
    }

    #[test]
    fn test_saturated_edges_are_ignored() {
        let mut resid = ResidualMatrix::from_edges(3, vec![(0, 1, 2), (1, 2, 2)]);
        let mut pred = vec![];
        assert!(augmenting_path(&resid, 0, 2, &mut pred));
        resid.augment(0, 1, 2);
        resid.augment(1, 2, 2);
        assert!(!augmenting_path(&resid, 0, 2, &mut pred));
        assert_eq!(pred[1], UNREACHED);
    }

    #[test]
    fn test_ties_break_towards_smaller_index() {
        // both 1 and 2 lead to the sink with a single edge
        let resid = ResidualMatrix::from_edges(4, vec![(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)]);
        let mut pred = vec![];
        assert!(augmenting_path(&resid, 0, 3, &mut pred));
        assert_eq!(pred[3], 1);
    }

    #[test]
    fn test_reverse_residuals_open_paths() {
        let mut resid = ResidualMatrix::from_edges(3, vec![(0, 1, 2)]);
        let mut pred = vec![];
        assert!(!augmenting_path(&resid, 1, 0, &mut pred));
        resid.augment(0, 1, 1);
        assert!(augmenting_path(&resid, 1, 0, &mut pred));
        assert_eq!(pred[0], 1);
    }
}
