/*
 * Copyright (c) 2020-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Multi-terminal flow networks.
//!
//! A [`Network`] describes a directed capacitated graph together with a
//! set of supply nodes and a set of demand nodes. Each terminal may carry
//! an optional bound on the amount of flow it can inject or absorb;
//! without a bound a terminal is limited only by the rest of the graph.
//!
//! [`Network::solve`] reduces the multi-terminal problem to an ordinary
//! single-source/single-sink instance by adding a synthetic super-source
//! wired to every supply node and a synthetic super-sink wired from every
//! demand node, with the terminal bounds as edge capacities. The reduced
//! instance is handed to [`EdmondsKarp`]; afterwards the synthetic
//! nodes and edges are stripped, so the reported [`Solution`] speaks only
//! in terms of the caller's own nodes and edges.
//!
//! Node identifiers are opaque to this module. Internally the nodes are
//! numbered densely in insertion order, which makes repeated solves of the
//! same description fully reproducible.
//!
//! # Example
//!
//! ```
//! use flownet::Network;
//!
//! let mut net = Network::new();
//! for u in "abcd".chars() {
//!     net.add_node(u);
//! }
//! net.add_edge('a', 'b', 10);
//! net.add_edge('a', 'c', 5);
//! net.add_edge('b', 'd', 8);
//! net.add_edge('c', 'd', 10);
//! net.add_supply('a', None);
//! net.add_demand('d', None);
//!
//! let sol = net.solve().unwrap();
//! assert_eq!(sol.value(), 13);
//! assert_eq!(sol.flow('a', 'b'), Some(8));
//! assert_eq!(sol.flow('a', 'c'), Some(5));
//! assert_eq!(sol.flow('b', 'd'), Some(8));
//! assert_eq!(sol.flow('c', 'd'), Some(5));
//! ```

use crate::maxflow::EdmondsKarp;
use crate::num::traits::NumAssign;
use crate::residual::ResidualMatrix;

use std::collections::{HashMap, HashSet};
use std::error;
use std::fmt;
use std::hash::Hash;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// Error for an invalid network description.
///
/// All of these are detected while validating the description, before any
/// solver work begins.
#[derive(Debug)]
pub enum Error {
    /// An edge has a negative capacity.
    NegativeCapacity { from: String, to: String },
    /// A terminal carries a negative bound.
    NegativeBound { node: String },
    /// The supply set is empty.
    NoSupply,
    /// The demand set is empty.
    NoDemand,
    /// An edge or terminal references a node that is not part of the
    /// network.
    UnknownNode { node: String },
    /// A node is listed as supply and as demand at the same time.
    OverlappingTerminal { node: String },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        use self::Error::*;
        match self {
            NegativeCapacity { from, to } => {
                write!(fmt, "Edge ({}, {}) has a negative capacity", from, to)
            }
            NegativeBound { node } => write!(fmt, "Terminal {} has a negative bound", node),
            NoSupply => write!(fmt, "The supply set is empty"),
            NoDemand => write!(fmt, "The demand set is empty"),
            UnknownNode { node } => write!(fmt, "Unknown node {}", node),
            OverlappingTerminal { node } => {
                write!(fmt, "Node {} is both a supply and a demand terminal", node)
            }
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

/// A directed capacitated graph with supply and demand terminals.
///
/// The description is grow-only: nodes, edges and terminals are added one
/// by one. Adding an edge for an already present `(from, to)` pair
/// replaces its capacity, and re-adding a terminal replaces its bound,
/// matching the edit-in-place behavior of interactive editors. Validation
/// happens in [`solve`](Network::solve), not while building.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Network<N, F> {
    nodes: Vec<N>,
    edges: Vec<(N, N, F)>,
    supplies: Vec<(N, Option<F>)>,
    demands: Vec<(N, Option<F>)>,
}

/// The result of a flow computation on a [`Network`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Solution<N, F> {
    value: F,
    flows: Vec<(N, N, F)>,
}

impl<N, F> Solution<N, F>
where
    N: Copy + Eq,
    F: Copy,
{
    /// Return the total flow from the supply to the demand nodes.
    pub fn value(&self) -> F {
        self.value
    }

    /// Return the flow on every edge as `(from, to, flow)` triples.
    ///
    /// The triples appear in the order the edges were added to the
    /// network. Every edge of the network appears exactly once; the
    /// synthetic terminal edges of the reduction never show up here.
    pub fn flows(&self) -> &[(N, N, F)] {
        &self.flows
    }

    /// Return the flow on the edge `(from, to)`, if the edge exists.
    pub fn flow(&self, from: N, to: N) -> Option<F> {
        self.flows
            .iter()
            .find(|&&(u, v, _)| u == from && v == to)
            .map(|&(_, _, f)| f)
    }
}

/// A multi-terminal instance reduced to a single-source/single-sink one.
///
/// Keeps the dense endpoints and the capacity of every original edge so
/// the solution can be mapped back without the identifier table.
struct Reduced<F> {
    solver: EdmondsKarp<F>,
    edges: Vec<(usize, usize, F)>,
    source: usize,
    sink: usize,
}

impl<N, F> Network<N, F>
where
    N: Copy + Eq + Hash + fmt::Debug,
    F: NumAssign + Ord + Copy,
{
    /// Create an empty network.
    pub fn new() -> Self {
        Network {
            nodes: vec![],
            edges: vec![],
            supplies: vec![],
            demands: vec![],
        }
    }

    /// Add a node.
    ///
    /// Adding the same identifier twice is allowed and has no effect.
    pub fn add_node(&mut self, id: N) {
        if !self.nodes.contains(&id) {
            self.nodes.push(id);
        }
    }

    /// Add a directed edge from `from` to `to` with the given capacity.
    ///
    /// If the pair `(from, to)` is already present its capacity is
    /// replaced. The reverse pair `(to, from)` is a distinct edge. The
    /// endpoints must be added with [`add_node`](Network::add_node)
    /// separately; a dangling endpoint is reported by
    /// [`solve`](Network::solve).
    pub fn add_edge(&mut self, from: N, to: N, cap: F) {
        if let Some(edge) = self.edges.iter_mut().find(|e| e.0 == from && e.1 == to) {
            edge.2 = cap;
        } else {
            self.edges.push((from, to, cap));
        }
    }

    /// Declare `id` a supply node, optionally bounding the amount of flow
    /// it can inject.
    ///
    /// Redeclaring a supply node replaces its bound. A bound of zero is
    /// valid and means the node contributes nothing.
    pub fn add_supply(&mut self, id: N, bound: Option<F>) {
        if let Some(supply) = self.supplies.iter_mut().find(|s| s.0 == id) {
            supply.1 = bound;
        } else {
            self.supplies.push((id, bound));
        }
    }

    /// Declare `id` a demand node, optionally bounding the amount of flow
    /// it can absorb.
    ///
    /// Redeclaring a demand node replaces its bound.
    pub fn add_demand(&mut self, id: N, bound: Option<F>) {
        if let Some(demand) = self.demands.iter_mut().find(|d| d.0 == id) {
            demand.1 = bound;
        } else {
            self.demands.push((id, bound));
        }
    }

    /// Return the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Return the number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Return the edges as `(from, to, capacity)` triples in insertion
    /// order.
    pub fn edges(&self) -> impl Iterator<Item = (N, N, F)> + '_ {
        self.edges.iter().copied()
    }

    /// Compute the maximum flow from the supply to the demand nodes.
    ///
    /// The description is validated first; on success the per-edge flow
    /// assignment satisfies `0 <= flow <= capacity` everywhere and flow
    /// conservation at every non-terminal node.
    pub fn solve(&self) -> Result<Solution<N, F>> {
        let mut red = self.reduce()?;
        red.solver.solve(red.source, red.sink);
        Ok(self.extract(&red))
    }

    /// Like [`solve`](Network::solve), but cooperatively cancellable.
    ///
    /// `stop` is checked once per augmenting-path iteration. Returns
    /// `Ok(None)` if the computation was abandoned; a partial result is
    /// deliberately not reported, since an interrupted flow is feasible
    /// but not maximal.
    pub fn solve_until<S>(&self, stop: S) -> Result<Option<Solution<N, F>>>
    where
        S: FnMut() -> bool,
    {
        let mut red = self.reduce()?;
        if red.solver.solve_until(red.source, red.sink, stop) {
            Ok(Some(self.extract(&red)))
        } else {
            Ok(None)
        }
    }

    /// Validate the description and build the reduced instance.
    ///
    /// The synthetic terminals get the two indices following the dense
    /// node numbers. An unbounded terminal is wired with a sentinel
    /// capacity of one more than the total capacity of all edges, which
    /// can never be a binding constraint.
    fn reduce(&self) -> Result<Reduced<F>> {
        if self.supplies.is_empty() {
            return Err(Error::NoSupply);
        }
        if self.demands.is_empty() {
            return Err(Error::NoDemand);
        }

        let mut index = HashMap::with_capacity(self.nodes.len());
        for (i, u) in self.nodes.iter().enumerate() {
            index.insert(*u, i);
        }
        let lookup = |u: &N| -> Result<usize> {
            index.get(u).copied().ok_or_else(|| Error::UnknownNode {
                node: format!("{:?}", u),
            })
        };

        let mut edges = Vec::with_capacity(self.edges.len());
        let mut sentinel = F::one();
        for (from, to, cap) in &self.edges {
            if *cap < F::zero() {
                return Err(Error::NegativeCapacity {
                    from: format!("{:?}", from),
                    to: format!("{:?}", to),
                });
            }
            edges.push((lookup(from)?, lookup(to)?, *cap));
            sentinel += *cap;
        }

        let supply_set = self.supplies.iter().map(|(u, _)| *u).collect::<HashSet<_>>();
        for (d, _) in &self.demands {
            if supply_set.contains(d) {
                return Err(Error::OverlappingTerminal {
                    node: format!("{:?}", d),
                });
            }
        }

        let n = self.nodes.len();
        let (source, sink) = (n, n + 1);
        let mut resid = ResidualMatrix::new(n + 2);
        for &(u, v, cap) in &edges {
            resid.add_capacity(u, v, cap);
        }
        for (s, bound) in &self.supplies {
            let cap = self.terminal_capacity(s, *bound, sentinel)?;
            resid.add_capacity(source, lookup(s)?, cap);
        }
        for (d, bound) in &self.demands {
            let cap = self.terminal_capacity(d, *bound, sentinel)?;
            resid.add_capacity(lookup(d)?, sink, cap);
        }

        Ok(Reduced {
            solver: EdmondsKarp::new(resid),
            edges,
            source,
            sink,
        })
    }

    fn terminal_capacity(&self, node: &N, bound: Option<F>, sentinel: F) -> Result<F> {
        match bound {
            Some(b) if b < F::zero() => Err(Error::NegativeBound {
                node: format!("{:?}", node),
            }),
            Some(b) => Ok(b),
            None => Ok(sentinel),
        }
    }

    /// Map the solver result back onto the original edges.
    fn extract(&self, red: &Reduced<F>) -> Solution<N, F> {
        let flows = self
            .edges
            .iter()
            .zip(&red.edges)
            .map(|(&(from, to, _), &(u, v, cap))| (from, to, red.solver.flow(u, v, cap)))
            .collect();
        Solution {
            value: red.solver.value(),
            flows,
        }
    }
}

impl<N, F> Default for Network<N, F>
where
    N: Copy + Eq + Hash + fmt::Debug,
    F: NumAssign + Ord + Copy,
{
    fn default() -> Self {
        Network::new()
    }
}
