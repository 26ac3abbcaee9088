// Copyright (c) 2019-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! A library for computing maximum flows between supply and demand nodes
//! of a capacitated network.
//!
//! The entry point is [`Network`]: a directed graph description with
//! non-negative edge capacities, a set of supply nodes and a set of
//! demand nodes, each terminal optionally bounded in how much flow it can
//! inject or absorb. [`Network::solve`] reduces this to a
//! single-source/single-sink instance and runs the Edmonds-Karp algorithm
//! on it, reporting the total flow value and the flow carried by every
//! edge.
//!
//! The building blocks are available individually: [`ResidualMatrix`]
//! holds the residual capacities, [`search`] locates augmenting paths and
//! [`maxflow`] drives the augmentation loop on an already reduced
//! instance.
//!
//! # Example
//!
//! ```
//! use flownet::Network;
//!
//! let mut net = Network::new();
//! for u in ["depot1", "depot2", "store"].iter() {
//!     net.add_node(*u);
//! }
//! net.add_edge("depot1", "store", 10);
//! net.add_edge("depot2", "store", 10);
//! net.add_supply("depot1", Some(3));
//! net.add_supply("depot2", Some(4));
//! net.add_demand("store", None);
//!
//! let sol = net.solve().unwrap();
//! assert_eq!(sol.value(), 7);
//! ```

mod num {
    pub use num_traits as traits;
}

// # Data structures

pub mod residual;
pub use self::residual::ResidualMatrix;

// # Algorithms

pub mod maxflow;
pub use self::maxflow::{edmondskarp, EdmondsKarp};

pub mod search;

// # Problem description

pub mod network;
pub use self::network::{Error, Network, Result, Solution};
