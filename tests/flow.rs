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

use flownet::{EdmondsKarp, Network, ResidualMatrix, Solution};

use ordered_float::OrderedFloat;

/// Check flow conservation at every node that is not a terminal.
fn assert_conservation(sol: &Solution<char, i32>, terminals: &str) {
    let nodes: Vec<char> = sol
        .flows()
        .iter()
        .flat_map(|&(u, v, _)| vec![u, v])
        .collect();
    for &w in nodes.iter().filter(|u| !terminals.contains(**u)) {
        let inflow: i32 = sol.flows().iter().filter(|&&(_, v, _)| v == w).map(|&(_, _, f)| f).sum();
        let outflow: i32 = sol.flows().iter().filter(|&&(u, _, _)| u == w).map(|&(_, _, f)| f).sum();
        assert_eq!(inflow, outflow, "conservation violated at {}", w);
    }
}

/// Check `0 <= flow <= capacity` on every edge.
fn assert_capacity_bounds(net: &Network<char, i32>, sol: &Solution<char, i32>) {
    for (u, v, cap) in net.edges() {
        let f = sol.flow(u, v).unwrap();
        assert!(f >= 0 && f <= cap, "flow {} outside [0, {}] on ({}, {})", f, cap, u, v);
    }
}

fn diamond() -> Network<char, i32> {
    let mut net = Network::new();
    for u in "abcd".chars() {
        net.add_node(u);
    }
    net.add_edge('a', 'b', 10);
    net.add_edge('a', 'c', 5);
    net.add_edge('b', 'd', 8);
    net.add_edge('c', 'd', 10);
    net
}

// Pinned against a reference Edmonds-Karp run: 8 over a-b-d plus 5 over
// a-c-d.
#[test]
fn test_diamond_flow_is_13() {
    let mut net = diamond();
    net.add_supply('a', None);
    net.add_demand('d', None);
    let sol = net.solve().unwrap();
    assert_eq!(sol.value(), 13);
    assert_eq!(sol.flow('a', 'b'), Some(8));
    assert_eq!(sol.flow('a', 'c'), Some(5));
    assert_eq!(sol.flow('b', 'd'), Some(8));
    assert_eq!(sol.flow('c', 'd'), Some(5));
    assert_conservation(&sol, "ad");
    assert_capacity_bounds(&net, &sol);
}

#[test]
fn test_supply_bound_clamps_even_when_capacity_is_larger() {
    let mut net = Network::new();
    net.add_node('s');
    net.add_node('t');
    net.add_edge('s', 't', 100);
    net.add_supply('s', Some(5));
    net.add_demand('t', None);
    let sol = net.solve().unwrap();
    assert_eq!(sol.value(), 5);
    assert_eq!(sol.flow('s', 't'), Some(5));
}

#[test]
fn test_two_bounded_supplies_add_up() {
    let mut net = Network::new();
    for u in "pqt".chars() {
        net.add_node(u);
    }
    net.add_edge('p', 't', 10);
    net.add_edge('q', 't', 10);
    net.add_supply('p', Some(3));
    net.add_supply('q', Some(4));
    net.add_demand('t', None);
    let sol = net.solve().unwrap();
    assert_eq!(sol.value(), 7);
    assert_eq!(sol.flow('p', 't'), Some(3));
    assert_eq!(sol.flow('q', 't'), Some(4));
}

#[test]
fn test_disconnected_terminals_yield_zero_flow() {
    let mut net: Network<char, i32> = Network::new();
    net.add_node('s');
    net.add_node('t');
    net.add_supply('s', None);
    net.add_demand('t', None);
    let sol = net.solve().unwrap();
    assert_eq!(sol.value(), 0);
    assert!(sol.flows().is_empty());
}

#[test]
fn test_edges_without_path_report_zero() {
    let mut net = Network::new();
    for u in "stxy".chars() {
        net.add_node(u);
    }
    net.add_edge('s', 'x', 4);
    net.add_edge('y', 't', 4);
    net.add_supply('s', None);
    net.add_demand('t', None);
    let sol = net.solve().unwrap();
    assert_eq!(sol.value(), 0);
    assert_eq!(sol.flow('s', 'x'), Some(0));
    assert_eq!(sol.flow('y', 't'), Some(0));
}

// Multiple bounded and unbounded terminals on both sides; pinned against
// a reference run. The supply bound of s1, the edge (a,t1) and the demand
// bound of t2 are the binding constraints: 5 + 6.
#[test]
fn test_multi_terminal_instance_with_mixed_bounds() {
    let mut net = Network::new();
    for u in ['s', 'z', 'a', 'b', 'x', 'y'].iter() {
        net.add_node(*u);
    }
    net.add_edge('s', 'a', 6);
    net.add_edge('z', 'a', 4);
    net.add_edge('z', 'b', 7);
    net.add_edge('a', 'b', 3);
    net.add_edge('a', 'x', 5);
    net.add_edge('b', 'y', 8);
    net.add_supply('s', Some(5));
    net.add_supply('z', None);
    net.add_demand('x', None);
    net.add_demand('y', Some(6));
    let sol = net.solve().unwrap();
    assert_eq!(sol.value(), 11);
    assert_conservation(&sol, "szxy");
    assert_capacity_bounds(&net, &sol);
}

#[test]
fn test_antiparallel_edges_keep_independent_capacities() {
    let mut net = Network::new();
    for u in "abt".chars() {
        net.add_node(u);
    }
    net.add_edge('a', 'b', 5);
    net.add_edge('b', 'a', 2);
    net.add_edge('b', 't', 9);
    net.add_supply('a', None);
    net.add_demand('t', None);
    let sol = net.solve().unwrap();
    assert_eq!(sol.value(), 5);
    assert_eq!(sol.flow('a', 'b'), Some(5));
    assert_eq!(sol.flow('b', 'a'), Some(0));
}

#[test]
fn test_larger_pinned_instance() {
    // classic CLRS instance wrapped into unbounded terminals
    let mut net = Network::new();
    for u in 0..6u32 {
        net.add_node(u);
    }
    net.add_edge(0, 1, 16);
    net.add_edge(0, 2, 13);
    net.add_edge(1, 2, 10);
    net.add_edge(2, 1, 4);
    net.add_edge(1, 3, 12);
    net.add_edge(3, 2, 9);
    net.add_edge(2, 4, 14);
    net.add_edge(4, 3, 7);
    net.add_edge(3, 5, 20);
    net.add_edge(4, 5, 4);
    net.add_supply(0, None);
    net.add_demand(5, None);
    assert_eq!(net.solve().unwrap().value(), 23);
}

#[test]
fn test_resolving_is_deterministic() {
    let mut net = diamond();
    net.add_edge('b', 'c', 4);
    net.add_edge('c', 'b', 4);
    net.add_supply('a', None);
    net.add_demand('d', None);
    let first = net.solve().unwrap();
    let second = net.solve().unwrap();
    assert_eq!(first.value(), second.value());
    assert_eq!(first.flows(), second.flows());
}

#[test]
fn test_total_flow_leaves_the_supply_set() {
    let mut net = diamond();
    net.add_supply('a', None);
    net.add_demand('d', None);
    let sol = net.solve().unwrap();
    let leaving: i32 = sol.flows().iter().filter(|&&(u, _, _)| u == 'a').map(|&(_, _, f)| f).sum();
    assert_eq!(leaving, sol.value());
}

// The solver building blocks are usable on their own for an already
// reduced instance; the cut returned by `mincut` certifies the value.
#[test]
fn test_mincut_certifies_the_flow_value() {
    let edges = [(0, 1, 10), (0, 2, 5), (1, 3, 8), (2, 3, 10)];
    let resid = ResidualMatrix::from_edges(4, edges.iter().copied());
    let mut maxflow = EdmondsKarp::new(resid);
    maxflow.solve(0, 3);

    let cut = maxflow.mincut();
    assert!(cut.contains(&0) && !cut.contains(&3));
    let crossing: i32 = edges
        .iter()
        .filter(|&&(u, v, _)| cut.contains(&u) && !cut.contains(&v))
        .map(|&(_, _, c)| c)
        .sum();
    assert_eq!(crossing, maxflow.value());
}

// Real-valued capacities are accepted through an ordered wrapper type;
// dyadic fractions stay exact.
#[test]
fn test_real_valued_capacities() {
    let mut net = Network::new();
    for u in "abcd".chars() {
        net.add_node(u);
    }
    net.add_edge('a', 'b', OrderedFloat(1.5));
    net.add_edge('a', 'c', OrderedFloat(0.25));
    net.add_edge('b', 'd', OrderedFloat(1.0));
    net.add_edge('c', 'd', OrderedFloat(2.0));
    net.add_supply('a', None);
    net.add_demand('d', None);
    let sol = net.solve().unwrap();
    assert_eq!(sol.value(), OrderedFloat(1.25));
    assert_eq!(sol.flow('a', 'b'), Some(OrderedFloat(1.0)));
    assert_eq!(sol.flow('a', 'c'), Some(OrderedFloat(0.25)));
}
