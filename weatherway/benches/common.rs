#![allow(dead_code)]

use fastrand::Rng;
use petgraph::prelude::*;
use weatherway::{
    core::{Matrix, RegimeSet, Weight},
    graph::Network,
};

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

/// Directed cost matrix where each ordered pair is connected with probability
/// `density`.
pub fn random_costs(vertex_count: usize, density: f32, rng: &mut Rng) -> Matrix<f32> {
    Matrix::from_fn(vertex_count, |i, j| {
        if i == j {
            0.0
        } else if rng.f32() < density {
            rng.f32() * 100.0
        } else {
            f32::inf()
        }
    })
}

pub fn petgraph_from_costs(costs: &Matrix<f32>) -> petgraph::Graph<(), f32, petgraph::Directed> {
    let mut graph = petgraph::Graph::with_capacity(costs.dim(), 0);

    for _ in 0..costs.dim() {
        graph.add_node(());
    }

    for ((i, j), cost) in costs.iter() {
        if i != j && !cost.is_inf() {
            graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), *cost);
        }
    }

    graph
}

/// Network with the canonical regimes where each regime costs at least as much
/// as the previous one.
pub fn random_network(vertex_count: usize, density: f32, rng: &mut Rng) -> Network<u32> {
    let mut network = Network::new(RegimeSet::canonical());

    for i in 0..vertex_count {
        network.add_vertex(format!("v{i}"));
    }

    for i in 0..vertex_count {
        for j in 0..vertex_count {
            if i == j || rng.f32() >= density {
                continue;
            }

            let mut cost = rng.u32(1..100);
            let costs = (0..network.regimes().len())
                .map(|_| {
                    cost += rng.u32(0..20);
                    cost
                })
                .collect::<Vec<_>>();

            network
                .add_connection(&format!("v{i}"), &format!("v{j}"), &costs)
                .unwrap();
        }
    }

    network
}
