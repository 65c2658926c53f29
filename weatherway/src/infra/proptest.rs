use proptest::{
    collection::vec,
    option::weighted,
    prelude::{any, Strategy},
};

use crate::{
    core::{Matrix, RegimeSet, Weight},
    graph::{EdgeRecord, Network, VertexOrder},
};

/// Square cost matrices of dimension up to `max_dim`, with zero diagonal.
///
/// Each off-diagonal cell holds a cost drawn from `cost` with probability
/// `density`, [`Weight::inf`] otherwise.
pub fn cost_matrix<S>(cost: S, max_dim: usize, density: f64) -> impl Strategy<Value = Matrix<S::Value>>
where
    S: Strategy + Clone,
    S::Value: Weight,
{
    assert!(
        density > 0.0 && density <= 1.0,
        "density must be in (0, 1] range"
    );

    (0..=max_dim).prop_flat_map(move |dim| {
        vec(weighted(density, cost.clone()), dim * dim).prop_map(move |cells| {
            let mut cells = cells.into_iter();
            Matrix::from_fn(dim, |i, j| {
                let cell = cells.next().flatten();
                if i == j {
                    S::Value::zero()
                } else {
                    cell.unwrap_or_else(S::Value::inf)
                }
            })
        })
    })
}

/// Pairs of cost matrices over the same vertices and connections, where every
/// cost of the second is at least the corresponding cost of the first.
///
/// Models a milder and a harsher regime of the same network.
pub fn monotone_planes(
    max_dim: usize,
    density: f64,
) -> impl Strategy<Value = (Matrix<u32>, Matrix<u32>)> {
    (0..=max_dim).prop_flat_map(move |dim| {
        let cell = (weighted(density, any::<u16>()), any::<u16>());
        vec(cell, dim * dim).prop_map(move |cells| {
            let lower = Matrix::from_fn(dim, |i, j| match cells[i * dim + j] {
                _ if i == j => 0,
                (Some(cost), _) => cost as u32,
                (None, _) => u32::inf(),
            });
            let upper = Matrix::from_fn(dim, |i, j| match cells[i * dim + j] {
                _ if i == j => 0,
                (Some(cost), extra) => cost as u32 + extra as u32,
                (None, _) => u32::inf(),
            });
            (lower, upper)
        })
    })
}

/// Networks of up to `max_vertices` locations named `v0`, `v1`, ... with the
/// canonical regimes.
pub fn network(max_vertices: usize, density: f64) -> impl Strategy<Value = Network<u32>> {
    (1..=max_vertices.max(1)).prop_flat_map(move |n| {
        let regimes = RegimeSet::canonical();
        let costs = vec(any::<u16>().prop_map(|cost| cost as u32), regimes.len());

        vec(weighted(density, costs), n * n).prop_map(move |cells| {
            let records = cells
                .into_iter()
                .enumerate()
                .filter_map(|(index, costs)| {
                    let (from, to) = (index / n, index % n);
                    match costs {
                        Some(costs) if from != to => {
                            Some(EdgeRecord::new(format!("v{from}"), format!("v{to}"), costs))
                        }
                        _ => None,
                    }
                })
                .collect::<Vec<_>>();

            let mut network =
                Network::from_records(regimes.clone(), records, VertexOrder::FirstSeen)
                    .expect("generated records are valid");

            // Isolated locations do not appear in any record.
            for i in 0..n {
                network.add_vertex(format!("v{i}"));
            }

            network
        })
    })
}
