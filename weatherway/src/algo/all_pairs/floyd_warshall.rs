use crate::core::{
    id::{IdType, VertexId},
    matrix::Matrix,
    weight::Weight,
};

use super::AllPairs;

pub fn floyd_warshall<W>(costs: &Matrix<W>) -> AllPairs<W>
where
    W: Weight,
{
    let n = costs.dim();

    let mut dist = costs.clone();
    let mut next = Matrix::from_fn(n, |i, j| {
        if i == j {
            // Staying in place is always possible.
            VertexId::from_usize(i)
        } else if !costs[(i, j)].is_inf() {
            VertexId::from_usize(j)
        } else {
            VertexId::sentinel()
        }
    });

    for k in 0..n {
        for i in 0..n {
            let dist_ik = dist[(i, k)].clone();

            // Check finiteness before adding, the sentinel must never take
            // part in a sum.
            if dist_ik.is_inf() {
                continue;
            }

            for j in 0..n {
                let dist_kj = &dist[(k, j)];

                if dist_kj.is_inf() {
                    continue;
                }

                let next_dist = dist_ik.clone().saturating_add(dist_kj.clone());

                // Relax if better.
                if next_dist < dist[(i, j)] {
                    dist[(i, j)] = next_dist;
                    next[(i, j)] = next[(i, k)];
                }
            }
        }
    }

    AllPairs { dist, next }
}
