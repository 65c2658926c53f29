mod common;

use common::{RANDOM_SEED, petgraph_from_costs, random_costs, random_network};
use fastrand::Rng;
use weatherway::algo::{AllPairs, Center};

fn main() {
    divan::main();
}

#[divan::bench(consts = [50, 100, 200], args = [0.1, 0.5])]
fn weatherway_floyd_warshall_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let costs = random_costs(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| AllPairs::run(&costs));
}

#[divan::bench(consts = [50, 100, 200], args = [0.1, 0.5])]
fn petgraph_floyd_warshall_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_from_costs(&random_costs(N, density, &mut Rng::with_seed(RANDOM_SEED)));

    bencher.bench(|| petgraph::algo::floyd_warshall(&graph, |e| *e.weight()));
}

#[divan::bench(consts = [50, 100, 200])]
fn weatherway_center_random<const N: usize>(bencher: divan::Bencher) {
    let paths = AllPairs::run(&random_costs(N, 0.5, &mut Rng::with_seed(RANDOM_SEED)));

    bencher.bench(|| Center::on(paths.distances()).run());
}

#[divan::bench(consts = [50, 100, 200])]
fn weatherway_path_reconstruction<const N: usize>(bencher: divan::Bencher) {
    let network = random_network(N, 0.1, &mut Rng::with_seed(RANDOM_SEED));
    let solution = network.solve("storm").unwrap();
    let names = network.catalog().names().collect::<Vec<_>>();

    bencher.bench(|| {
        names
            .iter()
            .filter_map(|target| network.path_between(&solution, names[0], target).ok())
            .map(|path| path.len())
            .sum::<usize>()
    });
}

#[divan::bench(consts = [50, 100, 200])]
fn weatherway_solve_all_regimes<const N: usize>(bencher: divan::Bencher) {
    let network = random_network(N, 0.1, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| {
        network
            .regimes()
            .iter()
            .map(|(regime, _)| network.solve(regime).unwrap())
            .collect::<Vec<_>>()
    });
}
