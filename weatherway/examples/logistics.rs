use std::{env, error::Error, path::PathBuf};

use tracing_subscriber::EnvFilter;
use weatherway::{graph::Network, io::LoadOptions};

// Usage: logistics [EDGE_LIST] [REGIME] [FROM] [TO]
fn main() -> Result<(), Box<dyn Error>> {
    // Set `RUST_LOG=weatherway=debug` to see what the library does.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let mut args = env::args().skip(1);

    let path = args.next().map(PathBuf::from).unwrap_or_else(|| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/logistics.txt")
    });
    let regime = args.next().unwrap_or_else(|| "normal".to_string());
    let from = args.next().unwrap_or_else(|| "Guatemala".to_string());
    let to = args.next().unwrap_or_else(|| "Flores".to_string());

    let mut network = Network::<u32>::load_path(&path, LoadOptions::new())?;

    println!("Travel hours in {regime} weather:\n");
    println!("{}", network.table(&regime)?.width(16));

    let solution = network.solve(&regime)?;

    if let Some(center) = network.center(&solution) {
        println!("Center of the network: {center}");
    }

    match network.distance_between(&solution, &from, &to)? {
        Some(hours) => {
            let route = network.path_between(&solution, &from, &to)?.join(" - ");
            println!("{hours} hours from {from} to {to} through {route}");
        }
        None => println!("{to} is not reachable from {from}"),
    }

    // Traffic between the first two stops of the route is interrupted.
    let route = network.path_between(&solution, &from, &to).unwrap_or_default();
    if let [first, second, ..] = route.as_slice() {
        let (first, second) = (first.to_string(), second.to_string());
        network.remove_connection(&first, &second)?;

        let solution = network.solve(&regime)?;
        match network.path_between(&solution, &from, &to) {
            Ok(route) => println!("Without {first} - {second}: {}", route.join(" - ")),
            Err(error) => println!("Without {first} - {second}: {error}"),
        }
    }

    Ok(())
}
