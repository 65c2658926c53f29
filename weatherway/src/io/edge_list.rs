//! Reading networks from whitespace-separated edge lists.
//!
//! Every line describes one directed connection:
//!
//! ```text
//! <from> <to> <cost_0> ... <cost_{K-1}>
//! ```
//!
//! where `K` is the number of regimes. Lines with fewer fields, blank lines
//! included, are skipped, as are lines connecting a location to itself. Fields
//! after the last cost are ignored.
//!
//! # Examples
//!
//! ```
//! use weatherway::{graph::Network, io::LoadOptions};
//!
//! let input = "\
//! Guatemala Escuintla 1 2 4 8
//! Escuintla Antigua 2 3 5 9
//! Guatemala Antigua 5 4 10 30
//! ";
//!
//! let network = Network::<u32>::load(input.as_bytes(), LoadOptions::new()).unwrap();
//! let snow = network.solve("snow").unwrap();
//!
//! assert_eq!(network.distance_between(&snow, "Guatemala", "Antigua").unwrap(), Some(&9));
//! ```

use std::{fs::File, io::BufRead, io::BufReader, path::Path, str::FromStr};

use tracing::{debug, info};

use crate::{
    core::Weight,
    graph::{EdgeRecord, Network},
};

use super::{LoadError, LoadOptions};

/// Parses edge records with `costs` cost fields each.
///
/// A cost that does not parse, or parses to infinity or NaN, is an error.
pub fn read_records<W, R>(reader: R, costs: usize) -> Result<Vec<EdgeRecord<W>>, LoadError>
where
    W: Weight + FromStr,
    R: BufRead,
{
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;

        match parse_record(&line, number, costs)? {
            Some(record) => records.push(record),
            None => debug!(line = number, "skipped malformed record"),
        }
    }

    Ok(records)
}

fn parse_record<W>(line: &str, number: usize, costs: usize) -> Result<Option<EdgeRecord<W>>, LoadError>
where
    W: Weight + FromStr,
{
    let fields = line.split_whitespace().collect::<Vec<_>>();

    if fields.len() < 2 + costs || fields[0] == fields[1] {
        return Ok(None);
    }

    let costs = fields[2..2 + costs]
        .iter()
        .map(|field| {
            field
                .parse::<W>()
                .ok()
                .filter(|cost| cost.is_finite())
                .ok_or_else(|| LoadError::InvalidCost {
                    line: number,
                    field: field.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(EdgeRecord::new(fields[0], fields[1], costs)))
}

impl<W> Network<W>
where
    W: Weight + FromStr,
{
    /// Reads an edge list and builds the network from it.
    pub fn load<R: BufRead>(reader: R, options: LoadOptions) -> Result<Self, LoadError> {
        let LoadOptions { regimes, order } = options;
        let records = read_records(reader, regimes.len())?;
        let edges = records.len();

        let network = Network::from_records(regimes, records, order)?;

        info!(
            vertices = network.vertex_count(),
            edges,
            regimes = network.regimes().len(),
            "loaded network"
        );

        Ok(network)
    }

    /// Opens the file at `path` and [loads](Network::load) the network from
    /// it.
    pub fn load_path<P: AsRef<Path>>(path: P, options: LoadOptions) -> Result<Self, LoadError> {
        let file = File::open(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "opened edge list");
        Self::load(BufReader::new(file), options)
    }
}
