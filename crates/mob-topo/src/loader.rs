//! Line-oriented scenario file reader.
//!
//! # File format
//!
//! One record per line; blank lines and `#` comments are ignored.  `-`
//! stands for "none" in the previous/next columns.
//!
//! ```text
//! # node   <id> <x> <y>
//! # street <id> <node-a> <node-b>
//! # entry  <node>
//! # route  <node> <prev|-> <next|-> <prob>
//! node   1  0.0    0.0
//! node   2  100.0  0.0
//! street 1  1 2
//! entry  1
//! route  1  -  2  1.0
//! route  2  1  -  1.0
//! ```
//!
//! `route` lines for the same `(node, prev)` key accumulate in file order;
//! order is significant for cumulative sampling downstream.  Every node
//! referenced by a `street`, `entry`, or `route` line must have been
//! declared by a `node` line first.
//!
//! The loader builds the data structures but does not judge them: run
//! [`RoutingTable::validate`] on the result before generating walks.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use rustc_hash::FxHashMap;
use tracing::info;

use mob_core::{NodeId, Position, StreetId};

use crate::{RoutingTable, TopoError, TopoResult, Topology};

/// A parsed scenario: the read-only inputs of one generation run.
#[derive(Debug)]
pub struct Scenario {
    pub topology: Topology,
    pub routing: RoutingTable,
    /// Entry points, in declaration order.  The trace runner pairs stream
    /// `i` of its event merger with `entries[i]`.
    pub entries: Vec<NodeId>,
}

/// Load a scenario from a file.
pub fn load_scenario_path(path: &Path) -> TopoResult<Scenario> {
    let file = std::fs::File::open(path)?;
    load_scenario(file)
}

/// Load a scenario from any `Read` source (pass a `std::io::Cursor` in
/// tests).
pub fn load_scenario<R: Read>(reader: R) -> TopoResult<Scenario> {
    let mut positions: FxHashMap<NodeId, Position> = FxHashMap::default();
    let mut topology = Topology::new();
    let mut routing = RoutingTable::new();
    let mut entries = Vec::new();
    let mut route_lines = 0usize;

    for (idx, line) in BufReader::new(reader).lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens[0] {
            "node" => {
                let [id, x, y] = fields::<3>(line_no, &tokens)?;
                let id = NodeId(parse(line_no, id, "node id")?);
                let pos = Position::new(
                    parse(line_no, x, "x coordinate")?,
                    parse(line_no, y, "y coordinate")?,
                );
                if positions.insert(id, pos).is_some() {
                    return Err(parse_err(line_no, format!("{id} declared twice")));
                }
            }
            "street" => {
                let [id, a, b] = fields::<3>(line_no, &tokens)?;
                let id = StreetId(parse(line_no, id, "street id")?);
                let a = declared(line_no, &positions, parse(line_no, a, "node id")?)?;
                let b = declared(line_no, &positions, parse(line_no, b, "node id")?)?;
                topology.add_street(id, a, b)?;
            }
            "entry" => {
                let [node] = fields::<1>(line_no, &tokens)?;
                let (id, _) = declared(line_no, &positions, parse(line_no, node, "node id")?)?;
                entries.push(id);
            }
            "route" => {
                let [node, prev, next, prob] = fields::<4>(line_no, &tokens)?;
                let (node, _) = declared(line_no, &positions, parse(line_no, node, "node id")?)?;
                let prev = hop(line_no, &positions, prev)?;
                let next = hop(line_no, &positions, next)?;
                let prob: f64 = parse(line_no, prob, "probability")?;
                routing.push(node, prev, next, prob);
                route_lines += 1;
            }
            other => {
                return Err(parse_err(line_no, format!("unknown record type `{other}`")));
            }
        }
    }

    info!(
        nodes = topology.node_count(),
        streets = topology.street_count(),
        entries = entries.len(),
        route_lines,
        "scenario loaded"
    );
    Ok(Scenario { topology, routing, entries })
}

// ── Parse helpers ─────────────────────────────────────────────────────────────

fn parse_err(line: usize, msg: String) -> TopoError {
    TopoError::Parse { line, msg }
}

/// Expect exactly `N` fields after the record keyword.
fn fields<'a, const N: usize>(line_no: usize, tokens: &[&'a str]) -> TopoResult<[&'a str; N]> {
    let rest = &tokens[1..];
    <[&'a str; N]>::try_from(rest).map_err(|_| {
        parse_err(
            line_no,
            format!("expected {N} fields after `{}`, got {}", tokens[0], rest.len()),
        )
    })
}

fn parse<T: std::str::FromStr>(line_no: usize, token: &str, what: &str) -> TopoResult<T> {
    token
        .parse()
        .map_err(|_| parse_err(line_no, format!("invalid {what} `{token}`")))
}

/// Resolve a node id against the declared positions.
fn declared(
    line_no: usize,
    positions: &FxHashMap<NodeId, Position>,
    id: u32,
) -> TopoResult<(NodeId, Position)> {
    let id = NodeId(id);
    positions
        .get(&id)
        .map(|&pos| (id, pos))
        .ok_or_else(|| parse_err(line_no, format!("{id} is not declared")))
}

/// Parse a previous/next hop column: `-` means none.
fn hop(
    line_no: usize,
    positions: &FxHashMap<NodeId, Position>,
    token: &str,
) -> TopoResult<Option<NodeId>> {
    if token == "-" {
        return Ok(None);
    }
    let id: u32 = parse(line_no, token, "node id")?;
    declared(line_no, positions, id).map(|(id, _)| Some(id))
}
