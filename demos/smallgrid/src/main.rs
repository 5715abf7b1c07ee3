//! smallgrid — smallest end-to-end demo of the mobgen trace generator.
//!
//! Walkers enter a 2×2 street grid at node 1, timed by a two-regime MMPP
//! (a quiet phase and a burst phase), wander with a 40 % chance of being
//! absorbed at each hop, and the resulting trace is written as XML.
//!
//! Usage: `cargo run --release -p smallgrid [output.xml]`

use std::io::Cursor;
use std::path::Path;

use anyhow::Result;

use mob_core::SimRng;
use mob_process::{Lognormal, Mmpp, RandomProcess};
use mob_topo::load_scenario;
use mob_trace::{XmlTraceWriter, generate_trace};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const WALKERS: usize = 25;

// 2×2 grid, 100 m blocks, one entry at the south-west corner.  Every
// (node, previous) key continues to the opposite neighbour with p = 0.6 and
// is absorbed with p = 0.4.
const SCENARIO: &str = "\
node 1 0.0   0.0
node 2 100.0 0.0
node 3 0.0   100.0
node 4 100.0 100.0

street 1 1 2
street 2 3 4
street 3 1 3
street 4 2 4

entry 1
route 1 - 2 0.45
route 1 - 3 0.45
route 1 - - 0.10

route 2 1 4 0.6
route 2 1 - 0.4
route 3 1 4 0.6
route 3 1 - 0.4
route 4 2 3 0.6
route 4 2 - 0.4
route 4 3 2 0.6
route 4 3 - 0.4
route 3 4 1 0.6
route 3 4 - 0.4
route 2 4 1 0.6
route 2 4 - 0.4
route 1 2 3 0.6
route 1 2 - 0.4
route 1 3 2 0.6
route 1 3 - 0.4
";

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let out = std::env::args().nth(1).unwrap_or_else(|| "trace.xml".into());
    let scenario = load_scenario(Cursor::new(SCENARIO))?;

    let mut root = SimRng::new(SEED);

    // Creation timing: quiet regime at 0.05 arrivals/s, burst regime at 0.5,
    // switching every ~100 s on average.
    let q = vec![vec![-0.01, 0.01], vec![0.01, -0.01]];
    let creations: Vec<Box<dyn RandomProcess>> =
        vec![Box::new(Mmpp::new(q, vec![0.05, 0.5], root.child(0))?)];

    // Pedestrian speeds around 1.4 m/s with mild spread.
    let mut speeds = Lognormal::new(1.4f64.ln(), 0.2, root.child(1))?;

    let events = generate_trace(&scenario, creations, WALKERS, &mut speeds, root.child(2))?;

    let mut writer = XmlTraceWriter::create(Path::new(&out))?;
    writer.write_all(&events)?;
    writer.finish()?;

    println!("wrote {} events for {WALKERS} walkers to {out}", events.len());
    Ok(())
}
