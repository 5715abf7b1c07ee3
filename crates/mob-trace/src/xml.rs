//! XML trace serialization.
//!
//! Events are written as self-closing elements with attributes, one per
//! line, inside a `<mobility-trace>` document:
//!
//! ```xml
//! <?xml version="1.0" encoding="utf-8"?>
//! <mobility-trace>
//!   <create node="0" time="1.000" x="0.00" y="0.00"/>
//!   <waypoint node="0" time="11.000" x="100.00" y="0.00" speed="10.00"/>
//!   <destroy node="0" time="11.000"/>
//! </mobility-trace>
//! ```
//!
//! There is no algorithmic content here — the writer formats whatever event
//! list it is handed and trusts the caller for ordering.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::{TraceEvent, TraceResult};

const HEADER: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<mobility-trace>\n";
const FOOTER: &str = "</mobility-trace>\n";

/// Writes trace events to any `Write` sink.
///
/// The document header is written on construction; call
/// [`finish`](Self::finish) to close the document and flush.
pub struct XmlTraceWriter<W: Write> {
    writer: W,
    finished: bool,
}

impl XmlTraceWriter<BufWriter<File>> {
    /// Create a trace file at `path`.
    pub fn create(path: &Path) -> TraceResult<Self> {
        info!(?path, "creating trace file");
        let file = File::create(path)?;
        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> XmlTraceWriter<W> {
    /// Wrap a sink and write the document header.
    pub fn new(mut writer: W) -> TraceResult<Self> {
        writer.write_all(HEADER.as_bytes())?;
        Ok(Self { writer, finished: false })
    }

    pub fn write_event(&mut self, event: &TraceEvent) -> TraceResult<()> {
        match *event {
            TraceEvent::Create { walker, time, pos } => writeln!(
                self.writer,
                "  <create node=\"{}\" time=\"{time:.3}\" x=\"{:.2}\" y=\"{:.2}\"/>",
                walker.0, pos.x, pos.y
            )?,
            TraceEvent::Waypoint { walker, time, pos, speed } => writeln!(
                self.writer,
                "  <waypoint node=\"{}\" time=\"{time:.3}\" x=\"{:.2}\" y=\"{:.2}\" speed=\"{speed:.2}\"/>",
                walker.0, pos.x, pos.y
            )?,
            TraceEvent::Destroy { walker, time } => writeln!(
                self.writer,
                "  <destroy node=\"{}\" time=\"{time:.3}\"/>",
                walker.0
            )?,
        }
        Ok(())
    }

    pub fn write_all(&mut self, events: &[TraceEvent]) -> TraceResult<()> {
        for event in events {
            self.write_event(event)?;
        }
        Ok(())
    }

    /// Close the document and flush.  Idempotent.
    pub fn finish(&mut self) -> TraceResult<()> {
        if !self.finished {
            self.writer.write_all(FOOTER.as_bytes())?;
            self.writer.flush()?;
            self.finished = true;
        }
        Ok(())
    }
}
