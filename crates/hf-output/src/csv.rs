//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_snapshots.csv`
//! - `edge_snapshots.csv`

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, EdgeSnapshotRow, OutputResult};

pub const AGENT_FILE: &str = "agent_snapshots.csv";
pub const EDGE_FILE: &str = "edge_snapshots.csv";

/// Writes simulation snapshots as CSV, one stream for agents and one for
/// edges.  [`CsvWriter::new`] backs both streams with files.
pub struct CsvWriter<W: Write = File> {
    agents:   Writer<W>,
    edges:    Writer<W>,
    finished: bool,
}

impl CsvWriter<File> {
    /// Create `dir` if needed, open (or truncate) both files, and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        let agents = File::create(dir.join(AGENT_FILE))?;
        let edges = File::create(dir.join(EDGE_FILE))?;
        Self::from_writers(agents, edges)
    }
}

impl<W: Write> CsvWriter<W> {
    /// Wrap two arbitrary sinks and write the header rows.
    pub fn from_writers(agents: W, edges: W) -> OutputResult<Self> {
        let mut agents = Writer::from_writer(agents);
        agents.write_record(["agent_id", "now_ms", "x", "y", "mode"])?;

        let mut edges = Writer::from_writer(edges);
        edges.write_record(["now_ms", "a_x", "a_y", "b_x", "b_y", "traffic"])?;

        Ok(Self { agents, edges, finished: false })
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_agents(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.agents.write_record(&[
                row.agent_id.to_string(),
                row.now_ms.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.mode.as_str().to_owned(),
            ])?;
        }
        Ok(())
    }

    fn write_edges(&mut self, rows: &[EdgeSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.edges.write_record(&[
                row.now_ms.to_string(),
                row.a_x.to_string(),
                row.a_y.to_string(),
                row.b_x.to_string(),
                row.b_y.to_string(),
                row.traffic.to_string(),
            ])?;
        }
        Ok(())
    }

    /// A failed flush leaves the writer unfinished so a later call retries.
    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.agents.flush()?;
        self.edges.flush()?;
        self.finished = true;
        Ok(())
    }
}
