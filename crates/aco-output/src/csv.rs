//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `observations.csv`
//! - `cycles.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CycleRow, ObservationRow, OutputResult};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    observations: Writer<File>,
    cycles:       Writer<File>,
    finished:     bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the two CSV files, and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut observations = Writer::from_path(dir.join("observations.csv"))?;
        observations.write_record([
            "seq",
            "time",
            "move_events",
            "evaporation_events",
            "candidates",
            "best_weight",
            "best_cycle",
        ])?;

        let mut cycles = Writer::from_path(dir.join("cycles.csv"))?;
        cycles.write_record(["rank", "weight", "nodes"])?;

        Ok(Self {
            observations,
            cycles,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_observation(&mut self, row: &ObservationRow) -> OutputResult<()> {
        self.observations.write_record(&[
            row.seq.to_string(),
            row.time.to_string(),
            row.move_events.to_string(),
            row.evaporation_events.to_string(),
            row.candidates.to_string(),
            row.best_weight.map(|w| w.to_string()).unwrap_or_default(),
            row.best_cycle.clone(),
        ])?;
        Ok(())
    }

    fn write_cycles(&mut self, rows: &[CycleRow]) -> OutputResult<()> {
        for row in rows {
            self.cycles.write_record(&[
                row.rank.to_string(),
                row.weight.to_string(),
                row.nodes.clone(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.observations.flush()?;
        self.cycles.flush()?;
        Ok(())
    }
}
