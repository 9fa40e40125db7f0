//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use aco_colony::CycleSet;
use aco_sim::{Observation, SimObserver, SimStats};

use crate::row::{CycleRow, ObservationRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes every observation and the final cycle
/// ranking to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_observation(&mut self, observation: &Observation) {
        let result = self.writer.write_observation(&ObservationRow::from(observation));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _stats: &SimStats, cycles: &CycleSet) {
        let rows: Vec<CycleRow> = cycles
            .iter()
            .enumerate()
            .map(|(i, record)| CycleRow::new(i as u32 + 1, record))
            .collect();
        let result = self.writer.write_cycles(&rows);
        self.store_err(result);

        let result = self.writer.finish();
        self.store_err(result);
    }
}
