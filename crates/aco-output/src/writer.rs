//! The `OutputWriter` trait implemented by backend writers.

use crate::{CycleRow, ObservationRow, OutputResult};

/// Sink for structured run output.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one observation row.
    fn write_observation(&mut self, row: &ObservationRow) -> OutputResult<()>;

    /// Write the final cycle ranking.
    fn write_cycles(&mut self, rows: &[CycleRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
