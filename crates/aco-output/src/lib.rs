//! `aco-output` — simulation output for the rust_aco simulator.
//!
//! Two kinds of output are provided:
//!
//! | Output      | Type                                  | Destination                         |
//! |-------------|---------------------------------------|-------------------------------------|
//! | Text report | [`TextReport`], [`write_input`]       | any `io::Write` (stdout in the CLI) |
//! | CSV         | [`CsvWriter`] + [`SimOutputObserver`] | `observations.csv`, `cycles.csv`    |
//!
//! Both are driven through `aco_sim::SimObserver`, so a run can feed several
//! outputs at once (observers compose as tuples).
//!
//! # Usage
//!
//! ```rust,ignore
//! use aco_output::{CsvWriter, SimOutputObserver, TextReport};
//!
//! let csv = SimOutputObserver::new(CsvWriter::new(Path::new("./out"))?);
//! let mut observer = (TextReport::new(std::io::stdout()), csv);
//! sim.run(&mut observer)?;
//! observer.1.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod report;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use report::{TextReport, write_input, write_observation};
pub use row::{CycleRow, ObservationRow};
pub use writer::OutputWriter;
