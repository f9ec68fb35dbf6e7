// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Extract single-channel visibilities from CASA measurement sets and write them
out as comma-separated text.

Each output line holds `u,v,w,real,imag,weight` for the first fine channel and
the first polarisation of one main-table row. Rows are grouped by baseline in
the order baselines first appear in the data, and keep their time order within
a baseline.
 */

pub mod baselines;
mod cli;
pub mod constants;
pub mod flatten;
pub mod io;
pub mod params;
pub mod selection;
pub mod time;

#[cfg(test)]
mod tests;

// Re-exports.
pub use baselines::{Baseline, BaselineGroups};
pub use cli::{Ms2Csv, Ms2CsvError};
pub use flatten::{extract, ExtractError, FlatColumns, Sample, SampleSink};
#[cfg(feature = "ms")]
pub use io::read::MsReader;
pub use io::read::{MainCol, MemoryRow, MemoryVis, SubTable, VisRead, VisReadError};
pub use io::write::{write_csv, CsvWriter, VisWriteError};
pub use params::{ConvertError, ConvertParams, ConvertSummary};
pub use selection::VisSelection;
pub use time::{TimeWindow, TimeWindowError};

use crossbeam_utils::atomic::AtomicCell;

/// Are progress bars being drawn? This should only ever be enabled by CLI
/// code.
pub(crate) static PROGRESS_BARS: AtomicCell<bool> = AtomicCell::new(false);
