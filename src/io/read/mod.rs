// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to handle reading from visibility datasets.
//!
//! Everything downstream only talks to a [`VisRead`] trait object, so the
//! storage engine (casacore for measurement sets) stays behind this module.

mod error;
mod memory;
#[cfg(feature = "ms")]
mod ms;
#[cfg(test)]
mod tests;

pub use error::VisReadError;
pub use memory::{MemoryRow, MemoryVis};
#[cfg(feature = "ms")]
pub use ms::{MsReadError, MsReader};

use itertools::izip;
use num_complex::Complex32;
use strum_macros::{Display, EnumIter, IntoStaticStr};

use crate::selection::VisSelection;

/// Main-table columns that are used. Their string representations are the
/// casacore column names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum MainCol {
    #[strum(serialize = "TIME")]
    Time,

    #[strum(serialize = "INTERVAL")]
    Interval,

    #[strum(serialize = "ANTENNA1")]
    Antenna1,

    #[strum(serialize = "ANTENNA2")]
    Antenna2,

    #[strum(serialize = "UVW")]
    Uvw,

    #[strum(serialize = "DATA")]
    Data,

    #[strum(serialize = "WEIGHT")]
    Weight,
}

impl MainCol {
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Sub-tables linked to the main table by keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum SubTable {
    #[strum(serialize = "SPECTRAL_WINDOW")]
    SpectralWindow,

    #[strum(serialize = "ANTENNA")]
    Antenna,
}

impl SubTable {
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// A main-table row that satisfied a [`VisSelection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedRow {
    /// The index of the row in the main table.
    pub row: u64,
    pub ant1: i32,
    pub ant2: i32,
}

/// The values of a single row at the extracted channel and polarisation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowData {
    /// [metres]
    pub uvw: [f64; 3],
    pub vis: Complex32,
    pub weight: f32,
}

pub trait VisRead {
    /// The total number of rows in the main table.
    fn get_num_rows(&self) -> u64;

    /// Does the main table have this column?
    fn has_column(&self, col: MainCol) -> bool;

    /// Get a single scalar floating-point cell out of the main table.
    fn get_f64_cell(&mut self, col: MainCol, row: u64) -> Result<f64, VisReadError>;

    /// Get a whole scalar floating-point column out of the main table.
    fn get_f64_col(&mut self, col: MainCol) -> Result<Vec<f64>, VisReadError>;

    /// Get a whole scalar integer column out of the main table.
    fn get_i32_col(&mut self, col: MainCol) -> Result<Vec<i32>, VisReadError>;

    /// Get the reference frequency of the first spectral window [Hz].
    fn get_ref_freq(&mut self) -> Result<f64, VisReadError>;

    /// Get the names of all antennas in the antenna table, in order.
    fn get_antenna_names(&mut self) -> Result<Vec<String>, VisReadError>;

    /// Read the UVW, the visibility at [`crate::constants::CHANNEL_INDEX`] and
    /// [`crate::constants::POL_INDEX`], and the weight at
    /// [`crate::constants::POL_INDEX`] for a single main-table row.
    fn read_row(&mut self, row: u64) -> Result<RowData, VisReadError>;

    fn get_time(&mut self, row: u64) -> Result<f64, VisReadError> {
        self.get_f64_cell(MainCol::Time, row)
    }

    fn get_interval(&mut self, row: u64) -> Result<f64, VisReadError> {
        self.get_f64_cell(MainCol::Interval, row)
    }

    /// Evaluate a selection against the main table. Matching rows are returned
    /// in their natural order; nothing is modified. Every column the selection
    /// projects to must be present.
    fn query(&mut self, selection: &VisSelection) -> Result<Vec<SelectedRow>, VisReadError> {
        if let Some(&col) = selection.columns().iter().find(|&&c| !self.has_column(c)) {
            return Err(VisReadError::MissingColumn { col });
        }

        let times = self.get_f64_col(MainCol::Time)?;
        let antenna1 = self.get_i32_col(MainCol::Antenna1)?;
        let antenna2 = self.get_i32_col(MainCol::Antenna2)?;
        if antenna1.len() != times.len() || antenna2.len() != times.len() {
            return Err(VisReadError::ColumnLengthMismatch);
        }

        let selected = izip!(0.., times, antenna1, antenna2)
            .filter(|&(_, time, ant1, ant2)| selection.contains(time, ant1, ant2))
            .map(|(row, _, ant1, ant2)| SelectedRow { row, ant1, ant2 })
            .collect();
        Ok(selected)
    }
}
