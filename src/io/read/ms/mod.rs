// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to interface with CASA measurement sets.
//!
//! More info: https://casa.nrao.edu/Memos/229.html#SECTION00060000000000000000

mod error;

pub use error::MsReadError;

use std::path::{Path, PathBuf};

use log::{debug, trace};
use marlu::{c32, rubbl_casatables};
use ndarray::prelude::*;
use rubbl_casatables::{Table, TableOpenMode};

use super::*;
use crate::constants::{CHANNEL_INDEX, POL_INDEX};

/// Open a measurement set table read only. If `table` is `None`, then open the
/// base table.
pub(super) fn read_table(ms: &Path, table: Option<SubTable>) -> Result<Table, MsReadError> {
    let t = Table::open(
        format!("{}/{}", ms.display(), table.map(SubTable::name).unwrap_or("")),
        TableOpenMode::Read,
    )?;
    Ok(t)
}

pub struct MsReader {
    /// The path to the measurement set on disk.
    pub ms: PathBuf,

    /// The main table, held open for as long as the reader lives.
    main_table: Table,

    /// The names of the main table's columns.
    col_names: Vec<String>,

    num_rows: u64,
}

impl MsReader {
    /// Open a measurement set read only and check that the main-table columns
    /// needed for timing are present. The rest are checked when a selection is
    /// evaluated.
    pub fn new<P: AsRef<Path>>(ms: P) -> Result<MsReader, VisReadError> {
        fn inner(ms: &Path) -> Result<MsReader, MsReadError> {
            debug!("Using measurement set: {}", ms.display());
            if !ms.exists() {
                return Err(MsReadError::BadFile(ms.to_path_buf()));
            }

            let mut main_table = read_table(ms, None)?;
            let col_names = main_table.column_names()?;
            for col in [MainCol::Time, MainCol::Interval] {
                if !col_names.iter().any(|c| c == col.name()) {
                    return Err(MsReadError::MissingColumn { col: col.name() });
                }
            }

            let num_rows = main_table.n_rows();
            trace!("Main table rows: {num_rows}");

            Ok(MsReader {
                ms: ms.to_path_buf(),
                main_table,
                col_names,
                num_rows,
            })
        }
        inner(ms.as_ref()).map_err(VisReadError::from)
    }

    /// Open a sub-table and check that it has the column `col`.
    fn read_sub_table(&self, table: SubTable, col: &'static str) -> Result<Table, MsReadError> {
        let mut t = read_table(&self.ms, Some(table))?;
        if !t.column_names()?.iter().any(|c| c == col) {
            return Err(MsReadError::MissingSubTableColumn {
                table: table.name(),
                col,
            });
        }
        Ok(t)
    }

    fn check_row(&self, row: u64) -> Result<(), VisReadError> {
        if row >= self.num_rows {
            return Err(VisReadError::RowOutOfRange {
                row_index: row,
                num_rows: self.num_rows,
            });
        }
        Ok(())
    }
}

impl VisRead for MsReader {
    fn get_num_rows(&self) -> u64 {
        self.num_rows
    }

    fn has_column(&self, col: MainCol) -> bool {
        self.col_names.iter().any(|c| c == col.name())
    }

    fn get_f64_cell(&mut self, col: MainCol, row: u64) -> Result<f64, VisReadError> {
        self.check_row(row)?;
        let value: f64 = self
            .main_table
            .get_cell(col.name(), row)
            .map_err(MsReadError::from)?;
        Ok(value)
    }

    fn get_f64_col(&mut self, col: MainCol) -> Result<Vec<f64>, VisReadError> {
        let values: Vec<f64> = self
            .main_table
            .get_col_as_vec(col.name())
            .map_err(MsReadError::from)?;
        Ok(values)
    }

    fn get_i32_col(&mut self, col: MainCol) -> Result<Vec<i32>, VisReadError> {
        let values: Vec<i32> = self
            .main_table
            .get_col_as_vec(col.name())
            .map_err(MsReadError::from)?;
        Ok(values)
    }

    fn get_ref_freq(&mut self) -> Result<f64, VisReadError> {
        let mut spectral_window_table =
            self.read_sub_table(SubTable::SpectralWindow, "REF_FREQUENCY")?;
        if spectral_window_table.n_rows() == 0 {
            return Err(VisReadError::NoSpectralWindows);
        }
        let ref_freq: f64 = spectral_window_table
            .get_cell("REF_FREQUENCY", 0)
            .map_err(MsReadError::from)?;
        debug!("MS reference frequency: {ref_freq} Hz");
        Ok(ref_freq)
    }

    fn get_antenna_names(&mut self) -> Result<Vec<String>, VisReadError> {
        let mut antenna_table = self.read_sub_table(SubTable::Antenna, "NAME")?;
        let names: Vec<String> = antenna_table
            .get_col_as_vec("NAME")
            .map_err(MsReadError::from)?;
        trace!("There are {} antenna names", names.len());
        Ok(names)
    }

    fn read_row(&mut self, row: u64) -> Result<RowData, VisReadError> {
        self.check_row(row)?;

        let uvw: Vec<f64> = self
            .main_table
            .get_cell_as_vec(MainCol::Uvw.name(), row)
            .map_err(MsReadError::from)?;
        let uvw: [f64; 3] = match uvw.as_slice() {
            &[u, v, w] => [u, v, w],
            _ => {
                return Err(VisReadError::BadArraySize {
                    array_type: "uvw",
                    row_index: row,
                    expected_len: 3,
                    axis_num: 0,
                })
            }
        };

        // The data array is arranged [frequency][instrumental_pol].
        let data: Array2<c32> = self
            .main_table
            .get_cell(MainCol::Data.name(), row)
            .map_err(MsReadError::from)?;
        let (num_chans, num_pols) = data.dim();
        if num_chans <= CHANNEL_INDEX || num_pols <= POL_INDEX {
            return Err(VisReadError::BadArraySize {
                array_type: "data",
                row_index: row,
                expected_len: if num_chans <= CHANNEL_INDEX {
                    CHANNEL_INDEX + 1
                } else {
                    POL_INDEX + 1
                },
                axis_num: if num_chans <= CHANNEL_INDEX { 0 } else { 1 },
            });
        }
        let vis = data[(CHANNEL_INDEX, POL_INDEX)];

        // WEIGHT has one value per polarisation.
        let weights: Vec<f32> = self
            .main_table
            .get_cell_as_vec(MainCol::Weight.name(), row)
            .map_err(MsReadError::from)?;
        let weight = *weights.get(POL_INDEX).ok_or(VisReadError::BadArraySize {
            array_type: "weight",
            row_index: row,
            expected_len: POL_INDEX + 1,
            axis_num: 0,
        })?;

        Ok(RowData { uvw, vis, weight })
    }
}
