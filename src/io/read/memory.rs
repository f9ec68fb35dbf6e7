// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A visibility dataset held entirely in memory. It has the same shape as a
//! measurement set's main table, plus the two sub-table values that are used.

use ndarray::prelude::*;
use num_complex::Complex32;

use super::*;
use crate::constants::{CHANNEL_INDEX, POL_INDEX};

/// A single main-table row.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryRow {
    /// [MJD seconds]
    pub time: f64,
    /// [seconds]
    pub interval: f64,
    pub ant1: i32,
    pub ant2: i32,
    pub uvw: [f64; 3],
    /// Arranged `[channel][polarisation]`.
    pub data: Array2<Complex32>,
    /// One weight per polarisation.
    pub weight: Vec<f32>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryVis {
    rows: Vec<MemoryRow>,

    /// One reference frequency per spectral window [Hz].
    ref_freqs: Vec<f64>,

    antenna_names: Vec<String>,

    /// Main-table columns that this dataset pretends not to have.
    missing_cols: Vec<MainCol>,
}

impl MemoryVis {
    pub fn new(antenna_names: Vec<String>, ref_freqs: Vec<f64>) -> MemoryVis {
        MemoryVis {
            rows: vec![],
            ref_freqs,
            antenna_names,
            missing_cols: vec![],
        }
    }

    /// Drop a main-table column, e.g. to mimic an incomplete measurement set.
    pub fn without_column(mut self, col: MainCol) -> MemoryVis {
        self.missing_cols.push(col);
        self
    }

    pub fn push_row(&mut self, row: MemoryRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[MemoryRow] {
        &self.rows
    }

    fn get(&self, row: u64) -> Result<&MemoryRow, VisReadError> {
        self.rows
            .get(row as usize)
            .ok_or(VisReadError::RowOutOfRange {
                row_index: row,
                num_rows: self.get_num_rows(),
            })
    }
}

impl VisRead for MemoryVis {
    fn get_num_rows(&self) -> u64 {
        self.rows.len() as u64
    }

    fn has_column(&self, col: MainCol) -> bool {
        !self.missing_cols.contains(&col)
    }

    fn get_f64_cell(&mut self, col: MainCol, row: u64) -> Result<f64, VisReadError> {
        let r = self.get(row)?;
        match col {
            MainCol::Time => Ok(r.time),
            MainCol::Interval => Ok(r.interval),
            _ => Err(VisReadError::WrongColumnType {
                col,
                expected: "scalar f64",
            }),
        }
    }

    fn get_f64_col(&mut self, col: MainCol) -> Result<Vec<f64>, VisReadError> {
        match col {
            MainCol::Time => Ok(self.rows.iter().map(|r| r.time).collect()),
            MainCol::Interval => Ok(self.rows.iter().map(|r| r.interval).collect()),
            _ => Err(VisReadError::WrongColumnType {
                col,
                expected: "scalar f64",
            }),
        }
    }

    fn get_i32_col(&mut self, col: MainCol) -> Result<Vec<i32>, VisReadError> {
        match col {
            MainCol::Antenna1 => Ok(self.rows.iter().map(|r| r.ant1).collect()),
            MainCol::Antenna2 => Ok(self.rows.iter().map(|r| r.ant2).collect()),
            _ => Err(VisReadError::WrongColumnType {
                col,
                expected: "scalar i32",
            }),
        }
    }

    fn get_ref_freq(&mut self) -> Result<f64, VisReadError> {
        self.ref_freqs
            .first()
            .copied()
            .ok_or(VisReadError::NoSpectralWindows)
    }

    fn get_antenna_names(&mut self) -> Result<Vec<String>, VisReadError> {
        Ok(self.antenna_names.clone())
    }

    fn read_row(&mut self, row: u64) -> Result<RowData, VisReadError> {
        let r = self.get(row)?;
        let vis = r.data.get((CHANNEL_INDEX, POL_INDEX)).copied().ok_or_else(|| {
            let (axis_num, expected_len) = if r.data.len_of(Axis(0)) <= CHANNEL_INDEX {
                (0, CHANNEL_INDEX + 1)
            } else {
                (1, POL_INDEX + 1)
            };
            VisReadError::BadArraySize {
                array_type: "data",
                row_index: row,
                expected_len,
                axis_num,
            }
        })?;
        let weight = *r.weight.get(POL_INDEX).ok_or(VisReadError::BadArraySize {
            array_type: "weight",
            row_index: row,
            expected_len: POL_INDEX + 1,
            axis_num: 0,
        })?;
        Ok(RowData {
            uvw: r.uvw,
            vis,
            weight,
        })
    }
}
