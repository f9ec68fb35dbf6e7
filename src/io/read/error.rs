// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors from reading a `VisRead` trait instance.

use thiserror::Error;

use super::MainCol;

#[derive(Error, Debug)]
pub enum VisReadError {
    #[error("Main table {array_type} from row {row_index} did not have expected {expected_len} elements on axis {axis_num}")]
    BadArraySize {
        array_type: &'static str,
        row_index: u64,
        expected_len: usize,
        axis_num: usize,
    },

    #[error("The main table has no {col} column")]
    MissingColumn { col: MainCol },

    #[error("Row {row_index} is beyond the end of the main table ({num_rows} rows)")]
    RowOutOfRange { row_index: u64, num_rows: u64 },

    #[error("Column {col} does not hold {expected} values")]
    WrongColumnType { col: MainCol, expected: &'static str },

    #[error("The main table columns TIME, ANTENNA1 and ANTENNA2 have different numbers of rows")]
    ColumnLengthMismatch,

    #[error("The SPECTRAL_WINDOW table contains no rows; can't get a reference frequency")]
    NoSpectralWindows,

    #[cfg(feature = "ms")]
    #[error(transparent)]
    MS(#[from] super::ms::MsReadError),
}
