// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all ms2csv-related errors. This should be the *only* error
//! enum that is publicly visible from the command-line code.

use thiserror::Error;

use super::convert::ConvertArgsError;
#[cfg(feature = "ms")]
use crate::io::read::MsReadError;
use crate::{
    io::{read::VisReadError, write::VisWriteError},
    params::ConvertError,
    time::TimeWindowError,
};

/// Each variant categorises where things went wrong; the message is the
/// underlying error's.
#[derive(Error, Debug)]
pub enum Ms2CsvError {
    /// The command line didn't make sense.
    #[error("{0}\n\nRun with --help for usage.")]
    Usage(String),

    /// Something needed at run time wasn't compiled in.
    #[error("{0}")]
    MissingDependency(String),

    /// The input measurement set couldn't be read.
    #[error("{0}")]
    VisRead(String),

    /// The input measurement set has timing information that can't be used.
    #[error("{0}")]
    TimeWindow(String),

    /// The output CSV file couldn't be written.
    #[error("{0}")]
    VisWrite(String),

    /// An error related to argument files.
    #[error("{0}")]
    ArgFile(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

impl From<ConvertArgsError> for Ms2CsvError {
    fn from(e: ConvertArgsError) -> Self {
        let s = e.to_string();
        match e {
            ConvertArgsError::NoInput => Self::Usage(s),
        }
    }
}

impl From<ConvertError> for Ms2CsvError {
    fn from(e: ConvertError) -> Self {
        match e {
            #[cfg(not(feature = "ms"))]
            ConvertError::NoMsSupport => Self::MissingDependency(e.to_string()),
            ConvertError::VisRead(e) => Self::from(e),
            ConvertError::TimeWindow(e) => Self::from(e),
            ConvertError::VisWrite(e) => Self::from(e),
        }
    }
}

impl From<VisReadError> for Ms2CsvError {
    fn from(e: VisReadError) -> Self {
        let s = e.to_string();
        match e {
            #[cfg(feature = "ms")]
            VisReadError::MS(MsReadError::BadFile(_)) => Self::VisRead(format!(
                "{s}\nThe input must be a CASA measurement set directory"
            )),
            #[cfg(feature = "ms")]
            VisReadError::MS(_) => Self::VisRead(s),
            VisReadError::BadArraySize { .. }
            | VisReadError::MissingColumn { .. }
            | VisReadError::RowOutOfRange { .. }
            | VisReadError::WrongColumnType { .. }
            | VisReadError::ColumnLengthMismatch
            | VisReadError::NoSpectralWindows => Self::VisRead(s),
        }
    }
}

impl From<TimeWindowError> for Ms2CsvError {
    fn from(e: TimeWindowError) -> Self {
        let s = e.to_string();
        match e {
            TimeWindowError::VisRead(e) => Self::from(e),
            TimeWindowError::NoRows | TimeWindowError::ZeroIntegrationTime => {
                Self::TimeWindow(s)
            }
        }
    }
}

impl From<VisWriteError> for Ms2CsvError {
    fn from(e: VisWriteError) -> Self {
        Self::VisWrite(e.to_string())
    }
}

impl From<std::io::Error> for Ms2CsvError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}
