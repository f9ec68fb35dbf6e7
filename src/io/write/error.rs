// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors from writing out samples.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VisWriteError {
    #[error("Couldn't create output file '{path}': {err}")]
    Create {
        path: PathBuf,
        err: std::io::Error,
    },

    #[error("Couldn't move the finished output into place at '{path}': {err}")]
    Persist {
        path: PathBuf,
        err: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
}
