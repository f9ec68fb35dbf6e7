// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to handle writing out samples.

mod csv;
mod error;

pub use self::csv::{write_csv, CsvWriter};
pub use error::VisWriteError;
