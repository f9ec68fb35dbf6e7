// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Comma-separated text output. There is no header line; each line is
//! `u,v,w,real,imag,weight` for one sample.

use std::path::{Path, PathBuf};

use ::csv::{Terminator, Writer, WriterBuilder};
use log::{debug, trace};
use tempfile::NamedTempFile;

use super::VisWriteError;
use crate::flatten::{FlatColumns, Sample, SampleSink};

/// Lines end with the platform's native line ending.
#[cfg(windows)]
const TERMINATOR: Terminator = Terminator::CRLF;
#[cfg(not(windows))]
const TERMINATOR: Terminator = Terminator::Any(b'\n');

/// Streams samples to a CSV file as they arrive.
///
/// Samples go to a temporary file next to `path`, which only replaces `path`
/// when [`CsvWriter::finalise`] succeeds. Dropping the writer without
/// finalising it removes the temporary file and leaves any existing `path`
/// untouched.
pub struct CsvWriter {
    path: PathBuf,
    writer: Writer<NamedTempFile>,
    num_written: usize,
}

impl CsvWriter {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<CsvWriter, VisWriteError> {
        let path = path.as_ref();
        debug!("Creating CSV output {}", path.display());
        let dir = match path.parent() {
            Some(d) if !d.as_os_str().is_empty() => d,
            _ => Path::new("."),
        };
        let tmp = tempfile::Builder::new()
            .prefix(".ms2csv")
            .suffix(".csv.tmp")
            .tempfile_in(dir)
            .map_err(|err| VisWriteError::Create {
                path: path.to_path_buf(),
                err,
            })?;
        trace!("Staging CSV output in {}", tmp.path().display());
        let writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(TERMINATOR)
            .from_writer(tmp);
        Ok(CsvWriter {
            path: path.to_path_buf(),
            writer,
            num_written: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush everything to disk, move the file into place (replacing anything
    /// already there) and return the number of lines written.
    pub fn finalise(self) -> Result<usize, VisWriteError> {
        let tmp = self
            .writer
            .into_inner()
            .map_err(|e| VisWriteError::IO(e.into_error()))?;
        tmp.persist(&self.path)
            .map_err(|e| VisWriteError::Persist {
                path: self.path.clone(),
                err: e.error,
            })?;
        trace!(
            "Wrote {} lines to {}",
            self.num_written,
            self.path.display()
        );
        Ok(self.num_written)
    }
}

impl SampleSink for CsvWriter {
    fn push(&mut self, sample: Sample) -> Result<(), VisWriteError> {
        self.writer.serialize(sample)?;
        self.num_written += 1;
        Ok(())
    }
}

/// Write all of the samples held in `cols` to a new CSV file at `path`.
/// Returns the number of lines written.
pub fn write_csv<P: AsRef<Path>>(path: P, cols: &FlatColumns) -> Result<usize, VisWriteError> {
    let mut writer = CsvWriter::new(path)?;
    for sample in cols.iter() {
        writer.push(sample)?;
    }
    writer.finalise()
}
