// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use hifitime::Duration;
use log::{debug, info};
use thiserror::Error;

#[cfg(feature = "ms")]
use crate::io::read::MsReader;
use crate::{
    baselines::BaselineGroups,
    cli::InfoPrinter,
    flatten::{extract, ExtractError},
    io::{
        read::{VisRead, VisReadError},
        write::{CsvWriter, VisWriteError},
    },
    selection::VisSelection,
    time::{casacore_time_to_epoch, TimeWindow, TimeWindowError},
};

/// Everything needed to convert a measurement set into CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertParams {
    /// The measurement set to read.
    pub input: PathBuf,

    /// The CSV file to write. Any existing file is overwritten.
    pub output: PathBuf,
}

/// What a conversion found and did.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertSummary {
    /// The reference frequency of the first spectral window [Hz].
    pub ref_freq_hz: f64,

    pub num_antennas: usize,

    pub window: TimeWindow,

    /// The number of main-table rows that satisfied the selection.
    pub num_selected_rows: usize,

    pub num_baselines: usize,

    /// The number of lines written, or `None` if this was a dry run.
    pub num_written: Option<usize>,
}

impl ConvertParams {
    /// Open the input measurement set and convert it.
    pub fn run(&self, dry_run: bool) -> Result<ConvertSummary, ConvertError> {
        #[cfg(feature = "ms")]
        {
            let mut vis = MsReader::new(&self.input)?;
            self.convert(&mut vis, dry_run)
        }

        #[cfg(not(feature = "ms"))]
        {
            let _ = dry_run;
            Err(ConvertError::NoMsSupport)
        }
    }

    /// Convert an already-opened dataset. `self.input` is only used for
    /// reporting. If `dry_run` is true, everything is resolved and reported,
    /// but the output file isn't touched.
    pub fn convert(
        &self,
        vis: &mut dyn VisRead,
        dry_run: bool,
    ) -> Result<ConvertSummary, ConvertError> {
        info!(
            "Converting {} to {}",
            self.input.display(),
            self.output.display()
        );

        let ref_freq_hz = vis.get_ref_freq()?;
        let num_antennas = vis.get_antenna_names()?.len();
        let mut input_printer = InfoPrinter::new("Input data".into());
        input_printer.push_block(vec![
            format!("Measurement set: {}", self.input.display()).into(),
            format!("Reference frequency: {:.4} MHz", ref_freq_hz / 1e6).into(),
        ]);
        input_printer.push_block(vec![
            format!("{} main-table rows", vis.get_num_rows()).into(),
            format!("{num_antennas} antennas").into(),
        ]);
        input_printer.display();

        // This must succeed before anything is written.
        let window = TimeWindow::from_vis(&mut *vis)?;
        let mut time_printer = InfoPrinter::new("Time info".into());
        time_printer.push_block(vec![
            format!("First timestamp: {}", casacore_time_to_epoch(window.first_time)).into(),
            format!("Last timestamp:  {}", casacore_time_to_epoch(window.last_time)).into(),
        ]);
        time_printer.push_line(
            format!(
                "Integration time: {} ({} slots)",
                Duration::from_seconds(window.int_time),
                window.num_slots
            )
            .into(),
        );
        time_printer.display();

        let selection = VisSelection::new(window.full_time_range(), num_antennas);
        debug!("Selection: {}", selection.describe());
        let groups = BaselineGroups::new(vis.query(&selection)?);
        info!(
            "Selected {} rows over {} baselines",
            groups.num_rows(),
            groups.len()
        );

        let mut summary = ConvertSummary {
            ref_freq_hz,
            num_antennas,
            window,
            num_selected_rows: groups.num_rows(),
            num_baselines: groups.len(),
            num_written: None,
        };

        if dry_run {
            info!("Dry run -- not writing {}", self.output.display());
            return Ok(summary);
        }

        // The output only replaces an existing file once every row is written.
        let mut writer = CsvWriter::new(&self.output)?;
        extract(&mut *vis, &groups, &mut writer)?;
        let num_written = writer.finalise()?;
        info!("Wrote {num_written} lines to {}", self.output.display());
        summary.num_written = Some(num_written);

        Ok(summary)
    }
}

#[derive(Error, Debug)]
pub enum ConvertError {
    #[cfg(not(feature = "ms"))]
    #[error("This binary was compiled without the \"ms\" feature, so measurement sets can't be read")]
    NoMsSupport,

    #[error(transparent)]
    VisRead(#[from] VisReadError),

    #[error(transparent)]
    TimeWindow(#[from] TimeWindowError),

    #[error(transparent)]
    VisWrite(#[from] VisWriteError),
}

impl From<ExtractError> for ConvertError {
    fn from(e: ExtractError) -> Self {
        match e {
            ExtractError::VisRead(e) => Self::VisRead(e),
            ExtractError::VisWrite(e) => Self::VisWrite(e),
        }
    }
}
