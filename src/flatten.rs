// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Flattening baseline groups into output samples.
//!
//! Every selected row becomes exactly one [`Sample`]. Baselines are visited in
//! the order held by [`BaselineGroups`], and rows within a baseline in their
//! time order, so the output order is fully determined by the input.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::{
    baselines::BaselineGroups,
    io::{
        read::{RowData, VisRead, VisReadError},
        write::VisWriteError,
    },
    PROGRESS_BARS,
};

/// One output record. The field order here is the column order of the output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    /// [metres]
    pub u: f64,
    /// [metres]
    pub v: f64,
    /// [metres]
    pub w: f64,
    pub re: f32,
    pub im: f32,
    pub weight: f32,
}

impl From<RowData> for Sample {
    fn from(r: RowData) -> Sample {
        let [u, v, w] = r.uvw;
        Sample {
            u,
            v,
            w,
            re: r.vis.re,
            im: r.vis.im,
            weight: r.weight,
        }
    }
}

/// Something that accepts samples in output order.
pub trait SampleSink {
    fn push(&mut self, sample: Sample) -> Result<(), VisWriteError>;
}

/// Six parallel columns of samples. All columns always have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatColumns {
    u: Vec<f64>,
    v: Vec<f64>,
    w: Vec<f64>,
    re: Vec<f32>,
    im: Vec<f32>,
    weight: Vec<f32>,
}

impl FlatColumns {
    pub fn new() -> FlatColumns {
        FlatColumns::default()
    }

    /// Pre-size all columns, e.g. with [`BaselineGroups::num_rows`].
    pub fn with_capacity(n: usize) -> FlatColumns {
        FlatColumns {
            u: Vec::with_capacity(n),
            v: Vec::with_capacity(n),
            w: Vec::with_capacity(n),
            re: Vec::with_capacity(n),
            im: Vec::with_capacity(n),
            weight: Vec::with_capacity(n),
        }
    }

    pub fn len(&self) -> usize {
        self.u.len()
    }

    pub fn is_empty(&self) -> bool {
        self.u.is_empty()
    }

    pub fn u(&self) -> &[f64] {
        &self.u
    }

    pub fn v(&self) -> &[f64] {
        &self.v
    }

    pub fn w(&self) -> &[f64] {
        &self.w
    }

    pub fn re(&self) -> &[f32] {
        &self.re
    }

    pub fn im(&self) -> &[f32] {
        &self.im
    }

    pub fn weight(&self) -> &[f32] {
        &self.weight
    }

    pub fn get(&self, i: usize) -> Option<Sample> {
        if i >= self.len() {
            return None;
        }
        Some(Sample {
            u: self.u[i],
            v: self.v[i],
            w: self.w[i],
            re: self.re[i],
            im: self.im[i],
            weight: self.weight[i],
        })
    }

    /// Iterate over the samples, i.e. the rows of the columns.
    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        (0..self.len()).filter_map(|i| self.get(i))
    }
}

impl SampleSink for FlatColumns {
    fn push(&mut self, s: Sample) -> Result<(), VisWriteError> {
        self.u.push(s.u);
        self.v.push(s.v);
        self.w.push(s.w);
        self.re.push(s.re);
        self.im.push(s.im);
        self.weight.push(s.weight);
        Ok(())
    }
}

/// Read every row of every baseline group and push one sample per row into
/// `sink`. Returns the number of samples pushed.
pub fn extract<R, S>(
    vis: &mut R,
    groups: &BaselineGroups,
    sink: &mut S,
) -> Result<usize, ExtractError>
where
    R: VisRead + ?Sized,
    S: SampleSink + ?Sized,
{
    let progress = ProgressBar::with_draw_target(
        Some(groups.len() as _),
        if PROGRESS_BARS.load() {
            ProgressDrawTarget::stdout()
        } else {
            ProgressDrawTarget::hidden()
        },
    )
    .with_style(
        ProgressStyle::default_bar()
            .template("{msg}: [{wide_bar:.blue}] {pos:3}/{len:3} baselines ({elapsed_precise}<{eta_precise})")
            .unwrap()
            .progress_chars("=> "),
    )
    .with_position(0)
    .with_message("Extracting");

    let mut num_samples = 0;
    for baseline in groups.iter() {
        for &row in baseline.rows {
            let data = vis.read_row(row)?;
            sink.push(Sample::from(data))?;
            num_samples += 1;
        }
        progress.inc(1);
    }
    progress.abandon_with_message("Finished extracting");
    debug!(
        "Extracted {num_samples} samples from {} baselines",
        groups.len()
    );

    Ok(num_samples)
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error(transparent)]
    VisRead(#[from] VisReadError),

    #[error(transparent)]
    VisWrite(#[from] VisWriteError),
}
