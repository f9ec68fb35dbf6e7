// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Resolving the time window of a dataset.
//!
//! The window is derived from the first and last main-table rows only; rows
//! are assumed to be in time order.

use std::ops::RangeInclusive;

use hifitime::{Duration, Epoch};
use log::debug;
use thiserror::Error;

use crate::io::read::{VisRead, VisReadError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    /// The `TIME` of the first row [MJD seconds].
    pub first_time: f64,

    /// The `TIME` of the last row [MJD seconds].
    pub last_time: f64,

    /// The `INTERVAL` of the first row [seconds].
    pub int_time: f64,

    /// The number of integrations between the first and last times. This is
    /// not necessarily an integer.
    pub num_slots: f64,
}

impl TimeWindow {
    /// Work out the time window from the first and last times and the first
    /// integration interval.
    pub fn new(
        first_time: f64,
        last_time: f64,
        int_time: f64,
    ) -> Result<TimeWindow, TimeWindowError> {
        if int_time == 0.0 {
            return Err(TimeWindowError::ZeroIntegrationTime);
        }
        let num_slots = (last_time - first_time) / int_time;
        Ok(TimeWindow {
            first_time,
            last_time,
            int_time,
            num_slots,
        })
    }

    /// Read the timing information from the first and last rows of the
    /// dataset's main table.
    pub fn from_vis<R: VisRead + ?Sized>(vis: &mut R) -> Result<TimeWindow, TimeWindowError> {
        let num_rows = vis.get_num_rows();
        if num_rows == 0 {
            return Err(TimeWindowError::NoRows);
        }
        let first_time = vis.get_time(0)?;
        let last_time = vis.get_time(num_rows - 1)?;
        let int_time = vis.get_interval(0)?;

        let window = TimeWindow::new(first_time, last_time, int_time)?;
        debug!("First time: {}", casacore_time_to_epoch(first_time));
        debug!("Last time:  {}", casacore_time_to_epoch(last_time));
        debug!(
            "Integration time: {} ({} slots)",
            Duration::from_seconds(int_time),
            window.num_slots
        );
        Ok(window)
    }

    /// The inclusive time range covering the integration slots `start_slot`
    /// to `end_slot`. Slots are counted from the first time and may be
    /// fractional.
    pub fn time_range(&self, start_slot: f64, end_slot: f64) -> RangeInclusive<f64> {
        let start = self.first_time + start_slot * self.int_time;
        let end = self.first_time + end_slot * self.int_time;
        start..=end
    }

    /// The inclusive time range covering the whole dataset. This is the slot
    /// range `0` to `num_slots`, but it always ends exactly on the last time,
    /// so float error can't drop the last timestep.
    pub fn full_time_range(&self) -> RangeInclusive<f64> {
        let range = self.time_range(0.0, self.num_slots);
        *range.start()..=range.end().max(self.last_time)
    }
}

/// Convert a casacore time (seconds since the MJD epoch, UTC) to a
/// [`hifitime::Epoch`].
pub fn casacore_time_to_epoch(mjd_seconds: f64) -> Epoch {
    Epoch::from_utc_seconds(mjd_seconds - hifitime::J1900_OFFSET * hifitime::SECONDS_PER_DAY)
}

#[derive(Error, Debug)]
pub enum TimeWindowError {
    #[error("The main table contains no rows; can't determine a time window")]
    NoRows,

    #[error("The first row's INTERVAL is 0; can't divide the time span into integration slots (division by zero)")]
    ZeroIntegrationTime,

    #[error(transparent)]
    VisRead(#[from] VisReadError),
}
