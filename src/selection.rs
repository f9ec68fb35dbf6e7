// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Selecting a subset of main-table rows by time and antenna.
//!
//! A [`VisSelection`] is a plain value; evaluating it is up to the
//! [`crate::io::read::VisRead::query`] implementation, which must not reorder
//! rows.

use std::{collections::BTreeSet, ops::RangeInclusive};

use itertools::Itertools;

use crate::io::read::MainCol;

/// The main-table columns needed after selection.
pub const SELECTED_COLUMNS: [MainCol; 5] = [
    MainCol::Antenna1,
    MainCol::Antenna2,
    MainCol::Uvw,
    MainCol::Data,
    MainCol::Weight,
];

#[derive(Debug, Clone, PartialEq)]
pub struct VisSelection {
    /// Rows with a `TIME` inside this range (inclusive on both ends) are
    /// selected.
    pub time_range: RangeInclusive<f64>,

    /// Both antennas of a row's baseline must be in this set for the row to be
    /// selected.
    pub antennas: BTreeSet<i32>,
}

impl VisSelection {
    /// Select every row inside `time_range` whose antennas are in the
    /// antenna table, i.e. indices `0..num_antennas`.
    pub fn new(time_range: RangeInclusive<f64>, num_antennas: usize) -> VisSelection {
        VisSelection {
            time_range,
            antennas: (0..num_antennas as i32).collect(),
        }
    }

    /// Replace the antennas of this selection. An empty set selects nothing.
    pub fn with_antennas<I: IntoIterator<Item = i32>>(self, antennas: I) -> VisSelection {
        VisSelection {
            antennas: antennas.into_iter().collect(),
            ..self
        }
    }

    /// The columns a reader needs to provide for the selected rows.
    pub fn columns(&self) -> &'static [MainCol] {
        &SELECTED_COLUMNS
    }

    /// Does a row with these values satisfy the selection?
    pub fn contains(&self, time: f64, ant1: i32, ant2: i32) -> bool {
        self.time_range.contains(&time)
            && self.antennas.contains(&ant1)
            && self.antennas.contains(&ant2)
    }

    /// A human-readable version of the selection, e.g. for logging.
    pub fn describe(&self) -> String {
        format!(
            "TIME in [{}, {}], ANTENNA1 and ANTENNA2 in [{}]; columns {}",
            self.time_range.start(),
            self.time_range.end(),
            self.antennas.iter().join(", "),
            self.columns().iter().join(", ")
        )
    }
}
