// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Grouping selected rows by baseline.

use indexmap::IndexMap;

use crate::io::read::SelectedRow;

/// All of the rows for a single baseline, in selection (time) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Baseline<'a> {
    pub ant1: i32,
    pub ant2: i32,

    /// Main-table row indices.
    pub rows: &'a [u64],
}

/// Selected rows grouped by their `(ANTENNA1, ANTENNA2)` pair. Groups are kept
/// in the order that baselines first appear in the selection; they are not
/// sorted by antenna number.
#[derive(Debug, Clone, Default)]
pub struct BaselineGroups {
    groups: IndexMap<(i32, i32), Vec<u64>>,
    num_rows: usize,
}

impl BaselineGroups {
    pub fn new<I: IntoIterator<Item = SelectedRow>>(rows: I) -> BaselineGroups {
        let mut groups: IndexMap<(i32, i32), Vec<u64>> = IndexMap::new();
        let mut num_rows = 0;
        for SelectedRow { row, ant1, ant2 } in rows {
            groups.entry((ant1, ant2)).or_default().push(row);
            num_rows += 1;
        }
        BaselineGroups { groups, num_rows }
    }

    /// The number of distinct baselines.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The total number of rows across all baselines.
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn iter(&self) -> impl Iterator<Item = Baseline<'_>> + '_ {
        self.groups.iter().map(|(&(ant1, ant2), rows)| Baseline {
            ant1,
            ant2,
            rows: rows.as_slice(),
        })
    }
}
