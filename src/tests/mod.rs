// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Helpful functions for tests.

use ndarray::prelude::*;
use num_complex::Complex32;

use crate::io::read::{MemoryRow, MemoryVis};

/// The MJD seconds of the first timestep in the test data.
pub(crate) const TEST_FIRST_TIME: f64 = 4_888_561_714.0;

/// The integration time of the test data [seconds].
pub(crate) const TEST_INT_TIME: f64 = 2.0;

/// The reference frequency of the test data [Hz].
pub(crate) const TEST_REF_FREQ: f64 = 182_415_000.0;

/// Make a row where every value is derived from `seed`, so that different
/// rows are easily told apart. There are 2 channels and 4 polarisations; only
/// the first channel and polarisation should ever be extracted.
pub(crate) fn make_row(time: f64, ant1: i32, ant2: i32, seed: f32) -> MemoryRow {
    let data = Array2::from_shape_fn((2, 4), |(i_chan, i_pol)| {
        let offset = (i_chan * 4 + i_pol) as f32 * 100.0;
        Complex32::new(seed + offset, -seed - offset)
    });
    let weight = (0..4).map(|i_pol| seed / 10.0 + i_pol as f32).collect();
    MemoryRow {
        time,
        interval: TEST_INT_TIME,
        ant1,
        ant2,
        uvw: [
            f64::from(seed),
            f64::from(seed) * 2.0,
            f64::from(seed) * -0.5,
        ],
        data,
        weight,
    }
}

/// Get a dataset with 3 antennas (so 3 cross-correlation baselines) and 3
/// timesteps. Rows are in the usual time-major order, so every baseline
/// appears once per timestep.
pub(crate) fn get_test_vis() -> MemoryVis {
    let names = vec!["Tile011".to_string(), "Tile012".to_string(), "Tile013".to_string()];
    let mut vis = MemoryVis::new(names, vec![TEST_REF_FREQ, TEST_REF_FREQ + 1.28e6]);
    let mut seed = 1.0;
    for i_time in 0..3 {
        let time = TEST_FIRST_TIME + i_time as f64 * TEST_INT_TIME;
        for (ant1, ant2) in [(0, 1), (0, 2), (1, 2)] {
            vis.push_row(make_row(time, ant1, ant2, seed));
            seed += 1.0;
        }
    }
    vis
}

/// Write a [`MemoryVis`] out as a (minimal) measurement set, so that the
/// casacore-backed reader can be tested against the same data.
#[cfg(feature = "ms")]
pub(crate) fn write_test_ms(vis: &MemoryVis, ms: &std::path::Path) {
    use marlu::rubbl_casatables::{
        GlueDataType, Table, TableCreateMode, TableDesc, TableDescCreateMode,
    };

    let mut main_desc = TableDesc::new("", TableDescCreateMode::TDM_SCRATCH).unwrap();
    main_desc
        .add_scalar_column(GlueDataType::TpDouble, "TIME", None, false, false)
        .unwrap();
    main_desc
        .add_scalar_column(GlueDataType::TpDouble, "INTERVAL", None, false, false)
        .unwrap();
    main_desc
        .add_scalar_column(GlueDataType::TpInt, "ANTENNA1", None, false, false)
        .unwrap();
    main_desc
        .add_scalar_column(GlueDataType::TpInt, "ANTENNA2", None, false, false)
        .unwrap();
    main_desc
        .add_array_column(GlueDataType::TpDouble, "UVW", None, None, false, false)
        .unwrap();
    main_desc
        .add_array_column(GlueDataType::TpComplex, "DATA", None, None, false, false)
        .unwrap();
    main_desc
        .add_array_column(GlueDataType::TpFloat, "WEIGHT", None, None, false, false)
        .unwrap();
    let mut main_table = Table::new(ms, main_desc, 0, TableCreateMode::New).unwrap();
    for (i_row, row) in vis.rows().iter().enumerate() {
        let i_row = i_row as u64;
        main_table.add_rows(1).unwrap();
        main_table.put_cell("TIME", i_row, &row.time).unwrap();
        main_table.put_cell("INTERVAL", i_row, &row.interval).unwrap();
        main_table.put_cell("ANTENNA1", i_row, &row.ant1).unwrap();
        main_table.put_cell("ANTENNA2", i_row, &row.ant2).unwrap();
        main_table.put_cell("UVW", i_row, &row.uvw.to_vec()).unwrap();
        main_table.put_cell("DATA", i_row, &row.data).unwrap();
        main_table.put_cell("WEIGHT", i_row, &row.weight).unwrap();
    }

    let mut spw_desc = TableDesc::new("SPECTRAL_WINDOW", TableDescCreateMode::TDM_SCRATCH).unwrap();
    spw_desc
        .add_scalar_column(GlueDataType::TpDouble, "REF_FREQUENCY", None, false, false)
        .unwrap();
    let mut spw_table = Table::new(
        ms.join("SPECTRAL_WINDOW"),
        spw_desc,
        0,
        TableCreateMode::New,
    )
    .unwrap();
    let mut cloned = vis.clone();
    let ref_freq = crate::io::read::VisRead::get_ref_freq(&mut cloned).unwrap();
    spw_table.add_rows(1).unwrap();
    spw_table.put_cell("REF_FREQUENCY", 0, &ref_freq).unwrap();
    main_table
        .put_table_keyword("SPECTRAL_WINDOW", spw_table)
        .unwrap();

    let mut ant_desc = TableDesc::new("ANTENNA", TableDescCreateMode::TDM_SCRATCH).unwrap();
    ant_desc
        .add_scalar_column(GlueDataType::TpString, "NAME", None, false, false)
        .unwrap();
    let mut ant_table =
        Table::new(ms.join("ANTENNA"), ant_desc, 0, TableCreateMode::New).unwrap();
    let names = crate::io::read::VisRead::get_antenna_names(&mut cloned).unwrap();
    for (i_ant, name) in names.iter().enumerate() {
        ant_table.add_rows(1).unwrap();
        ant_table.put_cell("NAME", i_ant as u64, name).unwrap();
    }
    main_table.put_table_keyword("ANTENNA", ant_table).unwrap();
}
