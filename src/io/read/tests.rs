// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;
use ndarray::prelude::*;
use num_complex::Complex32;

use super::*;
use crate::tests::*;

#[test]
fn test_column_names() {
    assert_eq!(MainCol::Time.name(), "TIME");
    assert_eq!(MainCol::Antenna2.name(), "ANTENNA2");
    assert_eq!(MainCol::Weight.to_string(), "WEIGHT");
    assert_eq!(SubTable::SpectralWindow.name(), "SPECTRAL_WINDOW");
    assert_eq!(SubTable::Antenna.name(), "ANTENNA");
}

#[test]
fn test_memory_metadata() {
    let mut vis = get_test_vis();
    assert_eq!(vis.get_num_rows(), 9);
    // Only the first spectral window is used.
    assert_abs_diff_eq!(vis.get_ref_freq().unwrap(), TEST_REF_FREQ);
    assert_eq!(
        vis.get_antenna_names().unwrap(),
        vec!["Tile011", "Tile012", "Tile013"]
    );
    assert_abs_diff_eq!(vis.get_time(0).unwrap(), TEST_FIRST_TIME);
    assert_abs_diff_eq!(vis.get_time(8).unwrap(), TEST_FIRST_TIME + 4.0);
    assert_abs_diff_eq!(vis.get_interval(0).unwrap(), TEST_INT_TIME);
}

#[test]
fn test_read_row_takes_first_channel_and_pol() {
    let mut vis = get_test_vis();
    let data = vis.read_row(4).unwrap();
    // Row 4 has seed 5.
    assert_eq!(data.uvw, [5.0, 10.0, -2.5]);
    assert_eq!(data.vis, Complex32::new(5.0, -5.0));
    assert_abs_diff_eq!(data.weight, 0.5);
}

#[test]
fn test_read_row_out_of_range() {
    let mut vis = get_test_vis();
    assert!(matches!(
        vis.read_row(9),
        Err(VisReadError::RowOutOfRange {
            row_index: 9,
            num_rows: 9
        })
    ));
    assert!(matches!(
        vis.get_time(100),
        Err(VisReadError::RowOutOfRange { .. })
    ));
}

#[test]
fn test_read_row_with_empty_arrays() {
    let mut vis = MemoryVis::new(vec!["a".into(), "b".into()], vec![TEST_REF_FREQ]);
    let mut row = make_row(TEST_FIRST_TIME, 0, 1, 1.0);
    row.data = Array2::zeros((0, 4));
    vis.push_row(row);
    let mut row = make_row(TEST_FIRST_TIME, 0, 1, 1.0);
    row.data = Array2::zeros((1, 0));
    vis.push_row(row);
    let mut row = make_row(TEST_FIRST_TIME, 0, 1, 1.0);
    row.weight.clear();
    vis.push_row(row);

    assert!(matches!(
        vis.read_row(0),
        Err(VisReadError::BadArraySize {
            array_type: "data",
            axis_num: 0,
            ..
        })
    ));
    assert!(matches!(
        vis.read_row(1),
        Err(VisReadError::BadArraySize {
            array_type: "data",
            axis_num: 1,
            ..
        })
    ));
    assert!(matches!(
        vis.read_row(2),
        Err(VisReadError::BadArraySize {
            array_type: "weight",
            ..
        })
    ));
}

#[test]
fn test_wrong_column_types() {
    let mut vis = get_test_vis();
    assert!(matches!(
        vis.get_f64_col(MainCol::Antenna1),
        Err(VisReadError::WrongColumnType { .. })
    ));
    assert!(matches!(
        vis.get_i32_col(MainCol::Time),
        Err(VisReadError::WrongColumnType { .. })
    ));
    assert!(matches!(
        vis.get_f64_cell(MainCol::Data, 0),
        Err(VisReadError::WrongColumnType { .. })
    ));
}

#[test]
fn test_query_keeps_natural_order() {
    // Rows deliberately not sorted by baseline.
    let mut vis = MemoryVis::new(
        (0..4).map(|i| format!("Tile{i}")).collect(),
        vec![TEST_REF_FREQ],
    );
    vis.push_row(make_row(TEST_FIRST_TIME, 2, 3, 1.0));
    vis.push_row(make_row(TEST_FIRST_TIME, 0, 3, 2.0));
    vis.push_row(make_row(TEST_FIRST_TIME + 2.0, 2, 3, 3.0));
    vis.push_row(make_row(TEST_FIRST_TIME + 2.0, 0, 3, 4.0));

    let rows = vis
        .query(&VisSelection::new(f64::MIN..=f64::MAX, 4))
        .unwrap();
    assert_eq!(
        rows,
        vec![
            SelectedRow {
                row: 0,
                ant1: 2,
                ant2: 3
            },
            SelectedRow {
                row: 1,
                ant1: 0,
                ant2: 3
            },
            SelectedRow {
                row: 2,
                ant1: 2,
                ant2: 3
            },
            SelectedRow {
                row: 3,
                ant1: 0,
                ant2: 3
            },
        ]
    );
}

#[test]
fn test_query_by_time() {
    let mut vis = get_test_vis();
    let selection = VisSelection::new(TEST_FIRST_TIME + 2.0..=TEST_FIRST_TIME + 2.0, 3);
    let rows = vis.query(&selection).unwrap();
    assert_eq!(
        rows.iter().map(|r| r.row).collect::<Vec<_>>(),
        vec![3, 4, 5]
    );
}

#[test]
fn test_query_needs_the_selected_columns() {
    let selection = VisSelection::new(f64::MIN..=f64::MAX, 3);
    for &col in selection.columns() {
        let mut vis = get_test_vis().without_column(col);
        assert!(!vis.has_column(col));
        let result = vis.query(&selection);
        assert!(
            matches!(result, Err(VisReadError::MissingColumn { col: c }) if c == col),
            "{col}"
        );
    }

    // Columns that aren't projected don't matter to the query.
    let mut vis = get_test_vis().without_column(MainCol::Interval);
    assert_eq!(vis.query(&selection).unwrap().len(), 9);
}
