// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Useful constants.

/// The fine-channel index of the visibilities that get extracted.
pub const CHANNEL_INDEX: usize = 0;

/// The polarisation (correlation product) index of the visibilities and
/// weights that get extracted.
pub const POL_INDEX: usize = 0;

/// The number of columns in each output line.
pub const NUM_OUTPUT_COLUMNS: usize = 6;

/// The appended suffix when the user doesn't specify an output path.
// This isn't a CSV extension, but it's what the output has always been named.
pub const DEFAULT_OUTPUT_SUFFIX: &str = ".ms";
