// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.


use std::path::PathBuf;

use clap::Parser;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use super::common::{display_warnings, Warn, ARG_FILE_HELP};
use crate::{constants::DEFAULT_OUTPUT_SUFFIX, params::ConvertParams, Ms2CsvError};

#[derive(Parser, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(super) struct ConvertArgs {
    #[clap(name = "ARGUMENTS_FILE", help = ARG_FILE_HELP.as_str(), parse(from_os_str))]
    #[serde(skip)]
    pub(super) args_file: Option<PathBuf>,

    /// Path to the input measurement set.
    #[clap(short, long, help_heading = "INPUT AND OUTPUT")]
    pub(super) inputms: Option<String>,

    /// Path to the output CSV file. The default is the input path with ".ms"
    /// appended.
    #[clap(short, long, help_heading = "INPUT AND OUTPUT")]
    pub(super) outputcsv: Option<String>,
}

impl ConvertArgs {
    /// Both command-line and file arguments overlap in terms of what is
    /// available; this function consolidates everything that was specified
    /// into a single struct, preferring CLI arguments over those in the file.
    ///
    /// This function should only ever merge arguments, and not try to make
    /// sense of them.
    pub(super) fn merge(self) -> Result<ConvertArgs, Ms2CsvError> {
        debug!("Merging command-line arguments with the argument file");

        let cli_args = self;

        if let Some(arg_file) = cli_args.args_file {
            // Ensure all of the file args are accounted for by pattern
            // matching.
            let ConvertArgs {
                args_file: _,
                inputms,
                outputcsv,
            } = unpack_arg_file!(arg_file);

            Ok(ConvertArgs {
                args_file: None,
                inputms: cli_args.inputms.or(inputms),
                outputcsv: cli_args.outputcsv.or(outputcsv),
            })
        } else {
            Ok(cli_args)
        }
    }

    pub(super) fn parse(self) -> Result<ConvertParams, Ms2CsvError> {
        debug!("{:#?}", self);

        let ConvertArgs {
            args_file: _,
            inputms,
            outputcsv,
        } = self;

        let input = match inputms {
            Some(i) if !i.is_empty() => i,
            _ => return Err(ConvertArgsError::NoInput.into()),
        };
        let output = match outputcsv {
            Some(o) if !o.is_empty() => o,
            _ => {
                let o = format!("{input}{DEFAULT_OUTPUT_SUFFIX}");
                format!("No output file was given; writing to '{o}', which ends in \"{DEFAULT_OUTPUT_SUFFIX}\" rather than \".csv\"").warn();
                o
            }
        };

        display_warnings();

        Ok(ConvertParams {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
        })
    }

    pub(super) fn run(self, dry_run: bool) -> Result<(), Ms2CsvError> {
        debug!("Converting arguments into parameters");
        trace!("{:#?}", self);
        let params = self.parse()?;

        if dry_run {
            info!("Dry run -- nothing will be written.");
        }
        params.run(dry_run)?;
        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub(super) enum ConvertArgsError {
    #[error("No input measurement set was specified (use -i/--inputms)")]
    NoInput,
}
