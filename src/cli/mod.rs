// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Command-line interface code.
//!
//! Every argument in a `Parser` struct here is optional, so that it can be
//! given either on the command line or in an arguments file.
//!
//! Only `Ms2Csv`, `Ms2Csv::run` and `Ms2CsvError` are public.

#[macro_use]
mod common;
mod convert;
mod error;

pub(crate) use common::InfoPrinter;
pub use error::Ms2CsvError;

use std::path::PathBuf;

use clap::{AppSettings, Args, Parser};
#[cfg(feature = "ms")]
use log::info;

#[cfg(feature = "ms")]
use crate::PROGRESS_BARS;

// Add build-time information from the "built" crate.
include!(concat!(env!("OUT_DIR"), "/built.rs"));

#[derive(Debug, Parser)]
#[clap(
    name = "ms2csv",
    version,
    author,
    about = "Extract the first channel and polarisation of a measurement set's visibilities into CSV"
)]
#[clap(global_setting(AppSettings::DeriveDisplayOrder))]
#[clap(infer_long_args = true)]
pub struct Ms2Csv {
    #[clap(flatten)]
    global_opts: GlobalArgs,

    #[clap(flatten)]
    args: convert::ConvertArgs,
}

#[derive(Debug, Args)]
struct GlobalArgs {
    /// Don't draw progress bars.
    #[clap(long)]
    no_progress_bars: bool,

    /// The verbosity of the program. Increase by specifying multiple times
    /// (e.g. -vv). The default is to print only high-level information.
    #[clap(short, long, parse(from_occurrences))]
    verbosity: u8,

    /// Only verify that arguments were correctly ingested and print out
    /// high-level information. No output is written.
    #[clap(long)]
    dry_run: bool,

    /// Save the input arguments into a new TOML file that can be used to
    /// reproduce this run.
    #[clap(long)]
    save_toml: Option<PathBuf>,
}

impl Ms2Csv {
    pub fn run(self) -> Result<(), Ms2CsvError> {
        #[cfg(not(feature = "ms"))]
        {
            let _ = self;
            Err(Ms2CsvError::MissingDependency(
                "ms2csv was compiled without the \"ms\" feature, so it can't read measurement sets. Rebuild with --features=ms".to_string(),
            ))
        }

        #[cfg(feature = "ms")]
        {
            let GlobalArgs {
                verbosity,
                dry_run,
                no_progress_bars,
                save_toml,
            } = self.global_opts;
            setup_logging(verbosity).map_err(|e| {
                Ms2CsvError::Generic(format!("Failed to initialise logging: {e}"))
            })?;
            // Enable progress bars if the user didn't say "no progress bars".
            if !no_progress_bars {
                PROGRESS_BARS.store(true);
            }

            info!("ms2csv {}", env!("CARGO_PKG_VERSION"));
            display_build_info();

            let args = self.args.merge()?;
            if let Some(toml) = save_toml {
                use std::{
                    fs::File,
                    io::{BufWriter, Write},
                };

                let mut f = BufWriter::new(File::create(toml)?);
                let toml_str = toml::to_string(&args)
                    .map_err(|e| Ms2CsvError::Generic(format!("toml serialisation error: {e}")))?;
                f.write_all(toml_str.as_bytes())?;
            }
            args.run(dry_run)?;

            info!("ms2csv complete.");
            Ok(())
        }
    }
}

/// Activate a logger. All log messages are put onto `stdout`. `env_logger`
/// automatically only uses colours and fancy symbols if we're on a tty (e.g. a
/// terminal); piped output will be formatted sensibly. Source code lines are
/// displayed in log messages when verbosity >= 3.
#[cfg(feature = "ms")]
fn setup_logging(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.target(env_logger::Target::Stdout);
    builder.format_target(false);
    match verbosity {
        0 => builder.filter_level(log::LevelFilter::Info),
        1 => builder.filter_level(log::LevelFilter::Debug),
        2 => builder.filter_level(log::LevelFilter::Trace),
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
            builder.format(|buf, record| {
                use std::io::Write;

                let timestamp = buf.timestamp();
                let level = record.level();
                let target = record.target();
                let line = record.line().unwrap_or(0);
                let message = record.args();

                writeln!(buf, "[{timestamp} {level} {target}:{line}] {message}")
            })
        }
    };
    builder.try_init()
}

/// Write many info-level log lines of how this executable was compiled.
#[cfg(feature = "ms")]
fn display_build_info() {
    let dirty = match GIT_DIRTY {
        Some(true) => " (dirty)",
        _ => "",
    };
    match GIT_COMMIT_HASH_SHORT {
        Some(hash) => {
            info!("Compiled on git commit hash: {hash}{dirty}");
        }
        None => info!("Compiled on git commit hash: <no git info>"),
    }
    if let Some(hr) = GIT_HEAD_REF {
        info!("            git head ref: {}", hr);
    }
    info!("            {}", BUILT_TIME_UTC);
    info!("         with compiler {}", RUSTC_VERSION);
    info!("");
}
