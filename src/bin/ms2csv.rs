// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::Parser;

use ms2csv::{Ms2Csv, Ms2CsvError};

fn main() {
    // Stolen from BurntSushi. We don't return Result from main because it
    // prints the debug representation of the error. The code below prints the
    // "display" or human readable representation of the error.
    if let Err(e) = try_main() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), Ms2CsvError> {
    let args = match Ms2Csv::try_parse() {
        Ok(args) => args,
        // --help and --version.
        Err(e) if !e.use_stderr() => e.exit(),
        // clap would exit with 2 here; all errors exit with 1.
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };
    args.run()
}
