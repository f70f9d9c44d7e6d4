//! csv2vhdl - Command-line tool for converting CSV sprite grids to VHDL constants

use std::process::ExitCode;

use csv2vhdl::cli;

fn main() -> ExitCode {
    cli::run()
}
