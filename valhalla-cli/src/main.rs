//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use valhalla_cli::CliError;

fn main() {
    match valhalla_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("valhalla: {err}");
            std::process::exit(1);
        }
    }
}
