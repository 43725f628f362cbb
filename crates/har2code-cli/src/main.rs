use har2code_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse_args();

    // Logging falls back to stderr on its own; a second subscriber is the
    // only failure and is not worth aborting a conversion for.
    if let Err(err) = logging::init_logging(cli.verbose) {
        eprintln!("har2code: logging disabled: {:#}", err);
    }

    if let Err(err) = cli.run() {
        eprintln!("har2code error: {:#}", err);
        std::process::exit(1);
    }
}
