//! rotel-otel-wrapper
//!
//! Started in place of an OpenTelemetry Collector binary as
//! `rotel-otel-wrapper --config <path>`. Execs `$ROTEL_PATH` with the
//! translated flags.

use std::ffi::OsString;
use std::process::ExitCode;

use rotel_otel_wrapper::{LaunchSettings, WrapperError, init_logging, run::run};

fn main() -> ExitCode {
    init_logging();

    let argv: Vec<OsString> = std::env::args_os().collect();

    let result = LaunchSettings::from_env()
        .map_err(WrapperError::from)
        .and_then(|settings| run(argv.as_slice(), &settings));

    match result {
        Ok(never) => match never {},
        Err(e) => {
            eprintln!("rotel-otel-wrapper: {e}");
            ExitCode::FAILURE
        }
    }
}
