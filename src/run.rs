//! Run coordinator: load, translate, launch

use std::convert::Infallible;
use std::ffi::OsStr;

use crate::cli::WrapperArgs;
use crate::config::ConfigLoader;
use crate::error::WrapperError;
use crate::invocation::{InvocationSpec, translate};
use crate::launch::{DebugSink, LaunchSettings, launch};
use tracing::info;

/// Build the rotel invocation for `argv`, mirroring progress into `sink`
///
/// `argv` is the wrapper's own argument vector, argument zero included.
pub fn prepare<S: AsRef<OsStr>>(
    argv: &[S],
    sink: &mut DebugSink,
) -> Result<InvocationSpec, WrapperError> {
    sink.record_args(argv);

    let args = WrapperArgs::from_args(argv)?;
    let raw = ConfigLoader::read_raw(&args.config)?;
    sink.record_config(&raw);

    let config = ConfigLoader::from_yaml_bytes(&args.config, &raw)?;
    let spec = translate(&config)?;

    info!(
        config_path = %args.config.display(),
        argc = spec.args().len(),
        "Translated collector configuration"
    );

    Ok(spec)
}

/// Run the wrapper to completion
///
/// On success the process image is replaced by rotel and this never
/// returns. The debug file is closed on every path.
pub fn run<S: AsRef<OsStr>>(
    argv: &[S],
    settings: &LaunchSettings,
) -> Result<Infallible, WrapperError> {
    let mut sink = DebugSink::from_option(settings.debug_file.as_deref())?;
    let spec = prepare(argv, &mut sink)?;
    launch(settings, spec, sink)
}
