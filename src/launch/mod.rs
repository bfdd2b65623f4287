//! Launch module
//!
//! Resolves the rotel executable and replaces the wrapper process with it.

pub mod debug_sink;
pub mod executable;
pub mod settings;

pub use debug_sink::{CONFIG_BEGIN_MARKER, CONFIG_END_MARKER, DebugSink};
pub use executable::{exec_replace, program_name, resolve_executable};
pub use settings::{DEBUG_FILE_ENV, LaunchSettings, PATH_ENV, ROTEL_PATH_ENV};

use crate::error::WrapperError;
use crate::invocation::InvocationSpec;
use tracing::warn;

/// Exec rotel with `spec`
///
/// The sink receives the final command line and is closed before the
/// process image is replaced. Never returns on success.
pub fn launch(
    settings: &LaunchSettings,
    spec: InvocationSpec,
    mut sink: DebugSink,
) -> Result<std::convert::Infallible, WrapperError> {
    let binary = resolve_executable(
        &settings.rotel_path,
        settings.search_path().map(|p| p.as_os_str()),
    )
    .inspect_err(|e| warn!(rotel_path = %settings.rotel_path, error = %e, "Cannot resolve rotel"))?;

    let argv0 = program_name(&settings.rotel_path);
    let args = spec.into_args();

    let mut exec_args = Vec::with_capacity(args.len() + 1);
    exec_args.push(argv0.clone());
    exec_args.extend(args.iter().cloned());
    sink.record_exec(&settings.rotel_path, &exec_args);
    sink.close();

    Err(exec_replace(&binary, &argv0, &args, &settings.env).into())
}
