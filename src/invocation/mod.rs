//! Invocation module
//!
//! Turns a parsed collector configuration into the argument vector rotel is
//! started with.

pub mod scheme;
pub mod translator;

pub use scheme::endpoint_with_scheme;
pub use translator::{DISABLED_ENDPOINT, ExporterProtocol, InvocationSpec, translate};
