pub mod config;
pub mod run;
pub mod runtime;
pub mod tracing;
pub mod wiring;

pub use config::{default_config_path, load_config, resolve_config};
pub use run::{run_peek, run_watch};
pub use runtime::{AppRuntime, UseCases};
pub use wiring::{wire_dependencies, wire_engine};
