// dashpack-cli/src/lib.rs
//
// Library portion of the dashpack CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;

// Re-export items needed by the binary or integration tests
pub use cli::Cli;
pub use commands::run_dash;
pub use error::{CliResult, exit_status};
pub use logging::{LogConfig, init_logging};
