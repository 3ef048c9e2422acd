// dashpack-cli/src/commands/mod.rs
//
// Command implementations for the dashpack CLI.

pub mod dash;

pub use dash::run_dash;
