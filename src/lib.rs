//! sisorc - default flags for siso invocations
//!
//! Reads `build/config/siso/.sisorc` and splices the flags it declares into
//! a siso command line before running siso.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;

// Re-export commonly used types
pub use config::{load_sisorc, parse_sisorc, SisorcFlags};
pub use error::{Result, SisoError};
pub use runner::apply_sisorc;

/// Current version of the launcher
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
