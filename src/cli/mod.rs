//! CLI interface
//!
//! This module forwards the command line to siso after applying the
//! `.sisorc` defaults.

pub mod app;

// Re-export main types
pub use app::*;
