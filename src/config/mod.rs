//! `.sisorc` configuration
//!
//! This module handles locating and parsing the `.sisorc` file that
//! declares default flags for siso invocations.

pub mod parse;
pub mod types;

// Re-export main types
pub use parse::*;
pub use types::*;
