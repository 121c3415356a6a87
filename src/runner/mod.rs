//! siso invocation
//!
//! This module turns a raw invocation into the final siso command line
//! and runs it.

pub mod command;
pub mod context;
pub mod invocation;
pub mod merge;

// Re-export main types
pub use command::*;
pub use context::*;
pub use invocation::*;
pub use merge::*;
