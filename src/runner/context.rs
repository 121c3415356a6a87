//! Launcher context
//!
//! The context carries the environment-derived settings needed to locate
//! the `.sisorc` file and the siso binary.

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding the siso binary path
pub const SISO_PATH_ENV: &str = "SISO_PATH";

/// Environment variable overriding the `.sisorc` path
pub const SISORC_ENV: &str = "SISORC";

/// Settings that drive a single launcher run
#[derive(Debug, Clone)]
pub struct Context {
    /// Current working directory
    pub working_dir: PathBuf,

    /// Explicit `.sisorc` path, bypassing discovery
    pub sisorc_path: Option<PathBuf>,

    /// Explicit siso binary, bypassing discovery
    pub siso_path: Option<PathBuf>,
}

impl Context {
    /// Create a new context with default settings
    pub fn new() -> Self {
        Context {
            working_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            sisorc_path: None,
            siso_path: None,
        }
    }

    /// Create a context from the process environment
    pub fn from_env() -> Self {
        let mut ctx = Context::new();
        ctx.sisorc_path = non_empty_var(SISORC_ENV).map(PathBuf::from);
        ctx.siso_path = non_empty_var(SISO_PATH_ENV).map(PathBuf::from);
        ctx
    }

    /// Create a context with a specific working directory
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = dir;
        self
    }

    /// Set an explicit `.sisorc` path
    pub fn with_sisorc_path(mut self, path: PathBuf) -> Self {
        self.sisorc_path = Some(path);
        self
    }

    /// Set an explicit siso binary
    pub fn with_siso_path(mut self, path: PathBuf) -> Self {
        self.siso_path = Some(path);
        self
    }

    /// Resolve a possibly relative path against the working directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir.join(path)
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}
