//! Locating and running the siso binary

use crate::error::{ExecutionError, ExecutionResult};
use crate::runner::Context;
use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command as StdCommand, Stdio};
use tracing::{debug, info};

/// Location of the siso binary relative to the source root
const SISO_RELATIVE_PATH: &[&str] = &["third_party", "siso", "cipd"];

/// File name of the siso binary on this platform
pub fn siso_exe_name() -> String {
    format!("siso{}", std::env::consts::EXE_SUFFIX)
}

/// Find the siso binary.
///
/// An explicit override in the context wins; otherwise the binary is
/// expected under the source root.
pub fn find_siso_binary(ctx: &Context, root: Option<&Path>) -> ExecutionResult<PathBuf> {
    let mut searched = Vec::new();

    if let Some(path) = &ctx.siso_path {
        let path = ctx.resolve(path);
        if path.is_file() {
            debug!(path = %path.display(), "using siso override");
            return Ok(path);
        }
        return Err(ExecutionError::BinaryNotFound(path.display().to_string()));
    }

    if let Some(root) = root {
        let path = SISO_RELATIVE_PATH
            .iter()
            .fold(root.to_path_buf(), |path, component| path.join(component))
            .join(siso_exe_name());
        if path.is_file() {
            return Ok(path);
        }
        searched.push(path.display().to_string());
    }

    if searched.is_empty() {
        searched.push(format!(
            "no source root with build/config/siso above {}",
            ctx.working_dir.display()
        ));
    }

    Err(ExecutionError::BinaryNotFound(searched.join(", ")))
}

/// Run siso with the given arguments and return its exit code
pub fn execute_siso<T>(binary: &Path, args: &[T], ctx: &Context) -> ExecutionResult<i32>
where
    T: AsRef<OsStr> + fmt::Debug,
{
    info!(binary = %binary.display(), args = ?args, "running siso");

    let mut command = StdCommand::new(binary);
    command.args(args);
    command.current_dir(&ctx.working_dir);

    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());

    let status = command.status().map_err(|e| ExecutionError::Spawn {
        path: binary.to_path_buf(),
        source: e,
    })?;

    // Killed by a signal: no exit code to forward.
    Ok(status.code().unwrap_or(1))
}
