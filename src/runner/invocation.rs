//! Subcommand and output directory detection
//!
//! siso's own flag parser is not available here, so detection is a plain
//! token scan: the first token that is neither a flag nor the value of
//! `-C` is the subcommand.

use std::ffi::OsStr;
use std::path::PathBuf;

/// What the launcher needs to know about a raw siso invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Detected subcommand, or an empty string if none
    pub subcommand: String,

    /// Output directory given with `-C`, or `.`
    pub out_dir: PathBuf,
}

impl Default for Invocation {
    fn default() -> Self {
        Invocation {
            subcommand: String::new(),
            out_dir: PathBuf::from("."),
        }
    }
}

impl Invocation {
    /// Check whether a subcommand was detected
    pub fn has_subcommand(&self) -> bool {
        !self.subcommand.is_empty()
    }
}

/// Scan raw arguments (without the program name).
///
/// Tokens that are not valid UTF-8 are matched lossily; a `-C` value given
/// as a separate token is kept byte-for-byte.
pub fn parse_invocation<T: AsRef<OsStr>>(args: &[T]) -> Invocation {
    let mut invocation = Invocation::default();
    let mut iter = args.iter().map(OsStr::new);

    while let Some(raw) = iter.next() {
        let arg = raw.to_string_lossy();

        if arg == "-C" {
            if let Some(dir) = iter.next() {
                invocation.out_dir = PathBuf::from(dir);
            }
        } else if let Some(dir) = arg.strip_prefix("-C=") {
            invocation.out_dir = PathBuf::from(dir);
        } else if let Some(dir) = arg.strip_prefix("-C").filter(|dir| !dir.is_empty()) {
            invocation.out_dir = PathBuf::from(dir);
        } else if !arg.starts_with('-') && !invocation.has_subcommand() {
            invocation.subcommand = arg.to_string();
        }
    }

    invocation
}
