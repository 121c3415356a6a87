//! Splicing `.sisorc` flags into an argument vector

use std::collections::BTreeMap;
use tracing::debug;

/// Build a new argument vector with default flags injected.
///
/// Global flags are prepended ahead of every original token. Then, if
/// `subcommand` is non-empty and has an entry in `subcommand_flags`, that
/// entry is inserted right after the first token equal to `subcommand`.
/// Original tokens are never removed or reordered.
///
/// Tokens may be `String` or `OsString`; they are compared, never parsed.
pub fn apply_sisorc<T>(
    global_flags: &[String],
    subcommand_flags: &BTreeMap<String, Vec<String>>,
    args: &[T],
    subcommand: &str,
) -> Vec<T>
where
    T: Clone + From<String> + PartialEq<str>,
{
    let mut new_args: Vec<T> = Vec::with_capacity(global_flags.len() + args.len());
    new_args.extend(global_flags.iter().cloned().map(T::from));
    new_args.extend_from_slice(args);

    if subcommand.is_empty() {
        return new_args;
    }

    let Some(flags) = subcommand_flags.get(subcommand) else {
        return new_args;
    };

    match new_args.iter().position(|arg| arg == subcommand) {
        Some(index) => {
            debug!(subcommand, index, count = flags.len(), "inserting subcommand flags");
            new_args.splice(index + 1..index + 1, flags.iter().cloned().map(T::from));
        }
        None => {
            debug!(subcommand, "subcommand token not present; skipping subcommand flags");
        }
    }

    new_args
}
