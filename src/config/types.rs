//! Type definitions for `.sisorc` configuration

use std::collections::BTreeMap;

/// Classification of a single `.sisorc` line.
///
/// A line is classified by its first whitespace-separated token only;
/// no flag syntax is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SisorcLine {
    /// Whitespace-only line
    Blank,

    /// Line whose first non-whitespace character is `#`
    Comment,

    /// Line whose first token starts with `-`; every token is a global flag
    Global(Vec<String>),

    /// Line whose first token names a subcommand; the remaining tokens are
    /// flags for that subcommand
    Subcommand { name: String, flags: Vec<String> },
}

/// Default flags loaded from a `.sisorc` file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SisorcFlags {
    /// Flags injected ahead of every invocation, in file order
    pub global: Vec<String>,

    /// Flags injected after a given subcommand, keyed by subcommand name.
    /// Each list keeps file order; keys are not validated.
    pub subcommands: BTreeMap<String, Vec<String>>,
}

impl SisorcFlags {
    /// Create an empty flag set
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether no flags were declared at all
    pub fn is_empty(&self) -> bool {
        self.global.is_empty() && self.subcommands.is_empty()
    }

    /// Flags declared for `subcommand`, or an empty slice
    pub fn flags_for(&self, subcommand: &str) -> &[String] {
        self.subcommands
            .get(subcommand)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Fold one classified line into the flag set
    pub fn push_line(&mut self, line: SisorcLine) {
        match line {
            SisorcLine::Blank | SisorcLine::Comment => {}
            SisorcLine::Global(flags) => self.global.extend(flags),
            SisorcLine::Subcommand { name, flags } => {
                self.subcommands.entry(name).or_default().extend(flags);
            }
        }
    }

    /// Splice these flags into an argument vector.
    ///
    /// See [`crate::runner::apply_sisorc`].
    pub fn apply<T>(&self, args: &[T], subcommand: &str) -> Vec<T>
    where
        T: Clone + From<String> + PartialEq<str>,
    {
        crate::runner::apply_sisorc(&self.global, &self.subcommands, args, subcommand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_line_ignores_blank_and_comment() {
        let mut flags = SisorcFlags::new();
        flags.push_line(SisorcLine::Blank);
        flags.push_line(SisorcLine::Comment);
        assert!(flags.is_empty());
    }

    #[test]
    fn test_push_line_accumulates_per_subcommand() {
        let mut flags = SisorcFlags::new();
        flags.push_line(SisorcLine::Subcommand {
            name: "ninja".to_string(),
            flags: vec!["-k=0".to_string()],
        });
        flags.push_line(SisorcLine::Global(vec!["-v".to_string()]));
        flags.push_line(SisorcLine::Subcommand {
            name: "ninja".to_string(),
            flags: vec!["--failure_verbose=false".to_string()],
        });

        assert_eq!(flags.global, vec!["-v".to_string()]);
        assert_eq!(
            flags.flags_for("ninja"),
            &["-k=0".to_string(), "--failure_verbose=false".to_string()]
        );
    }

    #[test]
    fn test_subcommand_line_without_flags_creates_empty_entry() {
        let mut flags = SisorcFlags::new();
        flags.push_line(SisorcLine::Subcommand {
            name: "query".to_string(),
            flags: Vec::new(),
        });
        assert!(flags.subcommands.contains_key("query"));
        assert!(flags.flags_for("query").is_empty());
    }

    #[test]
    fn test_flags_for_unknown_subcommand() {
        let flags = SisorcFlags::new();
        assert!(flags.flags_for("ninja").is_empty());
    }
}
