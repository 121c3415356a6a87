//! `.sisorc` parsing and discovery

use crate::config::types::{SisorcFlags, SisorcLine};
use crate::error::{ConfigError, ConfigResult};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Location of the `.sisorc` file relative to the source root
pub const SISORC_RELATIVE_PATH: &[&str] = &["build", "config", "siso", ".sisorc"];

/// Directory that marks a source root, relative to that root
const SISO_CONFIG_DIR: &[&str] = &["build", "config", "siso"];

/// Classify a single line of a `.sisorc` file
pub fn classify_line(line: &str) -> SisorcLine {
    let mut tokens = line.split_whitespace();

    let first = match tokens.next() {
        Some(token) => token,
        None => return SisorcLine::Blank,
    };

    if first.starts_with('#') {
        return SisorcLine::Comment;
    }

    let rest = tokens.map(str::to_string);

    if first.starts_with('-') {
        SisorcLine::Global(std::iter::once(first.to_string()).chain(rest).collect())
    } else {
        SisorcLine::Subcommand {
            name: first.to_string(),
            flags: rest.collect(),
        }
    }
}

/// Parse `.sisorc` content into global and per-subcommand flags
pub fn parse_sisorc(text: &str) -> SisorcFlags {
    let mut flags = SisorcFlags::new();

    for (index, line) in text.lines().enumerate() {
        let classified = classify_line(line);
        debug!(line = index + 1, kind = ?classified, "classified .sisorc line");
        flags.push_line(classified);
    }

    flags
}

/// Load a `.sisorc` file.
///
/// A missing file is not an error and yields empty flags. Any other read
/// failure is returned with the original I/O error attached.
pub fn load_sisorc(path: &Path) -> ConfigResult<SisorcFlags> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no .sisorc file");
            return Ok(SisorcFlags::default());
        }
        Err(e) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    let flags = parse_sisorc(&contents);
    debug!(
        path = %path.display(),
        global = flags.global.len(),
        subcommands = flags.subcommands.len(),
        "loaded .sisorc"
    );
    Ok(flags)
}

/// Path of the `.sisorc` file under a source root
pub fn sisorc_path(root: &Path) -> PathBuf {
    join_components(root, SISORC_RELATIVE_PATH)
}

/// Find the source root by searching `start_dir` and its ancestors for a
/// `build/config/siso` directory
pub fn find_source_root_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current_dir = start_dir.to_path_buf();

    loop {
        if join_components(&current_dir, SISO_CONFIG_DIR).is_dir() {
            return Some(current_dir);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => return None,
        }
    }
}

fn join_components(base: &Path, components: &[&str]) -> PathBuf {
    components
        .iter()
        .fold(base.to_path_buf(), |path, component| path.join(component))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_classify_blank() {
        assert_eq!(classify_line(""), SisorcLine::Blank);
        assert_eq!(classify_line("   \t  "), SisorcLine::Blank);
    }

    #[test]
    fn test_classify_comment() {
        assert_eq!(classify_line("# comment"), SisorcLine::Comment);
        assert_eq!(classify_line("   #-k=0"), SisorcLine::Comment);
    }

    #[test]
    fn test_classify_global() {
        assert_eq!(
            classify_line("  -credential_helper=gcloud   -v "),
            SisorcLine::Global(vec![
                "-credential_helper=gcloud".to_string(),
                "-v".to_string()
            ])
        );
    }

    #[test]
    fn test_classify_subcommand() {
        assert_eq!(
            classify_line("ninja --failure_verbose=false\t-k=0"),
            SisorcLine::Subcommand {
                name: "ninja".to_string(),
                flags: vec!["--failure_verbose=false".to_string(), "-k=0".to_string()],
            }
        );
    }

    #[test]
    fn test_classify_subcommand_keeps_non_flag_tokens() {
        assert_eq!(
            classify_line("ninja out/Default"),
            SisorcLine::Subcommand {
                name: "ninja".to_string(),
                flags: vec!["out/Default".to_string()],
            }
        );
    }

    #[test]
    fn test_parse_sisorc() {
        let text = r#"
# comment
-credential_helper=gcloud
ninja --failure_verbose=false -k=0
            "#;
        let flags = parse_sisorc(text);
        assert_eq!(flags.global, vec!["-credential_helper=gcloud".to_string()]);
        assert_eq!(flags.subcommands.len(), 1);
        assert_eq!(
            flags.flags_for("ninja"),
            &["--failure_verbose=false".to_string(), "-k=0".to_string()]
        );
    }

    #[test]
    fn test_parse_sisorc_preserves_line_order() {
        let text = "-a\nninja -x\n-b -c\nninja -y\nquery -z\n";
        let flags = parse_sisorc(text);
        assert_eq!(flags.global, vec!["-a", "-b", "-c"]);
        assert_eq!(flags.flags_for("ninja"), &["-x".to_string(), "-y".to_string()]);
        assert_eq!(flags.flags_for("query"), &["-z".to_string()]);
    }

    #[test]
    fn test_parse_sisorc_handles_crlf() {
        let flags = parse_sisorc("-a\r\nninja -k=0\r\n");
        assert_eq!(flags.global, vec!["-a"]);
        assert_eq!(flags.flags_for("ninja"), &["-k=0".to_string()]);
    }

    #[test]
    fn test_load_sisorc_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let flags = load_sisorc(&sisorc_path(temp_dir.path())).unwrap();
        assert!(flags.global.is_empty());
        assert!(flags.subcommands.is_empty());
    }

    #[test]
    fn test_load_sisorc_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".sisorc");
        fs::write(&path, b"-\xff\xfe\n").unwrap();

        match load_sisorc(&path) {
            Err(ConfigError::Read { source, .. }) => {
                assert_eq!(source.kind(), io::ErrorKind::InvalidData)
            }
            other => panic!("expected read error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_sisorc_directory_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_sisorc(temp_dir.path());
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_sisorc_path() {
        let path = sisorc_path(Path::new("src"));
        assert_eq!(
            path,
            Path::new("src").join("build").join("config").join("siso").join(".sisorc")
        );
    }

    #[test]
    fn test_find_source_root_in_current_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("build/config/siso")).unwrap();

        let found = find_source_root_from(temp_dir.path()).unwrap();
        assert_eq!(found, temp_dir.path());
    }

    #[test]
    fn test_find_source_root_from_out_dir() {
        let temp_dir = TempDir::new().unwrap();
        let out_dir = temp_dir.path().join("out").join("Default");
        fs::create_dir_all(temp_dir.path().join("build/config/siso")).unwrap();
        fs::create_dir_all(&out_dir).unwrap();

        let found = find_source_root_from(&out_dir).unwrap();
        assert_eq!(found, temp_dir.path());
    }

    #[test]
    fn test_find_source_root_ignores_plain_file() {
        let temp_dir = TempDir::new().unwrap();
        let out_dir = temp_dir.path().join("out").join("Default");
        let marker = temp_dir.path().join("build/config/siso");
        fs::create_dir_all(temp_dir.path().join("build/config")).unwrap();
        fs::create_dir_all(&out_dir).unwrap();
        fs::write(&marker, "").unwrap();

        // Nothing inside the temp dir qualifies while the marker is a file.
        let found = find_source_root_from(&out_dir);
        assert!(found.map_or(true, |root| !root.starts_with(temp_dir.path())));

        fs::remove_file(&marker).unwrap();
        fs::create_dir(&marker).unwrap();

        let found = find_source_root_from(&out_dir).unwrap();
        assert_eq!(found, temp_dir.path());
    }
}
