pub mod check;
pub mod merge;
pub mod tui;

use std::path::PathBuf;

use seedmix_core::AddReport;

/// A `merge` argument: a path with an optional `=WEIGHT` suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceArg {
    pub path: PathBuf,
    pub weight: Option<String>,
}

impl SourceArg {
    /// Split `path=weight`. Anything ending in a YAML extension is a plain
    /// path, so file names containing `=` still work.
    pub fn parse(arg: &str) -> Self {
        let lower = arg.to_lowercase();
        if lower.ends_with(".yaml") || lower.ends_with(".yml") {
            return Self {
                path: PathBuf::from(arg),
                weight: None,
            };
        }

        match arg.rsplit_once('=') {
            Some((path, weight)) if !path.is_empty() => Self {
                path: PathBuf::from(path),
                weight: Some(weight.to_string()),
            },
            _ => Self {
                path: PathBuf::from(arg),
                weight: None,
            },
        }
    }
}

/// Warn on stderr about paths that were not added.
fn print_add_report(report: &AddReport) {
    for path in &report.rejected {
        eprintln!("  warning: not a YAML file: {}", path.display());
    }
    for path in &report.duplicates {
        eprintln!("  warning: listed twice, using once: {}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_path() {
        let arg = SourceArg::parse("players/Zelda.yaml");
        assert_eq!(arg.path, PathBuf::from("players/Zelda.yaml"));
        assert_eq!(arg.weight, None);
    }

    #[test]
    fn path_with_weight() {
        let arg = SourceArg::parse("Zelda.yaml=3");
        assert_eq!(arg.path, PathBuf::from("Zelda.yaml"));
        assert_eq!(arg.weight.as_deref(), Some("3"));
    }

    #[test]
    fn equals_sign_in_file_name() {
        let arg = SourceArg::parse("a=b.yml");
        assert_eq!(arg.path, PathBuf::from("a=b.yml"));
        assert_eq!(arg.weight, None);

        let arg = SourceArg::parse("a=b.yml=2");
        assert_eq!(arg.path, PathBuf::from("a=b.yml"));
        assert_eq!(arg.weight.as_deref(), Some("2"));
    }

    #[test]
    fn bad_weight_is_kept_for_validation() {
        let arg = SourceArg::parse("Zelda.yaml=-1");
        assert_eq!(arg.weight.as_deref(), Some("-1"));
    }
}
