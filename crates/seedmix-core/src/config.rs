//! Configuration for a merge session.

use std::path::Path;

use crate::weight::DEFAULT_WEIGHT;

/// Configuration for a merge session.
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Output name offered before the user types one.
    pub default_name: String,
    /// Weight for sources that have not been given one.
    pub default_weight: u64,
    /// File extensions accepted as sources, lowercase and without the dot.
    pub extensions: Vec<String>,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            default_name: "MyRandomSeed".to_string(),
            default_weight: DEFAULT_WEIGHT,
            extensions: vec!["yaml".to_string(), "yml".to_string()],
        }
    }
}

impl MergeConfig {
    /// Set the pre-filled output name.
    pub fn with_default_name(mut self, name: impl Into<String>) -> Self {
        self.default_name = name.into();
        self
    }

    /// Set the weight used for sources without one.
    pub fn with_default_weight(mut self, weight: u64) -> Self {
        self.default_weight = weight;
        self
    }

    /// Replace the accepted source extensions.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_lowercase())
            .collect();
        self
    }

    /// Whether `path` has one of the accepted extensions (case-insensitive).
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                let ext = ext.to_lowercase();
                self.extensions.iter().any(|allowed| *allowed == ext)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = MergeConfig::default();
        assert_eq!(cfg.default_name, "MyRandomSeed");
        assert_eq!(cfg.default_weight, 1);
        assert_eq!(cfg.extensions, vec!["yaml", "yml"]);
    }

    #[test]
    fn builder_methods() {
        let cfg = MergeConfig::default()
            .with_default_name("Weekly")
            .with_default_weight(5)
            .with_extensions([".YAML"]);
        assert_eq!(cfg.default_name, "Weekly");
        assert_eq!(cfg.default_weight, 5);
        assert_eq!(cfg.extensions, vec!["yaml"]);
    }

    #[test]
    fn accepts_yaml_case_insensitively() {
        let cfg = MergeConfig::default();
        assert!(cfg.accepts(Path::new("players/Zelda.yaml")));
        assert!(cfg.accepts(Path::new("Metroid.YML")));
        assert!(!cfg.accepts(Path::new("notes.txt")));
        assert!(!cfg.accepts(Path::new("yaml")));
    }
}
