//! Merge session management.
//!
//! `MergeSession` owns the ordered list of sources and the weights the user
//! has assigned to them. Front-ends edit it through these methods and ask it
//! to merge; a failed operation never leaves it half-updated.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::combined::CombinedDocument;
use crate::config::MergeConfig;
use crate::error::{MergeError, MergeResult};
use crate::merge::merge;
use crate::weight::parse_weight;

/// What happened to each path passed to [`MergeSession::add_sources`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddReport {
    /// Newly added, in order.
    pub added: Vec<PathBuf>,
    /// Already in the session; left where they were.
    pub duplicates: Vec<PathBuf>,
    /// Not a YAML file.
    pub rejected: Vec<PathBuf>,
}

/// The sources and weights a user is assembling into one combined document.
#[derive(Debug, Clone, Default)]
pub struct MergeSession {
    config: MergeConfig,
    sources: Vec<PathBuf>,
    weights: HashMap<PathBuf, u64>,
}

impl MergeSession {
    /// Create an empty session.
    pub fn new(config: MergeConfig) -> Self {
        Self {
            config,
            sources: Vec::new(),
            weights: HashMap::new(),
        }
    }

    /// Get the session configuration.
    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// The sources, in merge order.
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// Number of sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether the session has no sources.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Whether `path` is one of the sources.
    pub fn contains(&self, path: &Path) -> bool {
        self.sources.iter().any(|p| p == path)
    }

    // -----------------------------------------------------------------------
    // Sources
    // -----------------------------------------------------------------------

    /// Append sources that are not already present.
    pub fn add_sources<I, P>(&mut self, paths: I) -> AddReport
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut report = AddReport::default();
        for path in paths {
            let path = path.into();
            if !self.config.accepts(&path) {
                log::warn!("not a YAML file: {}", path.display());
                report.rejected.push(path);
            } else if self.contains(&path) {
                report.duplicates.push(path);
            } else {
                log::debug!("added source {}", path.display());
                self.sources.push(path.clone());
                report.added.push(path);
            }
        }
        report
    }

    /// Remove the given sources and their weights. Returns how many were removed.
    pub fn remove_sources<I, P>(&mut self, paths: I) -> usize
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let before = self.sources.len();
        for path in paths {
            let path = path.as_ref();
            self.sources.retain(|p| p != path);
            self.weights.remove(path);
        }
        before - self.sources.len()
    }

    /// Remove sources by list position. Out-of-range and repeated indices are
    /// ignored. Returns the removed paths in list order.
    pub fn remove_indices(&mut self, indices: &[usize]) -> Vec<PathBuf> {
        let mut indices: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i < self.sources.len())
            .collect();
        indices.sort_unstable();
        indices.dedup();

        let mut removed = Vec::with_capacity(indices.len());
        for &index in indices.iter().rev() {
            let path = self.sources.remove(index);
            self.weights.remove(&path);
            removed.push(path);
        }
        removed.reverse();
        removed
    }

    // -----------------------------------------------------------------------
    // Weights
    // -----------------------------------------------------------------------

    /// The saved weight for `path`, or the configured default.
    pub fn weight_of(&self, path: &Path) -> u64 {
        self.weights
            .get(path)
            .copied()
            .unwrap_or(self.config.default_weight)
    }

    /// Parse and save one weight. Invalid input changes nothing.
    pub fn set_weight(&mut self, path: &Path, input: &str) -> MergeResult<u64> {
        let weight = self.validate_weight(path, input)?;
        self.weights.insert(path.to_path_buf(), weight);
        Ok(weight)
    }

    /// Parse every entry first and save them only if all are valid. The error
    /// names the first invalid entry.
    pub fn set_weights<I, P, S>(&mut self, entries: I) -> MergeResult<()>
    where
        I: IntoIterator<Item = (P, S)>,
        P: AsRef<Path>,
        S: AsRef<str>,
    {
        let mut parsed = Vec::new();
        for (path, input) in entries {
            let path = path.as_ref();
            let weight = self.validate_weight(path, input.as_ref())?;
            parsed.push((path.to_path_buf(), weight));
        }
        self.weights.extend(parsed);
        Ok(())
    }

    fn validate_weight(&self, path: &Path, input: &str) -> MergeResult<u64> {
        if !self.contains(path) {
            return Err(MergeError::UnknownSource(path.to_path_buf()));
        }
        parse_weight(input).map_err(|reason| MergeError::InvalidWeight {
            path: path.to_path_buf(),
            input: input.to_string(),
            reason,
        })
    }

    /// Each source paired with its effective weight.
    pub fn weighted_sources(&self) -> Vec<(PathBuf, u64)> {
        self.sources
            .iter()
            .map(|p| (p.clone(), self.weight_of(p)))
            .collect()
    }

    // -----------------------------------------------------------------------
    // Merge
    // -----------------------------------------------------------------------

    /// Merge all sources under `output_name`.
    pub fn merge(&self, output_name: &str) -> MergeResult<CombinedDocument> {
        if output_name.trim().is_empty() {
            return Err(MergeError::EmptyName);
        }
        if self.sources.is_empty() {
            return Err(MergeError::NoSources);
        }
        merge(&self.weighted_sources(), output_name)
    }

    /// Merge and write the result to `destination`.
    pub fn merge_and_save(
        &self,
        output_name: &str,
        destination: &Path,
    ) -> MergeResult<CombinedDocument> {
        let combined = self.merge(output_name)?;
        let yaml = combined.to_yaml()?;
        std::fs::write(destination, yaml).map_err(|source| MergeError::Write {
            path: destination.to_path_buf(),
            source,
        })?;
        log::info!("saved {}", destination.display());
        Ok(combined)
    }

    /// Suggested file name for a combined document: `<name>.yaml`.
    pub fn default_destination(output_name: &str) -> PathBuf {
        PathBuf::from(format!("{}.yaml", output_name.trim()))
    }

    /// Short label for a source: its file stem.
    pub fn label(path: &Path) -> String {
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }
}
