//! Prepare the session the interactive editor starts with.

use std::path::PathBuf;

use seedmix_core::{MergeConfig, MergeSession};

/// Build a session from the sources given on the command line.
pub fn session(sources: &[PathBuf]) -> Result<MergeSession, String> {
    let mut session = MergeSession::new(MergeConfig::default());
    let report = session.add_sources(sources.iter().cloned());
    if !report.rejected.is_empty() {
        let names: Vec<String> = report
            .rejected
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        return Err(format!("not a YAML file: {}", names.join(", ")));
    }
    Ok(session)
}
