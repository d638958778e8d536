//! The merge: N weighted sources in, one combined document out.
//!
//! Sources are processed left to right. For every game a slot contributes,
//! the source's weight and the slot's option block are written into the
//! combined document (later contributions overwrite earlier ones) and an
//! [`AutoTrigger`] is generated. Triggers declared by the slots themselves
//! are carried over and placed ahead of the generated ones.

use std::path::Path;

use crate::combined::CombinedDocument;
use crate::error::{MergeError, MergeResult};
use crate::source::SourceDocument;
use crate::trigger::{AutoTrigger, Trigger};

/// Read every source and merge them under `output_name`.
///
/// The first source that fails to load aborts the merge.
pub fn merge<P: AsRef<Path>>(
    sources: &[(P, u64)],
    output_name: &str,
) -> MergeResult<CombinedDocument> {
    let output_name = validate_name(output_name)?;
    if sources.is_empty() {
        return Err(MergeError::NoSources);
    }

    let documents = sources
        .iter()
        .map(|(path, weight)| SourceDocument::load(path, *weight))
        .collect::<MergeResult<Vec<_>>>()?;

    merge_documents(&documents, output_name)
}

/// Merge already-parsed sources under `output_name`.
pub fn merge_documents(
    documents: &[SourceDocument],
    output_name: &str,
) -> MergeResult<CombinedDocument> {
    let output_name = validate_name(output_name)?;
    if documents.is_empty() {
        return Err(MergeError::NoSources);
    }

    let mut combined = CombinedDocument::new(output_name);
    let mut carried = Vec::new();
    let mut generated = Vec::new();

    for source in documents {
        for slot in &source.slots {
            let display_name = slot.display_name(output_name);
            for (game, options) in slot.contributions() {
                combined.insert_game(game, source.weight, options.clone());
                generated.push(Trigger::Auto(AutoTrigger::new(game, display_name)));
            }
            carried.extend(slot.triggers.iter().cloned().map(Trigger::Carried));
        }
    }

    log::info!(
        "merged {} source(s) into \"{}\": {} game(s), {} carried trigger(s), {} generated",
        documents.len(),
        output_name,
        combined.game.len(),
        carried.len(),
        generated.len()
    );

    combined.triggers = carried;
    combined.triggers.append(&mut generated);
    Ok(combined)
}

fn validate_name(name: &str) -> MergeResult<&str> {
    let name = name.trim();
    if name.is_empty() {
        Err(MergeError::EmptyName)
    } else {
        Ok(name)
    }
}
