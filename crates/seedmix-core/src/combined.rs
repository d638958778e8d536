//! The merged output document.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_yml::Value;

use crate::error::{MergeError, MergeResult};
use crate::trigger::{AutoTrigger, Trigger};

/// The result of a merge.
///
/// Renders as one YAML mapping with keys in insertion order: `name`,
/// `game`, `triggers`, then one option block per game.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedDocument {
    /// Output identifier.
    pub name: String,
    /// Weighted choice table over games.
    pub game: IndexMap<String, u64>,
    /// Option block for each game, keyed by game name.
    pub blocks: IndexMap<String, Value>,
    /// Carried-over triggers first, then generated ones.
    pub triggers: Vec<Trigger>,
}

impl CombinedDocument {
    /// An empty document with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            game: IndexMap::new(),
            blocks: IndexMap::new(),
            triggers: Vec::new(),
        }
    }

    /// Record a game's weight and option block. A repeated game overwrites
    /// the earlier values but keeps its original position.
    pub fn insert_game(&mut self, game: &str, weight: u64, options: Value) {
        if self.game.insert(game.to_string(), weight).is_some() {
            log::debug!("game \"{game}\" contributed again; later source wins");
        }
        self.blocks.insert(game.to_string(), options);
    }

    /// Number of triggers copied from sources.
    pub fn carried_trigger_count(&self) -> usize {
        self.triggers.iter().filter(|t| !t.is_auto()).count()
    }

    /// The generated triggers, in order.
    pub fn auto_triggers(&self) -> impl Iterator<Item = &AutoTrigger> {
        self.triggers.iter().filter_map(|t| match t {
            Trigger::Auto(auto) => Some(auto),
            Trigger::Carried(_) => None,
        })
    }

    /// Render as YAML text.
    pub fn to_yaml(&self) -> MergeResult<String> {
        serde_yml::to_string(self).map_err(MergeError::Serialize)
    }
}

impl Serialize for CombinedDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3 + self.blocks.len()))?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("game", &self.game)?;
        map.serialize_entry("triggers", &self.triggers)?;
        for (game, options) in &self.blocks {
            map.serialize_entry(game, options)?;
        }
        map.end()
    }
}
