//! Trigger rules in the combined document.
//!
//! Triggers found in a source are carried over untouched. For every game a
//! slot contributes, an [`AutoTrigger`] is generated that restores the
//! slot's display name once that game wins the weighted roll.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_yml::{Mapping, Value};

/// The option every generated trigger listens on.
pub const GAME_OPTION: &str = "game";

/// A trigger synthesized for one game contributed by one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoTrigger {
    /// The game whose selection fires this trigger.
    pub game: String,
    /// The display name applied when it fires.
    pub display_name: String,
}

impl AutoTrigger {
    /// Create a trigger binding `game` to `display_name`.
    pub fn new(game: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            game: game.into(),
            display_name: display_name.into(),
        }
    }

    /// The `options` mapping. Its only key is YAML `null`, meaning "top level".
    pub fn options(&self) -> Mapping {
        let mut inner = Mapping::new();
        inner.insert(
            Value::String("name".to_string()),
            Value::String(self.display_name.clone()),
        );
        let mut options = Mapping::new();
        options.insert(Value::Null, Value::Mapping(inner));
        options
    }
}

impl Serialize for AutoTrigger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("option_name", GAME_OPTION)?;
        map.serialize_entry("option_result", &self.game)?;
        map.serialize_entry("options", &self.options())?;
        map.end()
    }
}

/// One entry of the combined `triggers` list.
#[derive(Debug, Clone, PartialEq)]
pub enum Trigger {
    /// Copied verbatim from a source slot.
    Carried(Value),
    /// Generated during the merge.
    Auto(AutoTrigger),
}

impl Trigger {
    /// Whether this trigger was generated rather than carried over.
    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto(_))
    }
}

impl Serialize for Trigger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Carried(value) => value.serialize(serializer),
            Self::Auto(auto) => auto.serialize(serializer),
        }
    }
}
