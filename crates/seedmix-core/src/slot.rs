//! Slots: one YAML document describing one player's game choice.

use indexmap::IndexMap;
use serde_yml::{Mapping, Value};

use crate::error::SlotIssue;

/// Top-level keys the combined document uses for itself.
pub const RESERVED_KEYS: [&str; 3] = ["name", "game", "triggers"];

/// The games a slot contributes, discriminated when the slot is parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotGames {
    /// `game: <name>` with a single option block.
    Single {
        /// The game name.
        game: String,
        /// The top-level block keyed by `game`.
        options: Value,
    },
    /// `game: { <name>: ..., ... }` with one option block per key.
    Multi(IndexMap<String, Value>),
}

/// A parsed slot document.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    /// The slot's own `name`, if it sets one.
    pub name: Option<String>,
    /// The games and their option blocks.
    pub games: SlotGames,
    /// Triggers declared by the slot, carried over unchanged.
    pub triggers: Vec<Value>,
}

impl Slot {
    /// Classify a YAML document as a slot.
    pub fn from_document(document: &Value) -> Result<Self, SlotIssue> {
        let map = document.as_mapping().ok_or(SlotIssue::NotAMapping)?;

        let games = match map.get("game") {
            None => return Err(SlotIssue::MissingGame),
            Some(Value::String(game)) => {
                let options = option_block(map, game)?;
                SlotGames::Single {
                    game: game.clone(),
                    options,
                }
            }
            Some(Value::Mapping(choices)) => {
                let mut games = IndexMap::with_capacity(choices.len());
                for key in choices.keys() {
                    let game = key.as_str().ok_or(SlotIssue::NonStringGameName)?;
                    let options = option_block(map, game)?;
                    games.insert(game.to_string(), options);
                }
                SlotGames::Multi(games)
            }
            Some(_) => return Err(SlotIssue::InvalidGame),
        };

        let name = match map.get("name") {
            None | Some(Value::Null) => None,
            Some(Value::String(name)) => Some(name.clone()),
            Some(Value::Number(number)) => Some(number.to_string()),
            Some(Value::Bool(flag)) => Some(flag.to_string()),
            Some(_) => return Err(SlotIssue::InvalidName),
        };

        let triggers = match map.get("triggers") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Sequence(seq)) => seq.clone(),
            Some(_) => return Err(SlotIssue::InvalidTriggers),
        };

        Ok(Self {
            name,
            games,
            triggers,
        })
    }

    /// The name to apply when one of this slot's games is rolled.
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(fallback)
    }

    /// Whether the slot was written with a `game` mapping.
    pub fn is_multi(&self) -> bool {
        matches!(self.games, SlotGames::Multi(_))
    }

    /// Each contributed game with its option block, in document order.
    pub fn contributions(&self) -> Vec<(&str, &Value)> {
        match &self.games {
            SlotGames::Single { game, options } => vec![(game.as_str(), options)],
            SlotGames::Multi(games) => games.iter().map(|(g, o)| (g.as_str(), o)).collect(),
        }
    }

    /// The contributed game names, in document order.
    pub fn game_names(&self) -> Vec<&str> {
        self.contributions().into_iter().map(|(g, _)| g).collect()
    }
}

fn option_block(map: &Mapping, game: &str) -> Result<Value, SlotIssue> {
    if RESERVED_KEYS.contains(&game) {
        return Err(SlotIssue::ReservedGameName(game.to_string()));
    }
    map.get(game)
        .cloned()
        .ok_or_else(|| SlotIssue::MissingOptions(game.to_string()))
}
