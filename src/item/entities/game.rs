use serde::{Deserialize, Serialize};

use super::catalog_item;
use crate::item::core::{EntityId, EntityMeta};
use crate::item::validation::{not_empty, positive, Validate, Violation};

/// A game with its extras.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Game {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub name: String,
    pub wiki_en: String,
    pub wiki_cz: String,
    pub media_count: u32,
    pub crack: bool,
    pub serial_key: bool,
    pub patch: bool,
    pub trainer: bool,
    pub trainer_data: bool,
    pub editor: bool,
    pub saves: bool,
    pub other_data: String,
    pub note: String,
}

catalog_item!(Game => Game);

impl Validate for Game {
    fn violations(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        not_empty("name", &self.name, &mut out);
        positive("media_count", self.media_count, &mut out);
        out
    }
}

/// The cheat sheet of a game. A game owns at most one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cheat {
    #[serde(flatten)]
    pub meta: EntityMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_id: Option<EntityId>,
    /// How to enable cheats in game settings
    pub game_setting: String,
    /// How to enter cheats
    pub cheat_setting: String,
}

catalog_item!(Cheat => Cheat, parent: game_id);

impl Validate for Cheat {
    fn violations(&self) -> Vec<Violation> {
        Vec::new()
    }
}

/// One cheat code line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheatData {
    #[serde(flatten)]
    pub meta: EntityMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cheat_id: Option<EntityId>,
    pub action: String,
    pub description: String,
}

catalog_item!(CheatData => CheatData, parent: cheat_id);

impl Validate for CheatData {
    fn violations(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        not_empty("action", &self.action, &mut out);
        not_empty("description", &self.description, &mut out);
        out
    }
}
