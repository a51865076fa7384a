use serde::{Deserialize, Serialize};

use super::catalog_item;
use crate::item::core::{EntityId, EntityMeta};
use crate::item::validation::{not_empty, positive, Validate, Violation};

/// An album.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Music {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub name: String,
    pub wiki_en: String,
    pub wiki_cz: String,
    pub media_count: u32,
    pub note: String,
}

catalog_item!(Music => Music);

impl Validate for Music {
    fn violations(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        not_empty("name", &self.name, &mut out);
        positive("media_count", self.media_count, &mut out);
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Song {
    #[serde(flatten)]
    pub meta: EntityMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub music_id: Option<EntityId>,
    pub name: String,
    /// Length in seconds
    pub length: u32,
    pub note: String,
}

catalog_item!(Song => Song, parent: music_id);

impl Validate for Song {
    fn violations(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        not_empty("name", &self.name, &mut out);
        out
    }
}
