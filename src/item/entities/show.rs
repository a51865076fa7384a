use serde::{Deserialize, Serialize};

use super::catalog_item;
use crate::item::core::{EntityId, EntityMeta};
use crate::item::validation::{at_least, not_empty, positive, year_in_range, Validate, Violation};

/// A TV show.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Show {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub czech_name: String,
    pub original_name: String,
    pub csfd: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imdb_code: Option<u32>,
    pub wiki_en: String,
    pub wiki_cz: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<EntityId>,
    pub note: String,
    pub genres: Vec<EntityId>,
}

catalog_item!(Show => Show);

impl Validate for Show {
    fn violations(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        not_empty("czech_name", &self.czech_name, &mut out);
        not_empty("original_name", &self.original_name, &mut out);
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Season {
    #[serde(flatten)]
    pub meta: EntityMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_id: Option<EntityId>,
    pub number: u32,
    pub start_year: i32,
    pub end_year: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub subtitles: Vec<String>,
    pub note: String,
}

catalog_item!(Season => Season, parent: show_id);

impl Validate for Season {
    fn violations(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        positive("number", self.number, &mut out);
        year_in_range("start_year", self.start_year, &mut out);
        year_in_range("end_year", self.end_year, &mut out);
        at_least("end_year", self.end_year, "start_year", self.start_year, &mut out);
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Episode {
    #[serde(flatten)]
    pub meta: EntityMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season_id: Option<EntityId>,
    pub number: u32,
    pub name: String,
    /// Running time in minutes
    pub length: u32,
    pub note: String,
}

catalog_item!(Episode => Episode, parent: season_id);

impl Validate for Episode {
    fn violations(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        positive("number", self.number, &mut out);
        not_empty("name", &self.name, &mut out);
        out
    }
}
