use serde::{Deserialize, Serialize};

use super::catalog_item;
use crate::item::core::{EntityId, EntityMeta};
use crate::item::validation::{not_empty, positive, year_in_range, Validate, Violation};

/// A film, stored on one or more media.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Movie {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub czech_name: String,
    pub original_name: String,
    pub year: i32,
    /// Audio languages, as codes such as `cz` or `en`
    pub languages: Vec<String>,
    pub subtitles: Vec<String>,
    /// CSFD page id
    pub csfd: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imdb_code: Option<u32>,
    pub wiki_en: String,
    pub wiki_cz: String,
    /// Cover picture; not owned by the movie
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<EntityId>,
    pub note: String,
    /// Genres; not owned by the movie
    pub genres: Vec<EntityId>,
}

catalog_item!(Movie => Movie);

impl Validate for Movie {
    fn violations(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        not_empty("czech_name", &self.czech_name, &mut out);
        not_empty("original_name", &self.original_name, &mut out);
        year_in_range("year", self.year, &mut out);
        out
    }
}

/// One disc of a movie.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Medium {
    #[serde(flatten)]
    pub meta: EntityMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie_id: Option<EntityId>,
    pub number: u32,
    /// Running time in minutes
    pub length: u32,
}

catalog_item!(Medium => Medium, parent: movie_id);

impl Validate for Medium {
    fn violations(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        positive("number", self.number, &mut out);
        out
    }
}
