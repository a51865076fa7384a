use serde::{Deserialize, Serialize};

use super::catalog_item;
use crate::item::core::EntityMeta;
use crate::item::validation::{not_empty_bytes, Validate, Violation};

/// Raw image bytes referenced by movies and shows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Picture {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub content: Vec<u8>,
}

catalog_item!(Picture => Picture);

impl Validate for Picture {
    fn violations(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        not_empty_bytes("content", &self.content, &mut out);
        out
    }
}
