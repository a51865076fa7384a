use serde::{Deserialize, Serialize};

use super::catalog_item;
use crate::item::core::EntityMeta;
use crate::item::validation::{not_empty, positive, Validate, Violation};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Program {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub name: String,
    pub wiki_en: String,
    pub wiki_cz: String,
    pub media_count: u32,
    pub crack: bool,
    pub serial_key: bool,
    pub other_data: String,
    pub note: String,
}

catalog_item!(Program => Program);

impl Validate for Program {
    fn violations(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        not_empty("name", &self.name, &mut out);
        positive("media_count", self.media_count, &mut out);
        out
    }
}
