use serde::{Deserialize, Serialize};

use super::catalog_item;
use crate::item::core::EntityMeta;
use crate::item::validation::{not_empty, Validate, Violation};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Genre {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub name: String,
}

catalog_item!(Genre => Genre);

impl Validate for Genre {
    fn violations(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        not_empty("name", &self.name, &mut out);
        out
    }
}
