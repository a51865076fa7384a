use super::result::Event;
use crate::item::core::CatalogError;

/// Map a domain error onto the events reported to the caller.
pub trait ToEvents {
    fn to_events(&self) -> Vec<Event>;
}

impl ToEvents for CatalogError {
    fn to_events(&self) -> Vec<Event> {
        match (self, self.kind()) {
            (CatalogError::Validation { kind, violations }, _) => violations
                .iter()
                .map(|v| Event::error(format!("{}_{}", kind.key_prefix(), v.key()), v.to_string()))
                .collect(),
            (_, Some(kind)) => vec![Event::error(
                format!("{}_{}", kind.key_prefix(), self.code()),
                self.to_string(),
            )],
            (_, None) => vec![Event::error(self.code(), self.to_string())],
        }
    }
}
