use serde::Serialize;

use crate::item::core::CatalogError;

use super::events::ToEvents;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Ok,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A message attached to an operation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub severity: Severity,
    /// Stable machine-readable key, e.g. `SEASON_NOT_MOVABLE`
    pub key: String,
    pub message: String,
}

impl Event {
    pub fn info(key: impl Into<String>, message: impl Into<String>) -> Self {
        Event {
            severity: Severity::Info,
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn error(key: impl Into<String>, message: impl Into<String>) -> Self {
        Event {
            severity: Severity::Error,
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Outcome of a facade operation: a status, the events it produced and, on
/// success, its data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpResult<T> {
    status: Status,
    events: Vec<Event>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T> OpResult<T> {
    pub fn ok(data: T) -> Self {
        OpResult {
            status: Status::Ok,
            events: Vec::new(),
            data: Some(data),
        }
    }

    pub fn failed(events: Vec<Event>) -> Self {
        OpResult {
            status: Status::Error,
            events,
            data: None,
        }
    }

    #[must_use]
    pub fn with_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Whether any event carries `key`
    #[must_use]
    pub fn has_event(&self, key: &str) -> bool {
        self.events.iter().any(|event| event.key == key)
    }

    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> OpResult<U> {
        OpResult {
            status: self.status,
            events: self.events,
            data: self.data.map(f),
        }
    }
}

impl<T> From<Result<T, CatalogError>> for OpResult<T> {
    fn from(result: Result<T, CatalogError>) -> Self {
        match result {
            Ok(data) => OpResult::ok(data),
            Err(err) => OpResult::failed(err.to_events()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::core::{EntityId, EntityKind};

    #[test]
    fn test_ok_result_json() {
        let result = OpResult::ok(3).with_event(Event::info("GENRE_ADDED", "genre 3 added"));
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["status"], "OK");
        assert_eq!(value["data"], 3);
        assert_eq!(value["events"][0]["severity"], "info");
        assert_eq!(value["events"][0]["key"], "GENRE_ADDED");
    }

    #[test]
    fn test_error_result_has_no_data() {
        let result: OpResult<u32> = Err(CatalogError::not_found(
            EntityKind::Movie,
            EntityId::new(4),
        ))
        .into();
        assert!(!result.is_ok());
        assert_eq!(result.status(), Status::Error);
        assert!(result.data().is_none());
        assert!(result.has_event("MOVIE_NOT_FOUND"));

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["status"], "ERROR");
        assert!(value.get("data").is_none());
    }

    #[test]
    fn test_map_keeps_events() {
        let result = OpResult::ok(2)
            .with_event(Event::info("K", "m"))
            .map(|n| n * 10);
        assert_eq!(result.data(), Some(&20));
        assert_eq!(result.events().len(), 1);
    }
}
