//! Entity metadata shared by every kind: identity, position and audit stamps.

use chrono::{DateTime, Utc};

use super::id::EntityId;

/// Who did something and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditStamp {
    pub user: String,
    pub time: DateTime<Utc>,
}

impl AuditStamp {
    #[must_use]
    pub fn new(user: impl Into<String>, time: DateTime<Utc>) -> Self {
        AuditStamp {
            user: user.into(),
            time,
        }
    }
}

/// Creation and last-update audit fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_time: Option<DateTime<Utc>>,
}

impl Audit {
    /// Audit fields of a freshly created entity: both pairs set to `stamp`.
    #[must_use]
    pub fn created(stamp: &AuditStamp) -> Self {
        Audit {
            created_user: Some(stamp.user.clone()),
            created_time: Some(stamp.time),
            updated_user: Some(stamp.user.clone()),
            updated_time: Some(stamp.time),
        }
    }

    /// Record a modification.
    pub fn touch(&mut self, stamp: &AuditStamp) {
        self.updated_user = Some(stamp.user.clone());
        self.updated_time = Some(stamp.time);
    }
}

/// Metadata carried by every entity, flattened into its JSON form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default)]
    pub position: u32,
    #[serde(flatten)]
    pub audit: Audit,
}

/// Source of "now" for audit stamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn stamp(user: &str, secs: i64) -> AuditStamp {
        AuditStamp::new(user, Utc.timestamp_opt(secs, 0).unwrap())
    }

    #[test]
    fn test_created_sets_both_pairs() {
        let s = stamp("alice", 100);
        let audit = Audit::created(&s);
        assert_eq!(audit.created_user.as_deref(), Some("alice"));
        assert_eq!(audit.updated_user.as_deref(), Some("alice"));
        assert_eq!(audit.created_time, audit.updated_time);
    }

    #[test]
    fn test_touch_keeps_created_fields() {
        let mut audit = Audit::created(&stamp("alice", 100));
        audit.touch(&stamp("bob", 200));
        assert_eq!(audit.created_user.as_deref(), Some("alice"));
        assert_eq!(audit.updated_user.as_deref(), Some("bob"));
        assert_eq!(audit.updated_time, Some(Utc.timestamp_opt(200, 0).unwrap()));
    }

    #[test]
    fn test_meta_json_is_flat_camel_case() {
        let meta = EntityMeta {
            id: Some(EntityId::new(3)),
            position: 2,
            audit: Audit::created(&stamp("alice", 0)),
        };
        let value = serde_json::to_value(&meta).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["position"], 2);
        assert_eq!(value["createdUser"], "alice");
        assert!(value.get("audit").is_none());
    }

    #[test]
    fn test_meta_missing_fields_default() {
        let meta: EntityMeta = serde_json::from_str("{}").unwrap();
        assert_eq!(meta, EntityMeta::default());
    }

    #[test]
    fn test_fixed_clock() {
        let t = Utc.timestamp_opt(5, 0).unwrap();
        assert_eq!(FixedClock(t).now(), t);
    }
}
