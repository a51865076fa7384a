//! Capabilities the ordering and duplication engine works against.
//!
//! Every catalog kind implements [`Ordered`] and [`Node`]; the engine itself never
//! knows which concrete kind it is handling.

use super::id::EntityId;
use super::metadata::AuditStamp;
use super::scope::Scope;

/// A record positioned among its siblings.
pub trait Ordered {
    /// Stored identity, `None` before the first save
    fn id(&self) -> Option<EntityId>;

    /// Position within the sibling scope
    fn position(&self) -> u32;

    /// Overwrite the position
    fn set_position(&mut self, position: u32);

    /// Stamp the `updated_*` audit pair
    fn touch(&mut self, stamp: &AuditStamp);
}

/// An ordered record that lives in the ownership tree.
pub trait Node: Ordered + Clone {
    /// The sibling scope this record belongs to
    fn scope(&self) -> Scope;

    /// Give the record a (new) identity
    fn assign_id(&mut self, id: EntityId);

    /// Move the record under another parent of the same kind.
    ///
    /// Top-level records ignore this.
    fn reparent(&mut self, parent: EntityId);

    /// Replace the audit block with a freshly created one
    fn reset_audit(&mut self, stamp: &AuditStamp);

    /// Scopes owned by this record, in walk order. Empty when it has no id.
    fn child_scopes(&self) -> Vec<Scope> {
        match self.id() {
            Some(id) => self
                .scope()
                .kind
                .child_kinds()
                .iter()
                .map(|kind| Scope::child(*kind, id))
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Synchronous access to sibling scopes.
pub trait ScopeResolver<T> {
    /// Every member of `scope`, sorted ascending by `(position, id)`.
    fn siblings_of(&self, scope: &Scope) -> Vec<T>;
}

/// Sort key used wherever siblings are ordered: position first, then id.
///
/// Records without an id sort after stored ones sharing their position.
#[must_use]
pub fn sibling_order<T: Ordered>(a: &T, b: &T) -> std::cmp::Ordering {
    a.position().cmp(&b.position()).then_with(|| match (a.id(), b.id()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    })
}
