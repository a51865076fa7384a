//! Depth-first renumbering across a scope tree.

use std::collections::HashMap;

use tracing::debug;

use super::order::{next_position, renumber};
use crate::item::core::{sibling_order, AuditStamp, Node, Scope, ScopeResolver};

/// In-memory scope lookup built from a snapshot of entities.
#[derive(Debug, Clone)]
pub struct ScopeIndex<T> {
    scopes: HashMap<Scope, Vec<T>>,
}

impl<T: Node> ScopeIndex<T> {
    /// Group `entities` by scope, each group sorted by `(position, id)`.
    pub fn new(entities: impl IntoIterator<Item = T>) -> Self {
        let mut scopes: HashMap<Scope, Vec<T>> = HashMap::new();
        for entity in entities {
            scopes.entry(entity.scope()).or_default().push(entity);
        }
        for members in scopes.values_mut() {
            members.sort_by(sibling_order);
        }
        ScopeIndex { scopes }
    }

    /// Number of entities in `scope`.
    #[must_use]
    pub fn count(&self, scope: &Scope) -> usize {
        self.scopes.get(scope).map_or(0, Vec::len)
    }

    /// Position the next entity appended to `scope` would get.
    #[must_use]
    pub fn next_position(&self, scope: &Scope) -> u32 {
        self.scopes
            .get(scope)
            .map_or(0, |members| next_position(members))
    }
}

impl<T: Clone> ScopeResolver<T> for ScopeIndex<T> {
    fn siblings_of(&self, scope: &Scope) -> Vec<T> {
        self.scopes.get(scope).cloned().unwrap_or_default()
    }
}

/// Renumber every scope in `roots` and, recursively, every scope owned by their
/// members.
///
/// Scopes are visited depth-first: after a scope is renumbered, the child scopes
/// of its members are walked in ascending member position before the next root.
/// Returns the entities whose position changed, stamped, in visit order.
pub fn renumber_sweep<T, R>(roots: &[Scope], resolver: &R, stamp: &AuditStamp) -> Vec<T>
where
    T: Node,
    R: ScopeResolver<T> + ?Sized,
{
    let mut changed = Vec::new();
    let mut pending: Vec<Scope> = roots.iter().rev().copied().collect();

    while let Some(scope) = pending.pop() {
        let mut siblings = resolver.siblings_of(&scope);
        let touched = renumber(&mut siblings, stamp);
        if !touched.is_empty() {
            debug!(scope = %scope, changed = touched.len(), "Renumbered scope");
        }

        let children: Vec<Scope> = siblings.iter().flat_map(Node::child_scopes).collect();
        pending.extend(children.into_iter().rev());

        for index in touched {
            if let Some(entity) = siblings.get(index) {
                changed.push(entity.clone());
            }
        }
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::core::{EntityId, EntityKind, Ordered};
    use crate::item::entities::{Entity, Episode, Season, Show};
    use chrono::{TimeZone, Utc};

    fn stamp() -> AuditStamp {
        AuditStamp::new("sweeper", Utc.timestamp_opt(0, 0).unwrap())
    }

    fn show(id: u64, position: u32) -> Entity {
        let mut show = Show::default();
        show.meta.id = Some(EntityId::new(id));
        show.meta.position = position;
        show.into()
    }

    fn season(id: u64, show: u64, position: u32) -> Entity {
        let mut season = Season::default();
        season.meta.id = Some(EntityId::new(id));
        season.meta.position = position;
        season.show_id = Some(EntityId::new(show));
        season.into()
    }

    fn episode(id: u64, season: u64, position: u32) -> Entity {
        let mut episode = Episode::default();
        episode.meta.id = Some(EntityId::new(id));
        episode.meta.position = position;
        episode.season_id = Some(EntityId::new(season));
        episode.into()
    }

    #[test]
    fn test_index_groups_and_sorts() {
        let index = ScopeIndex::new(vec![season(2, 1, 4), season(3, 1, 0), show(1, 0)]);
        let scope = Scope::child(EntityKind::Season, EntityId::new(1));
        let ids: Vec<_> = index
            .siblings_of(&scope)
            .iter()
            .filter_map(Ordered::id)
            .collect();
        assert_eq!(ids, vec![EntityId::new(3), EntityId::new(2)]);
        assert_eq!(index.count(&scope), 2);
        assert_eq!(index.next_position(&scope), 5);
        assert_eq!(index.next_position(&Scope::root(EntityKind::Movie)), 0);
    }

    #[test]
    fn test_sweep_reaches_grandchildren() {
        let index = ScopeIndex::new(vec![
            show(1, 3),
            show(2, 8),
            season(10, 1, 2),
            season(11, 1, 7),
            episode(20, 11, 5),
            episode(21, 11, 1),
        ]);
        let changed: Vec<Entity> =
            renumber_sweep(&[Scope::root(EntityKind::Show)], &index, &stamp());
        let moved: Vec<_> = changed
            .iter()
            .map(|e| (e.id().unwrap().get(), e.position()))
            .collect();
        assert_eq!(
            moved,
            vec![(1, 0), (2, 1), (10, 0), (11, 1), (21, 0), (20, 1)]
        );
    }

    #[test]
    fn test_sweep_on_dense_tree_changes_nothing() {
        let index = ScopeIndex::new(vec![show(1, 0), season(10, 1, 0), season(11, 1, 1)]);
        let changed: Vec<Entity> =
            renumber_sweep(&[Scope::root(EntityKind::Show)], &index, &stamp());
        assert!(changed.is_empty());
    }

    #[test]
    fn test_sweep_visits_children_in_parent_order() {
        let index = ScopeIndex::new(vec![
            show(1, 9),
            show(2, 4),
            season(10, 1, 3),
            season(11, 2, 3),
        ]);
        let changed: Vec<Entity> =
            renumber_sweep(&[Scope::root(EntityKind::Show)], &index, &stamp());
        let ids: Vec<_> = changed.iter().map(|e| e.id().unwrap().get()).collect();
        assert_eq!(ids, vec![2, 1, 11, 10]);
    }
}
