//! Deep duplication of an entity and everything it owns.

use std::collections::HashMap;

use crate::item::core::{sibling_order, AuditStamp, EntityId, Node, Scope};

/// One copied record and the id of the record it was copied from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicatedNode<T> {
    pub source: Option<EntityId>,
    pub entity: T,
}

/// The result of a duplication, root first, then descendants in pre-order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicatedGraph<T> {
    nodes: Vec<DuplicatedNode<T>>,
}

impl<T: Node> DuplicatedGraph<T> {
    /// The copy of the duplicated entity
    #[must_use]
    pub fn root(&self) -> Option<&T> {
        self.nodes.first().map(|node| &node.entity)
    }

    #[must_use]
    pub fn nodes(&self) -> &[DuplicatedNode<T>] {
        &self.nodes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of copies that land in each scope.
    #[must_use]
    pub fn counts_per_scope(&self) -> HashMap<Scope, usize> {
        let mut counts: HashMap<Scope, usize> = HashMap::new();
        for node in &self.nodes {
            let count = counts.entry(node.entity.scope()).or_default();
            *count = count.saturating_add(1);
        }
        counts
    }

    /// Drop the source ids and keep the copies.
    #[must_use]
    pub fn into_entities(self) -> Vec<T> {
        self.nodes.into_iter().map(|node| node.entity).collect()
    }
}

/// Copy `root` and all of its descendants.
///
/// * `children_of` lists the members of a scope owned by a source entity.
/// * `next_position` reports where the next entity appended to a scope goes,
///   as seen before this duplication.
/// * `allocate` hands out fresh ids; it is called for the root first and then
///   for each descendant in pre-order, siblings in their original order.
///
/// The root copy stays in the root's scope and is appended to its end. Every
/// descendant copy is reparented onto its copied parent. Audit data of every
/// copy is reset to `stamp`.
pub fn duplicate<T, C, P, A>(
    root: &T,
    children_of: C,
    next_position: P,
    mut allocate: A,
    stamp: &AuditStamp,
) -> DuplicatedGraph<T>
where
    T: Node,
    C: Fn(&Scope) -> Vec<T>,
    P: Fn(&Scope) -> u32,
    A: FnMut() -> EntityId,
{
    let mut placed: HashMap<Scope, u32> = HashMap::new();
    let mut nodes = Vec::new();
    let mut pending: Vec<(T, Option<EntityId>)> = vec![(root.clone(), None)];

    while let Some((source, new_parent)) = pending.pop() {
        let mut copy = source.clone();
        if let Some(parent) = new_parent {
            copy.reparent(parent);
        }
        let id = allocate();
        copy.assign_id(id);

        let scope = copy.scope();
        let already = placed.entry(scope).or_insert(0);
        copy.set_position(next_position(&scope).saturating_add(*already));
        *already = already.saturating_add(1);
        copy.reset_audit(stamp);

        let mut children: Vec<T> = Vec::new();
        for child_scope in source.child_scopes() {
            let mut members = children_of(&child_scope);
            members.sort_by(sibling_order);
            children.extend(members);
        }
        pending.extend(children.into_iter().rev().map(|child| (child, Some(id))));

        nodes.push(DuplicatedNode {
            source: source.id(),
            entity: copy,
        });
    }

    DuplicatedGraph { nodes }
}
