//! Position orderer: movability checks, neighbour swaps and dense renumbering
//! of a single sibling scope.
//!
//! All functions work on a caller-supplied snapshot of the scope and never
//! touch storage. Movability follows the `(position, id)` sort order: an entity
//! can move up unless it sorts first, and its swap partner is the sibling sorted
//! immediately before it. Swaps exchange the exact position values, so scopes
//! with gaps behave the same as dense ones. When the two share a position, the
//! one that ends up second is pushed to the next position instead.

use std::fmt;

use thiserror::Error;

use crate::item::core::{sibling_order, AuditStamp, Ordered};

/// Which way an entity is moved within its scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// The end of a scope an entity cannot move past in this direction
    #[must_use]
    pub const fn edge(self) -> &'static str {
        match self {
            Direction::Up => "start",
            Direction::Down => "end",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("entity is already at the {} of its scope", .direction.edge())]
    NotMovable { direction: Direction },
}

/// The two entities changed by a move, with their positions already swapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swap<T> {
    pub moved: T,
    pub neighbor: T,
}

/// Whether some sibling sorts before `entity`.
#[must_use]
pub fn can_move_up<T: Ordered>(entity: &T, siblings: &[T]) -> bool {
    predecessor(entity, siblings).is_some()
}

/// Whether some sibling sorts after `entity`.
#[must_use]
pub fn can_move_down<T: Ordered>(entity: &T, siblings: &[T]) -> bool {
    successor(entity, siblings).is_some()
}

/// Swap `entity` with its immediate predecessor.
///
/// `siblings` is the whole scope; it may or may not contain `entity` itself.
pub fn move_up<T: Ordered + Clone>(
    entity: &T,
    siblings: &[T],
    stamp: &AuditStamp,
) -> Result<Swap<T>, OrderError> {
    let neighbor = predecessor(entity, siblings).ok_or(OrderError::NotMovable {
        direction: Direction::Up,
    })?;
    Ok(swap(entity, neighbor, Direction::Up, stamp))
}

/// Swap `entity` with its immediate successor.
pub fn move_down<T: Ordered + Clone>(
    entity: &T,
    siblings: &[T],
    stamp: &AuditStamp,
) -> Result<Swap<T>, OrderError> {
    let neighbor = successor(entity, siblings).ok_or(OrderError::NotMovable {
        direction: Direction::Down,
    })?;
    Ok(swap(entity, neighbor, Direction::Down, stamp))
}

/// Reassign positions `0..N` to a scope, keeping its order.
///
/// The slice is sorted in place by `(position, id)`; the sort is stable, so
/// entries the key cannot tell apart keep their input order. Only entries whose
/// position actually changed are stamped, and their indices (into the sorted
/// slice) are returned.
pub fn renumber<T: Ordered>(siblings: &mut [T], stamp: &AuditStamp) -> Vec<usize> {
    siblings.sort_by(sibling_order);
    let mut changed = Vec::new();
    for (index, (entity, position)) in siblings.iter_mut().zip(0u32..).enumerate() {
        if entity.position() != position {
            entity.set_position(position);
            entity.touch(stamp);
            changed.push(index);
        }
    }
    changed
}

/// Position a new sibling appended to the scope receives: one past the largest
/// position, or 0 for an empty scope.
#[must_use]
pub fn next_position<T: Ordered>(siblings: &[T]) -> u32 {
    siblings
        .iter()
        .map(Ordered::position)
        .max()
        .map_or(0, |max| max.saturating_add(1))
}

fn predecessor<'s, T: Ordered>(entity: &T, siblings: &'s [T]) -> Option<&'s T> {
    siblings
        .iter()
        .filter(|s| sibling_order(*s, entity).is_lt())
        .max_by(|a, b| sibling_order(*a, *b))
}

fn successor<'s, T: Ordered>(entity: &T, siblings: &'s [T]) -> Option<&'s T> {
    siblings
        .iter()
        .filter(|s| sibling_order(*s, entity).is_gt())
        .min_by(|a, b| sibling_order(*a, *b))
}

fn swap<T: Ordered + Clone>(
    entity: &T,
    neighbor: &T,
    direction: Direction,
    stamp: &AuditStamp,
) -> Swap<T> {
    let mut moved = entity.clone();
    let mut neighbor = neighbor.clone();
    let position = moved.position();
    if position == neighbor.position() {
        let bumped = position.saturating_add(1);
        match direction {
            Direction::Up => neighbor.set_position(bumped),
            Direction::Down => moved.set_position(bumped),
        }
    } else {
        moved.set_position(neighbor.position());
        neighbor.set_position(position);
    }
    moved.touch(stamp);
    neighbor.touch(stamp);
    Swap { moved, neighbor }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::core::EntityId;
    use chrono::{TimeZone, Utc};

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u64,
        position: u32,
        touched: bool,
    }

    impl Ordered for Row {
        fn id(&self) -> Option<EntityId> {
            Some(EntityId::new(self.id))
        }
        fn position(&self) -> u32 {
            self.position
        }
        fn set_position(&mut self, position: u32) {
            self.position = position;
        }
        fn touch(&mut self, _stamp: &AuditStamp) {
            self.touched = true;
        }
    }

    fn rows(positions: &[u32]) -> Vec<Row> {
        positions
            .iter()
            .zip(1u64..)
            .map(|(p, id)| Row {
                id,
                position: *p,
                touched: false,
            })
            .collect()
    }

    fn stamp() -> AuditStamp {
        AuditStamp::new("tester", Utc.timestamp_opt(0, 0).unwrap())
    }

    #[test]
    fn test_move_up_picks_greatest_smaller_position() {
        let scope = rows(&[9, 0, 5]);
        let swap = move_up(&scope[0], &scope, &stamp()).unwrap();
        assert_eq!(swap.moved.id, 1);
        assert_eq!(swap.moved.position, 5);
        assert_eq!(swap.neighbor.id, 3);
        assert_eq!(swap.neighbor.position, 9);
        assert!(swap.moved.touched && swap.neighbor.touched);
    }

    #[test]
    fn test_move_down_picks_least_larger_position() {
        let scope = rows(&[0, 9, 5]);
        let swap = move_down(&scope[0], &scope, &stamp()).unwrap();
        assert_eq!(swap.neighbor.id, 3);
        assert_eq!(swap.moved.position, 5);
        assert_eq!(swap.neighbor.position, 0);
    }

    #[test]
    fn test_boundaries_not_movable() {
        let scope = rows(&[0, 1, 2]);
        assert!(!can_move_up(&scope[0], &scope));
        assert!(can_move_down(&scope[0], &scope));
        assert!(can_move_up(&scope[2], &scope));
        assert!(!can_move_down(&scope[2], &scope));
        assert_eq!(
            move_down(&scope[2], &scope, &stamp()).unwrap_err(),
            OrderError::NotMovable {
                direction: Direction::Down
            }
        );
    }

    #[test]
    fn test_move_does_not_mutate_snapshot() {
        let scope = rows(&[0, 1]);
        let before = scope.clone();
        let _swap = move_up(&scope[1], &scope, &stamp()).unwrap();
        assert_eq!(scope, before);
    }

    fn tied(ids: &[u64], position: u32) -> Vec<Row> {
        ids.iter()
            .map(|id| Row {
                id: *id,
                position,
                touched: false,
            })
            .collect()
    }

    #[test]
    fn test_tied_positions_follow_id_order() {
        let scope = tied(&[2, 5], 3);
        assert!(!can_move_up(&scope[0], &scope));
        assert!(can_move_down(&scope[0], &scope));
        assert!(can_move_up(&scope[1], &scope));
        assert!(!can_move_down(&scope[1], &scope));
    }

    #[test]
    fn test_move_up_on_tie_pushes_neighbor_back() {
        let scope = tied(&[2, 5], 3);
        let swap = move_up(&scope[1], &scope, &stamp()).unwrap();
        assert_eq!((swap.moved.id, swap.moved.position), (5, 3));
        assert_eq!((swap.neighbor.id, swap.neighbor.position), (2, 4));
        assert!(swap.moved.touched && swap.neighbor.touched);
    }

    #[test]
    fn test_move_down_on_tie_pushes_moved_back() {
        let scope = tied(&[2, 5], 3);
        let swap = move_down(&scope[0], &scope, &stamp()).unwrap();
        assert_eq!((swap.moved.id, swap.moved.position), (2, 4));
        assert_eq!((swap.neighbor.id, swap.neighbor.position), (5, 3));
    }

    #[test]
    fn test_tie_neighbor_is_adjacent_in_sort_order() {
        let mut scope = rows(&[1]);
        scope.extend(tied(&[4, 6], 3));
        let swap = move_up(&scope[1], &scope, &stamp()).unwrap();
        assert_eq!(swap.neighbor.id, 1);
        assert_eq!(swap.moved.position, 1);
        assert_eq!(swap.neighbor.position, 3);
    }

    #[test]
    fn test_renumber_reports_changed_indices_only() {
        let mut scope = rows(&[0, 4, 2]);
        let changed = renumber(&mut scope, &stamp());
        let ids: Vec<_> = scope.iter().map(|r| (r.id, r.position)).collect();
        assert_eq!(ids, vec![(1, 0), (3, 1), (2, 2)]);
        assert_eq!(changed, vec![1, 2]);
        assert!(!scope[0].touched);
    }

    #[test]
    fn test_renumber_ties_break_by_id() {
        let mut scope = vec![
            Row {
                id: 7,
                position: 3,
                touched: false,
            },
            Row {
                id: 2,
                position: 3,
                touched: false,
            },
        ];
        renumber(&mut scope, &stamp());
        assert_eq!(scope[0].id, 2);
        assert_eq!(scope[0].position, 0);
        assert_eq!(scope[1].id, 7);
        assert_eq!(scope[1].position, 1);
    }

    #[test]
    fn test_renumber_empty_scope() {
        let mut scope: Vec<Row> = Vec::new();
        assert!(renumber(&mut scope, &stamp()).is_empty());
    }

    #[test]
    fn test_next_position_follows_max() {
        assert_eq!(next_position::<Row>(&[]), 0);
        assert_eq!(next_position(&rows(&[0, 1, 2])), 3);
        assert_eq!(next_position(&rows(&[0, 5])), 6);
    }

    #[test]
    fn test_not_movable_message() {
        let err = OrderError::NotMovable {
            direction: Direction::Up,
        };
        assert_eq!(err.to_string(), "entity is already at the start of its scope");
    }
}
