//! The ordering and duplication engine.
//!
//! Pure, synchronous functions over caller-supplied snapshots. Nothing here
//! performs I/O or reads the clock; callers pass an [`AuditStamp`] instead.
//!
//! [`AuditStamp`]: crate::item::core::AuditStamp

pub mod duplicate;
pub mod order;
pub mod sweep;

pub use duplicate::{duplicate, DuplicatedGraph, DuplicatedNode};
pub use order::{
    can_move_down, can_move_up, move_down, move_up, next_position, renumber, Direction,
    OrderError, Swap,
};
pub use sweep::{renumber_sweep, ScopeIndex};
