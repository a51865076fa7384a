//! Catalog facade: validated, locked, persisted operations per entity kind.
//!
//! Results are reported as [`OpResult`] values instead of errors so callers get
//! the status, the events and the data in one serializable shape.

mod catalog;
mod events;
mod result;
mod service;

pub use catalog::{Catalog, Statistics};
pub use events::ToEvents;
pub use result::{Event, OpResult, Severity, Status};
pub use service::Facade;
