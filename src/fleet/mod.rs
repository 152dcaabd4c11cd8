//! In-memory fleet topology and mirrored per-target counters.
mod model;
mod target;


pub use model::{CountChange, DEFAULT_TARGETS, Edge, Fleet, Node};
pub use target::{Target, TargetId};
