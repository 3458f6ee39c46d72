//! Concrete collaborator implementations
//!
//! In-memory and JSON-file progress stores plus the task-based scene
//! director. Hosts with their own engine services implement the port traits
//! directly instead.

pub mod progress;
pub mod transition;

pub use progress::{JsonProgressStore, MemoryProgressStore};
pub use transition::TaskSceneDirector;
