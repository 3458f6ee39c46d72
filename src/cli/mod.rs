//! Console demo host
//!
//! A line-based terminal host that implements the collaborator ports over
//! stdout and drives the controller interactively.

pub mod console;
pub mod play;
