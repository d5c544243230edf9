//! Platform abstraction layer
//!
//! The boundary between a UI shell and the simulation:
//! - Input events (keys, pointer) folded into per-tick intent
//! - Frame timing turned into fixed simulation steps
//! - Read-only snapshots for rendering

pub mod input;
pub mod session;

pub use input::{InputAdapter, Key};
pub use session::Session;
