//! Narrative state and the renderer.
//!
//! Rendering is a pure step: `(category, event, state) -> (markup, state)`.
//! The only context carried between events is the registry of task start
//! times and the last *rendered* event, which decides whether the next piece
//! of output continues the open line or starts a new block.

mod lapse;
mod render;
mod state;

pub use lapse::*;
pub use render::*;
pub use state::*;
