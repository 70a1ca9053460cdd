//! Drawing-surface seam.
//!
//! The renderer receives the surface explicitly and reads its dimensions
//! fresh on every call; hosts implement this over an SVG node, a canvas, or
//! a test double.

use serde::{Deserialize, Serialize};

use crate::chart::ScenePatch;

/// Current pixel dimensions of the drawing area.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

/// Injected handle to the rectangular drawing area. Only the renderer
/// mutates it, and only from the host's single-threaded context, so patches
/// never interleave.
pub trait Surface {
    /// Live dimensions, measured at call time. Container resizes between
    /// renders must be reflected in the next measurement.
    fn viewport(&mut self) -> Viewport;

    /// Apply one reconciled batch of element operations.
    fn apply(&mut self, patch: &ScenePatch);
}
