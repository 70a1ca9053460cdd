//! Core configuration for sortviz-playback-core.

use serde::{Deserialize, Serialize};

/// Rendering and playback defaults. Kept small; hosts override fields via a
/// JSON config object at construction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Multiplier from array value to bar pixel height.
    pub scale_factor: f32,
    /// Horizontal gap carved out of each bar slot, in pixels.
    pub bar_gap: f32,
    /// Distance between a bar's top edge and its label, in pixels.
    pub label_offset: f32,
    /// Per-step delay used when the host does not pass one.
    pub default_delay_ms: u32,
    /// Array shown before any sort request.
    pub initial_array: Vec<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scale_factor: 5.0,
            bar_gap: 2.0,
            label_offset: 5.0,
            default_delay_ms: 500,
            initial_array: vec![8.0, 3.0, 1.0, 7.0, 0.0, 10.0, 2.0],
        }
    }
}
