//! Bar and label colors, as CSS color strings the host applies directly.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChartTheme {
    /// Fill for the bar at the pivot index.
    pub pivot: String,
    /// Fill for bars under comparison.
    pub compared: String,
    /// Fill for every other bar.
    pub bar: String,
    pub label: String,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            pivot: "orange".into(),
            compared: "red".into(),
            bar: "#6a5acd".into(),
            label: "#ffffff".into(),
        }
    }
}
