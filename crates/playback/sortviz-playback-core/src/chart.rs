//! Chart renderer: maps one snapshot to bar/label geometry and reconciles
//! the visual element set by array position (enter/update/exit).

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::surface::{Surface, Viewport};
use crate::theme::ChartTheme;

/// Rectangle for one bar, y-down pixel space.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BarShape {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// CSS fill, already resolved through the color policy.
    pub fill: String,
}

/// Numeric label drawn just above its bar, horizontally centered.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LabelShape {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub fill: String,
}

/// One reconciliation operation against the element list: an index appears,
/// an existing index's geometry/annotations change, or an index is gone.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum SceneOp {
    Enter {
        index: usize,
        bar: BarShape,
        label: LabelShape,
    },
    Update {
        index: usize,
        bar: BarShape,
        label: LabelShape,
    },
    Exit {
        index: usize,
    },
}

/// The batch applied to the surface for one render call. Property changes
/// animate over `transition_ms`: half the step delay, so a transition always
/// settles before the next tick and animations never queue up.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ScenePatch {
    pub ops: Vec<SceneOp>,
    pub transition_ms: u32,
}

#[derive(Clone, Debug, PartialEq)]
struct BarElement {
    bar: BarShape,
    label: LabelShape,
}

/// Stateful renderer: keeps the element list between frames so element `i`
/// persists by position instead of being destroyed and recreated. No other
/// memory of prior frames.
#[derive(Debug, Default)]
pub struct ChartRenderer {
    elements: Vec<BarElement>,
}

impl ChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live visual elements (one bar + label per array position).
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Render one snapshot. Reads the surface dimensions at call time (never
    /// cached, so resizes between renders are honored) and applies a single
    /// patch. Never fails, whatever the annotations say; an empty snapshot
    /// renders zero bars.
    pub fn render(
        &mut self,
        surface: &mut dyn Surface,
        cfg: &Config,
        theme: &ChartTheme,
        snapshot: &[f32],
        pivot: Option<usize>,
        compared: &[usize],
        delay_ms: u32,
    ) {
        let viewport = surface.viewport();
        let patch = self.reconcile(viewport, cfg, theme, snapshot, pivot, compared, delay_ms);
        surface.apply(&patch);
    }

    #[allow(clippy::too_many_arguments)]
    fn reconcile(
        &mut self,
        viewport: Viewport,
        cfg: &Config,
        theme: &ChartTheme,
        snapshot: &[f32],
        pivot: Option<usize>,
        compared: &[usize],
        delay_ms: u32,
    ) -> ScenePatch {
        let len = snapshot.len();
        let slot = if len == 0 {
            0.0
        } else {
            viewport.width / len as f32
        };

        let mut ops = Vec::with_capacity(len + self.elements.len().saturating_sub(len));
        for (index, &value) in snapshot.iter().enumerate() {
            // Non-negative height guards malformed values.
            let bar_height = (value * cfg.scale_factor).max(0.0);
            let x = index as f32 * slot;
            let y = viewport.height - bar_height;
            let bar = BarShape {
                x,
                y,
                width: (slot - cfg.bar_gap).max(0.0),
                height: bar_height,
                fill: bar_fill(theme, index, pivot, compared),
            };
            let label = LabelShape {
                x: x + slot / 2.0,
                y: y - cfg.label_offset,
                text: format_value(value),
                fill: theme.label.clone(),
            };
            let element = BarElement {
                bar: bar.clone(),
                label: label.clone(),
            };
            if index < self.elements.len() {
                self.elements[index] = element;
                ops.push(SceneOp::Update { index, bar, label });
            } else {
                self.elements.push(element);
                ops.push(SceneOp::Enter { index, bar, label });
            }
        }
        for index in len..self.elements.len() {
            ops.push(SceneOp::Exit { index });
        }
        self.elements.truncate(len);

        ScenePatch {
            ops,
            transition_ms: delay_ms / 2,
        }
    }
}

/// Color policy, first match wins: pivot, then compared, then default.
/// Out-of-range annotation indices simply match no bar.
fn bar_fill(theme: &ChartTheme, index: usize, pivot: Option<usize>, compared: &[usize]) -> String {
    if pivot == Some(index) {
        theme.pivot.clone()
    } else if compared.contains(&index) {
        theme.compared.clone()
    } else {
        theme.bar.clone()
    }
}

/// Integral values print without a trailing ".0" so labels read "8", not
/// "8.0".
fn format_value(value: f32) -> String {
    if value.fract() == 0.0 && value.abs() < 1e7 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
