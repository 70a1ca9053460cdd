//! Sortviz playback core (engine-agnostic)
//!
//! Step-driven playback and chart engine for the sortviz bar-chart
//! visualizer. This crate owns the data model for recorded sort traces, the
//! playback controller that advances through a trace on the host's clock,
//! and the renderer that reconciles each snapshot into bar/label scene
//! patches for an injected drawing surface. Hosts (the web adapter, tests)
//! own transport and the real surface.

pub mod chart;
pub mod config;
pub mod ids;
pub mod outputs;
pub mod parse;
pub mod protocol;
pub mod session;
pub mod step;
pub mod surface;
pub mod theme;

// Re-exports for consumers (adapters)
pub use chart::{BarShape, ChartRenderer, LabelShape, SceneOp, ScenePatch};
pub use config::Config;
pub use ids::SessionId;
pub use outputs::{Frame, Outputs, PlaybackEvent};
pub use parse::{parse_array, validate_delay, ParseError, DELAY_RANGE_MS};
pub use protocol::{parse_sort_response_json, Algorithm, ProtocolError, SortRequest, SortResponse};
pub use session::Controller;
pub use step::{Step, StepSequence};
pub use surface::{Surface, Viewport};
pub use theme::ChartTheme;
