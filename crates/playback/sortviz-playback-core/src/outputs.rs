//! Output contracts from the playback controller.
//!
//! Each update produces at most one frame plus discrete lifecycle events.
//! Adapters render the frame and transport events to the host.

use serde::{Deserialize, Serialize};

use crate::ids::SessionId;

/// The snapshot handed to the renderer for one tick.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Frame {
    pub session: SessionId,
    /// Index of the emitted step within its sequence.
    pub cursor: usize,
    pub array: Vec<f32>,
    pub pivot: Option<usize>,
    pub compared: Vec<usize>,
}

/// Discrete lifecycle signals emitted while stepping.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[non_exhaustive]
pub enum PlaybackEvent {
    SessionStarted {
        session: SessionId,
        steps: usize,
    },
    Step {
        session: SessionId,
        cursor: usize,
    },
    /// A new `start` replaced a still-running session.
    SessionSuperseded {
        old: SessionId,
        new: SessionId,
    },
    SessionFinished {
        session: SessionId,
    },
    /// The sort request failed; the sorting flag has been released.
    RequestFailed {
        message: String,
    },
}

/// Outputs returned by Controller::update().
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub frame: Option<Frame>,
    #[serde(default)]
    pub events: Vec<PlaybackEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.frame = None;
        self.events.clear();
    }

    #[inline]
    pub fn push_event(&mut self, event: PlaybackEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frame.is_none() && self.events.is_empty()
    }
}
