//! Playback controller: owns the single active session and advances it on
//! the host's clock.
//!
//! Methods: new, begin_request/fail_request, set_array, start, update (tick),
//! readouts (is_sorting, current_array, cursor).

use log::debug;

use crate::config::Config;
use crate::ids::{IdAllocator, SessionId};
use crate::outputs::{Frame, Outputs, PlaybackEvent};
use crate::step::StepSequence;

/// Explicit cancellable scheduled task: accumulates host time and fires once
/// per period. It lives inside the session, so dropping the session is
/// cancellation; the controller never holds two at once.
#[derive(Debug)]
struct Ticker {
    period_ms: u32,
    elapsed_ms: f32,
}

impl Ticker {
    fn new(period_ms: u32) -> Self {
        Self {
            period_ms,
            elapsed_ms: 0.0,
        }
    }

    /// Advance by dt seconds; true when one period has elapsed. Surplus time
    /// beyond a single period is discarded, so a stalled host cannot burst
    /// several logical ticks into one frame.
    fn advance(&mut self, dt: f32) -> bool {
        self.elapsed_ms += dt * 1000.0;
        if self.elapsed_ms >= self.period_ms as f32 {
            self.elapsed_ms = 0.0;
            true
        } else {
            false
        }
    }
}

/// One run of animating a step sequence at a fixed per-step delay.
/// Invariant: `cursor <= steps.len()`; the session is dropped the moment the
/// cursor reaches the end.
#[derive(Debug)]
struct Session {
    id: SessionId,
    steps: StepSequence,
    ticker: Ticker,
    cursor: usize,
}

/// Playback state machine: idle until `start`, then one step per elapsed
/// period until the cursor reaches the end of the sequence. Starting again
/// while running supersedes the old session atomically.
#[derive(Debug)]
pub struct Controller {
    cfg: Config,
    ids: IdAllocator,
    session: Option<Session>,
    request_pending: bool,
    /// Externally visible current array, kept consistent with what is drawn
    /// so live readouts never disagree with the chart.
    current: Vec<f32>,
    /// Events produced between updates (start, fail_request) are delivered
    /// with the next update's outputs.
    pending: Vec<PlaybackEvent>,
    outputs: Outputs,
}

impl Controller {
    pub fn new(cfg: Config) -> Self {
        let current = cfg.initial_array.clone();
        Self {
            cfg,
            ids: IdAllocator::new(),
            session: None,
            request_pending: false,
            current,
            pending: Vec::new(),
            outputs: Outputs::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// The array observers should display right now: the resting array until
    /// playback starts, then the snapshot of the last emitted step.
    pub fn current_array(&self) -> &[f32] {
        &self.current
    }

    /// True while a sort request is in flight or a session is animating.
    /// Input controls stay disabled exactly while this holds.
    pub fn is_sorting(&self) -> bool {
        self.request_pending || self.session.is_some()
    }

    /// Cursor of the active session, if any.
    pub fn cursor(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.cursor)
    }

    /// Replace the resting array (a successful input parse). Rejected input
    /// never reaches this point, so the prior array survives it untouched.
    pub fn set_array(&mut self, array: Vec<f32>) {
        self.current = array;
    }

    /// Mark a sort request as submitted so the UI disables its controls.
    pub fn begin_request(&mut self) {
        self.request_pending = true;
    }

    /// Report a failed or unreachable service. Single attempt, never
    /// retried; the pending flag must not be left set or the form stays
    /// disabled forever.
    pub fn fail_request(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!("sort request failed: {message}");
        self.request_pending = false;
        self.pending.push(PlaybackEvent::RequestFailed { message });
    }

    /// Begin a new playback session, superseding any active one. The old
    /// session (and its ticker) is dropped before the new one is installed,
    /// so a stale tick can never fire after supersession.
    pub fn start(&mut self, steps: StepSequence, delay_ms: u32) {
        debug_assert!(delay_ms > 0, "per-step delay must be positive");
        self.request_pending = false;

        let old_id = self.session.take().map(|old| {
            debug!("superseding session {:?} at cursor {}", old.id, old.cursor);
            old.id
        });
        let id = self.ids.alloc_session();
        if let Some(old) = old_id {
            self.pending
                .push(PlaybackEvent::SessionSuperseded { old, new: id });
        }

        self.pending.push(PlaybackEvent::SessionStarted {
            session: id,
            steps: steps.len(),
        });
        if steps.is_empty() {
            // Degenerate trace: immediately terminal, nothing to render.
            debug!("session {id:?} is empty, finishing immediately");
            self.pending
                .push(PlaybackEvent::SessionFinished { session: id });
            return;
        }

        debug!(
            "session {id:?} started: {} steps at {delay_ms} ms",
            steps.len()
        );
        self.session = Some(Session {
            id,
            steps,
            ticker: Ticker::new(delay_ms),
            cursor: 0,
        });
    }

    /// Advance by dt seconds. Emits at most one frame; steps are delivered
    /// strictly in sequence order, one per tick. This method never fails;
    /// malformed annotations are the renderer's concern.
    pub fn update(&mut self, dt: f32) -> &Outputs {
        self.outputs.clear();
        self.outputs.events.append(&mut self.pending);

        let mut finished = None;
        if let Some(session) = self.session.as_mut() {
            if session.ticker.advance(dt) {
                let step = &session.steps[session.cursor];
                self.current = step.array.clone();
                self.outputs.frame = Some(Frame {
                    session: session.id,
                    cursor: session.cursor,
                    array: step.array.clone(),
                    pivot: step.pivot,
                    compared: step.compared.clone(),
                });
                self.outputs.events.push(PlaybackEvent::Step {
                    session: session.id,
                    cursor: session.cursor,
                });
                session.cursor += 1;
                if session.cursor == session.steps.len() {
                    finished = Some(session.id);
                }
            }
        }
        if let Some(id) = finished {
            self.session = None;
            self.outputs
                .push_event(PlaybackEvent::SessionFinished { session: id });
            debug!("session {id:?} finished");
        }

        &self.outputs
    }
}
