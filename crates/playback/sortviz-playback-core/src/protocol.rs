//! Wire shapes for the external sorting service.
//!
//! The service computes the full trace atomically; this crate only consumes
//! it. Transport stays in the host: a failed or unreachable service never
//! reaches this layer as data, it is reported to the controller through
//! `fail_request` so the sorting flag is released. Single attempt, reported
//! not retried.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::step::{Step, StepSequence};

/// Sorting algorithms the service accepts.
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Quicksort,
    Bubblesort,
    Mergesort,
}

/// Request body for the sort endpoint.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SortRequest {
    pub array: Vec<f32>,
    pub algorithm: Algorithm,
}

/// Response body: the recorded trace.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SortResponse {
    pub steps: Vec<Step>,
}

/// Errors produced while decoding a service response.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("sort response parse error: {0}")]
    Parse(String),
    #[error("invalid step {index}: {reason}")]
    InvalidStep { index: usize, reason: String },
}

/// Parse a service response into a playable step sequence, validating each
/// step's annotation indices. The renderer tolerates malformed annotations
/// anyway; boundaries that want early rejection use this entry point.
pub fn parse_sort_response_json(s: &str) -> Result<StepSequence, ProtocolError> {
    let resp: SortResponse =
        serde_json::from_str(s).map_err(|e| ProtocolError::Parse(e.to_string()))?;
    for (index, step) in resp.steps.iter().enumerate() {
        step.validate_basic()
            .map_err(|reason| ProtocolError::InvalidStep { index, reason })?;
    }
    Ok(resp.steps)
}
