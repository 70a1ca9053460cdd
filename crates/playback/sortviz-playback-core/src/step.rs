//! Canonical step trace data model.
//!
//! A step is one recorded snapshot of algorithm progress; `pivot` and
//! `compared` annotate indices of that snapshot only and are not carried
//! across steps.

use serde::{Deserialize, Serialize};

/// One recorded snapshot with its annotations.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Step {
    /// The array's contents at this point of the algorithm's execution.
    pub array: Vec<f32>,
    /// At most one element currently acting as a pivot (`null` on the wire).
    #[serde(default)]
    pub pivot: Option<usize>,
    /// Elements currently being compared; zero or more, distinct.
    #[serde(default)]
    pub compared: Vec<usize>,
}

/// The complete ordered trace of one sort run, produced atomically by the
/// sorting service before playback begins (never streamed).
pub type StepSequence = Vec<Step>;

impl Step {
    /// Validate annotation invariants: pivot (when present) and every
    /// compared index in range, compared indices distinct.
    pub fn validate_basic(&self) -> Result<(), String> {
        let len = self.array.len();
        if let Some(p) = self.pivot {
            if p >= len {
                return Err(format!("pivot {p} out of range for array of length {len}"));
            }
        }
        for (i, &c) in self.compared.iter().enumerate() {
            if c >= len {
                return Err(format!(
                    "compared index {c} out of range for array of length {len}"
                ));
            }
            if self.compared[..i].contains(&c) {
                return Err(format!("compared index {c} duplicated"));
            }
        }
        Ok(())
    }
}
