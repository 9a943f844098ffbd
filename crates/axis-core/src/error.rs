// File: crates/axis-core/src/error.rs
// Summary: Error types for axis normalisation.

use thiserror::Error;

/// Failures reported by [`crate::normalise`].
///
/// The first three variants are caller-input errors; `StepInvariant`
/// indicates a logic defect in the step computation and is unreachable
/// for valid input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormaliseError {
    #[error("cannot normalise an empty sample set")]
    EmptyInput,

    #[error("sample at index {index} is not finite ({value})")]
    NonFiniteInput { index: usize, value: f64 },

    #[error("tick count must be at least 2, got {0}")]
    BadTickCount(usize),

    #[error("axis step collapsed to a non-positive value ({step})")]
    StepInvariant { step: f64 },
}
