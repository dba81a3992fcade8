//! Input validation for arrival lists.
//!
//! Checks an arrival list before it is fed to a simulation. Detects:
//! - Arrivals whose timestep goes backwards (fatal)
//! - Zero-duration arrivals (non-fatal)
//!
//! A zero duration doubles as the "nothing arrives" sentinel, so such a job
//! can never be represented. The simulation skips it; validation surfaces it
//! so the input's author knows it was dropped.

use tracing::warn;

use crate::error::{Result, SimError};
use crate::models::Arrival;

/// Validation result.
pub type ValidationResult = std::result::Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// An arrival's timestep is earlier than the one before it.
    OutOfOrderArrival,
    /// An arrival requests no service and will be treated as no arrival.
    ZeroDuration,
}

impl ValidationErrorKind {
    /// Whether the input must be rejected.
    pub fn is_fatal(self) -> bool {
        match self {
            ValidationErrorKind::OutOfOrderArrival => true,
            ValidationErrorKind::ZeroDuration => false,
        }
    }
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates an arrival list.
///
/// Checks:
/// 1. Arrival timesteps are non-decreasing
/// 2. Every duration is positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_arrivals(arrivals: &[Arrival]) -> ValidationResult {
    let mut errors = Vec::new();

    for (index, pair) in arrivals.windows(2).enumerate() {
        if pair[1].time < pair[0].time {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutOfOrderArrival,
                format!(
                    "Arrival #{} at t={} comes after an arrival at t={}",
                    index + 2,
                    pair[1].time,
                    pair[0].time
                ),
            ));
        }
    }

    for (index, arrival) in arrivals.iter().enumerate() {
        if arrival.duration == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroDuration,
                format!(
                    "Arrival #{} at t={} has zero duration and will be skipped",
                    index + 1,
                    arrival.time
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates `arrivals`, logging non-fatal findings and failing on fatal ones.
pub fn ensure_valid(arrivals: &[Arrival]) -> Result<()> {
    let Err(errors) = validate_arrivals(arrivals) else {
        return Ok(());
    };

    let (fatal, warnings): (Vec<_>, Vec<_>) =
        errors.into_iter().partition(|e| e.kind.is_fatal());

    for warning in &warnings {
        warn!("{}", warning.message);
    }

    if fatal.is_empty() {
        Ok(())
    } else {
        Err(SimError::Validation(fatal))
    }
}
