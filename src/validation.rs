//! Input validation for simulations.
//!
//! Checks process lists and configuration before a policy runs. Detects:
//! - Empty process lists
//! - Empty, duplicate or reserved names
//! - Non-positive burst and negative arrival times
//! - Zero ticket counts (lottery)
//! - Quantum below 1 (quantum-based policies)
//!
//! All problems are collected rather than stopping at the first one, so a
//! caller can report every offending row at once.

use std::collections::HashSet;
use std::fmt;

use crate::algorithm::Algorithm;
use crate::config::SimulationConfig;
use crate::models::{Process, IDLE};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

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
    /// No processes were supplied.
    EmptyInput,
    /// A process has an empty name.
    EmptyName,
    /// Two processes share the same name.
    DuplicateName,
    /// A process uses the name reserved for idle time.
    ReservedName,
    /// A process has `burst_time <= 0`.
    NonPositiveBurst,
    /// A process has `arrival_time < 0`.
    NegativeArrival,
    /// A lottery process holds zero tickets.
    InvalidTickets,
    /// The time quantum is below 1.
    InvalidQuantum,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process list independently of the policy.
///
/// Checks:
/// 1. The list is not empty
/// 2. Every name is non-empty, unique and not [`IDLE`]
/// 3. Every burst time is positive
/// 4. Every arrival time is non-negative
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "At least one process is required",
        ));
    }

    let mut names = HashSet::new();
    for (row, p) in processes.iter().enumerate() {
        if p.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Process at row {row} has an empty name"),
            ));
        } else if p.name == IDLE {
            errors.push(ValidationError::new(
                ValidationErrorKind::ReservedName,
                format!("Process name '{IDLE}' is reserved for idle time"),
            ));
        } else if !names.insert(p.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("Duplicate process name: {}", p.name),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    p.name, p.burst_time
                ),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.name, p.arrival_time
                ),
            ));
        }
    }

    into_result(errors)
}

/// Validates a process list and configuration for a specific policy.
///
/// Adds policy-specific checks on top of [`validate_processes`]:
/// ticket counts for lottery and the quantum for quantum-based policies.
pub fn validate_for(
    algorithm: Algorithm,
    processes: &[Process],
    config: &SimulationConfig,
) -> ValidationResult {
    let mut errors = validate_processes(processes).err().unwrap_or_default();

    if algorithm == Algorithm::Lottery {
        for p in processes.iter().filter(|p| p.tickets == Some(0)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTickets,
                format!("Process '{}' holds zero tickets", p.name),
            ));
        }
    }

    if algorithm.uses_quantum() {
        if let Err(config_errors) = config.validate() {
            errors.extend(config_errors);
        }
    }

    into_result(errors)
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 4),
            Process::new("P2", 2, 3),
            Process::new("P3", 6, 2),
        ]
    }

    fn has_kind(result: ValidationResult, kind: ValidationErrorKind) -> bool {
        result
            .err()
            .map(|errors| errors.iter().any(|e| e.kind == kind))
            .unwrap_or(false)
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample()).is_ok());
    }

    #[test]
    fn test_empty_input() {
        assert!(has_kind(
            validate_processes(&[]),
            ValidationErrorKind::EmptyInput
        ));
    }

    #[test]
    fn test_duplicate_name() {
        let procs = vec![Process::new("P1", 0, 1), Process::new("P1", 1, 1)];
        let errors = validate_processes(&procs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateName && e.message.contains("P1")));
    }

    #[test]
    fn test_empty_and_reserved_names() {
        assert!(has_kind(
            validate_processes(&[Process::new("  ", 0, 1)]),
            ValidationErrorKind::EmptyName
        ));
        assert!(has_kind(
            validate_processes(&[Process::new("Idle", 0, 1)]),
            ValidationErrorKind::ReservedName
        ));
    }

    #[test]
    fn test_non_positive_burst() {
        assert!(has_kind(
            validate_processes(&[Process::new("P1", 0, 0)]),
            ValidationErrorKind::NonPositiveBurst
        ));
        assert!(has_kind(
            validate_processes(&[Process::new("P1", 0, -3)]),
            ValidationErrorKind::NonPositiveBurst
        ));
    }

    #[test]
    fn test_negative_arrival() {
        assert!(has_kind(
            validate_processes(&[Process::new("P1", -1, 2)]),
            ValidationErrorKind::NegativeArrival
        ));
    }

    #[test]
    fn test_multiple_errors() {
        let procs = vec![Process::new("", -1, 0), Process::new("P2", 0, 1)];
        let errors = validate_processes(&procs).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_zero_tickets_only_for_lottery() {
        let procs = vec![Process::new("P1", 0, 2).with_tickets(0)];
        let config = SimulationConfig::default();
        assert!(has_kind(
            validate_for(Algorithm::Lottery, &procs, &config),
            ValidationErrorKind::InvalidTickets
        ));
        assert!(validate_for(Algorithm::Fcfs, &procs, &config).is_ok());
    }

    #[test]
    fn test_quantum_only_for_quantum_policies() {
        let procs = sample();
        let config = SimulationConfig::default().with_quantum(0);
        assert!(has_kind(
            validate_for(Algorithm::RoundRobin, &procs, &config),
            ValidationErrorKind::InvalidQuantum
        ));
        assert!(has_kind(
            validate_for(Algorithm::MultilevelFeedbackQueue, &procs, &config),
            ValidationErrorKind::InvalidQuantum
        ));
        assert!(validate_for(Algorithm::Sjf, &procs, &config).is_ok());
    }

    #[test]
    fn test_error_display() {
        let e = ValidationError::new(ValidationErrorKind::EmptyInput, "nothing to run");
        assert_eq!(e.to_string(), "EmptyInput: nothing to run");
    }
}
