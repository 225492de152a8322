//! Simulation configuration.
//!
//! Parameters that are not part of the process list: the time quantum for
//! quantum-based policies and an optional seed that makes lottery runs
//! reproducible. Deserializes with defaults for every missing field.

use serde::{Deserialize, Serialize};

use crate::scheduler::DEFAULT_QUANTUM;
use crate::validation::{ValidationError, ValidationErrorKind, ValidationResult};

/// Parameters for one simulation run.
///
/// # Example
///
/// ```
/// use u_cpu_schedule::config::SimulationConfig;
///
/// let config: SimulationConfig = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
/// assert_eq!(config.quantum, 2);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Time quantum for Round-Robin and MLFQ (Q0).
    pub quantum: i64,
    /// Seed for lottery draws. `None` draws from the thread-local generator.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the time quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the lottery seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that the quantum is at least 1.
    pub fn validate(&self) -> ValidationResult {
        if self.quantum < 1 {
            return Err(vec![ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                format!("Time quantum must be at least 1, got {}", self.quantum),
            )]);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::new();
        assert_eq!(config.quantum, 2);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = SimulationConfig::new().with_quantum(4).with_seed(11);
        assert_eq!(config.quantum, 4);
        assert_eq!(config.seed, Some(11));
    }

    #[test]
    fn test_invalid_quantum() {
        let errors = SimulationConfig::new().with_quantum(0).validate().unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidQuantum);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: SimulationConfig = serde_json::from_str(r#"{"quantum": 3}"#).unwrap();
        assert_eq!(config, SimulationConfig::new().with_quantum(3));
        let empty: SimulationConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, SimulationConfig::default());
    }
}
