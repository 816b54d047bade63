use thiserror::Error;
use zeroize::Zeroizing;

use super::Violation;

/// Errors emitted by the password generator.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("no character types selected")]
    EmptyAlphabet,
    #[error(
        "could not generate a password meeting all criteria after {attempts} attempts: {}",
        join(.violations)
    )]
    ConstraintsUnsatisfiable {
        violations: Vec<Violation>,
        /// Last candidate tried; callers may show it alongside a warning.
        best_effort: Zeroizing<String>,
        attempts: usize,
    },
}

impl GenerateError {
    pub fn violations(&self) -> &[Violation] {
        match self {
            GenerateError::EmptyAlphabet => &[],
            GenerateError::ConstraintsUnsatisfiable { violations, .. } => violations,
        }
    }
}

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
