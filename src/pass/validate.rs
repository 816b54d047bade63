//! Constraint checks for candidate passwords.

use thiserror::Error;

use super::{CharClass, GenerationOptions};

/// A rule a candidate password breaks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("needs at least {required} {class}")]
    BelowMinimum {
        class: CharClass,
        required: usize,
        found: usize,
    },
    #[error("contains repeating characters")]
    Repeating,
    #[error("contains sequential characters")]
    Sequential,
}

/// Check `password` against every active rule in `options`.
///
/// Minimum counts use canonical class membership, so a character the
/// exclusion settings kept out of the alphabet still counts if it shows up
/// through custom characters.
pub fn validate(password: &str, options: &GenerationOptions) -> Vec<Violation> {
    let mut violations = Vec::new();

    if !options.use_custom_only {
        for class in CharClass::ALL {
            let required = options.rule(class).required();
            if required == 0 {
                continue;
            }
            let found = class.count_in(password);
            if found < required {
                violations.push(Violation::BelowMinimum {
                    class,
                    required,
                    found,
                });
            }
        }
    }

    let chars: Vec<char> = password.chars().collect();

    if options.no_repeating && has_repeat(&chars) {
        violations.push(Violation::Repeating);
    }

    if options.no_sequential && has_sequence(&chars) {
        violations.push(Violation::Sequential);
    }

    violations
}

fn has_repeat(chars: &[char]) -> bool {
    chars.windows(2).any(|w| w[0] == w[1])
}

/// Three characters whose codes step by exactly +1 or exactly -1.
fn has_sequence(chars: &[char]) -> bool {
    chars.windows(3).any(|w| {
        let a = w[0] as i64;
        let b = w[1] as i64;
        let c = w[2] as i64;
        (b - a == 1 && c - b == 1) || (a - b == 1 && b - c == 1)
    })
}
