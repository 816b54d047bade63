//! Password generation.

use rand::{Rng, RngCore};
use tracing::{debug, trace, warn};
use zeroize::{Zeroize, Zeroizing};

use super::{CharClass, GenerateError, GenerationOptions, charset, validate};
use crate::entropy::EntropySource;

/// Attempt budget before a configuration is reported as unsatisfiable.
pub const MAX_ATTEMPTS: usize = 100;

/// A password that passed every rule.
#[derive(Debug)]
pub struct Generated {
    pub password: Zeroizing<String>,
    /// 1-based attempt that produced the password.
    pub attempts: usize,
}

pub type GenerationResult = Result<Generated, GenerateError>;

/// Generate a password satisfying `options`, drawing randomness from `rng`.
///
/// Candidates are built, shuffled and validated up to [`MAX_ATTEMPTS`] times.
/// The first valid candidate is returned; otherwise the last one comes back
/// inside [`GenerateError::ConstraintsUnsatisfiable`].
pub fn generate<R: Rng + ?Sized>(options: &GenerationOptions, rng: &mut R) -> GenerationResult {
    let chars = charset::build(options);
    if chars.is_empty() {
        debug!("effective alphabet is empty");
        return Err(GenerateError::EmptyAlphabet);
    }

    let required = representatives(options, options.length, rng);
    let mut buf: Vec<char> = Vec::with_capacity(options.length);
    let mut candidate = String::with_capacity(options.length);
    let mut violations = Vec::new();

    for attempt in 1..=MAX_ATTEMPTS {
        fill(&mut buf, &required, &chars, options.length, rng);
        shuffle(&mut buf, rng);

        candidate.zeroize();
        candidate.extend(buf.iter());

        violations = validate(&candidate, options);
        if violations.is_empty() {
            debug!(attempts = attempt, length = options.length, "password generated");
            buf.zeroize();
            return Ok(Generated {
                password: Zeroizing::new(candidate),
                attempts: attempt,
            });
        }

        trace!(attempt, violations = violations.len(), "candidate rejected");
    }

    warn!(
        attempts = MAX_ATTEMPTS,
        violations = violations.len(),
        "attempt budget exhausted"
    );
    buf.zeroize();
    Err(GenerateError::ConstraintsUnsatisfiable {
        violations,
        best_effort: Zeroizing::new(candidate),
        attempts: MAX_ATTEMPTS,
    })
}

/// Generate with a fresh RNG built from `source`.
pub fn generate_with_source(options: &GenerationOptions, source: EntropySource) -> GenerationResult {
    let mut rng: Box<dyn RngCore> = source.rng();
    generate(options, rng.as_mut())
}

/// One character per enabled class that has a minimum, drawn from the class's
/// filtered alphabet. Never more than `length` of them.
fn representatives<R: Rng + ?Sized>(
    options: &GenerationOptions,
    length: usize,
    rng: &mut R,
) -> Vec<char> {
    if options.use_custom_only {
        return Vec::new();
    }

    let mut required: Vec<char> = CharClass::ALL
        .into_iter()
        .filter(|&class| options.rule(class).required() > 0)
        .filter_map(|class| {
            let alphabet = class.filtered(options);
            if alphabet.is_empty() {
                return None;
            }
            Some(alphabet[rng.random_range(0..alphabet.len())])
        })
        .collect();

    required.truncate(length);
    required
}

#[inline]
fn fill<R: Rng + ?Sized>(
    buf: &mut Vec<char>,
    required: &[char],
    chars: &[char],
    length: usize,
    rng: &mut R,
) {
    buf.clear();
    buf.extend_from_slice(required);
    while buf.len() < length {
        buf.push(chars[rng.random_range(0..chars.len())]);
    }
}

/// Fisher-Yates.
#[inline]
fn shuffle<R: Rng + ?Sized>(chars: &mut [char], rng: &mut R) {
    for i in (1..chars.len()).rev() {
        let j = rng.random_range(0..=i);
        chars.swap(i, j);
    }
}
