//! Password generation, validation and rating.

pub mod charset;
mod error;
mod generate;
mod options;
mod preset;
mod strength;
mod validate;

pub use charset::CharClass;
pub use error::GenerateError;
pub use generate::{Generated, GenerationResult, MAX_ATTEMPTS, generate, generate_with_source};
pub use options::{ClassRule, GenerationOptions};
pub use preset::Preset;
pub use strength::{Analysis, CrackTime, Strength, entropy_bits};
pub use validate::{Violation, validate};
