//! Constrained password generation.
//!
//! The core lives in [`pass`]: build an alphabet from character classes,
//! draw candidates, and retry until every rule holds or the attempt budget
//! runs out. The other modules are the pieces a front end needs around it.

pub mod clipboard;
pub mod entropy;
pub mod logging;
pub mod pass;
pub mod settings;

pub use entropy::EntropySource;
pub use pass::{
    Analysis, CharClass, ClassRule, GenerateError, Generated, GenerationOptions, GenerationResult,
    MAX_ATTEMPTS, Preset, Strength, Violation, generate, generate_with_source, validate,
};
pub use settings::{Settings, SettingsError};
