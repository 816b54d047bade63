//! Generation options.

use serde::{Deserialize, Serialize};

use super::CharClass;

/// Whether a class takes part in generation, and how many of it are required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRule {
    pub enabled: bool,
    #[serde(default)]
    pub minimum: usize,
}

impl ClassRule {
    pub const fn on(minimum: usize) -> Self {
        Self {
            enabled: true,
            minimum,
        }
    }

    pub const fn off() -> Self {
        Self {
            enabled: false,
            minimum: 0,
        }
    }

    /// Minimum that validation actually enforces.
    pub fn required(&self) -> usize {
        if self.enabled { self.minimum } else { 0 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    pub length: usize,
    pub uppercase: ClassRule,
    pub lowercase: ClassRule,
    pub digits: ClassRule,
    pub symbols: ClassRule,
    pub exclude_similar: bool,
    pub exclude_ambiguous: bool,
    pub custom_characters: String,
    pub use_custom_only: bool,
    pub no_repeating: bool,
    pub no_sequential: bool,
}

impl GenerationOptions {
    pub const MIN_LENGTH: usize = 1;
    pub const MAX_LENGTH: usize = 256;

    /// Every class disabled, nothing custom. Mostly a starting point for tests.
    pub fn none() -> Self {
        Self {
            uppercase: ClassRule::off(),
            lowercase: ClassRule::off(),
            digits: ClassRule::off(),
            symbols: ClassRule::off(),
            ..Self::default()
        }
    }

    pub fn rule(&self, class: CharClass) -> ClassRule {
        match class {
            CharClass::Uppercase => self.uppercase,
            CharClass::Lowercase => self.lowercase,
            CharClass::Digit => self.digits,
            CharClass::Symbol => self.symbols,
        }
    }

    pub fn rule_mut(&mut self, class: CharClass) -> &mut ClassRule {
        match class {
            CharClass::Uppercase => &mut self.uppercase,
            CharClass::Lowercase => &mut self.lowercase,
            CharClass::Digit => &mut self.digits,
            CharClass::Symbol => &mut self.symbols,
        }
    }

    pub fn enabled_classes(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL
            .into_iter()
            .filter(|&class| self.rule(class).enabled)
    }

    /// Sum of the minimums validation will enforce.
    pub fn required_total(&self) -> usize {
        if self.use_custom_only {
            return 0;
        }
        CharClass::ALL
            .into_iter()
            .map(|class| self.rule(class).required())
            .sum()
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: ClassRule::on(1),
            lowercase: ClassRule::on(1),
            digits: ClassRule::on(1),
            symbols: ClassRule::on(1),
            exclude_similar: false,
            exclude_ambiguous: false,
            custom_characters: String::new(),
            use_custom_only: false,
            no_repeating: false,
            no_sequential: false,
        }
    }
}
