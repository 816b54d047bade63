//! Character classes and alphabet building for password generation.

use std::fmt;

use super::GenerationOptions;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Look-alike characters removed under `exclude_similar`.
const SIMILAR_UPPER: &str = "IL";
const SIMILAR_LOWER: &str = "il";
const SIMILAR_DIGITS: &str = "10";

/// Bracket, quote and punctuation characters removed under `exclude_ambiguous`.
const AMBIGUOUS_SYMBOLS: &str = "{}[]()/\\'\"`,;.<>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    /// Full, unfiltered alphabet of the class.
    pub fn alphabet(self) -> &'static str {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    /// Canonical membership: independent of any exclusion setting.
    pub fn contains(self, c: char) -> bool {
        match self {
            CharClass::Uppercase => c.is_ascii_uppercase(),
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Symbol => SYMBOLS.contains(c),
        }
    }

    /// Alphabet left after the denylists enabled in `options`.
    pub fn filtered(self, options: &GenerationOptions) -> Vec<char> {
        let similar = match self {
            CharClass::Uppercase => SIMILAR_UPPER,
            CharClass::Lowercase => SIMILAR_LOWER,
            CharClass::Digit => SIMILAR_DIGITS,
            CharClass::Symbol => "",
        };
        let ambiguous = match self {
            CharClass::Symbol => AMBIGUOUS_SYMBOLS,
            _ => "",
        };

        self.alphabet()
            .chars()
            .filter(|&c| !(options.exclude_similar && similar.contains(c)))
            .filter(|&c| !(options.exclude_ambiguous && ambiguous.contains(c)))
            .collect()
    }

    pub fn count_in(self, password: &str) -> usize {
        password.chars().filter(|&c| self.contains(c)).count()
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CharClass::Uppercase => "uppercase letter(s)",
            CharClass::Lowercase => "lowercase letter(s)",
            CharClass::Digit => "number(s)",
            CharClass::Symbol => "symbol(s)",
        };
        f.write_str(label)
    }
}

/// Build the effective alphabet: enabled classes in order, then custom characters.
/// Duplicates are kept, so repeated custom characters weigh more.
pub fn build(options: &GenerationOptions) -> Vec<char> {
    if options.use_custom_only {
        return options.custom_characters.chars().collect();
    }

    let mut chars: Vec<char> = Vec::new();

    for class in CharClass::ALL {
        if options.rule(class).enabled {
            chars.extend(class.filtered(options));
        }
    }

    chars.extend(options.custom_characters.chars());
    chars
}

/// Number of distinct characters in the effective alphabet (for entropy estimates).
pub fn size(options: &GenerationOptions) -> usize {
    let mut chars = build(options);
    chars.sort_unstable();
    chars.dedup();
    chars.len()
}
