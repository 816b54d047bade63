//! Strength rating.

use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
}

impl Strength {
    /// Score length milestones and character variety.
    pub fn rate(password: &str) -> Self {
        let len = password.chars().count();
        let checks = [
            len >= 8,
            len >= 12,
            len >= 16,
            len >= 20,
            password.chars().any(|c| c.is_ascii_lowercase()),
            password.chars().any(|c| c.is_ascii_uppercase()),
            password.chars().any(|c| c.is_ascii_digit()),
            password.chars().any(|c| !c.is_ascii_alphanumeric()),
        ];
        let score = checks.iter().filter(|&&hit| hit).count();

        match score {
            0..=2 => Strength::Weak,
            3..=4 => Strength::Fair,
            5..=6 => Strength::Good,
            7 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strength::Weak => "Weak",
            Strength::Fair => "Fair",
            Strength::Good => "Good",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        })
    }
}

/// Calculate password entropy in bits.
pub fn entropy_bits(length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    length as f64 * (charset_size as f64).log2()
}

/// Rough time-to-crack bucket, keyed on length alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CrackTime {
    UnderAYear,
    Centuries,
    Millennia,
}

impl CrackTime {
    pub fn for_length(length: usize) -> Self {
        match length {
            13.. => CrackTime::Millennia,
            9..=12 => CrackTime::Centuries,
            _ => CrackTime::UnderAYear,
        }
    }
}

impl fmt::Display for CrackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CrackTime::UnderAYear => "< 1 year",
            CrackTime::Centuries => "> 100 years",
            CrackTime::Millennia => "> 1000 years",
        })
    }
}

/// Breakdown of a finished password.
///
/// Symbols here are anything outside `[A-Za-z0-9]`, so custom characters
/// are counted too. Entropy is taken over the distinct characters actually
/// present, not over the alphabet they were drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analysis {
    pub length: usize,
    pub uppercase: usize,
    pub lowercase: usize,
    pub digits: usize,
    pub symbols: usize,
    pub unique: usize,
    pub entropy: f64,
    pub crack_time: CrackTime,
}

impl Analysis {
    pub fn of(password: &str) -> Self {
        let count = |pred: fn(&char) -> bool| password.chars().filter(pred).count();

        let length = password.chars().count();
        let unique = password.chars().collect::<HashSet<_>>().len();

        Self {
            length,
            uppercase: count(char::is_ascii_uppercase),
            lowercase: count(char::is_ascii_lowercase),
            digits: count(char::is_ascii_digit),
            symbols: count(|c| !c.is_ascii_alphanumeric()),
            unique,
            entropy: entropy_bits(length, unique).round(),
            crack_time: CrackTime::for_length(length),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ratings_follow_score() {
        assert_eq!(Strength::rate(""), Strength::Weak);
        assert_eq!(Strength::rate("abc"), Strength::Weak);
        assert_eq!(Strength::rate("abcdefgh1"), Strength::Fair);
        assert_eq!(Strength::rate("Abcdefghijk1"), Strength::Good);
        assert_eq!(Strength::rate("Abcdefghijklmno1!"), Strength::Strong);
        assert_eq!(Strength::rate("Abcdefghijklmnopqr1!"), Strength::VeryStrong);
        assert_eq!(Strength::VeryStrong.to_string(), "Very Strong");
    }

    #[test]
    fn entropy_scales_with_length() {
        assert_eq!(entropy_bits(10, 0), 0.0);
        assert_eq!(entropy_bits(4, 16), 16.0);
        assert!((entropy_bits(6, 10) - 19.93).abs() < 0.01);
    }

    #[test]
    fn analysis_counts_classes_and_unique_characters() {
        let analysis = Analysis::of("AAb9!~é");

        assert_eq!(analysis.length, 7);
        assert_eq!(analysis.uppercase, 2);
        assert_eq!(analysis.lowercase, 1);
        assert_eq!(analysis.digits, 1);
        assert_eq!(analysis.symbols, 3);
        assert_eq!(analysis.unique, 6);
        // 7 * log2(6) = 18.09
        assert_eq!(analysis.entropy, 18.0);
        assert_eq!(analysis.crack_time, CrackTime::UnderAYear);
    }

    #[test]
    fn analysis_entropy_is_zero_without_variety() {
        assert_eq!(Analysis::of("").entropy, 0.0);
        assert_eq!(Analysis::of("aaaa").entropy, 0.0);
        assert_eq!(Analysis::of("abcd").entropy, 8.0);
    }

    #[test]
    fn crack_time_buckets_by_length() {
        assert_eq!(CrackTime::for_length(8).to_string(), "< 1 year");
        assert_eq!(CrackTime::for_length(9).to_string(), "> 100 years");
        assert_eq!(CrackTime::for_length(12).to_string(), "> 100 years");
        assert_eq!(CrackTime::for_length(13).to_string(), "> 1000 years");
    }
}
