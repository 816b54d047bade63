use std::path::PathBuf;

use clap::{ArgAction, Parser};
use rulepass::{GenerationOptions, Preset};

#[derive(Parser, Debug, Default)]
#[command(
    name = "rulepass",
    version,
    about = "Generate passwords that satisfy per-class minimums and adjacency rules"
)]
pub struct CliFlags {
    /// Password length (1-256).
    #[arg(short, long, value_parser = parse_length)]
    pub length: Option<usize>,
    /// Number of passwords to generate.
    #[arg(short, long)]
    pub number: Option<usize>,
    /// Start from a preset; explicit flags still override it.
    #[arg(short, long, value_enum)]
    pub preset: Option<Preset>,

    /// Leave uppercase letters out.
    #[arg(long)]
    pub no_upper: bool,
    /// Leave lowercase letters out.
    #[arg(long)]
    pub no_lower: bool,
    /// Leave digits out.
    #[arg(long)]
    pub no_digits: bool,
    /// Leave symbols out.
    #[arg(long)]
    pub no_symbols: bool,

    /// Minimum uppercase letters.
    #[arg(long, value_name = "N")]
    pub min_upper: Option<usize>,
    /// Minimum lowercase letters.
    #[arg(long, value_name = "N")]
    pub min_lower: Option<usize>,
    /// Minimum digits.
    #[arg(long, value_name = "N")]
    pub min_digits: Option<usize>,
    /// Minimum symbols.
    #[arg(long, value_name = "N")]
    pub min_symbols: Option<usize>,

    /// Drop look-alike characters (I L i l 1 0).
    #[arg(long)]
    pub exclude_similar: bool,
    /// Drop brackets, quotes and punctuation from the symbol set.
    #[arg(long)]
    pub exclude_ambiguous: bool,
    /// Extra characters appended to the alphabet.
    #[arg(long, value_name = "CHARS")]
    pub custom: Option<String>,
    /// Use only the custom characters.
    #[arg(long)]
    pub custom_only: bool,
    /// Forbid two identical characters in a row.
    #[arg(long)]
    pub no_repeating: bool,
    /// Forbid runs like "abc" or "321".
    #[arg(long)]
    pub no_sequential: bool,

    /// Append passwords to FILE instead of printing them.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// Copy passwords to the clipboard.
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Seed a fresh generator from the OS instead of the thread-local one.
    #[arg(short, long)]
    pub urandom: bool,
    /// Deterministic output from a fixed seed. Never use for real secrets.
    #[arg(long, conflicts_with = "urandom")]
    pub seed: Option<u64>,

    /// Start from the saved settings instead of the defaults.
    #[arg(short, long)]
    pub saved: bool,
    /// Save the resulting configuration as the new settings.
    #[arg(long)]
    pub save: bool,
    /// Settings file location.
    #[arg(long, env = "RULEPASS_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress warnings and the summary box.
    #[arg(short, long)]
    pub quiet: bool,
    /// More diagnostics on stderr (repeatable).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CliFlags {
    /// Apply the option flags on top of `options`, preset first.
    pub fn apply(&self, options: &mut GenerationOptions) {
        if let Some(preset) = self.preset {
            preset.apply(options);
        }

        if let Some(length) = self.length {
            options.length = length;
        }

        if self.no_upper {
            options.uppercase.enabled = false;
        }
        if self.no_lower {
            options.lowercase.enabled = false;
        }
        if self.no_digits {
            options.digits.enabled = false;
        }
        if self.no_symbols {
            options.symbols.enabled = false;
        }

        if let Some(n) = self.min_upper {
            options.uppercase.minimum = n;
        }
        if let Some(n) = self.min_lower {
            options.lowercase.minimum = n;
        }
        if let Some(n) = self.min_digits {
            options.digits.minimum = n;
        }
        if let Some(n) = self.min_symbols {
            options.symbols.minimum = n;
        }

        options.exclude_similar |= self.exclude_similar;
        options.exclude_ambiguous |= self.exclude_ambiguous;
        options.no_repeating |= self.no_repeating;
        options.no_sequential |= self.no_sequential;

        if let Some(ref chars) = self.custom {
            options.custom_characters = chars.clone();
        }
        options.use_custom_only |= self.custom_only;
    }
}

fn parse_length(s: &str) -> Result<usize, String> {
    let length: usize = s.parse().map_err(|_| format!("invalid number: {s}"))?;
    if (GenerationOptions::MIN_LENGTH..=GenerationOptions::MAX_LENGTH).contains(&length) {
        Ok(length)
    } else {
        Err(format!(
            "length must be between {} and {}",
            GenerationOptions::MIN_LENGTH,
            GenerationOptions::MAX_LENGTH
        ))
    }
}
