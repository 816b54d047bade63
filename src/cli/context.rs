//! CLI context - bundles settings, flags and the output sink.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use rulepass::pass::{charset, entropy_bits};
use rulepass::{Analysis, EntropySource, GenerateError, Settings, Strength, clipboard, generate};
use thiserror::Error;
use tracing::{debug, info};
use zeroize::Zeroizing;

use super::{CliFlags, prompts};
use crate::terminal::{Summary, print_summary};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("settings error: {0}")]
    Settings(#[from] rulepass::SettingsError),
    #[error("{0}")]
    Generate(#[from] GenerateError),
    #[error("could not write {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write to stdout: {0}")]
    Stdout(#[source] std::io::Error),
    #[error("aborted")]
    Aborted,
}

/// How a completed run went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every password met every rule.
    Complete,
    /// At least one best-effort password was emitted.
    Unsatisfied,
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    config_path: PathBuf,
}

impl Context {
    pub fn new(flags: CliFlags) -> Result<Self, CliError> {
        let config_path = flags.config.clone().unwrap_or_else(Settings::default_path);

        let settings = if flags.saved {
            Settings::load_from(&config_path)?
        } else {
            Settings::default()
        };

        Ok(Self {
            settings,
            flags,
            config_path,
        })
    }

    pub fn run(&mut self) -> Result<Outcome, CliError> {
        self.apply_flags();

        if self.flags.save {
            self.settings.save_to(&self.config_path)?;
            prompts::settings_saved(&self.config_path);
        }

        self.generate_output()
    }

    fn apply_flags(&mut self) {
        self.flags.apply(&mut self.settings.options);
        if let Some(n) = self.flags.number {
            self.settings.count = n;
        }
    }

    fn source(&self) -> EntropySource {
        match (self.flags.seed, self.flags.urandom) {
            (Some(seed), _) => EntropySource::Seeded(seed),
            (None, true) => EntropySource::Os,
            (None, false) => EntropySource::Thread,
        }
    }

    /// Generate passwords and hand them to the chosen sink.
    pub fn generate_output(&self) -> Result<Outcome, CliError> {
        let count = self.settings.count.max(1);
        let options = &self.settings.options;
        let source = self.source();
        let mut rng = source.rng();

        debug!(count, source = source.name(), "generating");

        let mut outcome = Outcome::Complete;
        let mut last_attempts = 0;
        let mut passwords = Zeroizing::new(String::new());

        for _ in 0..count {
            match generate(options, rng.as_mut()) {
                Ok(generated) => {
                    last_attempts = generated.attempts;
                    passwords.push_str(&generated.password);
                }
                Err(GenerateError::ConstraintsUnsatisfiable {
                    violations,
                    best_effort,
                    attempts,
                }) => {
                    last_attempts = attempts;
                    outcome = Outcome::Unsatisfied;
                    prompts::constraints_unmet(&violations);
                    passwords.push_str(&best_effort);
                }
                Err(e @ GenerateError::EmptyAlphabet) => return Err(e.into()),
            }
            passwords.push('\n');
        }

        if self.flags.clipboard {
            if clipboard::copy(passwords.trim_end()) {
                prompts::clipboard_copied();
                return Ok(outcome);
            }
            if !prompts::clipboard_fallback_prompt() {
                return Err(CliError::Aborted);
            }
        } else if let Some(ref path) = self.flags.output {
            self.write_file(path, &passwords)?;
            prompts::passwords_written(count, path);
            return Ok(outcome);
        }

        emit(&mut std::io::stdout().lock(), &passwords)?;

        if count == 1 && !super::quiet::enabled() && super::quiet::stdout_is_tty() {
            let charset_size = charset::size(options);
            print_summary(&Summary {
                strength: Strength::rate(passwords.trim_end()),
                analysis: Analysis::of(passwords.trim_end()),
                entropy: entropy_bits(options.length, charset_size),
                charset: charset_size,
                attempts: last_attempts,
                source: source.name(),
            });
        }

        info!(count, ?outcome, "done");
        Ok(outcome)
    }

    fn write_file(&self, path: &Path, passwords: &str) -> Result<(), CliError> {
        let output_err = |source| CliError::Output {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(output_err)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(output_err)?;

        file.write_all(passwords.as_bytes()).map_err(output_err)
    }
}

fn emit<W: Write>(out: &mut W, passwords: &str) -> Result<(), CliError> {
    out.write_all(passwords.as_bytes()).map_err(CliError::Stdout)?;
    out.flush().map_err(CliError::Stdout)
}
