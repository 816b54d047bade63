//! Quick presets.

use clap::ValueEnum;

use super::{ClassRule, GenerationOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// 12 letters and digits, one of each.
    Basic,
    /// 16 characters, two of every class, no look-alikes, no runs.
    Secure,
    /// 6 digits.
    Pin,
    /// 14 letters and digits without look-alikes or runs.
    Memorable,
}

impl Preset {
    /// Overwrite the fields this preset cares about. Custom characters and
    /// anything else the preset does not name are left alone.
    pub fn apply(self, options: &mut GenerationOptions) {
        match self {
            Preset::Basic => {
                options.length = 12;
                options.uppercase = ClassRule::on(1);
                options.lowercase = ClassRule::on(1);
                options.digits = ClassRule::on(1);
                options.symbols = ClassRule::off();
                options.exclude_similar = false;
                options.exclude_ambiguous = false;
                options.no_repeating = false;
                options.no_sequential = false;
            }
            Preset::Secure => {
                options.length = 16;
                options.uppercase = ClassRule::on(2);
                options.lowercase = ClassRule::on(2);
                options.digits = ClassRule::on(2);
                options.symbols = ClassRule::on(2);
                options.exclude_similar = true;
                options.exclude_ambiguous = true;
                options.no_repeating = true;
                options.no_sequential = true;
            }
            Preset::Pin => {
                options.length = 6;
                options.uppercase.enabled = false;
                options.lowercase.enabled = false;
                options.digits = ClassRule::on(6);
                options.symbols.enabled = false;
                options.exclude_similar = false;
                options.exclude_ambiguous = false;
                options.no_repeating = false;
                options.no_sequential = false;
            }
            Preset::Memorable => {
                options.length = 14;
                options.uppercase = ClassRule::on(2);
                options.lowercase = ClassRule::on(4);
                options.digits = ClassRule::on(2);
                options.symbols = ClassRule::off();
                options.exclude_similar = true;
                options.exclude_ambiguous = false;
                options.no_repeating = false;
                options.no_sequential = true;
            }
        }
    }

    pub fn options(self) -> GenerationOptions {
        let mut options = GenerationOptions::default();
        self.apply(&mut options);
        options
    }
}
