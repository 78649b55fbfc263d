use clap::Parser;
use clap::builder::RangedU64ValueParser;

use crate::pass::{CharacterClass, MAX_COUNT, MAX_LENGTH};
use crate::settings::Settings;

/// Password generator: every selected character class is guaranteed to appear.
///
/// Run without arguments on a terminal for the interactive menu.
#[derive(Debug, Default, Parser)]
#[command(name = "passmint", version)]
pub struct CliFlags {
    /// Characters per password
    #[arg(short, long, value_name = "N", value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_LENGTH as u64))]
    pub length: Option<usize>,

    /// How many passwords to generate
    #[arg(short, long, value_name = "N", value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_COUNT as u64))]
    pub number: Option<usize>,

    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,

    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,

    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,

    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Report the strength of each password on stderr
    #[arg(short = 'S', long)]
    pub strength: bool,

    /// Score TEXT (or each line of stdin) instead of generating
    #[arg(long, value_name = "TEXT", num_args = 0..=1)]
    pub check: Option<Option<String>>,

    /// Seed the generator for reproducible output
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Start from saved settings instead of defaults
    #[arg(short, long)]
    pub saved: bool,

    /// Save the effective settings as the new defaults
    #[arg(long)]
    pub save: bool,

    /// Open the interactive menu (length, class and seed flags still apply)
    #[arg(short, long, conflicts_with_all = ["number", "clipboard", "strength", "check", "save"])]
    pub tui: bool,

    /// Suppress warnings and confirmations
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliFlags {
    /// Apply length, count and class flags on top of `settings`.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(len) = self.length {
            settings.length = len;
        }
        if let Some(num) = self.number {
            settings.count = num;
        }

        let disabled = [
            (CharacterClass::Lowercase, self.no_lower),
            (CharacterClass::Uppercase, self.no_upper),
            (CharacterClass::Digit, self.no_digits),
            (CharacterClass::Symbol, self.no_symbols),
        ];
        for (class, off) in disabled {
            if off {
                settings.classes.remove(class);
            }
        }
    }
}
