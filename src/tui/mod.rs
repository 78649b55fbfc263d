//! Interactive TUI menu.

mod input;
mod options;
mod text;

pub use input::*;
pub use options::*;
pub use text::*;

/// Run TUI interactive mode.
pub fn run() {
    gen_main_menu();
}

/// Run TUI mode with settings and randomness chosen on the command line.
pub fn run_with(settings: crate::settings::Settings, rng: crate::random::Entropy) {
    gen_main_menu_with(settings, rng);
}
