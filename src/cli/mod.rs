//! Command-line mode.

mod check;
mod context;
mod flags;
pub mod prompts;
pub mod quiet;

use clap::Parser;

pub use context::Context;
pub use flags::CliFlags;

/// Run CLI mode with the process arguments.
pub fn run(args: Vec<String>) {
    let flags = match CliFlags::try_parse_from(args) {
        Ok(f) => f,
        Err(e) => e.exit(),
    };

    if flags.tui {
        quiet::set(flags.quiet);
        let mut settings = crate::tui::load_settings();
        flags.apply(&mut settings);
        crate::tui::run_with(settings, crate::random::Entropy::from_seed(flags.seed));
        return;
    }

    run_flags(flags);
}

/// No arguments and no terminal: one password from the saved settings.
pub fn run_saved() {
    run_flags(CliFlags {
        saved: true,
        number: Some(1),
        ..Default::default()
    });
}

fn run_flags(flags: CliFlags) {
    let mut ctx = Context::new(flags);
    if let Err(e) = ctx.run() {
        log::debug!("cli run failed: {e:?}");
        prompts::error(&e.to_string());
        std::process::exit(1);
    }
}
