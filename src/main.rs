use std::env;

mod cli;
mod clipboard;
mod error;
mod exits;
mod pass;
mod random;
mod settings;
mod terminal;
mod tui;

use cli::quiet;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    exits::install_handlers();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 if quiet::is_interactive() && quiet::stdout_is_terminal() => tui::run(),
        1 => cli::run_saved(),
        _ => cli::run(args),
    }
}
