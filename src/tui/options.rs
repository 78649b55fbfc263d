use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use zeroize::Zeroizing;

use super::{
    class_for_key, get_editable_input, get_numeric_input, print_help, print_main_menu,
    print_notice,
};
use crate::clipboard::Clipboard;
use crate::error::Result;
use crate::pass::{self, GenerateError, MAX_LENGTH, estimate};
use crate::random::Entropy;
use crate::settings::Settings;
use crate::terminal::{
    RawModeGuard, clear, print_error, read_key, reset_terminal, strength_meter,
};

/// How long "Copied" stays up before the status line reverts.
const STATUS_DURATION: Duration = Duration::from_millis(1500);

use LoopAction::*;
enum LoopAction {
    Break,
    Continue,
}

/// Transient message shown under the menu.
struct Status {
    text: String,
    until: Instant,
}

impl Status {
    fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            until: Instant::now() + STATUS_DURATION,
        }
    }

    fn remaining(&self) -> Duration {
        self.until.saturating_duration_since(Instant::now())
    }
}

struct App {
    settings: Settings,
    password: Zeroizing<String>,
    status: Option<Status>,
    rng: Entropy,
    clipboard: Option<Clipboard>,
}

pub fn gen_main_menu() {
    gen_main_menu_with(load_settings(), Entropy::os());
}

/// Saved settings, or the defaults when they can't be read.
pub fn load_settings() -> Settings {
    Settings::load_from_file().unwrap_or_else(|e| {
        print_error(&format!("Error loading settings: {}", e));
        Settings::default()
    })
}

/// Open the menu starting from `settings` and drawing from `rng`.
pub fn gen_main_menu_with(settings: Settings, rng: Entropy) {
    reset_terminal();
    clear();

    let mut app = App {
        settings,
        password: Zeroizing::new(String::new()),
        status: None,
        rng,
        clipboard: None,
    };

    if let Err(e) = app.run() {
        reset_terminal();
        print_error(&e.to_string());
    }
}

impl App {
    fn run(&mut self) -> Result<()> {
        loop {
            if self.status.as_ref().is_some_and(|s| s.remaining().is_zero()) {
                self.status = None;
            }

            clear();
            print_main_menu(
                &self.settings,
                &self.password,
                self.status.as_ref().map(|s| s.text.as_str()),
            );

            let key = {
                let _guard = RawModeGuard::new()?;
                read_key(self.status.as_ref().map(Status::remaining))?
            };

            // Timed out: the status has expired, redraw without it
            let Some(key) = key else { continue };

            if let Break = self.handle(key)? {
                break;
            }
        }
        clear();
        Ok(())
    }

    fn handle(&mut self, key: KeyEvent) -> Result<LoopAction> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => Break,
                _ => Continue,
            });
        }

        if let KeyCode::Char(c) = key.code
            && let Some(class) = class_for_key(c)
        {
            self.settings.classes.toggle(class);
            return Ok(Continue);
        }

        match key.code {
            KeyCode::Enter | KeyCode::Char('g') => self.generate()?,
            KeyCode::Char('1') => {
                let length = get_numeric_input("Enter new password length", self.settings.length);
                if let Some(len) = length {
                    match length_problem(len) {
                        Some(msg) => self.notice(&msg)?,
                        None => self.settings.length = len,
                    }
                }
            }
            KeyCode::Char('c') => self.copy()?,
            KeyCode::Char('e') => {
                println!();
                let edited = get_editable_input("Password", &self.password, |text| {
                    strength_meter(&estimate(text))
                });
                if let Some(text) = edited {
                    self.password = Zeroizing::new(text);
                }
            }
            KeyCode::Char('x') => self.password = Zeroizing::new(String::new()),
            KeyCode::Char('s') => match self.settings.save_to_file() {
                Ok(()) => self.status = Some(Status::new("Settings saved")),
                Err(e) => self.notice(&format!("Error saving settings: {}", e))?,
            },
            KeyCode::Char('r') => self.settings = Settings::default(),
            KeyCode::Char('h') => {
                clear();
                print_help();
                self.wait_key()?;
            }
            KeyCode::Char('q') | KeyCode::Esc => return Ok(Break),
            _ => {}
        }
        Ok(Continue)
    }

    /// Replace the password, or leave it untouched and tell the user why not.
    fn generate(&mut self) -> Result<()> {
        match regenerate(&self.settings, &mut self.rng, &mut self.password) {
            Ok(()) => Ok(()),
            Err(e) => self.notice(&e.to_string()),
        }
    }

    fn copy(&mut self) -> Result<()> {
        if self.password.is_empty() {
            return Ok(());
        }
        let clipboard = self.clipboard.get_or_insert_with(Clipboard::new);
        match clipboard.copy(&self.password) {
            Ok("system") => self.status = Some(Status::new("Copied")),
            Ok(sink) => self.status = Some(Status::new(format!("Copied ({sink})"))),
            Err(e) => self.notice(&e.to_string())?,
        }
        Ok(())
    }

    /// Blocking notice under the menu.
    fn notice(&self, msg: &str) -> Result<()> {
        print_notice(msg);
        self.wait_key()
    }

    fn wait_key(&self) -> Result<()> {
        let _guard = RawModeGuard::new()?;
        read_key(None)?;
        Ok(())
    }
}

/// Why `len` can't be used as the password length, if it can't.
fn length_problem(len: usize) -> Option<String> {
    match len {
        0 => Some("Length must be at least 1.".into()),
        n if n > MAX_LENGTH => Some(format!("Length must be at most {MAX_LENGTH}.")),
        _ => None,
    }
}

/// Swap in a fresh password; on failure `password` keeps its old value.
fn regenerate(
    settings: &Settings,
    rng: &mut Entropy,
    password: &mut Zeroizing<String>,
) -> std::result::Result<(), GenerateError> {
    let fresh = pass::generate(&settings.request(), rng)?;
    *password = Zeroizing::new(fresh);
    Ok(())
}
