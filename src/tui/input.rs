use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use zeroize::Zeroize;

use crate::terminal::{RawModeGuard, flush, read_key, reset_terminal};

/// What a key did to the line being edited.
#[derive(Debug, PartialEq, Eq)]
enum Edit {
    Changed,
    Moved,
    Ignored,
    Submit,
    Cancel,
}

/// Editable line with a cursor. Wiped on drop since it may hold a password.
struct LineBuffer {
    chars: Vec<char>,
    cursor: usize,
}

impl LineBuffer {
    fn new(initial: &str) -> Self {
        let chars: Vec<char> = initial.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    fn text(&self) -> String {
        self.chars.iter().collect()
    }

    fn handle(&mut self, key: KeyEvent, accept: impl Fn(char) -> bool) -> Edit {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                // process::exit skips destructors, reset the terminal first
                reset_terminal();
                println!();
                std::process::exit(0);
            }
            KeyCode::Char('q') if ctrl => Edit::Cancel,
            KeyCode::Esc => Edit::Cancel,
            KeyCode::Enter => Edit::Submit,
            KeyCode::Char('u') if ctrl => {
                self.chars.zeroize();
                self.cursor = 0;
                Edit::Changed
            }
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.chars.remove(self.cursor);
                Edit::Changed
            }
            KeyCode::Delete if self.cursor < self.chars.len() => {
                self.chars.remove(self.cursor);
                Edit::Changed
            }
            KeyCode::Left if self.cursor > 0 => {
                self.cursor -= 1;
                Edit::Moved
            }
            KeyCode::Right if self.cursor < self.chars.len() => {
                self.cursor += 1;
                Edit::Moved
            }
            KeyCode::Home => {
                self.cursor = 0;
                Edit::Moved
            }
            KeyCode::End => {
                self.cursor = self.chars.len();
                Edit::Moved
            }
            KeyCode::Char(c) if !ctrl && !c.is_control() && accept(c) => {
                self.chars.insert(self.cursor, c);
                self.cursor += 1;
                Edit::Changed
            }
            _ => Edit::Ignored,
        }
    }

    /// Redraw `prompt: text` on the current line and place the cursor.
    fn draw(&self, prompt: &str) {
        print!("\r{}: {}\x1b[K", prompt, self.text());
        let column = prompt.chars().count() + 2 + self.cursor + 1;
        print!("\x1b[{}G", column);
        flush();
    }
}

impl Drop for LineBuffer {
    fn drop(&mut self) {
        self.chars.zeroize();
    }
}

/// Get a number from the user. `None` when cancelled or left empty.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<usize> {
    let mut buf = LineBuffer::new(&initial_value.to_string());

    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(initial_value),
    };

    buf.draw(prompt);
    let submitted = loop {
        let key = match read_key(None) {
            Ok(Some(k)) => k,
            _ => break false,
        };
        match buf.handle(key, |c| c.is_ascii_digit()) {
            Edit::Submit => break true,
            Edit::Cancel => break false,
            Edit::Changed | Edit::Moved => buf.draw(prompt),
            Edit::Ignored => {}
        }
    };

    drop(_guard);
    println!();

    if submitted {
        buf.text().parse().ok()
    } else {
        None
    }
}

/// Edit a line of text with a feedback line above it that is recomputed
/// from the current text after every change.
pub fn get_editable_input(
    prompt: &str,
    initial_value: &str,
    feedback: impl Fn(&str) -> String,
) -> Option<String> {
    let mut buf = LineBuffer::new(initial_value);

    // RawModeGuard ensures raw mode is disabled even if we panic or return early
    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return None,
    };

    let draw_all = |buf: &LineBuffer| {
        let mut text = buf.text();
        print!("\r\x1b[2K{}\r\n", feedback(&text));
        text.zeroize();
        buf.draw(prompt);
    };

    draw_all(&buf);
    let submitted = loop {
        let key = match read_key(None) {
            Ok(Some(k)) => k,
            _ => break false,
        };
        match buf.handle(key, |_| true) {
            Edit::Submit => break true,
            Edit::Cancel => break false,
            Edit::Changed => {
                // back up to the feedback line
                print!("\x1b[1A");
                draw_all(&buf);
            }
            Edit::Moved => buf.draw(prompt),
            Edit::Ignored => {}
        }
    };

    // Disable raw mode BEFORE println
    drop(_guard);
    println!();
    if submitted { Some(buf.text()) } else { None }
}
