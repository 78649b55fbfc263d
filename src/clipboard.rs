//! Clipboard output with a terminal fallback.
//!
//! The system clipboard (via copypasta) is tried first. When it is missing
//! or refuses the text, an OSC 52 escape sequence asks the terminal emulator
//! to set its clipboard instead, which also works over SSH.

use std::io::{self, Write};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use copypasta::{ClipboardContext, ClipboardProvider};

use crate::error::{Error, Result};

/// Something text can be copied to.
pub trait CopySink {
    fn name(&self) -> &'static str;
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// Desktop clipboard.
pub struct SystemClipboard(ClipboardContext);

impl SystemClipboard {
    pub fn new() -> Option<Self> {
        match ClipboardContext::new() {
            Ok(ctx) => Some(Self(ctx)),
            Err(e) => {
                log::debug!("system clipboard unavailable: {e}");
                None
            }
        }
    }
}

impl CopySink for SystemClipboard {
    fn name(&self) -> &'static str {
        "system"
    }

    fn copy(&mut self, text: &str) -> Result<()> {
        self.0
            .set_contents(text.to_owned())
            .map_err(|e| Error::Clipboard(e.to_string()))
    }
}

/// OSC 52 sequence written to the controlling terminal.
pub struct TerminalClipboard;

impl CopySink for TerminalClipboard {
    fn name(&self) -> &'static str {
        "terminal"
    }

    fn copy(&mut self, text: &str) -> Result<()> {
        if unsafe { libc::isatty(1) } != 1 {
            return Err(Error::Clipboard("stdout is not a terminal".into()));
        }
        let mut out = io::stdout().lock();
        out.write_all(osc52(text).as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

fn osc52(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
}

/// Primary sink with a fallback.
pub struct Clipboard {
    primary: Option<Box<dyn CopySink>>,
    fallback: Box<dyn CopySink>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::with_sinks(
            SystemClipboard::new().map(|c| Box::new(c) as Box<dyn CopySink>),
            Box::new(TerminalClipboard),
        )
    }

    pub fn with_sinks(primary: Option<Box<dyn CopySink>>, fallback: Box<dyn CopySink>) -> Self {
        Self { primary, fallback }
    }

    /// Copy `text`, returning the name of the sink that took it.
    pub fn copy(&mut self, text: &str) -> Result<&'static str> {
        if let Some(primary) = self.primary.as_mut() {
            match primary.copy(text) {
                Ok(()) => return Ok(primary.name()),
                Err(e) => log::warn!("{} clipboard failed: {e}", primary.name()),
            }
        }
        self.fallback.copy(text)?;
        Ok(self.fallback.name())
    }
}

impl Default for Clipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Fake {
        name: &'static str,
        works: bool,
        got: Rc<RefCell<Vec<String>>>,
    }

    impl CopySink for Fake {
        fn name(&self) -> &'static str {
            self.name
        }

        fn copy(&mut self, text: &str) -> Result<()> {
            if !self.works {
                return Err(Error::Clipboard("nope".into()));
            }
            self.got.borrow_mut().push(text.to_owned());
            Ok(())
        }
    }

    fn fake(name: &'static str, works: bool) -> (Box<dyn CopySink>, Rc<RefCell<Vec<String>>>) {
        let got = Rc::new(RefCell::new(Vec::new()));
        (
            Box::new(Fake {
                name,
                works,
                got: got.clone(),
            }),
            got,
        )
    }

    #[test]
    fn primary_wins_when_it_works() {
        let (primary, p) = fake("primary", true);
        let (fallback, f) = fake("fallback", true);
        let mut clip = Clipboard::with_sinks(Some(primary), fallback);
        assert_eq!(clip.copy("abc").unwrap(), "primary");
        assert_eq!(*p.borrow(), vec!["abc"]);
        assert!(f.borrow().is_empty());
    }

    #[test]
    fn falls_back_on_failure() {
        let (primary, _) = fake("primary", false);
        let (fallback, f) = fake("fallback", true);
        let mut clip = Clipboard::with_sinks(Some(primary), fallback);
        assert_eq!(clip.copy("abc").unwrap(), "fallback");
        assert_eq!(*f.borrow(), vec!["abc"]);
    }

    #[test]
    fn falls_back_without_primary() {
        let (fallback, f) = fake("fallback", true);
        let mut clip = Clipboard::with_sinks(None, fallback);
        assert_eq!(clip.copy("xyz").unwrap(), "fallback");
        assert_eq!(f.borrow().len(), 1);
    }

    #[test]
    fn both_failing_is_an_error() {
        let (primary, _) = fake("primary", false);
        let (fallback, _) = fake("fallback", false);
        let mut clip = Clipboard::with_sinks(Some(primary), fallback);
        assert!(matches!(clip.copy("abc"), Err(Error::Clipboard(_))));
    }

    #[test]
    fn osc52_encodes_base64() {
        assert_eq!(osc52("hi"), "\x1b]52;c;aGk=\x07");
    }
}
