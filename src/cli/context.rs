//! CLI context - bundles settings, flags, and the random source.

use std::io::Write;

use zeroize::Zeroize;

use super::{CliFlags, check, prompts, quiet};
use crate::clipboard::Clipboard;
use crate::error::Result;
use crate::pass::{self, charset, strength};
use crate::random::Entropy;
use crate::settings::Settings;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    rng: Entropy,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        quiet::set(flags.quiet);

        let mut settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        } else {
            Settings::default()
        };
        flags.apply(&mut settings);

        let rng = Entropy::from_seed(flags.seed);
        log::debug!("random source: {}", rng.name());

        Self {
            settings,
            flags,
            rng,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        if let Some(text) = &self.flags.check {
            return check::run_stdio(text.as_deref());
        }

        if self.flags.save {
            self.settings.save_to_file()?;
            prompts::settings_saved();
        }

        self.generate_output()
    }

    /// Generate passwords and handle output.
    pub fn generate_output(&mut self) -> Result<()> {
        let request = self.settings.request();
        let mut passwords = pass::generate_batch(&request, self.settings.count, &mut self.rng)?;

        if self.flags.strength {
            let pool = charset::size(request.classes);
            prompts::entropy_summary(strength::entropy_bits(request.effective_length(), pool), pool);
            for (i, pw) in passwords.iter().enumerate() {
                prompts::strength_report(i + 1, &pass::estimate(pw));
            }
        }

        let result = if self.flags.clipboard {
            self.copy(&passwords)
        } else {
            print(&passwords)
        };
        passwords.zeroize();
        result
    }

    fn copy(&self, passwords: &[String]) -> Result<()> {
        let mut joined = passwords.join("\n");
        let copied = Clipboard::new().copy(&joined);
        joined.zeroize();

        match copied {
            Ok(sink) => {
                prompts::clipboard_copied(passwords.len(), sink);
                Ok(())
            }
            Err(e) => {
                prompts::clipboard_error(&e.to_string());
                if prompts::clipboard_fallback_prompt() {
                    print(passwords)
                } else {
                    Ok(())
                }
            }
        }
    }
}

fn print(passwords: &[String]) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for pw in passwords {
        out.write_all(pw.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn context(args: &[&str]) -> Context {
        let flags =
            CliFlags::try_parse_from(std::iter::once("passmint").chain(args.iter().copied()))
                .unwrap();
        Context::new(flags)
    }

    #[test]
    fn flags_shape_request() {
        let ctx = context(&["-l", "5", "--no-digits", "--seed", "1"]);
        let request = ctx.settings.request();
        assert_eq!(request.length, 5);
        assert_eq!(request.classes.len(), 3);
    }

    #[test]
    fn all_classes_disabled_fails_with_empty_pool() {
        let mut ctx = context(&[
            "--no-lower",
            "--no-upper",
            "--no-digits",
            "--no-symbols",
            "-q",
        ]);
        let err = ctx.generate_output().unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Generate(pass::GenerateError::EmptyPool)
        ));
        assert_eq!(err.to_string(), "Select at least one character class.");
    }
}
