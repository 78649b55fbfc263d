//! Strength check mode: score given text instead of generating.

use std::io::{self, BufRead, Write};

use zeroize::Zeroize;

use crate::error::Result;
use crate::pass::estimate;

/// Score `text`, or every line of `input` when no text is given.
pub fn run<R: BufRead, W: Write>(text: Option<&str>, input: R, out: &mut W) -> Result<()> {
    match text {
        Some(text) => writeln!(out, "{}", estimate(text))?,
        None => {
            for line in input.lines() {
                let mut line = line?;
                writeln!(out, "{}", estimate(&line))?;
                line.zeroize();
            }
        }
    }
    Ok(())
}

pub fn run_stdio(text: Option<&str>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(text, stdin.lock(), &mut stdout.lock())
}
