//! Settings file persistence.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::Settings;
use crate::error::Result;
use crate::pass::{CharacterClass, MAX_COUNT, MAX_LENGTH};

const FIELDS: usize = 6;

pub fn save(settings: &Settings) -> Result<()> {
    let path = get_path();
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)?;

    file.write_all(to_line(settings).as_bytes())?;
    log::debug!("settings saved to {}", path.display());
    Ok(())
}

pub fn load(settings: &mut Settings) -> Result<()> {
    let path = get_path();
    if !path.exists() {
        log::info!("no settings at {}, writing defaults", path.display());
        return save(settings);
    }

    let file = OpenOptions::new().read(true).open(&path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    match from_line(line.trim()) {
        Some(loaded) => *settings = loaded,
        None => {
            log::warn!("malformed settings at {}, resetting", path.display());
            save(settings)?;
        }
    }

    Ok(())
}

fn to_line(settings: &Settings) -> String {
    let mut parts = vec![settings.length.to_string(), settings.count.to_string()];
    parts.extend(
        CharacterClass::ALL
            .iter()
            .map(|c| settings.classes.contains(*c).to_string()),
    );
    format!("{}\n", parts.join(","))
}

fn from_line(line: &str) -> Option<Settings> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() != FIELDS {
        return None;
    }

    let mut settings = Settings {
        length: parts[0].parse::<usize>().ok().filter(|n| (1..=MAX_LENGTH).contains(n))?,
        count: parts[1].parse::<usize>().ok().filter(|n| (1..=MAX_COUNT).contains(n))?,
        ..Settings::default()
    };
    for (class, part) in CharacterClass::ALL.iter().zip(&parts[2..6]) {
        settings.classes.set(*class, part.parse::<bool>().ok()?);
    }

    Some(settings)
}

#[inline]
fn get_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    Path::new(&home).join(".config/passmint/settings")
}
