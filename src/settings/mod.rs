//! Password generation settings.

mod file;

use crate::error::Result;
use crate::pass::{ClassSet, GenerationRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub length: usize,
    pub count: usize,
    pub classes: ClassSet,
}

impl Settings {
    pub fn load_from_file() -> Result<Self> {
        let mut settings = Settings::default();
        file::load(&mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<()> {
        file::save(self)
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.classes, self.length)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 16,
            count: 1,
            classes: ClassSet::all(),
        }
    }
}
