//! Password generation and scoring.

pub mod charset;
mod generate;
pub mod strength;

pub use charset::{CharacterClass, ClassSet};
pub use generate::{
    GenerateError, GenerationRequest, MAX_COUNT, MAX_LENGTH, generate, generate_batch, synthesize,
};
pub use strength::{Strength, estimate};
