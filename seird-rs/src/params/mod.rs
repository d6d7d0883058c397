//! Parameter records for the SEIRD model.
//!
//! Rate constants live in an explicit immutable record rather than in
//! module-level state, so independent runs can carry different parameter
//! sets.
mod constants;
mod seird;

pub use constants::*;
pub use seird::*;
