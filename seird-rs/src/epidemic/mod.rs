//! The deterministic SEIRD model: compartment dynamics, the social-distancing
//! forcing function and the derived reproduction number.
mod distancing;
mod model;
mod re;

pub use distancing::*;
pub use model::*;
pub use re::*;
