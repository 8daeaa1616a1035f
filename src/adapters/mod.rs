// Adapters layer: concrete implementations of the domain ports.

pub mod classifier;
pub mod json;
pub mod text;
