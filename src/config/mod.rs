// src/config/mod.rs

pub mod difficulty;
pub mod parameters;
pub mod scenario;

pub use difficulty::Difficulty;
pub use parameters::GeneratorParameters;
pub use scenario::{Airport, Terrain, TerrainScenario};
