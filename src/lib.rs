// src/lib.rs

pub mod config;
pub mod error;
pub mod generation;
pub mod graph;
pub mod math;
pub mod mission;
pub mod models;
