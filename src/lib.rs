pub mod analyzers;
pub mod aqi;
pub mod cli;
pub mod error;
pub mod generator;
pub mod models;
pub mod utils;
pub mod writers;

pub use error::{Result, SynthError};
