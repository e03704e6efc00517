//! Total-cost-of-ownership engine, capacity presets and export helpers.

pub mod builder;
pub mod engine;
pub mod error;
pub mod export;
pub mod presets;
pub mod scenario;
pub mod snapshot;
