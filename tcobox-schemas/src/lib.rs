//! Plain data types shared by the TCO engine and the command-line app.

pub mod breakdown;
pub mod file_formats;
pub mod pricing;
pub mod profile;
pub mod scenario;
pub mod technology;
