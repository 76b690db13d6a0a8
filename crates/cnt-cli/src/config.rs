//! Layered configuration: built-in defaults, an optional TOML file, `--set`
//! overrides, and finally explicit command-line flags.

pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;
