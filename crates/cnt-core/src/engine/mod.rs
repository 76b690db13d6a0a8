//! # Engine Module
//!
//! This module holds the run-level state of the generator: the immutable
//! parameter record every stage reads, the error taxonomy shared by the
//! workflows, and the progress reporting hooks front-ends subscribe to.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - `TubeConfig`, its builder, and the bead naming scheme
//! - **Progress Monitoring** ([`progress`]) - Stage, ring and file events for user feedback
//! - **Error Handling** ([`error`]) - Engine-level error types and error propagation
//!
//! Nothing in this layer performs I/O itself; it only describes a run.

pub mod config;
pub mod error;
pub mod progress;
