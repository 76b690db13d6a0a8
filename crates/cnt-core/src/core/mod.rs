//! # Core Module
//!
//! The stateless building blocks of the generator: data models for beads and
//! bonded interactions, closed-form geometry, the topology enumerator and the
//! file writers.
//!
//! ## Architecture
//!
//! - **Tube Representation** ([`models`]) - Beads, bonds, angles, dihedrals and the assembled tube
//! - **Bonded Interactions** ([`topology`]) - Index arithmetic producing every interaction tuple
//! - **Helpers** ([`utils`]) - Bead placement on the tube surface and bead naming
//! - **File I/O** ([`io`]) - Fixed-width `.gro`, `.itp` and position-restraint writers
//!
//! Geometry and topology depend only on the parameter record and never on
//! each other, so either can be used on its own.

pub mod io;
pub mod models;
pub mod topology;
pub mod utils;
