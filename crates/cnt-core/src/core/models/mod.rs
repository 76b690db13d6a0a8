//! # Core Models Module
//!
//! Data structures describing a generated tube.
//!
//! ## Key Components
//!
//! - [`bead`] - Individual bead with serial, ring coordinates, class and position
//! - [`topology`] - Bonds, angles and improper dihedrals between beads
//! - [`tube`] - The complete tube handed to the writers
//! - [`builder`] - Ring-by-ring assembly of a tube
//!
//! ## Usage
//!
//! ```ignore
//! use martini_cnt::core::models::builder::NanotubeBuilder;
//!
//! let mut builder = NanotubeBuilder::new(&config);
//! for ring in 0..config.num_rings {
//!     builder.place_ring(ring);
//! }
//! let tube = builder.build();
//! ```

pub mod bead;
pub mod builder;
pub mod topology;
pub mod tube;
