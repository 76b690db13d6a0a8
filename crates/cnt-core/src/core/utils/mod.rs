//! Pure helpers shared by the model builders and writers.
//!
//! - [`geometry`] - Bead coordinates on the tube surface and box extents
//! - [`naming`] - Decimal and base-36 bead names

pub mod geometry;
pub mod naming;
