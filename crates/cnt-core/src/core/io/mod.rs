//! Writers for the three GROMACS files describing a tube.
//!
//! Every writer implements [`traits::TopologyFile`], which fixes the file
//! suffix and provides path-based helpers. All layouts are fixed-width and
//! must stay byte-compatible with existing Martini tube files.

pub mod error;
pub mod gro;
pub mod itp;
pub mod posres;
pub mod traits;
