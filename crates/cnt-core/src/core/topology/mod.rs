//! # Topology Module
//!
//! Deterministic enumeration of the bonded interactions of a tube.
//!
//! All tuples are pure index arithmetic over `(num_rings, ring_size)`; the
//! only floating-point work is the single evaluation of the ring and fold
//! angles. The enumeration order is the order the topology file lists them.
//!
//! ## Key Components
//!
//! - [`enumerator`] - Ring bonds, inter-ring bonds, in-ring angles and improper dihedrals

pub mod enumerator;
