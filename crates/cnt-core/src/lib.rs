//! # Martini CNT Core Library
//!
//! Generates coarse-grained Martini models of open carbon nanotubes: bead
//! coordinates on a rolled hexagonal lattice, the bonded topology tying the
//! rings together, and the GROMACS files describing both.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Nanotube`, `Bead`,
//!   `Bond`), closed-form geometry, the topology enumerator and the writers.
//!
//! - **[`engine`]: The Run Description.** The immutable `TubeConfig`
//!   parameter record, error types, and progress reporting.
//!
//! - **[`workflows`]: The Public API.** `generate` turns parameters into a
//!   tube and `export` writes it to disk.

pub mod core;
pub mod engine;
pub mod workflows;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::core::models::tube::Nanotube;
    use crate::engine::config::{TubeConfig, TubeConfigBuilder};
    use crate::engine::progress::ProgressReporter;
    use crate::workflows::generate;

    pub fn config(
        num_rings: usize,
        ring_size: usize,
        num_func_begin: usize,
        num_func_end: usize,
    ) -> TubeConfig {
        TubeConfigBuilder::new()
            .num_rings(num_rings)
            .ring_size(ring_size)
            .bond_length(0.47)
            .bond_force(5000.0)
            .angle_force(350.0)
            .bead_type("CNP")
            .func_type("SNda")
            .num_func_begin(num_func_begin)
            .num_func_end(num_func_end)
            .build()
            .expect("complete test configuration")
    }

    pub fn tube(
        num_rings: usize,
        ring_size: usize,
        num_func_begin: usize,
        num_func_end: usize,
    ) -> Nanotube {
        generate::run(
            &config(num_rings, ring_size, num_func_begin, num_func_end),
            &ProgressReporter::new(),
        )
    }
}
