use super::bead::{Bead, BeadClass};
use super::topology::Topology;
use super::tube::Nanotube;
use crate::core::utils::geometry::TubeGeometry;
use crate::core::utils::naming::atom_name;
use crate::engine::config::TubeConfig;

/// Assembles a [`Nanotube`] ring by ring.
pub struct NanotubeBuilder<'a> {
    config: &'a TubeConfig,
    geometry: TubeGeometry,
    beads: Vec<Bead>,
    topology: Topology,
}

impl<'a> NanotubeBuilder<'a> {
    pub fn new(config: &'a TubeConfig) -> Self {
        Self {
            config,
            geometry: TubeGeometry::from_config(config),
            beads: Vec::with_capacity(config.num_atoms()),
            topology: Topology::default(),
        }
    }

    /// Places every bead of the 0-based `ring` and returns them.
    pub fn place_ring(&mut self, ring: usize) -> &[Bead] {
        let start = self.beads.len();
        let class = if self.config.is_functionalized_ring(ring) {
            BeadClass::Functionalized
        } else {
            BeadClass::Regular
        };
        for position_in_ring in 0..self.config.ring_size {
            let serial = ring * self.config.ring_size + position_in_ring + 1;
            self.beads.push(Bead {
                serial,
                ring,
                position_in_ring,
                class,
                name: atom_name(serial, self.config.naming),
                position: self.geometry.position(ring, position_in_ring),
            });
        }
        &self.beads[start..]
    }

    pub fn topology(&mut self, topology: Topology) -> &mut Self {
        self.topology = topology;
        self
    }

    pub fn build(self) -> Nanotube {
        Nanotube::new(self.config.clone(), self.geometry, self.beads, self.topology)
    }
}
