use super::bead::Bead;
use super::topology::Topology;
use crate::core::utils::geometry::TubeGeometry;
use crate::engine::config::TubeConfig;

/// A fully generated tube: parameters, placed beads and bonded topology.
///
/// Beads are stored in serial order, so bead `n` lives at index `n - 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Nanotube {
    config: TubeConfig,
    geometry: TubeGeometry,
    beads: Vec<Bead>,
    topology: Topology,
}

impl Nanotube {
    pub(crate) fn new(
        config: TubeConfig,
        geometry: TubeGeometry,
        beads: Vec<Bead>,
        topology: Topology,
    ) -> Self {
        Self {
            config,
            geometry,
            beads,
            topology,
        }
    }

    pub fn config(&self) -> &TubeConfig {
        &self.config
    }

    pub fn geometry(&self) -> &TubeGeometry {
        &self.geometry
    }

    pub fn beads(&self) -> &[Bead] {
        &self.beads
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn num_beads(&self) -> usize {
        self.beads.len()
    }

    pub fn bead(&self, serial: usize) -> Option<&Bead> {
        serial.checked_sub(1).and_then(|idx| self.beads.get(idx))
    }

    /// Bead type written to the topology for `bead`.
    pub fn bead_type(&self, bead: &Bead) -> &str {
        match bead.class {
            super::bead::BeadClass::Regular => &self.config.bead_type,
            super::bead::BeadClass::Functionalized => &self.config.func_type,
        }
    }
}
