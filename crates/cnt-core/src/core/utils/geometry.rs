use crate::engine::config::TubeConfig;
use nalgebra::{Point3, Vector3};
use std::f64::consts::PI;

/// Closed-form placement of beads on the surface of an open tube.
///
/// Each ring is a regular polygon whose chord equals the bond length. Odd
/// rings are rotated by half a sector, and rings are spaced by
/// `bond_length * sqrt(3) / 2` along z, which together approximate a
/// hexagonal lattice rolled into a cylinder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubeGeometry {
    bond_length: f64,
    num_rings: usize,
    ring_size: usize,
    alpha: f64,
    radius: f64,
}

impl TubeGeometry {
    pub fn new(num_rings: usize, ring_size: usize, bond_length: f64) -> Self {
        let alpha = 2.0 * PI / ring_size as f64;
        let radius = bond_length / (2.0 * (alpha / 2.0).sin());
        Self {
            bond_length,
            num_rings,
            ring_size,
            alpha,
            radius,
        }
    }

    pub fn from_config(config: &TubeConfig) -> Self {
        Self::new(config.num_rings, config.ring_size, config.bond_length)
    }

    /// Angle in radians subtended by one ring bond at the tube axis.
    pub fn opening_angle(&self) -> f64 {
        self.alpha
    }

    /// Circumscribed radius of a ring.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Axial distance between consecutive rings.
    pub fn ring_spacing(&self) -> f64 {
        self.bond_length * 3f64.sqrt() / 2.0
    }

    /// Position of the bead at 0-based `ring` and `position` within the ring.
    pub fn position(&self, ring: usize, position: usize) -> Point3<f64> {
        let p = position as f64 * self.alpha + (ring % 2) as f64 * self.alpha / 2.0;
        Point3::new(
            self.radius * p.sin(),
            self.radius * p.cos(),
            ring as f64 * self.ring_spacing(),
        )
    }

    /// Simulation box edges: `ring_size * a` across, `num_rings * a + 1` along z.
    pub fn box_dimensions(&self) -> Vector3<f64> {
        let across = self.ring_size as f64 * self.bond_length;
        Vector3::new(
            across,
            across,
            self.num_rings as f64 * self.bond_length + 1.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn radius_matches_chord_formula() {
        let geometry = TubeGeometry::new(2, 3, 0.47);
        let expected = 0.47 / (2.0 * (PI / 3.0).sin());
        assert!((geometry.radius() - expected).abs() < EPS);
        assert!((geometry.radius() - 0.2714).abs() < 1e-4);
    }

    #[test]
    fn first_bead_sits_on_y_axis_at_origin_height() {
        let geometry = TubeGeometry::new(2, 3, 0.47);
        let p = geometry.position(0, 0);
        assert!(p.x.abs() < EPS);
        assert!((p.y - geometry.radius()).abs() < EPS);
        assert_eq!(p.z, 0.0);
    }

    #[test]
    fn adjacent_ring_beads_are_one_bond_apart() {
        for ring_size in 3..=12 {
            let geometry = TubeGeometry::new(4, ring_size, 0.47);
            for ring in 0..4 {
                for j in 0..ring_size {
                    let a = geometry.position(ring, j);
                    let b = geometry.position(ring, (j + 1) % ring_size);
                    assert!(((a - b).norm() - 0.47).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn odd_rings_are_rotated_by_half_a_sector() {
        let geometry = TubeGeometry::new(2, 8, 0.47);
        let even = geometry.position(0, 0);
        let odd = geometry.position(1, 0);
        let angle_even = even.x.atan2(even.y);
        let angle_odd = odd.x.atan2(odd.y);
        assert!((angle_odd - angle_even - geometry.opening_angle() / 2.0).abs() < EPS);
        assert!((odd.z - 0.47 * 3f64.sqrt() / 2.0).abs() < EPS);
    }

    #[test]
    fn box_dimensions_follow_tube_extent() {
        let geometry = TubeGeometry::new(12, 8, 0.47);
        let dims = geometry.box_dimensions();
        assert!((dims.x - 3.76).abs() < EPS);
        assert!((dims.y - 3.76).abs() < EPS);
        assert!((dims.z - 6.64).abs() < EPS);
    }
}
