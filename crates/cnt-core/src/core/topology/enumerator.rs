use crate::core::models::topology::{Angle, Bond, BondKind, Dihedral, Topology};
use crate::engine::config::TubeConfig;
use std::f64::consts::PI;
use tracing::debug;

/// Interior angle of a regular `ring_size`-gon, in degrees.
pub fn ring_angle(ring_size: usize) -> f64 {
    180.0 * (ring_size as f64 - 2.0) / ring_size as f64
}

/// Fold angle of the hexagonal lattice between three rings, in degrees.
pub fn fold_angle(ring_size: usize) -> f64 {
    (180.0 / PI) * 2.0 * ((PI / (2.0 * ring_size as f64)).tan() / 3f64.sqrt()).acos()
}

/// Serial of the diagonal partner of bead `n` (1-based) of ring `m` (1-based).
///
/// Odd rings bond backwards into ring `m + 1`, with the first bead wrapping to
/// the last one. Even rings bond forwards, with the last bead wrapping to the
/// first bead of ring `m + 1`.
pub fn diagonal_neighbor(m: usize, n: usize, ring_size: usize) -> usize {
    let i = (m - 1) * ring_size + n;
    let j = m * ring_size + n;
    if m % 2 == 1 {
        if i % ring_size == 1 {
            (m + 1) * ring_size
        } else {
            m * ring_size + n - 1
        }
    } else if i % ring_size == 0 {
        i + 1
    } else {
        j + 1
    }
}

/// Bonds closing every ring into a cycle.
pub fn ring_bonds(config: &TubeConfig) -> Vec<Bond> {
    let rs = config.ring_size;
    let mut bonds = Vec::with_capacity(config.num_rings * rs);
    for m in 1..=config.num_rings {
        for n in 1..=rs {
            bonds.push(Bond {
                i: (m - 1) * rs + n,
                j: (m - 1) * rs + n % rs + 1,
                kind: BondKind::Ring,
                length: config.bond_length,
                force: config.bond_force,
            });
        }
    }
    bonds
}

/// Straight and diagonal bonds from each ring to the next.
pub fn inter_ring_bonds(config: &TubeConfig) -> Vec<Bond> {
    let rs = config.ring_size;
    let mut bonds = Vec::with_capacity(2 * config.num_rings.saturating_sub(1) * rs);
    let bond = |i, j| Bond {
        i,
        j,
        kind: BondKind::InterRing,
        length: config.bond_length,
        force: config.bond_force,
    };
    for m in 1..config.num_rings {
        for n in 1..=rs {
            let i = (m - 1) * rs + n;
            let j = m * rs + n;
            bonds.push(bond(i, j));
            bonds.push(bond(i, diagonal_neighbor(m, n, rs)));
        }
    }
    bonds
}

/// Angles over three consecutive beads of each ring.
pub fn ring_angles(config: &TubeConfig) -> Vec<Angle> {
    let rs = config.ring_size;
    let angle = ring_angle(rs);
    let mut angles = Vec::with_capacity(config.num_rings * rs);
    for m in 1..=config.num_rings {
        for n in 1..=rs {
            let offset = (m - 1) * rs;
            angles.push(Angle {
                i: offset + n,
                j: offset + n % rs + 1,
                k: offset + (n + 1) % rs + 1,
                angle,
                force: config.angle_force,
            });
        }
    }
    angles
}

/// Improper dihedrals over every window of three consecutive rings.
pub fn improper_dihedrals(config: &TubeConfig) -> Vec<Dihedral> {
    let rs = config.ring_size;
    let angle = fold_angle(rs);
    let windows = config.num_rings.saturating_sub(2);
    let mut dihedrals = Vec::with_capacity(windows * rs);
    for m in 1..=windows {
        for n in 1..=rs {
            let i = (m - 1) * rs + n;
            let j = m * rs + n;
            let l = (m + 1) * rs + n;
            let k = diagonal_neighbor(m, n, rs);
            let atoms = if m % 2 == 1 { [i, k, j, l] } else { [i, j, k, l] };
            dihedrals.push(Dihedral {
                atoms,
                angle,
                force: config.angle_force,
            });
        }
    }
    dihedrals
}

/// Enumerates the complete bonded topology in output order.
pub fn enumerate(config: &TubeConfig) -> Topology {
    let mut bonds = ring_bonds(config);
    bonds.extend(inter_ring_bonds(config));
    let topology = Topology {
        bonds,
        angles: ring_angles(config),
        dihedrals: improper_dihedrals(config),
    };
    debug!(
        bonds = topology.bonds.len(),
        angles = topology.angles.len(),
        dihedrals = topology.dihedrals.len(),
        "Enumerated tube topology."
    );
    topology
}
