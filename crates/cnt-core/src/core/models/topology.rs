use std::fmt;

/// Origin of a bond, used to group bonds in the topology file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BondKind {
    /// Bond closing a ring into a cycle.
    Ring,
    /// Short bond connecting a bead to the next ring.
    InterRing,
}

impl fmt::Display for BondKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Ring => "rings",
                Self::InterRing => "between rings, short",
            }
        )
    }
}

/// Harmonic bond between two 1-based bead serials.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bond {
    pub i: usize,
    pub j: usize,
    pub kind: BondKind,
    pub length: f64,
    pub force: f64,
}

impl Bond {
    pub fn atoms(&self) -> [usize; 2] {
        [self.i, self.j]
    }
}

/// Angle over three consecutive beads of one ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle {
    pub i: usize,
    pub j: usize,
    pub k: usize,
    /// Equilibrium angle in degrees.
    pub angle: f64,
    pub force: f64,
}

impl Angle {
    pub fn atoms(&self) -> [usize; 3] {
        [self.i, self.j, self.k]
    }
}

/// Improper dihedral spanning three consecutive rings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dihedral {
    /// Bead serials in output order.
    pub atoms: [usize; 4],
    /// Equilibrium angle in degrees.
    pub angle: f64,
    pub force: f64,
}

/// All bonded interactions of a tube, in output order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Topology {
    pub bonds: Vec<Bond>,
    pub angles: Vec<Angle>,
    pub dihedrals: Vec<Dihedral>,
}

impl Topology {
    pub fn bonds_of_kind(&self, kind: BondKind) -> impl Iterator<Item = &Bond> {
        self.bonds.iter().filter(move |b| b.kind == kind)
    }

    /// Every bead serial referenced by any interaction.
    pub fn referenced_serials(&self) -> impl Iterator<Item = usize> + '_ {
        self.bonds
            .iter()
            .flat_map(|b| b.atoms())
            .chain(self.angles.iter().flat_map(|a| a.atoms()))
            .chain(self.dihedrals.iter().flat_map(|d| d.atoms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bond(i: usize, j: usize, kind: BondKind) -> Bond {
        Bond {
            i,
            j,
            kind,
            length: 0.47,
            force: 5000.0,
        }
    }

    #[test]
    fn bond_kind_display_matches_section_comments() {
        assert_eq!(BondKind::Ring.to_string(), "rings");
        assert_eq!(BondKind::InterRing.to_string(), "between rings, short");
    }

    #[test]
    fn bonds_of_kind_filters_and_keeps_order() {
        let topology = Topology {
            bonds: vec![
                bond(1, 2, BondKind::Ring),
                bond(1, 4, BondKind::InterRing),
                bond(2, 3, BondKind::Ring),
            ],
            ..Default::default()
        };
        let ring: Vec<_> = topology
            .bonds_of_kind(BondKind::Ring)
            .map(|b| b.atoms())
            .collect();
        assert_eq!(ring, vec![[1, 2], [2, 3]]);
    }

    #[test]
    fn referenced_serials_visits_every_tuple() {
        let topology = Topology {
            bonds: vec![bond(1, 2, BondKind::Ring)],
            angles: vec![Angle {
                i: 1,
                j: 2,
                k: 3,
                angle: 60.0,
                force: 350.0,
            }],
            dihedrals: vec![Dihedral {
                atoms: [1, 4, 5, 7],
                angle: 120.0,
                force: 350.0,
            }],
        };
        let serials: Vec<_> = topology.referenced_serials().collect();
        assert_eq!(serials, vec![1, 2, 1, 2, 3, 1, 4, 5, 7]);
    }
}
