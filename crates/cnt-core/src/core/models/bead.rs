use nalgebra::Point3;

pub const RESIDUE_NAME: &str = "CNT";
pub const RESIDUE_NUMBER: usize = 1;
pub const BEAD_MASS: u32 = 48;
pub const BEAD_CHARGE: i32 = 0;

/// Classification of a bead by its distance from the tube ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BeadClass {
    /// Bead of an inner ring, typed with the regular bead type.
    #[default]
    Regular,
    /// Bead of one of the end rings, typed with the functionalization type.
    Functionalized,
}

impl BeadClass {
    /// Leading letter of the bead name.
    pub fn letter(self) -> char {
        match self {
            Self::Regular => 'C',
            Self::Functionalized => 'F',
        }
    }
}

/// A single coarse-grained bead of the tube.
#[derive(Debug, Clone, PartialEq)]
pub struct Bead {
    /// 1-based global index.
    pub serial: usize,
    /// 0-based ring index.
    pub ring: usize,
    /// 0-based position within the ring.
    pub position_in_ring: usize,
    pub class: BeadClass,
    /// Three-character numeric name (decimal or base-36).
    pub name: String,
    /// Coordinates in nm.
    pub position: Point3<f64>,
}

impl Bead {
    /// Full atom name: class letter followed by the numeric name, e.g. `F001`.
    pub fn atom_name(&self) -> String {
        format!("{}{}", self.class.letter(), self.name)
    }
}
