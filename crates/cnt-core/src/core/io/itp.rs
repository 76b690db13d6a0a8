use super::error::FormatError;
use super::traits::TopologyFile;
use crate::core::models::bead::{BEAD_CHARGE, BEAD_MASS, RESIDUE_NAME, RESIDUE_NUMBER};
use crate::core::models::topology::BondKind;
use crate::core::models::tube::Nanotube;
use std::io::Write;

const CHARGE_GROUP_WRAP: usize = 1000;
const EXCLUSIONS: u32 = 1;
const BOND_FUNCTION: u32 = 1;
const ANGLE_FUNCTION: u32 = 2;
const DIHEDRAL_FUNCTION: u32 = 2;

/// GROMACS molecule topology (`{basename}.itp`).
pub struct ItpFile;

impl ItpFile {
    fn check_references(tube: &Nanotube) -> Result<(), FormatError> {
        match tube
            .topology()
            .referenced_serials()
            .find(|&serial| tube.bead(serial).is_none())
        {
            Some(serial) => Err(FormatError::Inconsistency(format!(
                "Interaction references bead {} but the tube has {} beads",
                serial,
                tube.num_beads()
            ))),
            None => Ok(()),
        }
    }

    fn write_header(tube: &Nanotube, writer: &mut impl Write) -> Result<(), FormatError> {
        writeln!(writer, "; ")?;
        writeln!(writer, "; Carbon nanotube topology")?;
        writeln!(writer, "; for the Martini force field")?;
        writeln!(writer, ";")?;
        writeln!(
            writer,
            "; created by {} {}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        )?;
        writeln!(writer, ";")?;
        writeln!(writer, "; Martin Voegele")?;
        writeln!(writer, "; Max Planck Institute of Biophysics")?;
        writeln!(writer, ";")?;
        writeln!(writer)?;

        writeln!(writer, "[ moleculetype ]")?;
        writeln!(writer, "; Name\t nrexcl")?;
        writeln!(writer, "{}  {}", tube.config().default_basename(), EXCLUSIONS)?;
        Ok(())
    }

    fn write_atoms(tube: &Nanotube, writer: &mut impl Write) -> Result<(), FormatError> {
        writeln!(writer)?;
        writeln!(writer, "[ atoms ]")?;
        writeln!(
            writer,
            "; nr\t type\t resnr\t residue\t atom\t cgnr\t charge\t mass"
        )?;
        for bead in tube.beads() {
            writeln!(
                writer,
                "{:>3}    {:>4}   {}   {}    {}     {:>3}       {}      {}",
                bead.serial,
                tube.bead_type(bead),
                RESIDUE_NUMBER,
                RESIDUE_NAME,
                bead.atom_name(),
                bead.serial % CHARGE_GROUP_WRAP,
                BEAD_CHARGE,
                BEAD_MASS
            )?;
        }
        Ok(())
    }

    fn write_bonds(tube: &Nanotube, writer: &mut impl Write) -> Result<(), FormatError> {
        writeln!(writer)?;
        writeln!(writer, "[ bonds ]")?;
        writeln!(writer, "; i\t j\t  funct\t length\t force")?;
        for kind in [BondKind::Ring, BondKind::InterRing] {
            writeln!(writer, "; {}", kind)?;
            for bond in tube.topology().bonds_of_kind(kind) {
                writeln!(
                    writer,
                    "     {:>3}     {:>3}       {}   {:>4.3}    {:>5.1}",
                    bond.i, bond.j, BOND_FUNCTION, bond.length, bond.force
                )?;
            }
        }
        Ok(())
    }

    fn write_angles(tube: &Nanotube, writer: &mut impl Write) -> Result<(), FormatError> {
        writeln!(writer)?;
        writeln!(writer, "[ angles ]")?;
        writeln!(writer, "; i\t j\t k\t funct\t angle\t force")?;
        writeln!(writer, "; in rings")?;
        for angle in &tube.topology().angles {
            writeln!(
                writer,
                "     {:>3}     {:>3}     {:>3}       {}     {:>3.3}     {:>5.1}",
                angle.i, angle.j, angle.k, ANGLE_FUNCTION, angle.angle, angle.force
            )?;
        }
        Ok(())
    }

    fn write_dihedrals(tube: &Nanotube, writer: &mut impl Write) -> Result<(), FormatError> {
        writeln!(writer)?;
        writeln!(writer, "[ dihedrals ]")?;
        writeln!(writer, "; i\t j\t k\t l     func\t q0     cq")?;
        for dihedral in &tube.topology().dihedrals {
            let [a, b, c, d] = dihedral.atoms;
            writeln!(
                writer,
                "     {:>3}     {:>3}     {:>3}     {:>3}       {}        {:>3.3}      {:>5.1}",
                a, b, c, d, DIHEDRAL_FUNCTION, dihedral.angle, dihedral.force
            )?;
        }
        Ok(())
    }

    fn write_posres_include(tube: &Nanotube, writer: &mut impl Write) -> Result<(), FormatError> {
        writeln!(writer)?;
        writeln!(writer, "; Include Position restraint file")?;
        writeln!(writer, "#ifdef POSRES")?;
        writeln!(writer, "#include \"{}\"", tube.config().posres_include())?;
        writeln!(writer, "#endif")?;
        Ok(())
    }
}

impl TopologyFile for ItpFile {
    type Error = FormatError;

    const SUFFIX: &'static str = ".itp";

    fn write_to(tube: &Nanotube, writer: &mut impl Write) -> Result<(), Self::Error> {
        Self::check_references(tube)?;
        Self::write_header(tube, writer)?;
        Self::write_atoms(tube, writer)?;
        Self::write_bonds(tube, writer)?;
        Self::write_angles(tube, writer)?;
        Self::write_dihedrals(tube, writer)?;
        Self::write_posres_include(tube, writer)
    }
}
