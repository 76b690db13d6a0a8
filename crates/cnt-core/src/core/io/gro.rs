use super::error::FormatError;
use super::traits::TopologyFile;
use crate::core::models::bead::{RESIDUE_NAME, RESIDUE_NUMBER};
use crate::core::models::tube::Nanotube;
use std::io::Write;

const SERIAL_WRAP: usize = 100_000;

/// GROMOS-87 coordinate file (`{basename}.gro`).
pub struct GroFile;

impl TopologyFile for GroFile {
    type Error = FormatError;

    const SUFFIX: &'static str = ".gro";

    fn write_to(tube: &Nanotube, writer: &mut impl Write) -> Result<(), Self::Error> {
        let config = tube.config();
        if tube.num_beads() != config.num_atoms() {
            return Err(FormatError::Inconsistency(format!(
                "Tube holds {} beads but its parameters describe {}",
                tube.num_beads(),
                config.num_atoms()
            )));
        }

        writeln!(writer, "{}", config.title())?;
        writeln!(writer, "  {:>3}", tube.num_beads())?;

        // The residue name is padded on the left inside its 5-column field.
        let residue_name = format!("  {}", RESIDUE_NAME);
        for bead in tube.beads() {
            let p = &bead.position;
            writeln!(
                writer,
                "{:>5}{:<5} {}{:>5}{:>8.3}{:>8.3}{:>8.3}{:>8.4}{:>8.4}{:>8.4}",
                RESIDUE_NUMBER,
                residue_name,
                bead.atom_name(),
                bead.serial % SERIAL_WRAP,
                p.x,
                p.y,
                p.z,
                0.0,
                0.0,
                0.0
            )?;
        }

        // Box edges are written as whole numbers, dropping the fraction.
        let dims = tube.geometry().box_dimensions();
        writeln!(
            writer,
            "   {}  {}  {}",
            dims.x.trunc() as i64,
            dims.y.trunc() as i64,
            dims.z.trunc() as i64
        )?;
        Ok(())
    }
}
