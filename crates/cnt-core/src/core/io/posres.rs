use super::error::FormatError;
use super::traits::TopologyFile;
use crate::core::models::tube::Nanotube;
use std::io::Write;

const RESTRAINT_FUNCTION: u32 = 1;
const RESTRAINT_FORCE: u32 = 1000;

/// Position restraints for every bead (`{basename}-posres.itp`).
pub struct PosresFile;

impl TopologyFile for PosresFile {
    type Error = FormatError;

    const SUFFIX: &'static str = "-posres.itp";

    fn write_to(tube: &Nanotube, writer: &mut impl Write) -> Result<(), Self::Error> {
        writeln!(writer, "[ position_restraints ]")?;
        writeln!(writer, "; ai  funct  fcx    fcy    fcz")?;
        for bead in tube.beads() {
            writeln!(
                writer,
                " {:>3}    {}    {}   {}   {}",
                bead.serial, RESTRAINT_FUNCTION, RESTRAINT_FORCE, RESTRAINT_FORCE, RESTRAINT_FORCE
            )?;
        }
        Ok(())
    }
}
