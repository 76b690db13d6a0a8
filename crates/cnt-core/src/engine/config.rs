use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Scheme used to render the 3-character numeric part of a bead name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamingScheme {
    /// `n mod 1000`, zero-padded to three decimal digits.
    #[default]
    Decimal,
    /// `n mod 36^3`, encoded with digits `0-9a-z` and zero-padded.
    Base36,
}

/// The immutable parameter record driving every stage of tube generation.
///
/// Geometry, topology and file layout are all derived from this record; no
/// stage keeps state of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TubeConfig {
    /// Number of rings stacked along the tube axis.
    pub num_rings: usize,
    /// Number of beads per ring.
    pub ring_size: usize,
    /// Bond length in nm, shared by ring and inter-ring bonds.
    pub bond_length: f64,
    /// Harmonic force constant for every bond.
    pub bond_force: f64,
    /// Force constant for angles and improper dihedrals.
    pub angle_force: f64,
    /// Bead type of regular beads.
    pub bead_type: String,
    /// Bead type of functionalized beads.
    pub func_type: String,
    /// Number of functionalized rings at the beginning of the tube.
    pub num_func_begin: usize,
    /// Number of functionalized rings at the end of the tube.
    pub num_func_end: usize,
    /// Base name shared by the three output files.
    pub basename: String,
    pub naming: NamingScheme,
}

impl TubeConfig {
    pub fn num_atoms(&self) -> usize {
        self.num_rings * self.ring_size
    }

    pub fn is_functionalized(&self) -> bool {
        self.num_func_begin > 0 || self.num_func_end > 0
    }

    /// Whether the ring with 0-based index `ring` carries functionalized beads.
    ///
    /// Equivalent to `ring < num_func_begin || ring >= num_rings - num_func_end`
    /// without underflowing when `num_func_end > num_rings`.
    pub fn is_functionalized_ring(&self, ring: usize) -> bool {
        ring < self.num_func_begin || ring + self.num_func_end >= self.num_rings
    }

    /// Molecule title used in the `.gro` header.
    pub fn title(&self) -> String {
        let base = format!(
            "cnt-{}-{}-f{}{}",
            self.num_rings, self.ring_size, self.num_func_begin, self.num_func_end
        );
        if self.is_functionalized() {
            format!("{}-{}", base, self.func_type)
        } else {
            base
        }
    }

    /// Base name derived from the tube parameters.
    ///
    /// The bond-length field is `1000 * bond_length` truncated toward zero,
    /// right-aligned in a minimum width of three.
    pub fn default_basename(&self) -> String {
        default_basename(
            self.num_rings,
            self.ring_size,
            self.bond_length,
            &self.bead_type,
            self.num_func_begin,
            self.num_func_end,
            &self.func_type,
        )
    }

    pub fn posres_include(&self) -> String {
        format!("{}-posres.itp", self.basename)
    }
}

fn default_basename(
    num_rings: usize,
    ring_size: usize,
    bond_length: f64,
    bead_type: &str,
    num_func_begin: usize,
    num_func_end: usize,
    func_type: &str,
) -> String {
    let milli = (1000.0 * bond_length).trunc() as i64;
    format!(
        "cnt-{}-{}-a{:>3}-{}-f{}{}-{}",
        num_rings, ring_size, milli, bead_type, num_func_begin, num_func_end, func_type
    )
}

#[derive(Default)]
pub struct TubeConfigBuilder {
    num_rings: Option<usize>,
    ring_size: Option<usize>,
    bond_length: Option<f64>,
    bond_force: Option<f64>,
    angle_force: Option<f64>,
    bead_type: Option<String>,
    func_type: Option<String>,
    num_func_begin: Option<usize>,
    num_func_end: Option<usize>,
    basename: Option<String>,
    naming: Option<NamingScheme>,
}

impl TubeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_rings(mut self, n: usize) -> Self {
        self.num_rings = Some(n);
        self
    }
    pub fn ring_size(mut self, n: usize) -> Self {
        self.ring_size = Some(n);
        self
    }
    pub fn bond_length(mut self, length: f64) -> Self {
        self.bond_length = Some(length);
        self
    }
    pub fn bond_force(mut self, force: f64) -> Self {
        self.bond_force = Some(force);
        self
    }
    pub fn angle_force(mut self, force: f64) -> Self {
        self.angle_force = Some(force);
        self
    }
    pub fn bead_type(mut self, bead_type: impl Into<String>) -> Self {
        self.bead_type = Some(bead_type.into());
        self
    }
    pub fn func_type(mut self, func_type: impl Into<String>) -> Self {
        self.func_type = Some(func_type.into());
        self
    }
    pub fn num_func_begin(mut self, n: usize) -> Self {
        self.num_func_begin = Some(n);
        self
    }
    pub fn num_func_end(mut self, n: usize) -> Self {
        self.num_func_end = Some(n);
        self
    }
    /// Sets an explicit base name; when absent one is derived on `build`.
    pub fn basename(mut self, basename: Option<String>) -> Self {
        self.basename = basename;
        self
    }
    pub fn naming(mut self, naming: NamingScheme) -> Self {
        self.naming = Some(naming);
        self
    }

    pub fn build(self) -> Result<TubeConfig, ConfigError> {
        let num_rings = self
            .num_rings
            .ok_or(ConfigError::MissingParameter("num_rings"))?;
        let ring_size = self
            .ring_size
            .ok_or(ConfigError::MissingParameter("ring_size"))?;
        let bond_length = self
            .bond_length
            .ok_or(ConfigError::MissingParameter("bond_length"))?;
        let bead_type = self
            .bead_type
            .ok_or(ConfigError::MissingParameter("bead_type"))?;
        let func_type = self
            .func_type
            .ok_or(ConfigError::MissingParameter("func_type"))?;
        let num_func_begin = self
            .num_func_begin
            .ok_or(ConfigError::MissingParameter("num_func_begin"))?;
        let num_func_end = self
            .num_func_end
            .ok_or(ConfigError::MissingParameter("num_func_end"))?;

        let basename = self.basename.unwrap_or_else(|| {
            default_basename(
                num_rings,
                ring_size,
                bond_length,
                &bead_type,
                num_func_begin,
                num_func_end,
                &func_type,
            )
        });

        Ok(TubeConfig {
            num_rings,
            ring_size,
            bond_length,
            bond_force: self
                .bond_force
                .ok_or(ConfigError::MissingParameter("bond_force"))?,
            angle_force: self
                .angle_force
                .ok_or(ConfigError::MissingParameter("angle_force"))?,
            bead_type,
            func_type,
            num_func_begin,
            num_func_end,
            basename,
            naming: self.naming.unwrap_or_default(),
        })
    }
}
