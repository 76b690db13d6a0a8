use crate::error::{CliError, Result};
use martini_cnt::engine::config::{NamingScheme, TubeConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileTubeConfig {
    #[serde(skip_serializing_if = "Option::is_none", rename = "num-rings")]
    pub num_rings: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "ring-size")]
    pub ring_size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "bond-length")]
    pub bond_length: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileForcesConfig {
    #[serde(skip_serializing_if = "Option::is_none", rename = "bond-force")]
    pub bond_force: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "angle-force")]
    pub angle_force: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileBeadsConfig {
    #[serde(skip_serializing_if = "Option::is_none", rename = "bead-type")]
    pub bead_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "func-type")]
    pub func_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "num-func-begin")]
    pub num_func_begin: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "num-func-end")]
    pub num_func_end: Option<usize>,
}

#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "base36-names")]
    pub base36_names: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tube: Option<FileTubeConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forces: Option<FileForcesConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beads: Option<FileBeadsConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

/// Resolved parameters in file layout, so `--print-config` output can be fed
/// back through `--config`.
impl From<&TubeConfig> for FileConfig {
    fn from(tube: &TubeConfig) -> Self {
        Self {
            basename: Some(tube.basename.clone()),
            base36_names: Some(tube.naming == NamingScheme::Base36),
            tube: Some(FileTubeConfig {
                num_rings: Some(tube.num_rings),
                ring_size: Some(tube.ring_size),
                bond_length: Some(tube.bond_length),
            }),
            forces: Some(FileForcesConfig {
                bond_force: Some(tube.bond_force),
                angle_force: Some(tube.angle_force),
            }),
            beads: Some(FileBeadsConfig {
                bead_type: Some(tube.bead_type.clone()),
                func_type: Some(tube.func_type.clone()),
                num_func_begin: Some(tube.num_func_begin),
                num_func_end: Some(tube.num_func_end),
            }),
        }
    }
}
