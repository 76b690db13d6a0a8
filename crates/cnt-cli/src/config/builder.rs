use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::Cli;
use crate::error::{CliError, Result};
use martini_cnt::engine::config::{NamingScheme, TubeConfigBuilder};
use std::str::FromStr;

pub fn build_config(cli: &Cli) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &cli.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &cli.set_values)?;
    let args = &cli.tube;

    let tube_file = file_config.tube.take().unwrap_or_default();
    let forces_file = file_config.forces.take().unwrap_or_default();
    let beads_file = file_config.beads.take().unwrap_or_default();

    let base36 = args.base36
        || file_config
            .base36_names
            .unwrap_or(defaults.base36_names);
    let naming = if base36 {
        NamingScheme::Base36
    } else {
        NamingScheme::Decimal
    };

    let tube = TubeConfigBuilder::new()
        .num_rings(
            args.numrings
                .or(tube_file.num_rings)
                .unwrap_or(defaults.num_rings),
        )
        .ring_size(
            args.ringsize
                .or(tube_file.ring_size)
                .unwrap_or(defaults.ring_size),
        )
        .bond_length(
            args.bondlength
                .or(tube_file.bond_length)
                .unwrap_or(defaults.bond_length),
        )
        .bond_force(
            args.bondforce
                .or(forces_file.bond_force)
                .unwrap_or(defaults.bond_force),
        )
        .angle_force(
            args.angleforce
                .or(forces_file.angle_force)
                .unwrap_or(defaults.angle_force),
        )
        .bead_type(
            args.beadtype
                .clone()
                .or(beads_file.bead_type)
                .unwrap_or(defaults.bead_type),
        )
        .func_type(
            args.functype
                .clone()
                .or(beads_file.func_type)
                .unwrap_or(defaults.func_type),
        )
        .num_func_begin(
            args.numfuncb
                .or(beads_file.num_func_begin)
                .unwrap_or(defaults.num_func_begin),
        )
        .num_func_end(
            args.numfunce
                .or(beads_file.num_func_end)
                .unwrap_or(defaults.num_func_end),
        )
        .basename(args.filename.clone().or(file_config.basename))
        .naming(naming)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        output_dir: cli.output_dir.clone(),
        tube,
    })
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value.parse().map_err(|_| {
        CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "basename" => config.basename = Some(value_str.to_string()),
            "base36-names" => {
                config.base36_names = Some(parse_value(key, value_str, "boolean")?);
            }
            "tube.num-rings" => {
                config.tube.get_or_insert_with(Default::default).num_rings =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "tube.ring-size" => {
                config.tube.get_or_insert_with(Default::default).ring_size =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "tube.bond-length" => {
                config.tube.get_or_insert_with(Default::default).bond_length =
                    Some(parse_value(key, value_str, "float")?);
            }
            "forces.bond-force" => {
                config.forces.get_or_insert_with(Default::default).bond_force =
                    Some(parse_value(key, value_str, "float")?);
            }
            "forces.angle-force" => {
                config.forces.get_or_insert_with(Default::default).angle_force =
                    Some(parse_value(key, value_str, "float")?);
            }
            "beads.bead-type" => {
                config.beads.get_or_insert_with(Default::default).bead_type =
                    Some(value_str.to_string());
            }
            "beads.func-type" => {
                config.beads.get_or_insert_with(Default::default).func_type =
                    Some(value_str.to_string());
            }
            "beads.num-func-begin" => {
                config.beads.get_or_insert_with(Default::default).num_func_begin =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "beads.num-func-end" => {
                config.beads.get_or_insert_with(Default::default).num_func_end =
                    Some(parse_value(key, value_str, "integer")?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, normalize_legacy_flags};
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["martini-cnt"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(normalize_legacy_flags(argv)).expect("valid arguments")
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let app = build_config(&cli(&[])).expect("build ok");
        let tube = app.tube;

        assert_eq!(tube.num_rings, 12);
        assert_eq!(tube.ring_size, 8);
        assert_eq!(tube.bond_length, 0.47);
        assert_eq!(tube.bond_force, 5000.0);
        assert_eq!(tube.angle_force, 350.0);
        assert_eq!(tube.bead_type, "CNP");
        assert_eq!(tube.func_type, "SNda");
        assert_eq!(tube.num_func_begin, 1);
        assert_eq!(tube.num_func_end, 1);
        assert_eq!(tube.naming, NamingScheme::Decimal);
        assert_eq!(tube.basename, "cnt-12-8-a470-CNP-f11-SNda");
        assert_eq!(app.output_dir, std::path::PathBuf::from("."));
    }

    #[test]
    fn build_config_reads_file_and_merges() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("tube.toml");
        let toml = r#"
            base36-names = true

            [tube]
            num-rings = 20
            ring-size = 10
            bond-length = 0.5

            [forces]
            angle-force = 200.0

            [beads]
            func-type = "P5"
            num-func-end = 3
            "#;
        fs::write(&cfg_path, toml).unwrap();

        let app = build_config(&cli(&["-c", cfg_path.to_str().unwrap()])).expect("build ok");
        let tube = app.tube;

        assert_eq!(tube.num_rings, 20);
        assert_eq!(tube.ring_size, 10);
        assert_eq!(tube.bond_length, 0.5);
        assert_eq!(tube.bond_force, 5000.0);
        assert_eq!(tube.angle_force, 200.0);
        assert_eq!(tube.func_type, "P5");
        assert_eq!(tube.num_func_end, 3);
        assert_eq!(tube.naming, NamingScheme::Base36);
        assert_eq!(tube.basename, "cnt-20-10-a500-CNP-f13-P5");
    }

    #[test]
    fn cli_overrides_file_values() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("tube.toml");
        let toml = r#"
            basename = "from-file"
            [tube]
            num-rings = 20
            [beads]
            bead-type = "C1"
            "#;
        fs::write(&cfg_path, toml).unwrap();

        let app = build_config(&cli(&[
            "-c",
            cfg_path.to_str().unwrap(),
            "-nr",
            "4",
            "-fn",
            "from-cli",
        ]))
        .expect("build ok");

        assert_eq!(app.tube.num_rings, 4);
        assert_eq!(app.tube.bead_type, "C1");
        assert_eq!(app.tube.basename, "from-cli");
    }

    #[test]
    fn set_values_override_file_but_not_flags() {
        let app = build_config(&cli(&[
            "-S",
            "tube.num-rings=30",
            "-S",
            "tube.ring-size=6",
            "-S",
            "forces.bond-force=1250.5",
            "-S",
            "beads.num-func-begin=0",
            "-S",
            "basename=set-name",
            "-rs",
            "9",
        ]))
        .expect("build ok");
        let tube = app.tube;

        assert_eq!(tube.num_rings, 30);
        assert_eq!(tube.ring_size, 9);
        assert!((tube.bond_force - 1250.5).abs() < 1e-12);
        assert_eq!(tube.num_func_begin, 0);
        assert_eq!(tube.basename, "set-name");
    }

    #[test]
    fn invalid_set_values_are_rejected() {
        for bad in ["tube.num-rings", "tube.num-rings=many", "unknown.key=1"] {
            let result = build_config(&cli(&["-S", bad]));
            assert!(matches!(result, Err(CliError::Config(_))), "{bad}");
        }
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let cfg_path = dir.path().join("tube.toml");
        fs::write(&cfg_path, "[tube]\nnum-ringz = 3\n").unwrap();

        let result = build_config(&cli(&["-c", cfg_path.to_str().unwrap()]));
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let result = build_config(&cli(&["-c", missing.to_str().unwrap()]));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
