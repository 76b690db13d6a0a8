use clap::{Args, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

/// Two-letter single-dash spellings accepted for compatibility with existing
/// tube-generation scripts, with the long flag each one stands for.
const LEGACY_FLAGS: [(&str, &str); 10] = [
    ("-nr", "--numrings"),
    ("-rs", "--ringsize"),
    ("-bl", "--bondlength"),
    ("-bf", "--bondforce"),
    ("-af", "--angleforce"),
    ("-bt", "--beadtype"),
    ("-ft", "--functype"),
    ("-fb", "--numfuncb"),
    ("-fe", "--numfunce"),
    ("-fn", "--filename"),
];

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Generate Martini coarse-grained models (.gro, .itp, -posres.itp) of open carbon nanotubes.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    #[command(flatten)]
    pub tube: TubeArgs,

    /// Path to a TOML file with tube parameters.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S tube.num-rings=20
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,

    /// Directory the output files are written to.
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Print the resolved parameters as TOML and exit without writing files.
    #[arg(long)]
    pub print_config: bool,

    /// Do not draw progress indicators.
    #[arg(long)]
    pub no_progress: bool,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output and progress indicators
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Tube parameters. Unset values fall back to the config file, then to the
/// built-in defaults.
#[derive(Args, Debug, Default, Clone)]
pub struct TubeArgs {
    /// Number of rings (~height) [default: 12] (legacy: -nr)
    #[arg(long, value_name = "INT")]
    pub numrings: Option<usize>,

    /// Number of beads per ring (~circumference) [default: 8] (legacy: -rs)
    #[arg(long, value_name = "INT")]
    pub ringsize: Option<usize>,

    /// Length of one bond in nm [default: 0.47] (legacy: -bl)
    #[arg(long, value_name = "FLOAT")]
    pub bondlength: Option<f64>,

    /// Force constant for one bond [default: 5000] (legacy: -bf)
    #[arg(long, value_name = "FLOAT")]
    pub bondforce: Option<f64>,

    /// Force constant for angles and dihedrals [default: 350] (legacy: -af)
    #[arg(long, value_name = "FLOAT")]
    pub angleforce: Option<f64>,

    /// Type of the regular beads [default: CNP] (legacy: -bt)
    #[arg(long, value_name = "TYPE")]
    pub beadtype: Option<String>,

    /// Type of the functionalization beads [default: SNda] (legacy: -ft)
    #[arg(long, value_name = "TYPE")]
    pub functype: Option<String>,

    /// Number of functionalized rings at the beginning [default: 1] (legacy: -fb)
    #[arg(long, visible_alias = "numfuncbegin", value_name = "INT")]
    pub numfuncb: Option<usize>,

    /// Number of functionalized rings at the end [default: 1] (legacy: -fe)
    #[arg(long, visible_alias = "numfuncend", value_name = "INT")]
    pub numfunce: Option<usize>,

    /// Base name of the output files [default: generated from the parameters] (legacy: -fn)
    #[arg(long, value_name = "NAME")]
    pub filename: Option<String>,

    /// Use numbers in base 36 (with letters) to name atoms
    #[arg(long)]
    pub base36: bool,
}

/// Rewrites legacy two-letter flags (`-nr 5`, `-nr=5`) to their long form so
/// clap does not read them as clusters of short flags. Arguments after a bare
/// `--` are left untouched.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                passthrough = true;
                return arg;
            }
            for (legacy, long) in LEGACY_FLAGS {
                if text == legacy {
                    return OsString::from(long);
                }
                if let Some(value) = text
                    .strip_prefix(legacy)
                    .and_then(|rest| rest.strip_prefix('='))
                {
                    return OsString::from(format!("{}={}", long, value));
                }
            }
            arg
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(normalize_legacy_flags(args.iter().copied())).expect("valid arguments")
    }

    #[test]
    fn legacy_flags_are_rewritten() {
        let args = normalize_legacy_flags(["martini-cnt", "-nr", "5", "-bl=0.5", "-o", "out"]);
        assert_eq!(
            args,
            vec!["martini-cnt", "--numrings", "5", "--bondlength=0.5", "-o", "out"]
        );
    }

    #[test]
    fn arguments_after_double_dash_are_untouched() {
        let args = normalize_legacy_flags(["martini-cnt", "--", "-nr"]);
        assert_eq!(args, vec!["martini-cnt", "--", "-nr"]);
    }

    #[test]
    fn every_legacy_flag_parses() {
        let cli = parse(&[
            "martini-cnt", "-nr", "4", "-rs", "6", "-bl", "0.5", "-bf", "4000", "-af", "300",
            "-bt", "C1", "-ft", "P5", "-fb", "2", "-fe", "0", "-fn", "tube", "--base36",
        ]);
        let t = cli.tube;
        assert_eq!(t.numrings, Some(4));
        assert_eq!(t.ringsize, Some(6));
        assert_eq!(t.bondlength, Some(0.5));
        assert_eq!(t.bondforce, Some(4000.0));
        assert_eq!(t.angleforce, Some(300.0));
        assert_eq!(t.beadtype.as_deref(), Some("C1"));
        assert_eq!(t.functype.as_deref(), Some("P5"));
        assert_eq!(t.numfuncb, Some(2));
        assert_eq!(t.numfunce, Some(0));
        assert_eq!(t.filename.as_deref(), Some("tube"));
        assert!(t.base36);
    }

    #[test]
    fn unset_flags_stay_empty() {
        let cli = parse(&["martini-cnt"]);
        assert!(cli.tube.numrings.is_none());
        assert!(!cli.tube.base36);
        assert_eq!(cli.output_dir, PathBuf::from("."));
        assert!(cli.set_values.is_empty());
    }

    #[test]
    fn non_numeric_value_is_a_parse_error() {
        let result = Cli::try_parse_from(normalize_legacy_flags(["martini-cnt", "-nr", "many"]));
        assert!(result.is_err());
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["martini-cnt", "-q", "-v"]);
        assert!(result.is_err());
    }
}
