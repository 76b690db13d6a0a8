use crate::cli::Cli;
use crate::config::builder::build_config;
use crate::config::file::FileConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use martini_cnt::engine::config::TubeConfig;
use martini_cnt::engine::progress::ProgressReporter;
use martini_cnt::workflows::{export, generate};
use tracing::{debug, info};

const RULE: &str =
    "------------------------------------------------------------------------------";

fn banner(tube: &TubeConfig) -> String {
    format!(
        "{RULE}\n\
         Generating a Martini model for an open CNT using {} rings with {} each.\n\
         {RULE}\n\
         The {} first and the {} last rings will be of type {}.",
        tube.num_rings, tube.ring_size, tube.num_func_begin, tube.num_func_end, tube.func_type
    )
}

fn render_config(tube: &TubeConfig) -> Result<String> {
    toml::to_string_pretty(&FileConfig::from(tube))
        .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to render configuration: {}", e)))
}

pub fn run(cli: &Cli) -> Result<()> {
    let app_config = build_config(cli)?;
    let tube_config = &app_config.tube;
    debug!("Resolved tube parameters: {:?}", tube_config);

    if cli.print_config {
        print!("{}", render_config(tube_config)?);
        return Ok(());
    }

    println!("{}", banner(tube_config));

    let handler = (!cli.no_progress && !cli.quiet).then(CliProgressHandler::new);
    let reporter = match &handler {
        Some(handler) => ProgressReporter::with_sink(handler.sink()),
        None => ProgressReporter::new(),
    };

    info!("Invoking the generation workflow...");
    let tube = generate::run(tube_config, &reporter);
    let files = export::run(&tube, &app_config.output_dir, &reporter)?;

    for path in files.iter() {
        println!("Wrote {}", path.display());
    }
    Ok(())
}
