use std::fs;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use gridplan::entities::Project;
use gridplan::queue::PrintQueue;
use log::{info, warn};
use plater::config::PlaterConfig;
use plater::io;
use plater::io::cli::Cli;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config: PlaterConfig = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            PlaterConfig::default()
        }
        Some(config_file) => io::read_json(config_file).context("incorrect config file format")?,
    };
    info!("Successfully parsed PlaterConfig: {config:?}");

    let input_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    let project: Project = io::read_json(&args.input_file).context("incorrect project format")?;
    let previous: Option<PrintQueue> = match &args.queue_file {
        Some(queue_file) => Some(io::read_json(queue_file).context("incorrect queue format")?),
        None => None,
    };

    let queue = plater::plan(&project, previous, &config)?;

    fs::create_dir_all(&args.output_folder).with_context(|| {
        format!(
            "could not create output folder: {}",
            args.output_folder.display()
        )
    })?;
    let queue_path = args.output_folder.join(format!("queue_{input_stem}.json"));
    io::write_json(&queue, &queue_path)
}
