//! `img2ascii` - print an image as ASCII art.

use std::process;

use clap::Parser;

use imgtools::ascii::{load_image, render, resolve_columns, AsciiOptions};
use imgtools::cli::AsciiCli;
use imgtools::config::{self, Config};
use imgtools::error::ImageError;
use imgtools::logging::init_logging;
use imgtools::paths::resolve_image_path;

fn main() {
    let cli = AsciiCli::parse();
    init_logging(env!("CARGO_CRATE_NAME"), cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &AsciiCli) -> Result<(), ImageError> {
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(ImageError::Config)?;

    let options = AsciiOptions {
        columns: resolve_columns(cli.columns, cli.fit || config.ascii.fit, config.ascii.columns),
        width_ratio: cli.width_ratio.unwrap_or(config.ascii.width_ratio),
        monochrome: config.ascii.monochrome && !cli.color,
    };
    options.validate()?;

    let path = resolve_image_path(cli.image.as_deref(), &config.ascii.image)?;
    tracing::debug!(path = %path.display(), ?options, "converting image");

    let img = load_image(&path)?;
    println!("{}", render(img, &options)?);
    Ok(())
}
