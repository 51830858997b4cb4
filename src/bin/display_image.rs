//! `display-image` - show an image in the terminal through an external renderer.

use std::path::Path;
use std::time::Duration;

use clap::Parser;

use imgtools::ascii::{resolve_columns, AsciiOptions};
use imgtools::cli::DisplayCli;
use imgtools::config::{self, Config};
use imgtools::display::{build_command, run_command};
use imgtools::error::ImageError;
use imgtools::logging::init_logging;
use imgtools::paths::resolve_image_path;
use imgtools::slideshow::{self, SlideMode};

// Always exits 0: renderer failures show up only in the renderer's own output.
fn main() {
    let cli = DisplayCli::parse();
    init_logging(env!("CARGO_CRATE_NAME"), cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
    }
}

fn run(cli: &DisplayCli) -> Result<(), ImageError> {
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(ImageError::Config)?;
    let program = cli.command.as_deref().unwrap_or(&config.display.command);

    if let Some(ref dir) = cli.slideshow {
        return run_slideshow(cli, &config, program, dir);
    }

    let image = resolve_image_path(cli.image.as_deref(), &config.display.image)?;
    if !image.exists() {
        tracing::debug!(path = %image.display(), "image does not exist, running renderer anyway");
    }

    let outcome = run_command(&build_command(program, &image))?;
    println!("{outcome}");
    Ok(())
}

fn run_slideshow(
    cli: &DisplayCli,
    config: &Config,
    program: &str,
    dir: &Path,
) -> Result<(), ImageError> {
    let mode = if cli.ascii {
        let options = AsciiOptions {
            // Slides always fit the terminal
            columns: resolve_columns(None, true, config.ascii.columns),
            ..AsciiOptions::from(&config.ascii)
        };
        options.validate()?;
        SlideMode::Ascii(options)
    } else {
        SlideMode::Renderer(program.to_string())
    };

    let files = slideshow::list_images(dir)?;
    tracing::debug!(count = files.len(), dir = %dir.display(), "starting slideshow");
    let shown = slideshow::run(&files, &mode, Duration::from_secs(cli.interval))?;
    tracing::debug!(shown, "slideshow finished");
    Ok(())
}
