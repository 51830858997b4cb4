//! `generate-image` - generate an image from a prompt and save it.

use std::path::Path;
use std::process;

use clap::Parser;

use imgtools::ascii::{load_image, render, AsciiOptions};
use imgtools::cli::GenerateCli;
use imgtools::config::{self, Config};
use imgtools::context::ServiceContext;
use imgtools::display::{build_command, run_command};
use imgtools::error::ImageError;
use imgtools::logging::init_logging;
use imgtools::model::{resolve_model, validate_model};
use imgtools::output::{resolve_output_path, save_download, SaveOutcome};
use imgtools::params::{validate_quality, validate_size};
use imgtools::ports::{Download, ImageRequest};

#[tokio::main]
async fn main() {
    let cli = GenerateCli::parse();
    // .env may carry RUST_LOG, so it is read first
    dotenv::dotenv().ok();
    init_logging(env!("CARGO_CRATE_NAME"), cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(cli: GenerateCli) -> Result<(), ImageError> {
    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(ImageError::Config)?;

    let prompt = cli.resolve_prompt()?;

    // Resolve and validate parameters
    let model = resolve_model(cli.model.as_deref().unwrap_or(&config.generate.model));
    validate_model(&model).map_err(ImageError::InvalidArgument)?;
    let size = cli.size.clone().unwrap_or_else(|| config.generate.size.clone());
    validate_size(&model, &size).map_err(ImageError::InvalidArgument)?;
    let quality = cli.quality.clone().unwrap_or_else(|| config.generate.quality.clone());
    validate_quality(&model, &quality).map_err(ImageError::InvalidArgument)?;

    tracing::debug!(%model, %size, %quality, "resolved generation parameters");

    let request = ImageRequest { model, prompt, size, quality, count: 1 };

    // Live, recording, or replaying depending on the environment
    let (ctx, recording_session) = ServiceContext::from_env(&config)?;

    let fetched = generate_and_fetch(&ctx, &request).await;

    // Adapters hold the recorder; release them before finishing. Failed calls
    // are recorded too, so the cassette is written before errors propagate.
    drop(ctx);
    if let Some(session) = recording_session {
        match session.finish() {
            Ok(path) => eprintln!("Cassette saved: {}", path.display()),
            Err(e) => tracing::warn!("failed to save cassette: {e}"),
        }
    }

    let (url, download) = fetched?;
    let output_path = resolve_output_path(cli.output.as_deref(), &config.generate.output);

    match save_download(&download, &output_path)? {
        SaveOutcome::Saved(path) => {
            println!("Image saved as {}", path.display());
            if cli.ascii {
                let options = AsciiOptions::from(&config.ascii);
                println!("{}", render(load_image(&path)?, &options)?);
            } else if cli.show {
                show(&config.display.command, &path)?;
            }
        }
        SaveOutcome::Skipped { status } => {
            println!("Error: Failed to download the image from {url}");
            if cli.strict {
                return Err(ImageError::DownloadFailed { status, url });
            }
        }
    }

    Ok(())
}

/// Generate one image and download it; returns its URL and the download.
async fn generate_and_fetch(
    ctx: &ServiceContext,
    request: &ImageRequest,
) -> Result<(String, Download), ImageError> {
    let response = ctx.generator.generate(request).await?;
    let image = response.images.into_iter().next().ok_or_else(|| ImageError::Api {
        status: 200,
        message: "Response contained no images".to_string(),
    })?;
    if let Some(ref revised) = image.revised_prompt {
        tracing::debug!(%revised, "provider revised the prompt");
    }

    let download = ctx.downloader.fetch(&image.url).await?;
    Ok((image.url, download))
}

fn show(program: &str, path: &Path) -> Result<(), ImageError> {
    let outcome = run_command(&build_command(program, path))?;
    tracing::debug!(%outcome, "displayed generated image");
    Ok(())
}
