//! CLI argument parsing with clap.

use std::path::PathBuf;

use clap::Parser;

/// Display an image in the terminal through an external renderer (`imgcat`).
#[derive(Parser, Debug)]
#[command(name = "display-image", version, about)]
pub struct DisplayCli {
    /// Image to display (default: `~/Desktop/cat.png`).
    pub image: Option<PathBuf>,

    /// Renderer command run through `sh -c` with the image path appended.
    #[arg(short, long)]
    pub command: Option<String>,

    /// Cycle through every image in this directory instead; `q` quits.
    #[arg(long, value_name = "DIR", conflicts_with = "image")]
    pub slideshow: Option<PathBuf>,

    /// Seconds each slideshow image stays on screen.
    #[arg(long, default_value_t = 3, requires = "slideshow")]
    pub interval: u64,

    /// Show slideshow images as ASCII art instead of through the renderer.
    #[arg(long, requires = "slideshow")]
    pub ascii: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Generate an image from a prompt with DALL-E and save it locally.
#[derive(Parser, Debug)]
#[command(name = "generate-image", version, about)]
pub struct GenerateCli {
    /// Prompt for generating the image.
    #[arg(conflicts_with = "prompt_file")]
    pub prompt: Option<String>,

    /// Path to a file containing the prompt text.
    #[arg(short = 'p', long, conflicts_with = "prompt")]
    pub prompt_file: Option<String>,

    /// Model name or alias (default: dall-e-3).
    #[arg(short, long)]
    pub model: Option<String>,

    /// Output resolution, e.g. 1024x1024.
    #[arg(short, long)]
    pub size: Option<String>,

    /// Quality tier: standard, hd.
    #[arg(short, long)]
    pub quality: Option<String>,

    /// Output file path (default: generated_image.png).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Exit with an error when the image download does not return 200.
    #[arg(long)]
    pub strict: bool,

    /// Display the saved image through the configured renderer.
    #[arg(long)]
    pub show: bool,

    /// Print the saved image as ASCII art.
    #[arg(long)]
    pub ascii: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl GenerateCli {
    /// Resolve the prompt from either the positional argument or the file flag.
    ///
    /// # Errors
    ///
    /// Returns an error if neither prompt nor prompt-file is provided,
    /// or if the file cannot be read.
    pub fn resolve_prompt(&self) -> Result<String, std::io::Error> {
        if let Some(ref text) = self.prompt {
            Ok(text.clone())
        } else if let Some(ref path) = self.prompt_file {
            std::fs::read_to_string(path).map(|s| s.trim_end().to_string())
        } else {
            Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Provide a prompt string or use -p/--prompt-file",
            ))
        }
    }
}

/// Convert an image to ASCII art and print it.
#[derive(Parser, Debug)]
#[command(name = "img2ascii", version, about)]
pub struct AsciiCli {
    /// Image to convert (default: `~/Desktop/milk.png`).
    pub image: Option<PathBuf>,

    /// Output width in characters (default: 169).
    #[arg(short = 'w', long, value_parser = clap::value_parser!(u32).range(1..))]
    pub columns: Option<u32>,

    /// Character cell height-to-width ratio (default: 2.2).
    #[arg(long)]
    pub width_ratio: Option<f32>,

    /// Colour each character with ANSI escapes.
    #[arg(long)]
    pub color: bool,

    /// Fit the width to the terminal (ignored when `--columns` is given).
    #[arg(long)]
    pub fit: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}
