//! imgtools - small terminal image programs.
//!
//! - `display-image` hands an image to an external terminal renderer, or
//!   cycles through a directory of them.
//! - `generate-image` creates an image from a prompt with DALL-E and saves it.
//! - `img2ascii` prints an image as ASCII art.
//!
//! The binaries are thin; the shared pieces live here.

pub mod adapters;
pub mod ascii;
pub mod cassette;
pub mod cli;
pub mod config;
pub mod context;
pub mod display;
pub mod error;
pub mod logging;
pub mod model;
pub mod output;
pub mod params;
pub mod paths;
pub mod ports;
pub mod slideshow;

pub use error::ImageError;
