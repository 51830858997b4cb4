//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between `generate-image` and an
//! external system. Implementations live in `src/adapters/`.

pub mod image_downloader;
pub mod image_generator;

pub use image_downloader::{Download, ImageDownloader};
pub use image_generator::{ImageGenerator, ImageRequest};
