use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {what}: {source}")]
    Decode {
        what: String,
        #[source]
        source: image::ImageError,
    },
    #[error("image {0} has zero size")]
    Empty(String),
}

/// 8-bit RGBA pixels with the rows stored bottom-up, so row 0 is the last
/// row of the source file (GL texture origin).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl RgbaImage {
    pub fn load_png(path: impl AsRef<Path>) -> Result<Self, TextureError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| TextureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let img = Self::decode_png(&bytes, &path.display().to_string())?;
        log::info!(
            target: "assets",
            "loaded texture {} ({}x{})",
            path.display(),
            img.width,
            img.height
        );
        Ok(img)
    }

    pub fn from_png_bytes(bytes: &[u8]) -> Result<Self, TextureError> {
        Self::decode_png(bytes, "<memory>")
    }

    fn decode_png(bytes: &[u8], what: &str) -> Result<Self, TextureError> {
        // Any bit depth / colour type: palette, grey and 16-bit all end up RGBA8.
        let decoded = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
            .map_err(|source| TextureError::Decode {
                what: what.to_string(),
                source,
            })?;
        let rgba = image::imageops::flip_vertical(&decoded.to_rgba8());
        let (width, height) = rgba.dimensions();
        if width == 0 || height == 0 {
            return Err(TextureError::Empty(what.to_string()));
        }
        Ok(Self {
            width,
            height,
            pixels: rgba.into_raw(),
        })
    }

    /// RGBA of the pixel at `(x, row)` in bottom-up row order.
    pub fn pixel(&self, x: u32, row: u32) -> [u8; 4] {
        let i = ((row * self.width + x) * 4) as usize;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    pub fn row_bytes(&self) -> usize {
        self.width as usize * 4
    }
}
