/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::io::{self, Read};
use std::path::Path;

use crate::error::{Error, Result};

/// Reads `reader` to the end. Nothing is emitted until this returns.
pub fn read_all<R: Read>(mut reader: R) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(Error::ReadInput)?;
    tracing::debug!("read {} bytes", data.len());
    Ok(data)
}

pub fn read_stdin() -> Result<Vec<u8>> {
    read_all(io::stdin().lock())
}

/// Decodes an image and returns its pixels as headerless 8-bit RGB,
/// row-major, three bytes per pixel.
pub fn read_image(path: &Path) -> Result<Vec<u8>> {
    let img = image::ImageReader::open(path)
        .map_err(|source| Error::OpenImage {
            path: path.to_path_buf(),
            source,
        })?
        .with_guessed_format()
        .map_err(|source| Error::OpenImage {
            path: path.to_path_buf(),
            source,
        })?
        .decode()
        .map_err(|source| Error::DecodeImage {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgb8();

    let (width, height) = img.dimensions();
    tracing::debug!("decoded {}x{} image from {}", width, height, path.display());

    Ok(img.into_raw())
}
