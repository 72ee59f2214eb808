/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::io;
use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read input")]
    ReadInput(#[source] io::Error),
    #[error("failed to open image {}", path.display())]
    OpenImage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode image {}", path.display())]
    DecodeImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
