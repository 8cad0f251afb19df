mod frame_image;
mod hex_stream;

#[cfg(test)]
pub(crate) use frame_image::frame_file_name;
pub(crate) use frame_image::{render_frame, save_frame};
pub(crate) use hex_stream::HexChannelWriter;

use std::path::PathBuf;

/// Errors that can occur when writing generator output
#[derive(thiserror::Error, Debug)]
pub enum OutputError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to save frame image {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
