use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, RedCountError>;

#[derive(thiserror::Error, Debug)]
pub enum RedCountError {
    #[error("Usage: red-count <image_path>")]
    Usage,

    #[error("Failed to load image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image {} has no pixels ({width}x{height})", .path.display())]
    DegenerateImage {
        path: PathBuf,
        width: u32,
        height: u32,
    },

    #[error("Failed to save visualization to {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
