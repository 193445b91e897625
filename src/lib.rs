pub mod error;
pub mod red_detect;
pub mod report;

pub use error::{RedCountError, Result};
pub use red_detect::{
    analyze_image, count_red_pixels, highlight_red_pixels, is_red, run, Args, DetectionParams,
};
pub use report::RedPixelReport;
