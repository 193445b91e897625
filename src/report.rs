//! Text report for a red pixel analysis
//!
//! Holds the derived numbers for one image (total pixels, red pixel count and
//! their ratio) and renders them in the fixed layout printed by the CLI.

use crate::error::{RedCountError, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// Result of analyzing one image
#[derive(Debug, Clone, PartialEq)]
pub struct RedPixelReport {
    /// Path of the analyzed image, as given by the caller
    pub image: PathBuf,

    /// width × height of the decoded image
    pub total_pixels: u64,

    /// Number of pixels classified as red
    pub red_count: u64,

    /// red_count × 100 / total_pixels, always within [0, 100]
    pub percentage: f64,
}

impl RedPixelReport {
    /// Build a report for an image of the given dimensions.
    ///
    /// Fails with [`RedCountError::DegenerateImage`] when the image has no
    /// pixels, since the percentage is undefined there.
    pub fn new(image: &Path, width: u32, height: u32, red_count: u64) -> Result<Self> {
        let total_pixels = u64::from(width) * u64::from(height);
        let percentage =
            red_percentage(red_count, total_pixels).ok_or_else(|| RedCountError::DegenerateImage {
                path: image.to_path_buf(),
                width,
                height,
            })?;

        Ok(Self {
            image: image.to_path_buf(),
            total_pixels,
            red_count,
            percentage,
        })
    }
}

impl fmt::Display for RedPixelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Image: {}", self.image.display())?;
        writeln!(f, "Total pixels: {}", format_thousands(self.total_pixels))?;
        writeln!(f)?;
        writeln!(f, "Red Pixels Detected:")?;
        writeln!(f, "  Count: {}", format_thousands(self.red_count))?;
        write!(f, "  Percentage: {:.3}%", self.percentage)
    }
}

/// Percentage of red pixels, or `None` for an empty image
pub fn red_percentage(red_count: u64, total_pixels: u64) -> Option<f64> {
    if total_pixels == 0 {
        return None;
    }

    Some(red_count as f64 * 100.0 / total_pixels as f64)
}

/// Format an integer with comma thousands separators (`1234567` -> `1,234,567`)
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
