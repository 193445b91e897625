use crate::error::{RedCountError, Result};
use crate::report::RedPixelReport;
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageBuffer, ImageEncoder, ImageError, Rgb, RgbImage,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Lowest red channel value a pixel may have to count as red
pub const DEFAULT_MIN_RED: u8 = 150;

/// Factor by which red has to exceed both green and blue
pub const DEFAULT_RED_RATIO: f64 = 1.2;

/// Where the visualization is written when no destination is given
pub const DEFAULT_OUTPUT: &str = "highlighted.png";

/// Color used for detected pixels in the visualization
pub const HIGHLIGHT: Rgb<u8> = Rgb([255, 0, 0]);

/// Thresholds of the red pixel heuristic
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionParams {
    pub min_red: u8,
    pub red_ratio: f64,
}

impl Default for DetectionParams {
    fn default() -> Self {
        Self {
            min_red: DEFAULT_MIN_RED,
            red_ratio: DEFAULT_RED_RATIO,
        }
    }
}

impl DetectionParams {
    pub fn is_red(&self, pixel: &Rgb<u8>) -> bool {
        let [r, g, b] = pixel.0;
        is_red(r, g, b, self.min_red, self.red_ratio)
    }
}

#[derive(Debug, Clone)]
pub struct Args {
    pub input: PathBuf,
    pub output: PathBuf,
    pub params: DetectionParams,
}

impl Args {
    /// Analyze `input` with the default thresholds, writing to `highlighted.png`
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            params: DetectionParams::default(),
        }
    }
}

/// A pixel is red when its red channel reaches `min_red` and is at least
/// `red_ratio` times the larger of green and blue.
pub fn is_red(r: u8, g: u8, b: u8, min_red: u8, red_ratio: f64) -> bool {
    r >= min_red && f64::from(r) >= red_ratio * f64::from(g.max(b))
}

/// Count the pixels of `image` that pass [`is_red`]
pub fn count_red_pixels(image: &RgbImage, params: &DetectionParams) -> u64 {
    image.pixels().filter(|pixel| params.is_red(pixel)).count() as u64
}

/// Build a visualization of `image`: detected pixels become pure red, every
/// other pixel is dimmed to a quarter of its brightness.
pub fn highlight_red_pixels(image: &RgbImage, params: &DetectionParams) -> RgbImage {
    let (width, height) = image.dimensions();

    ImageBuffer::from_fn(width, height, |x, y| {
        let pixel = image.get_pixel(x, y);
        if params.is_red(pixel) {
            HIGHLIGHT
        } else {
            dim_pixel(pixel)
        }
    })
}

/// Scale each channel to 25%, truncating toward zero
pub fn dim_pixel(pixel: &Rgb<u8>) -> Rgb<u8> {
    let [r, g, b] = pixel.0;
    Rgb([
        (f64::from(r) * 0.25) as u8,
        (f64::from(g) * 0.25) as u8,
        (f64::from(b) * 0.25) as u8,
    ])
}

/// Decode an image and flatten it to 8-bit RGB (alpha and palette dropped)
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let source = image::open(path).map_err(|source| RedCountError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        source.width(),
        source.height(),
        source.color()
    );

    Ok(source.into_rgb8())
}

/// Write `image` as an RGB PNG, whatever the extension of `path`
pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    let encode_error = |source: ImageError| RedCountError::Encode {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(|err| encode_error(ImageError::IoError(err)))?;
    let mut out_file = BufWriter::new(file);
    write_png(image, &mut out_file).map_err(encode_error)?;
    out_file
        .flush()
        .map_err(|err| encode_error(ImageError::IoError(err)))?;

    log::info!("Wrote {}", path.display());
    Ok(())
}

// Encode RGB pixel data as PNG
fn write_png<W: Write>(image: &RgbImage, w: W) -> image::ImageResult<()> {
    let encoder =
        PngEncoder::new_with_quality(w, CompressionType::Default, PngFilterType::Adaptive);
    encoder.write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgb8)
}

/// Decode the input image, count its red pixels and build the report
pub fn analyze_image(args: &Args) -> Result<(RgbImage, RedPixelReport)> {
    let image = load_image(&args.input)?;
    let (width, height) = image.dimensions();

    log::debug!(
        "Detecting red pixels with min_red={} red_ratio={}",
        args.params.min_red,
        args.params.red_ratio
    );

    let red_count = count_red_pixels(&image, &args.params);
    let report = RedPixelReport::new(&args.input, width, height, red_count)?;

    Ok((image, report))
}

/// Print the report for `args.input`, then write and announce the visualization
pub fn run(args: Args) -> Result<PathBuf> {
    let (image, report) = analyze_image(&args)?;
    println!("{report}");

    let highlighted = highlight_red_pixels(&image, &args.params);
    save_png(&highlighted, &args.output)?;

    println!();
    println!("Saved visualization to: {}", args.output.display());

    Ok(args.output)
}
