use anyhow::Result;
use clap::Parser;
use red_count::{red_detect, RedCountError};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "red-count",
    version,
    about = "Count red pixels in an image and save a highlighted visualization"
)]
struct Cli {
    /// Path to the image to analyze (PNG, JPEG, BMP, ...).
    #[clap(value_name = "IMAGE_PATH")]
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli) {
        Err(RedCountError::Usage) => {
            println!("{}", RedCountError::Usage);
            Ok(())
        }
        result => {
            result?;
            Ok(())
        }
    }
}

fn run(cli: Cli) -> red_count::Result<PathBuf> {
    let input = cli.input.ok_or(RedCountError::Usage)?;
    red_detect::run(red_detect::Args::new(input))
}
