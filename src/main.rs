use anyhow::{Context, Result};
use asciify::{
    DEFAULT_IMAGE_DIR, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH, Error, Footprint, GlyphRamp,
    convert, downscale, load, render_to, resolve,
};
use clap::{CommandFactory, Parser};
use image::GenericImageView;
use std::io::{self, BufWriter};
use std::path::PathBuf;

/// A CLI tool to display images in the terminal as ASCII art,
/// picking a denser character for every brighter pixel.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Name of the image, looked up inside --dir
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Directory the image name is resolved against
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_IMAGE_DIR)]
    dir: PathBuf,

    /// Largest width in pixels. Each pixel is printed three columns wide.
    #[arg(long, default_value_t = DEFAULT_MAX_WIDTH)]
    max_width: u32,

    /// Largest height in pixels (one pixel per line)
    #[arg(long, default_value_t = DEFAULT_MAX_HEIGHT)]
    max_height: u32,

    /// Size the output to the current terminal instead of --max-width/--max-height
    #[arg(short = 't', long, conflicts_with_all = ["max_width", "max_height"])]
    fit_terminal: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // 1. Nothing to draw without a file name
    let Some(file) = args.file.as_deref() else {
        println!("{}", Args::command().render_usage());
        println!(
            "Pass the name of an image in '{}' to render it.",
            args.dir.display()
        );
        return Ok(());
    };

    // 2. Load the image
    let path = resolve(&args.dir, file);
    let img = match load(&path) {
        Ok(img) => img,
        Err(Error::NotFound { path }) => {
            println!("Couldn't locate file: {}", path.display());
            return Ok(());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to open image {}", path.display()));
        }
    };

    // 3. Work out how much room we have
    let footprint = if args.fit_terminal {
        Footprint::terminal()
    } else {
        Footprint::new(args.max_width, args.max_height)
    };

    // 4. Shrink the image into that box
    let img = downscale(img, footprint);
    let (width, height) = img.dimensions();

    // 5. Brightness -> characters
    let glyphs = convert(&img, height, width, &GlyphRamp::default());

    // 6. Print
    let stdout = BufWriter::new(io::stdout().lock());
    render_to(&glyphs, stdout).context("Failed to write to stdout")?;

    Ok(())
}
