//! Pixmark: two-color pixel art as Markdown text.
//!
//! Pixmark turns a strictly two-color image into a Markdown document that,
//! rendered with a proportional font and inline code spans, reproduces the
//! image as a grid of filled and blank cells. It is meant for posting pixel
//! art on Markdown-only platforms such as forums.
//!
//! # Modules
//!
//! - [`raster`]: Decoded image access (colors, pixel grids, histograms)
//! - [`palette`]: Filled/blank color assignment and pixel classification
//! - [`render`]: The Markdown row renderer
//! - [`preview`]: ASCII preview of the classified grid
//! - [`inspect`]: Image inspection reports
//! - [`prompt`]: Interactive confirmation
//! - [`error`]: Error types for pixmark operations

pub mod error;
pub mod inspect;
pub mod palette;
pub mod preview;
pub mod prompt;
pub mod raster;
pub mod render;

use std::fs;
use std::io;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

pub use error::PixmarkError;

use palette::Palette;
use preview::PreviewOptions;
use raster::{PixelGrid, Raster};
use render::{
    FormattingConfig, DEFAULT_BLOCK_WIDTH, DEFAULT_CHAR_WIDTH_PX, DEFAULT_CONTAINER_OVERHEAD_PX,
    DEFAULT_SPACE_CHAR_WIDTH_PX,
};

/// The pixmark CLI application.
#[derive(Parser)]
#[command(name = "pixmark")]
#[command(version, about)]
#[command(propagate_version = true)]
struct Cli {
    /// Print debug information; repeat for a per-cell trace.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    debug: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Convert a two-color image to a Markdown document.
    Convert(ConvertArgs),
    /// Print an ASCII preview of how the image will be classified.
    Preview(PreviewArgs),
    /// Show an image's dimensions, colors and filled/blank assignment.
    Inspect(InspectArgs),
}

/// Palette selection shared by all subcommands.
#[derive(clap::Args)]
struct PaletteArgs {
    /// Fill in the lighter pixels and leave the darker ones blank.
    #[arg(short, long, env = "PIXMARK_INVERT")]
    invert: bool,
}

/// Cell appearance shared by convert and preview.
#[derive(clap::Args)]
struct BlockArgs {
    /// Character inside each Markdown 'pixel'. '#' or '%' read well on light
    /// backgrounds; a non-breaking space suits themes where code spans
    /// already stand out from the background.
    #[arg(
        short = 'b',
        long,
        value_name = "CHR",
        default_value = "#",
        env = "PIXMARK_BLOCK_CHAR"
    )]
    block_char: String,

    /// Characters per 'pixel'. 2 keeps a perfect grid; 1 gives squarer but
    /// slightly uneven pixels.
    #[arg(
        short = 'w',
        long,
        value_name = "INT",
        default_value_t = DEFAULT_BLOCK_WIDTH,
        env = "PIXMARK_BLOCK_WIDTH"
    )]
    block_width: u32,
}

/// Arguments for the convert subcommand.
#[derive(clap::Args)]
struct ConvertArgs {
    /// Image file to convert.
    image: PathBuf,

    /// File to write the Markdown to.
    #[arg(default_value = "image.md")]
    outfile: PathBuf,

    #[command(flatten)]
    palette: PaletteArgs,

    #[command(flatten)]
    block: BlockArgs,

    /// Rendered width of a space in the target font, in pixels.
    #[arg(long, value_name = "PX", default_value_t = DEFAULT_SPACE_CHAR_WIDTH_PX)]
    space_width: f64,

    /// Rendered width of a monospace character, in pixels.
    #[arg(long, value_name = "PX", default_value_t = DEFAULT_CHAR_WIDTH_PX)]
    char_width: f64,

    /// Padding the renderer adds around each code span, in pixels.
    #[arg(long, value_name = "PX", default_value_t = DEFAULT_CONTAINER_OVERHEAD_PX)]
    container_width: f64,

    /// Check every pixel against the two palette colors before the preview.
    /// Decoded image files already fail on a third color when the palette
    /// is detected; this matters for rasters whose color list comes from
    /// metadata.
    #[arg(long)]
    strict: bool,

    /// Skip the confirmation prompt.
    #[arg(short, long)]
    yes: bool,
}

/// Arguments for the preview subcommand.
#[derive(clap::Args)]
struct PreviewArgs {
    /// Image file to preview.
    image: PathBuf,

    #[command(flatten)]
    palette: PaletteArgs,

    #[command(flatten)]
    block: BlockArgs,
}

/// Arguments for the inspect subcommand.
#[derive(clap::Args)]
struct InspectArgs {
    /// Image file to inspect.
    image: PathBuf,

    #[command(flatten)]
    palette: PaletteArgs,

    /// Output format for the report.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    output: ReportFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

/// Run the pixmark CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), PixmarkError> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match cli.command {
        Some(Commands::Convert(args)) => run_convert(args),
        Some(Commands::Preview(args)) => run_preview(args),
        Some(Commands::Inspect(args)) => run_inspect(args),
        None => {
            println!("pixmark {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Turn two-color pixel art into Markdown.");
            println!();
            println!("Run 'pixmark --help' for usage information.");
            Ok(())
        }
    }
}

/// Sets up stderr logging. `RUST_LOG` takes precedence over `-d`.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .try_init();
}

impl BlockArgs {
    fn formatting(&self) -> Result<FormattingConfig, PixmarkError> {
        Ok(FormattingConfig {
            block_char: FormattingConfig::parse_block_char(&self.block_char)?,
            block_width: self.block_width,
            ..Default::default()
        })
    }

    fn preview_options(&self) -> Result<PreviewOptions, PixmarkError> {
        let config = self.formatting()?;
        config.validate()?;
        Ok(PreviewOptions {
            block_width: config.block_width as usize,
            filled_char: config.block_char,
            ..Default::default()
        })
    }
}

/// Execute the convert subcommand.
fn run_convert(args: ConvertArgs) -> Result<(), PixmarkError> {
    let config = FormattingConfig {
        space_char_width_px: args.space_width,
        char_width_px: args.char_width,
        container_overhead_px: args.container_width,
        ..args.block.formatting()?
    };
    config.validate()?;

    let grid = PixelGrid::open(&args.image)?;
    println!(
        "{}: {}x{}",
        args.image.display(),
        grid.width(),
        grid.height()
    );

    let palette = Palette::detect(&grid, args.palette.invert)?;
    println!(
        "Color for 'filled': {}  Color for 'blank': {}",
        palette.filled, palette.blank
    );

    if args.strict {
        palette.verify(&grid)?;
    }

    let opts = args.block.preview_options()?;
    println!();
    print!("{}", preview::ascii_art(&grid, &palette, &opts)?);
    println!();

    if !args.yes {
        let stdin = io::stdin();
        let confirmed = prompt::confirm(
            "Does that look correct?",
            true,
            &mut stdin.lock(),
            &mut io::stdout(),
        )?;
        if !confirmed {
            return Err(PixmarkError::Aborted);
        }
    }

    let rendering = render::render_image(&grid, &palette, &config)?;
    fs::write(&args.outfile, &rendering.markdown)?;

    println!("Wrote {}", args.outfile.display());
    print!("{}", rendering.stats);

    Ok(())
}

/// Execute the preview subcommand.
fn run_preview(args: PreviewArgs) -> Result<(), PixmarkError> {
    let opts = args.block.preview_options()?;
    let grid = PixelGrid::open(&args.image)?;
    let palette = Palette::detect(&grid, args.palette.invert)?;

    print!("{}", preview::ascii_art(&grid, &palette, &opts)?);
    Ok(())
}

/// Execute the inspect subcommand.
fn run_inspect(args: InspectArgs) -> Result<(), PixmarkError> {
    let grid = PixelGrid::open(&args.image)?;
    let opts = inspect::InspectOptions {
        invert: args.palette.invert,
        ..Default::default()
    };
    let report = inspect::inspect_image(&grid, &opts);

    match args.output {
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        ReportFormat::Text => print!("{}", report),
    }

    Ok(())
}
