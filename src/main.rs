use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ditherkit::models::{AppConfig, Overrides, Settings};
use ditherkit::rendering;

#[derive(Parser)]
#[command(name = "ditherkit")]
#[command(about = "Palette error-diffusion dithering for PNG images")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Palette and config options shared by every command
#[derive(Args)]
struct PaletteArgs {
    /// Palette as comma-separated hex RGB (e.g. "#000000,#FFFFFF,#FF0000")
    #[arg(short, long)]
    palette: Option<String>,

    /// YAML config file (mode, colour_space, palette)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Dither a PNG to the palette
    Dither {
        /// Input PNG file path
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Dither mode: "FloydSteinberg" or "Atkinson"
        #[arg(short, long)]
        mode: Option<String>,

        /// Colour space: "srgb", "lin-srgb" or "oklab"
        #[arg(short = 's', long, visible_alias = "color-space")]
        colour_space: Option<String>,

        #[command(flatten)]
        palette: PaletteArgs,
    },
    /// Write the original next to one dithered copy per colour space
    Compare {
        /// Input PNG file path
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// Dither mode: "FloydSteinberg" or "Atkinson"
        #[arg(short, long)]
        mode: Option<String>,

        #[command(flatten)]
        palette: PaletteArgs,
    },
    /// Print the resolved palette, one hex colour per line
    Palette {
        #[command(flatten)]
        palette: PaletteArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ditherkit=info,diffuse_dither=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Commands::Dither {
            input,
            output,
            mode,
            colour_space,
            palette,
        } => {
            let settings = resolve(&palette, mode, colour_space)?;
            run_dither_command(&input, &output, &settings)
        }
        Commands::Compare {
            input,
            output,
            mode,
            palette,
        } => {
            let settings = resolve(&palette, mode, None)?;
            run_compare_command(&input, &output, &settings)
        }
        Commands::Palette { palette } => {
            let settings = resolve(&palette, None, None)?;
            for color in settings.palette.colors() {
                println!("{}", color.to_hex());
            }
            Ok(())
        }
    }
}

/// Merge config file and flags; fails on bad names before any image I/O.
fn resolve(
    args: &PaletteArgs,
    mode: Option<String>,
    colour_space: Option<String>,
) -> anyhow::Result<Settings> {
    let file = AppConfig::load_optional(args.config.as_deref())?;
    let overrides = Overrides {
        mode,
        colour_space,
        palette: args.palette.clone(),
    };
    Ok(file.resolve(&overrides)?)
}

fn run_dither_command(input: &Path, output: &Path, settings: &Settings) -> anyhow::Result<()> {
    let png_data = std::fs::read(input)?;
    let png_bytes = rendering::dither_png(&png_data, settings)?;
    std::fs::write(output, &png_bytes)?;

    tracing::info!(
        mode = %settings.config.mode,
        colour_space = %settings.config.colour_space,
        palette = settings.palette.len(),
        "Dithered {}",
        input.display()
    );
    println!("Dithered {} ({} bytes)", output.display(), png_bytes.len());
    Ok(())
}

fn run_compare_command(input: &Path, output: &Path, settings: &Settings) -> anyhow::Result<()> {
    let png_data = std::fs::read(input)?;
    let png_bytes = rendering::compare_png(&png_data, settings)?;
    std::fs::write(output, &png_bytes)?;

    println!(
        "Compared {} (original | srgb | lin-srgb | oklab, {} bytes)",
        output.display(),
        png_bytes.len()
    );
    Ok(())
}
