use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ascii_canvas::models::AppConfig;
use ascii_canvas::rendering::{decode_png_file, fallback_sprite, AtlasLayout, FontAtlas};
use ascii_canvas::services::{compose_image, compose_text, terminal_size, Demo, Placement, Screen};

#[derive(Parser)]
#[command(name = "ascii-canvas")]
#[command(about = "Render PNG images as monochrome terminal text art")]
struct Cli {
    /// YAML config file (defaults to $CONFIG_FILE)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a PNG image once
    Render {
        /// PNG image to render
        image: PathBuf,

        /// Canvas width in characters (defaults to the terminal width)
        #[arg(long)]
        columns: Option<u16>,

        /// Canvas height in characters (defaults to the terminal height)
        #[arg(long)]
        rows: Option<u16>,

        /// Left edge of the image on the canvas, in pixels
        #[arg(long, allow_hyphen_values = true)]
        x: Option<f64>,

        /// Top edge of the image on the canvas, in pixels
        #[arg(long, allow_hyphen_values = true)]
        y: Option<f64>,

        /// Image width on the canvas, in pixels (negative mirrors)
        #[arg(long, allow_hyphen_values = true)]
        width: Option<f64>,

        /// Image height on the canvas, in pixels (negative mirrors)
        #[arg(long, allow_hyphen_values = true)]
        height: Option<f64>,

        /// Rotate the image about its center, in degrees
        #[arg(long, allow_hyphen_values = true)]
        rotate: Option<f64>,

        /// Write the text art to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Render a string from a font atlas
    Text {
        /// Text to draw
        text: String,

        /// Font atlas PNG (defaults to font.path from the config)
        #[arg(short, long)]
        font: Option<PathBuf>,

        /// Glyph height in pixels (defaults to demo.text_size)
        #[arg(long)]
        size: Option<f64>,

        /// Canvas width in characters (defaults to the terminal width)
        #[arg(long)]
        columns: Option<u16>,

        /// Canvas height in characters (defaults to the terminal height)
        #[arg(long)]
        rows: Option<u16>,

        /// Write the text art to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Run the animated demo
    Demo {
        /// Sprite image (defaults to a built-in disc)
        image: Option<PathBuf>,

        /// Font atlas PNG for the caption (defaults to font.path from the config)
        #[arg(short, long)]
        font: Option<PathBuf>,

        /// Stop after this many frames
        #[arg(long)]
        frames: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never land inside a frame
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ascii_canvas=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config_path = cli
        .config
        .clone()
        .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));
    let config = AppConfig::load(config_path.as_deref());

    match cli.command {
        Some(Commands::Render {
            image,
            columns,
            rows,
            x,
            y,
            width,
            height,
            rotate,
            output,
        }) => {
            let placement = Placement {
                x,
                y,
                width,
                height,
                rotate,
            };
            run_render_command(&config, &image, columns, rows, &placement, output.as_deref())
        }
        Some(Commands::Text {
            text,
            font,
            size,
            columns,
            rows,
            output,
        }) => run_text_command(&config, &text, font, size, columns, rows, output.as_deref()),
        Some(Commands::Demo {
            image,
            font,
            frames,
        }) => run_demo_command(&config, image.as_deref(), font, frames),
        None => {
            run_status_command(&config, config_path.as_deref());
            Ok(())
        }
    }
}

/// Terminal size with per-axis overrides from the command line.
fn canvas_size(config: &AppConfig, columns: Option<u16>, rows: Option<u16>) -> (u16, u16) {
    let (term_columns, term_rows) = terminal_size(&config.terminal);
    (columns.unwrap_or(term_columns), rows.unwrap_or(term_rows))
}

/// Print a one-shot canvas to stdout or write it to a file.
fn emit(canvas: &canvas_core::PixelBuffer, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Screen::new(BufWriter::new(file), false)
                .present(canvas)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Rendered {}", path.display());
        }
        None => {
            Screen::new(std::io::stdout().lock(), false)
                .present(canvas)
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}

fn load_font(config: &AppConfig, font: Option<PathBuf>) -> anyhow::Result<Option<FontAtlas>> {
    let Some(path) = font.or_else(|| config.font.path.clone()) else {
        return Ok(None);
    };
    let image = decode_png_file(&path)
        .with_context(|| format!("Failed to load font atlas {}", path.display()))?;
    Ok(Some(FontAtlas::new(image, AtlasLayout::from(&config.font))))
}

fn run_render_command(
    config: &AppConfig,
    image: &Path,
    columns: Option<u16>,
    rows: Option<u16>,
    placement: &Placement,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let source = decode_png_file(image)
        .with_context(|| format!("Failed to load image {}", image.display()))?;
    let (columns, rows) = canvas_size(config, columns, rows);
    let canvas = compose_image(&source, columns, rows, placement);
    emit(&canvas, output)
}

fn run_text_command(
    config: &AppConfig,
    text: &str,
    font: Option<PathBuf>,
    size: Option<f64>,
    columns: Option<u16>,
    rows: Option<u16>,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let atlas = load_font(config, font)?.context("No font atlas given (use --font or font.path)")?;
    let (columns, rows) = canvas_size(config, columns, rows);
    let size = size.unwrap_or(config.demo.text_size);
    let canvas = compose_text(&atlas, text, size, columns, rows);
    emit(&canvas, output)
}

fn run_demo_command(
    config: &AppConfig,
    image: Option<&Path>,
    font: Option<PathBuf>,
    frames: Option<u64>,
) -> anyhow::Result<()> {
    let fallback_size = config.demo.sprite_size.max(1.0) as usize;
    let sprite = match image {
        Some(path) => decode_png_file(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), %e, "Failed to load sprite, using built-in");
            fallback_sprite(fallback_size)
        }),
        None => fallback_sprite(fallback_size),
    };
    let font = load_font(config, font)?;

    let demo = Demo::new(&config.demo, &sprite, font.as_ref());
    let mut screen = Screen::new(std::io::stdout().lock(), config.terminal.home_cursor);
    let shown = demo
        .run(
            &mut screen,
            || terminal_size(&config.terminal),
            frames,
            &mut rand::thread_rng(),
        )
        .context("Demo output failed")?;

    tracing::info!(frames = shown, "Demo finished");
    Ok(())
}

/// Show version, environment and effective configuration
fn run_status_command(config: &AppConfig, config_path: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("CONFIG_FILE").ok();
    let rust_log = std::env::var("RUST_LOG").ok();

    println!("ascii-canvas v{VERSION}");
    println!("Monochrome text art for the terminal\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG    = {}",
        rust_log.as_deref().unwrap_or("ascii_canvas=warn (default)")
    );

    println!("\nConfiguration:");
    let source = match config_path {
        Some(path) if path.exists() => path.display().to_string(),
        Some(path) => format!("defaults ({} not found)", path.display()),
        None => "defaults".to_string(),
    };
    println!("  Source:  {source}");

    let (columns, rows) = terminal_size(&config.terminal);
    println!("\nTerminal:");
    println!("  Size:        {columns}x{rows} characters");
    println!(
        "  Fallback:    {}x{}",
        config.terminal.default_columns, config.terminal.default_rows
    );
    println!("  Home cursor: {}", config.terminal.home_cursor);

    let demo = &config.demo;
    println!("\nDemo:");
    println!("  Frame interval: {} ms", demo.frame_interval_ms);
    println!("  Wobble:         ±{}°", demo.wobble_degrees);
    println!("  Sprite size:    {}", demo.sprite_size);
    println!(
        "  Caption:        {:?} (size {}, jitter {})",
        demo.text, demo.text_size, demo.text_jitter
    );
    println!("  Gradient:       {}", demo.gradient);

    println!("\nFont:");
    match &config.font.path {
        Some(path) => println!("  Atlas: {}", path.display()),
        None => println!("  Atlas: (not set)"),
    }
    println!("  Grid:  {}x{}", config.font.columns, config.font.rows);

    println!("\nUsage:");
    println!("  ascii-canvas render <IMAGE>    Render an image once");
    println!("  ascii-canvas text <TEXT>       Render text from a font atlas");
    println!("  ascii-canvas demo [IMAGE]      Run the animated demo");
    println!("  ascii-canvas --help            Show all options");
}
