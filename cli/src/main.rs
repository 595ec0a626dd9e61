//! unslide CLI - PowerPoint slide extraction and rendering tool
//!
//! A command-line tool for converting PPTX presentations to the slide JSON
//! intermediate form and rendering slide JSON back to HTML.

use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use unslide::model::{Deck, ElementContent};
use unslide::render::{self, JsonFormat, RenderOptions};
use unslide::InputFormat;

/// PowerPoint slide extraction to JSON and HTML
#[derive(Parser)]
#[command(
    name = "unslide",
    author = "iyulab",
    version,
    about = "Extract and render PowerPoint slides",
    long_about = "unslide - PowerPoint slide extraction and rendering tool.\n\n\
                  Converts PPTX presentations to a slide JSON intermediate form\n\
                  and renders slide JSON to HTML or export specifications."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a presentation to slide JSON
    Json {
        /// Input .pptx file path
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit a single slide (zero-based index) instead of the deck
        #[arg(short, long)]
        slide: Option<usize>,

        /// Output compact JSON (no indentation)
        #[arg(long)]
        compact: bool,
    },

    /// Render a presentation or slide JSON to HTML
    Html {
        /// Input file path (.pptx or slide JSON)
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Directory for extracted images (default: assets/ beside output)
        #[arg(long)]
        assets_dir: Option<PathBuf>,

        /// Emit a bare slide fragment instead of a full page
        #[arg(long)]
        fragment: bool,

        /// Apply NFC normalization to run text
        #[arg(long)]
        normalize_text: bool,
    },

    /// Build inch-unit export specifications
    Deck {
        /// Input file path (.pptx or slide JSON)
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output compact JSON (no indentation)
        #[arg(long)]
        compact: bool,
    },

    /// Show presentation information
    Info {
        /// Input file path (.pptx or slide JSON)
        input: PathBuf,
    },

    /// Extract embedded media from a presentation
    Extract {
        /// Input .pptx file path
        input: PathBuf,

        /// Output directory for media files
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Json {
            input,
            output,
            slide,
            compact,
        } => {
            let pb = create_spinner("Parsing presentation...");
            let deck = unslide::parse_file(&input)?;
            pb.set_message("Rendering to JSON...");

            let format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };

            let json = match slide {
                Some(index) => {
                    let doc = deck.slide(index).ok_or_else(|| {
                        format!(
                            "slide index {} out of range ({} slides)",
                            index,
                            deck.slide_count()
                        )
                    })?;
                    render::to_json(doc, format)?
                }
                None => render::deck_to_json(&deck, format)?,
            };

            pb.finish_and_clear();
            write_output(output.as_ref(), &json)?;

            if let Some(path) = output {
                println!(
                    "{} Converted to JSON: {}",
                    "✓".green().bold(),
                    path.display()
                );
            }
        }

        Commands::Html {
            input,
            output,
            assets_dir,
            fragment,
            normalize_text,
        } => {
            let pb = create_spinner("Parsing input...");
            let deck = load_deck(&input)?;
            pb.set_message("Rendering to HTML...");

            let mut options = RenderOptions::new()
                .with_standalone(!fragment)
                .with_normalize_text(normalize_text)
                .with_title(input.file_stem().unwrap_or_default().to_string_lossy());

            // Extracted images land beside the output so relative URLs
            // resolve.
            if !deck.resources.is_empty() {
                if let Some(ref output) = output {
                    let assets = assets_dir
                        .unwrap_or_else(|| output.parent().unwrap_or(Path::new(".")).join("assets"));
                    write_resources(&deck, &assets)?;
                    let prefix = assets
                        .file_name()
                        .map(|n| format!("{}/", n.to_string_lossy()))
                        .unwrap_or_default();
                    options = options.with_asset_prefix(prefix);
                }
            }

            let html = render::render_deck(&deck, &options)?;

            pb.finish_and_clear();
            report_warnings(&deck);
            write_output(output.as_ref(), &html)?;

            if let Some(path) = output {
                println!(
                    "{} Rendered to HTML: {}",
                    "✓".green().bold(),
                    path.display()
                );
            }
        }

        Commands::Deck {
            input,
            output,
            compact,
        } => {
            let pb = create_spinner("Parsing input...");
            let deck = load_deck(&input)?;
            pb.set_message("Building export spec...");

            let specs = render::deck_spec(&deck);
            let json = if compact {
                serde_json::to_string(&specs)?
            } else {
                serde_json::to_string_pretty(&specs)?
            };

            pb.finish_and_clear();
            write_output(output.as_ref(), &json)?;

            if let Some(path) = output {
                println!(
                    "{} Export spec written: {}",
                    "✓".green().bold(),
                    path.display()
                );
            }
        }

        Commands::Info { input } => {
            let pb = create_spinner("Analyzing input...");
            let format = unslide::detect_format_from_path(&input)?;
            let deck = load_deck(&input)?;
            pb.finish_and_clear();

            let mut shapes = 0usize;
            let mut texts = 0usize;
            let mut paths = 0usize;
            let mut images = 0usize;
            let mut empty = 0usize;
            for slide in &deck.slides {
                for element in &slide.page_elements {
                    match &element.content {
                        ElementContent::Shape(s) if s.has_text() => texts += 1,
                        ElementContent::Shape(_) => shapes += 1,
                        ElementContent::Path(_) => paths += 1,
                        ElementContent::Image(_) => images += 1,
                        ElementContent::Empty => empty += 1,
                    }
                }
            }

            let warnings: usize = deck
                .slides
                .iter()
                .map(|s| unslide::assemble_slide(s).warnings.len())
                .sum();

            println!("{}", "Presentation Information".cyan().bold());
            println!("{}", "─".repeat(40));
            println!(
                "{}: {}",
                "File".bold(),
                input.file_name().unwrap_or_default().to_string_lossy()
            );
            println!("{}: {}", "Format".bold(), format);
            println!("{}: {}", "Slides".bold(), deck.slide_count());
            println!("{}: {}", "Resources".bold(), deck.resources.len());

            println!("\n{}", "Elements".cyan().bold());
            println!("{}", "─".repeat(40));
            println!("{}: {}", "Text shapes".bold(), texts);
            println!("{}: {}", "Plain shapes".bold(), shapes);
            println!("{}: {}", "Paths".bold(), paths);
            println!("{}: {}", "Images".bold(), images);
            println!("{}: {}", "Empty boxes".bold(), empty);

            if warnings > 0 {
                println!(
                    "\n{} {} normalization warning(s); rerun with RUST_LOG=warn for details",
                    "!".yellow().bold(),
                    warnings
                );
            }
        }

        Commands::Extract { input, output } => {
            let pb = create_spinner("Extracting media...");
            let deck = unslide::parse_file(&input)?;
            pb.finish_and_clear();

            fs::create_dir_all(&output)?;

            let mut count = 0;
            for resource in deck.resources.values() {
                resource.save_to(output.join(&resource.filename))?;
                count += 1;
            }

            println!(
                "{} Extracted {} media file(s) to {}",
                "✓".green().bold(),
                count,
                output.display()
            );
        }

        Commands::Version => {
            println!("unslide {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// Load either a PPTX package or a slide JSON document as a deck.
fn load_deck(input: &Path) -> Result<Deck, Box<dyn std::error::Error>> {
    match unslide::detect_format_from_path(input)? {
        InputFormat::Presentation => Ok(unslide::parse_file(input)?),
        InputFormat::SlideJson => {
            let json = fs::read_to_string(input)?;
            let doc = unslide::document_from_json(&json)?;
            let mut deck = Deck::new();
            deck.add_slide(doc);
            Ok(deck)
        }
    }
}

/// Write extracted resources under the assets directory, keyed paths
/// preserved (`media/image1.png`).
fn write_resources(deck: &Deck, assets: &Path) -> io::Result<()> {
    for (key, resource) in &deck.resources {
        let target = assets.join(key);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        resource.save_to(&target)?;
    }
    Ok(())
}

/// Print per-element normalization warnings to stderr.
fn report_warnings(deck: &Deck) {
    for slide in &deck.slides {
        for warning in unslide::assemble_slide(slide).warnings {
            eprintln!(
                "{}: element `{}`: {}",
                "warning".yellow().bold(),
                warning.element,
                warning.detail
            );
        }
    }
}

fn write_output(output: Option<&PathBuf>, content: &str) -> io::Result<()> {
    match output {
        Some(path) => fs::write(path, content),
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(content.as_bytes())
        }
    }
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
