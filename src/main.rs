use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use cardcircle::core::geometry::Point;
use cardcircle::core::model::ContactDraft;
use cardcircle::layout::LayoutConfig;
use cardcircle::pipeline::{build_layout, export_card, scan_card, ExportFormat, PipelineConfig};

#[derive(Parser, Debug)]
#[command(name = "cardcircle")]
#[command(version, about = "Business-card text parsing and circular attendee layout", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse recognized business-card text into contact fields
    Card {
        /// Text file with one recognized line per line (`-` for stdin)
        input: PathBuf,

        /// Output directory; prints JSON to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format(s) to write into the output directory
        #[arg(short, long, value_enum, default_values_t = vec![Format::Json])]
        format: Vec<Format>,

        /// Reject recognized text larger than this many bytes
        #[arg(long)]
        max_input_bytes: Option<usize>,
    },

    /// Compute circular page layout positions for a number of items
    Layout {
        /// Number of items to arrange
        count: usize,

        /// JSON layout config; flags below override its fields
        #[arg(long)]
        config: Option<PathBuf>,

        /// Items per page
        #[arg(long)]
        capacity: Option<usize>,

        /// Circle radius
        #[arg(long)]
        radius: Option<f64>,

        /// Circle center x
        #[arg(long, allow_hyphen_values = true)]
        cx: Option<f64>,

        /// Circle center y
        #[arg(long, allow_hyphen_values = true)]
        cy: Option<f64>,

        /// Pin the first item at the center and page the rest around it
        #[arg(long)]
        pin_first: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum Format {
    Json,
    Text,
}

impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => ExportFormat::Json,
            Format::Text => ExportFormat::Text,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Card {
            input,
            output,
            format,
            max_input_bytes,
        } => run_card(input, output, format, max_input_bytes),
        Commands::Layout {
            count,
            config,
            capacity,
            radius,
            cx,
            cy,
            pin_first,
        } => {
            let mut layout = match config {
                Some(path) => LayoutConfig::from_json_file(&path)?,
                None => LayoutConfig::default(),
            };
            if let Some(capacity) = capacity {
                layout.page_capacity = capacity;
            }
            if let Some(radius) = radius {
                layout.radius = radius;
            }
            layout.center = Point::new(cx.unwrap_or(layout.center.x), cy.unwrap_or(layout.center.y));
            layout.pin_first |= pin_first;
            run_layout(count, layout)
        }
    }
}

fn run_card(
    input: PathBuf,
    output: Option<PathBuf>,
    formats: Vec<Format>,
    max_input_bytes: Option<usize>,
) -> Result<()> {
    if input.as_os_str() != "-" && !input.is_file() {
        anyhow::bail!("Input is not a file: {}", input.display());
    }

    let mut config = PipelineConfig::new(input.clone(), output.clone().unwrap_or_default());
    if let Some(limit) = max_input_bytes {
        config.detector.max_input_bytes = limit;
    }

    let card = scan_card(&config)
        .with_context(|| format!("Failed to read card text: {}", input.display()))?;

    match output {
        Some(dir) => {
            let formats: Vec<ExportFormat> = formats.into_iter().map(ExportFormat::from).collect();
            export_card(&card, &dir, &formats)
                .with_context(|| format!("Failed to export to: {}", dir.display()))?;
            info!(output = %dir.display(), "card exported");
        }
        None => {
            let draft = ContactDraft::from_card(card);
            println!("{}", serde_json::to_string_pretty(&draft)?);
        }
    }

    Ok(())
}

fn run_layout(count: usize, config: LayoutConfig) -> Result<()> {
    let frame = build_layout(count, config)?;
    println!("{}", serde_json::to_string_pretty(&frame)?);
    Ok(())
}
