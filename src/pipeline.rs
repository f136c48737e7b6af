use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::card::{CardClassifier, DetectorConfig, RegexPatternDetector, SimpleCardClassifier};
use crate::core::model::ParsedBusinessCard;
use crate::export::{Exporter, JsonExporter, TextExporter};
use crate::layout::{CircleFrame, CircleLayout, LayoutConfig, LayoutEngine};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Text,
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Recognized text, one line per card line; `-` reads stdin.
    pub input: PathBuf,
    pub output: PathBuf,
    pub detector: DetectorConfig,
}

impl PipelineConfig {
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        Self {
            input,
            output,
            detector: DetectorConfig::default(),
        }
    }
}

pub fn read_lines(input: &Path) -> Result<Vec<String>> {
    let text = if input == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .with_context(|| "failed to read recognized text from stdin")?;
        buf
    } else {
        fs::read_to_string(input)
            .with_context(|| format!("failed to read recognized text: {}", input.display()))?
    };
    Ok(text.lines().map(str::to_string).collect())
}

pub fn scan_card(config: &PipelineConfig) -> Result<ParsedBusinessCard> {
    let lines = read_lines(&config.input)?;
    let detector = RegexPatternDetector::new().with_config(config.detector);
    let card = SimpleCardClassifier::with_detector(detector).classify(&lines);
    info!(
        lines = lines.len(),
        has_name = card.name.is_some(),
        urls = card.urls.len(),
        "classified business card"
    );
    Ok(card)
}

pub fn export_card(card: &ParsedBusinessCard, output: &Path, formats: &[ExportFormat]) -> Result<()> {
    for format in formats {
        match format {
            ExportFormat::Json => JsonExporter::new(output.to_path_buf()).export(card)?,
            ExportFormat::Text => TextExporter::new(output.to_path_buf()).export(card)?,
        }
    }
    Ok(())
}

pub fn build_layout(item_count: usize, config: LayoutConfig) -> Result<CircleFrame> {
    let frame = CircleLayout::new(config)
        .compute(item_count)
        .with_context(|| format!("failed to lay out {item_count} items"))?;
    info!(items = item_count, pages = frame.page_count(), "computed circle layout");
    Ok(frame)
}
