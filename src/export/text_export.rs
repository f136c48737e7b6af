use std::fs;
use std::path::PathBuf;

use anyhow::Result;

use crate::core::model::ParsedBusinessCard;
use crate::export::Exporter;

#[derive(Debug, Clone)]
pub struct TextExporter {
    out_dir: PathBuf,
}

impl TextExporter {
    pub fn new(out_dir: PathBuf) -> Self {
        Self { out_dir }
    }

    pub fn format_card(card: &ParsedBusinessCard) -> String {
        let mut out = String::new();
        let fields = [
            ("Name", card.name.as_deref()),
            ("Email", card.email.as_deref()),
            ("Phone", card.phone.as_deref()),
        ];
        for (label, value) in fields {
            if let Some(value) = value {
                out.push_str(&format!("{label}: {value}\n"));
            }
        }
        if let Some(address) = &card.address {
            // Continuation lines of a multi-line address are indented under the label.
            out.push_str(&format!("Address: {}\n", address.replace('\n', "\n         ")));
        }
        for url in &card.urls {
            out.push_str(&format!("URL: {url}\n"));
        }
        out
    }
}

impl Exporter for TextExporter {
    fn export(&self, card: &ParsedBusinessCard) -> Result<()> {
        fs::create_dir_all(&self.out_dir)?;
        fs::write(self.out_dir.join("card.txt"), Self::format_card(card))?;
        Ok(())
    }
}
