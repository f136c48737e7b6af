use std::fs;
use std::path::PathBuf;

use anyhow::Result;

use crate::core::model::{ContactDraft, ParsedBusinessCard};
use crate::export::Exporter;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    out_dir: PathBuf,
}

impl JsonExporter {
    pub fn new(out_dir: PathBuf) -> Self {
        Self { out_dir }
    }
}

impl Exporter for JsonExporter {
    fn export(&self, card: &ParsedBusinessCard) -> Result<()> {
        fs::create_dir_all(&self.out_dir)?;
        let path = self.out_dir.join("card.json");
        let draft = ContactDraft::from_card(card.clone());
        let data = serde_json::to_string_pretty(&draft)?;
        fs::write(path, data)?;
        Ok(())
    }
}
