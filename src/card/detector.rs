use anyhow::Result;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::card::text::line_of_offset;
use crate::core::model::{DetectedEntity, EntityKind, MAILTO_SCHEME};

/// Finds addresses, phone numbers and links in recognized text.
///
/// Implementations return matches in text order and never overlap two matches.
pub trait PatternDetector {
    fn detect(&self, text: &str) -> Result<Vec<DetectedEntity>>;
}

const MAILTO: &str = r"(?P<mailto>(?i:mailto):[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,})";
const WEB: &str = r#"(?P<web>(?:(?i:https?)://|(?i:www)\.)[^\s<>"]*[^\s<>".,;:!?)\]])"#;
const EMAIL: &str =
    r"(?P<email>[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(?:\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,})";
const ADDRESS: &str = concat!(
    r"(?P<address>\b\d{1,6}(?:[ \t]+[A-Za-z0-9.'\-]+){0,6}?[ \t]+",
    r"(?i:street|st|avenue|ave|road|rd|boulevard|blvd|lane|ln|drive|dr|way|court|ct|place|pl",
    r"|loop|parkway|pkwy|square|sq|terrace|highway|hwy|plaza)\b\.?",
    r"(?:,?[ \t]+(?i:suite|ste|unit|apt|floor|fl|#)[ \t]*#?[A-Za-z0-9\-]+)?",
    // Locality must fill the rest of its line: "City, ST" with an optional ZIP.
    r"(?:,?[ \t]*\n?[ \t]*[A-Za-z][A-Za-z .'\-]*,[ \t]*[A-Z]{2}\b",
    r"(?:[ \t]+\d{5}(?:-\d{4})?)?[ \t]*(?m:$))?)"
);
// Dates are digit groups too; matching them first keeps them out of phones.
const DATE: &str = concat!(
    r"(?P<date>\b(?:\d{4}[\-./]\d{1,2}[\-./]\d{1,2}",
    r"|\d{1,2}[\-./]\d{1,2}[\-./]\d{4})\b)"
);
const PHONE: &str = concat!(
    r"(?P<phone>(?:\+\d{1,3}[ .\-]?)?(?:\(\d{1,4}\)[ .\-]?|\b)",
    r"\d{2,4}(?:[ .\-]?\d{2,4}){1,4}\b)"
);
const DOMAIN: &str = concat!(
    r"(?P<domain>\b[A-Za-z0-9][A-Za-z0-9\-]*(?:\.[A-Za-z0-9\-]+)*\.",
    r"(?i:com|org|net|io|dev|app|co|me|ai|edu|gov|info|biz|tech|design|studio|xyz",
    r"|us|uk|ca|de|fr|in|ie|jp)\b",
    r#"(?:/[^\s<>"]*[^\s<>".,;:!?)\]])?)"#
);

// Alternation order decides ties at the same start offset.
static ENTITY_RE: Lazy<Regex> = Lazy::new(|| {
    let pattern = [MAILTO, WEB, EMAIL, ADDRESS, DATE, PHONE, DOMAIN].join("|");
    Regex::new(&pattern).expect("static regex")
});

const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DetectorConfig {
    pub max_input_bytes: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: 64 * 1024,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegexPatternDetector {
    config: DetectorConfig,
}

impl RegexPatternDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: DetectorConfig) -> Self {
        self.config = config;
        self
    }

    fn classify_capture(caps: &Captures<'_>) -> Option<EntityKind> {
        if let Some(m) = caps.name("mailto") {
            return Some(link_kind(m.as_str()));
        }
        if let Some(m) = caps.name("web") {
            let text = m.as_str();
            let has_scheme = text.to_ascii_lowercase().starts_with("http");
            return Some(if has_scheme {
                link_kind(text)
            } else {
                link_kind(&format!("http://{text}"))
            });
        }
        if let Some(m) = caps.name("email") {
            return Some(link_kind(&format!("{MAILTO_SCHEME}:{}", m.as_str())));
        }
        if caps.name("address").is_some() {
            return Some(EntityKind::Address);
        }
        if let Some(m) = caps.name("date") {
            debug!(text = m.as_str(), "skipping date");
            return None;
        }
        if let Some(m) = caps.name("phone") {
            let digits = m.as_str().chars().filter(|c| c.is_ascii_digit()).count();
            if (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits) {
                return Some(EntityKind::PhoneNumber);
            }
            debug!(text = m.as_str(), digits, "digit run is not a phone number");
            return None;
        }
        if let Some(m) = caps.name("domain") {
            return Some(link_kind(&format!("http://{}", m.as_str())));
        }
        None
    }
}

fn link_kind(raw: &str) -> EntityKind {
    match Url::parse(raw) {
        Ok(url) => EntityKind::Link(url),
        Err(err) => EntityKind::Other(format!("unparseable link: {err}")),
    }
}

impl PatternDetector for RegexPatternDetector {
    fn detect(&self, text: &str) -> Result<Vec<DetectedEntity>> {
        if text.len() > self.config.max_input_bytes {
            anyhow::bail!(
                "recognized text is {} bytes, limit is {}",
                text.len(),
                self.config.max_input_bytes
            );
        }

        let mut entities = Vec::new();
        for caps in ENTITY_RE.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let Some(kind) = Self::classify_capture(&caps) else {
                continue;
            };
            let first_line = line_of_offset(text, whole.start());
            let last_line = line_of_offset(text, whole.end().saturating_sub(1).max(whole.start()));
            entities.push(DetectedEntity {
                kind,
                text: whole.as_str().to_string(),
                span: whole.range(),
                lines: first_line..last_line + 1,
            });
        }
        Ok(entities)
    }
}
