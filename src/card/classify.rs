use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::card::detector::{PatternDetector, RegexPatternDetector};
use crate::card::text::{join_lines, normalize_line};
use crate::core::model::{DetectedEntity, EntityKind, ParsedBusinessCard, MAILTO_SCHEME};

pub trait CardClassifier {
    /// Turns recognized lines (top-to-bottom) into contact fields. Never fails;
    /// anything that cannot be recognized is left empty.
    fn classify(&self, lines: &[String]) -> ParsedBusinessCard;
}

#[derive(Debug, Clone, Default)]
pub struct SimpleCardClassifier<D = RegexPatternDetector> {
    detector: D,
}

impl SimpleCardClassifier<RegexPatternDetector> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: PatternDetector> SimpleCardClassifier<D> {
    pub fn with_detector(detector: D) -> Self {
        Self { detector }
    }
}

impl<D: PatternDetector> CardClassifier for SimpleCardClassifier<D> {
    fn classify(&self, lines: &[String]) -> ParsedBusinessCard {
        let normalized: Vec<String> = lines.iter().map(|line| normalize_line(line)).collect();
        let mut candidates: VecDeque<String> = normalized
            .iter()
            .filter(|line| !line.is_empty())
            .cloned()
            .collect();
        let text = join_lines(&normalized);

        let entities = match self.detector.detect(&text) {
            Ok(entities) => entities,
            Err(err) => {
                warn!(error = %err, "pattern detection failed, keeping name only");
                Vec::new()
            }
        };

        let mut card = ParsedBusinessCard::default();
        let mut numbers = Vec::new();

        for entity in &entities {
            match &entity.kind {
                EntityKind::Address => card.address = Some(entity.text.clone()),
                EntityKind::PhoneNumber => numbers.push(entity.text.clone()),
                EntityKind::Link(url) if url.scheme() == MAILTO_SCHEME => {
                    card.email = Some(email_text(entity));
                }
                EntityKind::Link(url) => card.urls.push(url.clone()),
                EntityKind::Other(reason) => {
                    debug!(text = %entity.text, reason = %reason, "ignoring detected entity");
                }
            }
            consume_leading(&mut candidates, &entity.text);
        }

        card.name = candidates.pop_front();
        card.phone = numbers.into_iter().next();
        card
    }
}

/// Classify with the default regex detector.
pub fn classify<S: AsRef<str>>(lines: &[S]) -> ParsedBusinessCard {
    let lines: Vec<String> = lines.iter().map(|line| line.as_ref().to_string()).collect();
    SimpleCardClassifier::new().classify(&lines)
}

fn email_text(entity: &DetectedEntity) -> String {
    let prefix = format!("{MAILTO_SCHEME}:");
    match entity.text.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(&prefix) => entity.text[prefix.len()..].to_string(),
        _ => entity.text.clone(),
    }
}

/// Drops leading candidate lines that belong to `matched`: lines that are part
/// of the match or that contain it. Stops at the first unrelated line.
fn consume_leading(candidates: &mut VecDeque<String>, matched: &str) {
    while let Some(front) = candidates.front() {
        if matched.contains(front.as_str()) || front.contains(matched) {
            candidates.pop_front();
        } else {
            break;
        }
    }
}
