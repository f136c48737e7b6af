use std::ops::Range;

use serde::{Deserialize, Serialize};
use url::Url;

pub const MAILTO_SCHEME: &str = "mailto";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum EntityKind {
    Address,
    PhoneNumber,
    Link(Url),
    Other(String),
}

/// A substring of the recognized text that the detector tagged with a kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetectedEntity {
    pub kind: EntityKind,
    pub text: String,
    /// Byte span within the joined text.
    pub span: Range<usize>,
    /// 0-based range of source lines the match touches.
    pub lines: Range<usize>,
}

impl DetectedEntity {
    pub fn link(&self) -> Option<&Url> {
        match &self.kind {
            EntityKind::Link(url) => Some(url),
            _ => None,
        }
    }

    pub fn is_mailto(&self) -> bool {
        self.link()
            .map(|url| url.scheme() == MAILTO_SCHEME)
            .unwrap_or(false)
    }

    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            EntityKind::Address => "address",
            EntityKind::PhoneNumber => "phone_number",
            EntityKind::Link(_) if self.is_mailto() => "email",
            EntityKind::Link(_) => "url",
            EntityKind::Other(_) => "other",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedBusinessCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub urls: Vec<Url>,
}

impl ParsedBusinessCard {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.urls.is_empty()
    }
}

/// Attendee form pre-filled from a scanned card.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub card: ParsedBusinessCard,
}

impl ContactDraft {
    pub fn from_card(card: ParsedBusinessCard) -> Self {
        Self {
            name: card.name.clone().unwrap_or_default(),
            email: card.email.clone(),
            phone: card.phone.clone(),
            card,
        }
    }

    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entity(kind: EntityKind) -> DetectedEntity {
        DetectedEntity {
            kind,
            text: "x".to_string(),
            span: 0..1,
            lines: 0..1,
        }
    }

    #[test]
    fn mailto_links_report_as_email() {
        let mail = entity(EntityKind::Link(Url::parse("mailto:a@b.com").unwrap()));
        let web = entity(EntityKind::Link(Url::parse("https://b.com").unwrap()));
        assert!(mail.is_mailto());
        assert_eq!(mail.kind_name(), "email");
        assert!(!web.is_mailto());
        assert_eq!(web.kind_name(), "url");
        assert!(!entity(EntityKind::Address).is_mailto());
    }

    #[test]
    fn draft_without_name_is_not_submittable() {
        let draft = ContactDraft::from_card(ParsedBusinessCard {
            email: Some("a@b.com".to_string()),
            ..Default::default()
        });
        assert_eq!(draft.name, "");
        assert_eq!(draft.email.as_deref(), Some("a@b.com"));
        assert!(!draft.is_submittable());
    }

    #[test]
    fn empty_card_omits_absent_fields_in_json() {
        let json = serde_json::to_string(&ParsedBusinessCard::default()).unwrap();
        assert_eq!(json, r#"{"urls":[]}"#);
    }
}
