use serde::Serialize;
use serde_json::{Map, Value, json};

/// Section keys of the landing-page content, in display order.
///
/// The key set is fixed: history and import/export only ever replace the
/// value of one of these sections, never add or remove one.
pub const SECTION_KEYS: &[&str] = &[
    "nav",
    "hero",
    "stats",
    "features",
    "how_it_works",
    "testimonials",
    "cta",
    "footer",
];

/// Keys an imported file must carry to be accepted.
pub const REQUIRED_IMPORT_KEYS: &[&str] = &["hero", "nav"];

pub fn is_known_section(key: &str) -> bool {
    SECTION_KEYS.contains(&key)
}

/// The landing-page content document: section name to section value.
///
/// Serializes as a plain JSON object. Files are read back through
/// `EditorSession::replace_sections`, never deserialized directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ContentDocument {
    sections: Map<String, Value>,
}

impl ContentDocument {
    /// The compiled-in default content.
    pub fn defaults() -> Self {
        let mut sections = Map::new();
        for key in SECTION_KEYS {
            sections.insert((*key).to_string(), default_section(key));
        }
        Self { sections }
    }

    pub fn section(&self, key: &str) -> Option<&Value> {
        self.sections.get(key)
    }

    /// Replace the value of a known section.
    ///
    /// Returns false (and leaves the document alone) for unknown keys.
    pub fn set_section(&mut self, key: &str, value: Value) -> bool {
        if !is_known_section(key) {
            return false;
        }
        self.sections.insert(key.to_string(), value);
        true
    }

    /// Iterate sections in the fixed key order.
    pub fn sections(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        SECTION_KEYS
            .iter()
            .filter_map(|key| self.sections.get(*key).map(|v| (*key, v)))
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Compact serialized form, used for change detection.
    pub fn fingerprint(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl Default for ContentDocument {
    fn default() -> Self {
        Self::defaults()
    }
}

fn default_section(key: &str) -> Value {
    match key {
        "nav" => json!({
            "brand": "Spark",
            "links": ["Features", "How it works", "Stories"],
            "login": "Log in",
            "signup": "Join free"
        }),
        "hero" => json!({
            "badge": "New: video intros",
            "title": "Find someone who gets you",
            "subtitle": "Spark matches you on what matters, not just a photo.",
            "primary_cta": "Get started",
            "secondary_cta": "See how it works"
        }),
        "stats" => json!({
            "items": [
                { "value": "2M+", "label": "Members" },
                { "value": "150K", "label": "Matches a month" },
                { "value": "4.8", "label": "App rating" }
            ]
        }),
        "features" => json!({
            "title": "Why Spark",
            "items": [
                { "title": "Verified profiles", "description": "Every profile is photo-verified." },
                { "title": "Smart matching", "description": "Suggestions based on shared interests." },
                { "title": "Safe messaging", "description": "Chat privately before sharing details." }
            ]
        }),
        "how_it_works" => json!({
            "title": "How it works",
            "steps": [
                "Create your profile",
                "Browse your matches",
                "Start a conversation"
            ]
        }),
        "testimonials" => json!({
            "title": "Love stories",
            "items": [
                { "quote": "We matched on a Tuesday and never looked back.", "author": "Maya & Leo" }
            ]
        }),
        "cta" => json!({
            "title": "Ready to meet someone new?",
            "button": "Create your free profile"
        }),
        "footer" => json!({
            "copyright": "© Spark",
            "links": ["Privacy", "Terms", "Contact"]
        }),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_section() {
        let doc = ContentDocument::defaults();
        for key in SECTION_KEYS {
            assert!(doc.section(key).is_some(), "missing section {key}");
        }
        assert_eq!(doc.sections().count(), SECTION_KEYS.len());
    }

    #[test]
    fn test_set_section_rejects_unknown_key() {
        let mut doc = ContentDocument::defaults();
        assert!(!doc.set_section("pricing", json!({ "plan": "gold" })));
        assert!(doc.section("pricing").is_none());
        assert_eq!(doc, ContentDocument::defaults());
    }

    #[test]
    fn test_set_section_replaces_value() {
        let mut doc = ContentDocument::defaults();
        assert!(doc.set_section("hero", json!({ "title": "Hi" })));
        assert_eq!(doc.section("hero"), Some(&json!({ "title": "Hi" })));
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let json = ContentDocument::defaults().to_json_pretty().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("hero"));
        assert!(obj.contains_key("nav"));
    }

    #[test]
    fn test_fingerprint_tracks_content() {
        let a = ContentDocument::defaults();
        let mut b = a.clone();
        assert_eq!(a.fingerprint(), b.fingerprint());
        b.set_section("cta", json!({ "title": "Go" }));
        assert_ne!(a.fingerprint(), b.fingerprint());
    }
}
