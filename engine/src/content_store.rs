//! Content loading: embedded default document plus optional on-disk override.

use std::fs;
use std::path::Path;

use keepsake_types::ContentDoc;
use tracing::warn;

/// Load the content document.
///
/// An override file that cannot be read or parsed degrades to the embedded
/// default with a warning; a broken default degrades to an empty document,
/// whose accessors all resolve to fallback strings. Nothing here crashes
/// the experience over copy.
#[must_use]
pub fn load_content(default_toml: &str, override_path: Option<&Path>) -> ContentDoc {
    if let Some(path) = override_path {
        match fs::read_to_string(path) {
            Ok(raw) => match toml::from_str(&raw) {
                Ok(doc) => return doc,
                Err(err) => {
                    warn!(path = %path.display(), %err, "Ignoring unparsable content override");
                }
            },
            Err(err) => {
                warn!(path = %path.display(), %err, "Ignoring unreadable content override");
            }
        }
    }

    toml::from_str(default_toml).unwrap_or_else(|err| {
        warn!(%err, "Embedded default content failed to parse");
        ContentDoc::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DEFAULT: &str = r#"
[animated]
card_title = "Hello"
"#;

    #[test]
    fn falls_back_to_default_without_override() {
        let doc = load_content(DEFAULT, None);
        assert_eq!(doc.landing_title(), "Hello");
    }

    #[test]
    fn override_wins_when_parsable() {
        let mut file = tempfile::NamedTempFile::new().expect("temp content");
        write!(file, "[animated]\ncard_title = \"Custom\"").expect("write");
        let doc = load_content(DEFAULT, Some(file.path()));
        assert_eq!(doc.landing_title(), "Custom");
    }

    #[test]
    fn broken_override_degrades_to_default() {
        let mut file = tempfile::NamedTempFile::new().expect("temp content");
        write!(file, "not toml [").expect("write");
        let doc = load_content(DEFAULT, Some(file.path()));
        assert_eq!(doc.landing_title(), "Hello");
    }

    #[test]
    fn missing_override_degrades_to_default() {
        let doc = load_content(DEFAULT, Some(Path::new("/nonexistent/content.toml")));
        assert_eq!(doc.landing_title(), "Hello");
    }

    #[test]
    fn broken_default_degrades_to_empty_doc() {
        let doc = load_content("not toml [", None);
        assert_eq!(doc.landing_title(), "Welcome");
    }
}
