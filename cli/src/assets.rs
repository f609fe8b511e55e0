//! Embedded default assets.

/// The default content document, compiled into the binary so a bare
/// install renders the full experience with no files on disk.
pub const DEFAULT_CONTENT: &str = include_str!("../assets/content.toml");

#[cfg(test)]
mod tests {
    use super::*;
    use keepsake_types::ContentDoc;

    #[test]
    fn default_content_parses() {
        let doc: ContentDoc = toml::from_str(DEFAULT_CONTENT).expect("default content is valid");
        assert_eq!(doc.chill_zone.tracks.len(), 3);
        assert_eq!(doc.cards.cards.len(), 3);
        assert_eq!(doc.activity.bucket_list.len(), 4);
        assert!(!doc.final_letter.letter_paragraphs.is_empty());
        assert!(doc.typed_message().starts_with("Happy New Year!"));
    }
}
