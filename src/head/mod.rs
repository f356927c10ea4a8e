//! Document head metadata.
//!
//! Computes the `<head>` content for a generated page: title, charset,
//! viewport, and meta tags. Pure data - the rendering collaborator turns it
//! into markup and owns any HTML escaping.

use serde::Serialize;

use crate::record::ContentRecord;

/// Character set for every generated page.
pub const CHARSET: &str = "UTF-8";

/// Viewport declaration for every generated page.
pub const VIEWPORT: &str = "width=device-width, initial-scale=1";

/// Head content for one generated page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadConfig {
    pub title: String,
    pub charset: &'static str,
    pub viewport: &'static str,
    pub tags: Vec<MetaTag>,
}

/// A single `<meta name=... content=...>` tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetaTag {
    pub name: String,
    pub content: String,
}

impl MetaTag {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// Build head metadata for a record.
///
/// Title and description are taken verbatim - no truncation, no escaping
/// beyond what the renderer performs. Total over any well-formed record:
/// no I/O, no failure modes.
pub fn build_head(record: &ContentRecord) -> HeadConfig {
    HeadConfig {
        title: record.name.clone(),
        charset: CHARSET,
        viewport: VIEWPORT,
        tags: vec![MetaTag::new("description", record.description.clone())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_description_verbatim() {
        let record = ContentRecord {
            name: "Hand & Stone - Chesterfield".into(),
            description: "Massage and facial spa in Chesterfield, VA.".into(),
            ..Default::default()
        };
        let head = build_head(&record);
        assert_eq!(head.title, "Hand & Stone - Chesterfield");
        assert_eq!(head.tags.len(), 1);
        assert_eq!(head.tags[0].name, "description");
        assert_eq!(head.tags[0].content, "Massage and facial spa in Chesterfield, VA.");
    }

    #[test]
    fn test_fixed_constants() {
        let head = build_head(&ContentRecord::default());
        assert_eq!(head.charset, "UTF-8");
        assert_eq!(head.viewport, "width=device-width, initial-scale=1");
    }

    #[test]
    fn test_total_over_empty_record() {
        // Even a default record produces a complete head structure
        let head = build_head(&ContentRecord::default());
        assert_eq!(head.title, "");
        assert_eq!(head.tags[0].content, "");
    }
}
