//! Declarative field projection.
//!
//! [`projected_fields`] is the single source of truth for which attributes
//! the content feed must resolve onto a record before it reaches the
//! projector. The list is handed to the feed collaborator at startup; it is
//! a contract, not runtime logic. Any field not listed is guaranteed absent
//! from the record.

use owo_colors::OwoColorize;
use std::fmt;

/// A dotted feed field path (e.g. `address`, `relatedOffers.price`).
///
/// Relation sub-fields use one dot: `relation.subfield`. The projector never
/// needs deeper nesting, so none is modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// First segment of the path (`relatedOffers.price` -> `relatedOffers`).
    pub fn root(&self) -> &'static str {
        match self.0.split_once('.') {
            Some((root, _)) => root,
            None => self.0,
        }
    }

    /// True when this path selects a sub-field of a relation.
    pub fn is_relation(&self) -> bool {
        self.0.contains('.')
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

/// Every field the feed must resolve, in wire spelling.
const PROJECTED: &[FieldPath] = &[
    FieldPath::new("id"),
    FieldPath::new("uid"),
    FieldPath::new("meta"),
    FieldPath::new("name"),
    FieldPath::new("address"),
    FieldPath::new("mainPhone"),
    FieldPath::new("description"),
    FieldPath::new("hours"),
    FieldPath::new("slug"),
    FieldPath::new("photoGallery"),
    FieldPath::new("primaryCta"),
    FieldPath::new("secondaryCta"),
    FieldPath::new("tertiaryCta"),
    FieldPath::new("geocodedCoordinate"),
    FieldPath::new("relatedOffers.name"),
    FieldPath::new("relatedOffers.shortDescription"),
    FieldPath::new("relatedOffers.primaryCta"),
    FieldPath::new("relatedOffers.price"),
    FieldPath::new("relatedServices.id"),
    FieldPath::new("relatedServices.name"),
    FieldPath::new("relatedServices.richTextDescription"),
    FieldPath::new("relatedServices.primaryCta"),
    FieldPath::new("relatedServices.primaryPhoto"),
    FieldPath::new("relatedPromotions.id"),
    FieldPath::new("relatedPromotions.name"),
    FieldPath::new("relatedPromotions.shortDescription"),
    FieldPath::new("relatedPromotions.primaryPhoto"),
    FieldPath::new("relatedPromotions.category"),
    FieldPath::new("relatedPromotions.primaryCta"),
    FieldPath::new("relatedPromotions.secondaryCta"),
    FieldPath::new("relatedFAQs.id"),
    FieldPath::new("relatedFAQs.question"),
    FieldPath::new("relatedFAQs.answer"),
    FieldPath::new("relatedFAQs.primaryCta"),
];

/// The static, bounded field projection for location records.
pub fn projected_fields() -> &'static [FieldPath] {
    PROJECTED
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_projection_has_no_duplicates() {
        let mut seen = FxHashSet::default();
        for field in projected_fields() {
            assert!(seen.insert(field.as_str()), "duplicate field {field}");
        }
    }

    #[test]
    fn test_mandatory_fields_present() {
        let fields: Vec<_> = projected_fields().iter().map(|f| f.as_str()).collect();
        // id must always be projected: redirects and derived paths need it
        assert!(fields.contains(&"id"));
        assert!(fields.contains(&"slug"));
        assert!(fields.contains(&"address"));
        assert!(fields.contains(&"meta"));
    }

    #[test]
    fn test_field_root() {
        assert_eq!(FieldPath::new("relatedOffers.price").root(), "relatedOffers");
        assert_eq!(FieldPath::new("address").root(), "address");
    }

    #[test]
    fn test_is_relation() {
        assert!(FieldPath::new("relatedFAQs.question").is_relation());
        assert!(!FieldPath::new("mainPhone").is_relation());
    }

    #[test]
    fn test_relation_subfields_nest_one_level() {
        for field in projected_fields() {
            assert!(
                field.as_str().matches('.').count() <= 1,
                "unexpected nesting in {field}"
            );
        }
    }
}
