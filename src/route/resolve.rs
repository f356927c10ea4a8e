//! Path and redirect resolution from one content record.

use smallvec::{SmallVec, smallvec};
use thiserror::Error;

use super::PagePath;
use crate::record::ContentRecord;

/// Path resolution errors
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("record (uid `{uid}`) has an empty id, cannot resolve a path")]
    EmptyId { uid: String },
}

/// Resolve the canonical output path for a record.
///
/// A non-empty `slug` is authoritative and returned unchanged. Otherwise the
/// path is derived as `{locale}/{region}/{city}/{line1}-{id}` with every
/// segment used verbatim - no slugification or escaping here, see the module
/// docs for why.
///
/// Deterministic: identical input always yields identical output.
///
/// # Errors
///
/// Fails when `id` is empty. The field projection makes `id` mandatory, so
/// any record that reaches this function through the feed carries one.
pub fn resolve_path(record: &ContentRecord) -> Result<PagePath, RouteError> {
    if record.id.is_empty() {
        return Err(RouteError::EmptyId {
            uid: record.uid.clone(),
        });
    }

    if let Some(slug) = record.slug() {
        return Ok(PagePath::new(slug));
    }

    let address = &record.address;
    Ok(PagePath::new(format!(
        "{}/{}/{}/{}-{}",
        record.locale(),
        address.region,
        address.city,
        address.line1,
        record.id
    )))
}

/// Resolve legacy redirect paths for a record.
///
/// Exactly one entry: `index-old/{id}`, the pre-migration URL scheme. Every
/// record with a resolvable canonical path gets it.
pub fn resolve_redirects(record: &ContentRecord) -> SmallVec<[PagePath; 1]> {
    smallvec![PagePath::new(format!("index-old/{}", record.id))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Address, RecordMeta};

    fn record_without_slug() -> ContentRecord {
        ContentRecord {
            id: "42".into(),
            meta: RecordMeta {
                entity_type: "location".into(),
                locale: Some("en".into()),
            },
            address: Address {
                line1: "7204 Hancock Village Drive".into(),
                city: "Chesterfield".into(),
                region: "VA".into(),
                postal_code: "23832".into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_derived_path() {
        let path = resolve_path(&record_without_slug()).unwrap();
        assert_eq!(path, "en/VA/Chesterfield/7204 Hancock Village Drive-42");
    }

    #[test]
    fn test_slug_wins_over_address() {
        let record = ContentRecord {
            slug: Some("chesterfield-va".into()),
            ..record_without_slug()
        };
        let path = resolve_path(&record).unwrap();
        assert_eq!(path, "chesterfield-va");
    }

    #[test]
    fn test_empty_slug_falls_back_to_derived() {
        let record = ContentRecord {
            slug: Some(String::new()),
            ..record_without_slug()
        };
        let path = resolve_path(&record).unwrap();
        assert_eq!(path, "en/VA/Chesterfield/7204 Hancock Village Drive-42");
    }

    #[test]
    fn test_empty_id_is_an_error() {
        let record = ContentRecord {
            id: String::new(),
            uid: "loc-42".into(),
            ..record_without_slug()
        };
        let err = resolve_path(&record).unwrap_err();
        assert!(format!("{err}").contains("loc-42"));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let record = record_without_slug();
        assert_eq!(
            resolve_path(&record).unwrap(),
            resolve_path(&record).unwrap()
        );
    }

    #[test]
    fn test_redirects() {
        let redirects = resolve_redirects(&record_without_slug());
        assert_eq!(redirects.len(), 1);
        assert_eq!(redirects[0], "index-old/42");
    }

    #[test]
    fn test_redirects_independent_of_slug() {
        let record = ContentRecord {
            slug: Some("chesterfield-va".into()),
            ..record_without_slug()
        };
        assert_eq!(resolve_redirects(&record)[0], "index-old/42");
    }

    #[test]
    fn test_locale_fallback_in_derived_path() {
        let record = ContentRecord {
            meta: RecordMeta::default(),
            ..record_without_slug()
        };
        let path = resolve_path(&record).unwrap();
        assert!(path.as_str().starts_with("en/"));
    }
}
