//! Content record model - the immutable per-entity feed document.
//!
//! One [`ContentRecord`] is produced per entity per build by the upstream
//! content feed, stays immutable for the duration of a single render, and is
//! discarded once the output artifact exists. Only fields named by the
//! declarative projection (see [`crate::stream::projected_fields`]) are
//! populated; anything else is guaranteed absent and must not be dereferenced
//! downstream.
//!
//! # Standard Fields
//!
//! | Field                 | Type               | Description                       |
//! |-----------------------|--------------------|-----------------------------------|
//! | `id`                  | `String`           | Entity id (non-empty, immutable)  |
//! | `uid`                 | `String`           | Feed-internal unique id           |
//! | `meta`                | `RecordMeta`       | Entity type + locale              |
//! | `slug`                | `Option<String>`   | Authoritative path when present   |
//! | `address`             | `Address`          | Street address                    |
//! | `related_*`           | `Vec<...>`         | Relations, absent => empty        |
//!
//! Every related collection treats `null`/absence as "render nothing",
//! never as an error.

mod related;
mod value;

pub use related::{RelatedFaq, RelatedOffer, RelatedPromotion, RelatedService};
pub use value::{Cta, Image, Price, RichText};

use serde::Deserialize;

/// Deserialize a relation list, treating `null` as empty vec
fn deserialize_relation<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// One location entity as delivered by the content feed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentRecord {
    /// Entity id, assigned by the upstream feed. Non-empty for any record
    /// that reaches the projector.
    pub id: String,
    /// Feed-internal unique id.
    pub uid: String,
    /// Entity type and locale.
    pub meta: RecordMeta,
    /// Display name, used verbatim as the page title.
    pub name: String,
    pub address: Address,
    /// Raw phone value as stored in the feed (e.g. `+16103638020`).
    /// Display formatting happens in [`crate::format::format_phone`].
    pub main_phone: Option<String>,
    /// Plain-text description, used verbatim as the description meta tag.
    pub description: String,
    pub hours: Option<Hours>,
    /// Authoritative output path. When present, it wins over the derived
    /// locale/region/city path.
    pub slug: Option<String>,
    /// Ordered gallery; the first image is the hero.
    pub photo_gallery: Vec<Image>,
    pub primary_cta: Option<Cta>,
    pub secondary_cta: Option<Cta>,
    pub tertiary_cta: Option<Cta>,
    pub geocoded_coordinate: Option<Coordinate>,
    #[serde(deserialize_with = "deserialize_relation")]
    pub related_offers: Vec<RelatedOffer>,
    #[serde(deserialize_with = "deserialize_relation")]
    pub related_services: Vec<RelatedService>,
    #[serde(deserialize_with = "deserialize_relation")]
    pub related_promotions: Vec<RelatedPromotion>,
    // Feed spells this one with FAQ fully capitalized
    #[serde(rename = "relatedFAQs", deserialize_with = "deserialize_relation")]
    pub related_faqs: Vec<RelatedFaq>,
}

impl Default for ContentRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            uid: String::new(),
            meta: RecordMeta::default(),
            name: String::new(),
            address: Address::default(),
            main_phone: None,
            description: String::new(),
            hours: None,
            slug: None,
            photo_gallery: Vec::new(),
            primary_cta: None,
            secondary_cta: None,
            tertiary_cta: None,
            geocoded_coordinate: None,
            related_offers: Vec::new(),
            related_services: Vec::new(),
            related_promotions: Vec::new(),
            related_faqs: Vec::new(),
        }
    }
}

impl ContentRecord {
    /// Locale this record was resolved for. Falls back to `en` when the
    /// feed omits it.
    pub fn locale(&self) -> &str {
        self.meta.locale.as_deref().unwrap_or("en")
    }

    /// Non-empty slug, if any. Empty strings from the feed count as absent.
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref().filter(|s| !s.is_empty())
    }
}

/// Feed metadata attached to every record.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecordMeta {
    /// Entity type this record was filtered for (e.g. `location`).
    pub entity_type: String,
    /// Language profile the record was resolved for.
    pub locale: Option<String>,
}

/// Street address of a location entity.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    /// State or province code (e.g. `VA`).
    pub region: String,
    pub postal_code: String,
    pub country_code: Option<String>,
}

impl Address {
    /// Single-line display form: `line1, city, region postal`.
    pub fn single_line(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.line1, self.city, self.region, self.postal_code
        )
    }
}

/// Geocoded position of a location entity.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Weekly opening hours.
///
/// Days the feed omits carry no intervals; the presentation layer decides
/// whether that renders as "closed" or is skipped entirely.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Hours {
    pub monday: Option<DayHours>,
    pub tuesday: Option<DayHours>,
    pub wednesday: Option<DayHours>,
    pub thursday: Option<DayHours>,
    pub friday: Option<DayHours>,
    pub saturday: Option<DayHours>,
    pub sunday: Option<DayHours>,
}

/// Opening hours for a single day.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DayHours {
    pub is_closed: bool,
    pub open_intervals: Vec<OpenInterval>,
}

/// A single `HH:MM`-`HH:MM` opening interval.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OpenInterval {
    pub start: String,
    pub end: String,
}
