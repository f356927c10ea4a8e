//! Related sub-records: offers, services, promotions, FAQs.
//!
//! Each relation is an ordered sequence of sub-records, optionally carrying
//! a call-to-action and a rich-text body. The projection
//! ([`crate::stream::projected_fields`]) bounds which sub-fields the feed
//! resolves; nothing else is present on these structs.

use serde::Deserialize;

use super::value::{Cta, Image, Price, RichText};

/// Introductory offer shown on the location page.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RelatedOffer {
    pub name: String,
    pub short_description: Option<RichText>,
    pub primary_cta: Option<Cta>,
    pub price: Option<Price>,
}

/// Service offered at the location.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RelatedService {
    pub id: String,
    pub name: String,
    pub rich_text_description: Option<RichText>,
    pub primary_cta: Option<Cta>,
    pub primary_photo: Option<Image>,
}

/// Running promotion, rendered as an alternating banner.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RelatedPromotion {
    pub id: String,
    pub name: String,
    pub short_description: Option<RichText>,
    pub primary_photo: Option<Image>,
    pub category: Option<String>,
    pub primary_cta: Option<Cta>,
    pub secondary_cta: Option<Cta>,
}

/// Frequently asked question with a rich-text answer.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RelatedFaq {
    pub id: String,
    pub question: String,
    pub answer: Option<RichText>,
    pub primary_cta: Option<Cta>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offer_deserialize() {
        let json = r#"{
            "name": "One Hour Massage",
            "price": {"value": "59.95"},
            "primaryCta": {"label": "Book", "link": "/book"}
        }"#;
        let offer: RelatedOffer = serde_json::from_str(json).unwrap();
        assert_eq!(offer.name, "One Hour Massage");
        assert_eq!(offer.price.unwrap().value, "59.95");
        assert!(offer.short_description.is_none());
    }

    #[test]
    fn test_faq_without_cta() {
        let json = r#"{"id": "faq-1", "question": "Do I need an appointment?"}"#;
        let faq: RelatedFaq = serde_json::from_str(json).unwrap();
        assert_eq!(faq.question, "Do I need an appointment?");
        assert!(faq.primary_cta.is_none());
    }

    #[test]
    fn test_promotion_category() {
        let json = r#"{
            "id": "promo-1",
            "name": "Membership",
            "category": "Wellness Program"
        }"#;
        let promo: RelatedPromotion = serde_json::from_str(json).unwrap();
        assert_eq!(promo.category.as_deref(), Some("Wellness Program"));
        assert!(promo.secondary_cta.is_none());
    }
}
