//! Injectable review data for the presentation layer.
//!
//! The review section of a location page is not fed by the content stream
//! yet; until a reviews backend lands, sample data is supplied through an
//! explicit provider the renderer receives at render time. Production logic
//! never embeds the fixture list itself.
//!
//! TODO: replace [`FixtureReviews`] with a provider backed by the reviews
//! API once the feed exposes it.

use crate::record::ContentRecord;

/// One customer review as shown on a location page.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub title: String,
    /// Star rating, 0-5.
    pub rating: u8,
    /// Review body as HTML paragraphs, pre-sanitized by the source.
    pub body: String,
    pub author: String,
    /// Human-readable date (`May 16, 2021`).
    pub date: String,
    /// Machine-readable date (`2021-05-16`) for `<time datetime>`.
    pub datetime: String,
}

/// Source of reviews for a record, injected at render time.
pub trait ReviewProvider {
    fn reviews_for(&self, record: &ContentRecord) -> Vec<Review>;
}

/// Deterministic sample reviews for development and previews.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureReviews;

impl ReviewProvider for FixtureReviews {
    fn reviews_for(&self, _record: &ContentRecord) -> Vec<Review> {
        let sample = Review {
            title: "Can't say enough good things".into(),
            rating: 5,
            body: "<p>I was really pleased with the overall experience. \
                   The staff even included a personal, handwritten note, \
                   which delighted me!</p>\
                   <p>I would gladly recommend this location to my friends. \
                   And, now that I think of it, I actually have, many times!</p>"
                .into(),
            author: "Risako M".into(),
            date: "May 16, 2021".into(),
            datetime: "2021-05-16".into(),
        };
        vec![sample.clone(), sample.clone(), sample.clone(), sample]
    }
}

/// Provider for builds where the review section stays empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoReviews;

impl ReviewProvider for NoReviews {
    fn reviews_for(&self, _record: &ContentRecord) -> Vec<Review> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_reviews_deterministic() {
        let record = ContentRecord::default();
        let first = FixtureReviews.reviews_for(&record);
        let second = FixtureReviews.reviews_for(&record);
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
        assert!(first.iter().all(|r| r.rating == 5));
    }

    #[test]
    fn test_no_reviews_is_empty() {
        assert!(NoReviews.reviews_for(&ContentRecord::default()).is_empty());
    }
}
