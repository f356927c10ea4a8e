//! Shared value types carried by records and their relations.

use serde::Deserialize;

/// Call-to-action: a labelled link.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cta {
    pub label: String,
    pub link: String,
}

impl Cta {
    pub fn new(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            link: link.into(),
        }
    }
}

/// Image reference from the feed's media gallery.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Image {
    pub url: String,
    pub alternate_text: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Monetary value attached to an offer.
///
/// The feed delivers the amount as a string (`"59.95"`); it is displayed
/// verbatim, never parsed into a float.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Price {
    pub value: String,
    pub currency_code: Option<String>,
}

/// Serialized rich-text AST.
///
/// Carried opaque: the rendering collaborator re-serializes the tree for
/// its rich-text widget. This crate never interprets the node structure.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct RichText(serde_json::Value);

impl RichText {
    /// The raw AST, exactly as delivered by the feed.
    pub fn json(&self) -> &serde_json::Value {
        &self.0
    }

    /// True when the feed delivered no usable content.
    pub fn is_empty(&self) -> bool {
        self.0.is_null()
    }
}
