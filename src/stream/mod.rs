//! Feed stream configuration for `stream.toml`.
//!
//! A stream declares the scope of the content feed at startup: which entity
//! type qualifies, which language profiles are resolved, and where pages end
//! up living (`base_url`). The declarative field projection in [`fields`]
//! travels alongside it to the feed collaborator.
//!
//! # Sections
//!
//! | Key           | Purpose                                         |
//! |---------------|-------------------------------------------------|
//! | `id`          | Stream identifier registered with the feed      |
//! | `entity_type` | Entity type filter (default: `location`)        |
//! | `locales`     | Language profiles to resolve (default: `en`)    |
//! | `base_url`    | Absolute site base for full URL generation      |

mod error;
mod fields;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use fields::{FieldPath, projected_fields};

use serde::Deserialize;
use std::{fs, path::Path};

use crate::log;
use crate::record::ContentRecord;

/// Field paths for diagnostics.
const FIELD_ID: FieldPath = FieldPath::new("stream.id");
const FIELD_ENTITY_TYPE: FieldPath = FieldPath::new("stream.entity_type");
const FIELD_LOCALES: FieldPath = FieldPath::new("stream.locales");
const FIELD_BASE_URL: FieldPath = FieldPath::new("stream.base_url");

/// Feed scope declared at startup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct StreamConfig {
    /// Stream identifier registered with the content feed.
    pub id: String,
    /// Entity type that qualifies for this stream.
    pub entity_type: String,
    /// Language profiles that documents are resolved for.
    pub locales: Vec<String>,
    /// Absolute site base (e.g. `https://example.com`) for full URLs.
    pub base_url: Option<String>,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            id: "locations".into(),
            entity_type: "location".into(),
            locales: vec!["en".into()],
            base_url: None,
        }
    }
}

impl StreamConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored);
        }
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file path with unknown field detection.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_toml_str(&content)
    }

    /// Parse TOML, collecting unknown keys instead of silently dropping them.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String]) {
        log!("warning"; "unknown fields in stream config, ignoring:");
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Validate the declared scope.
    ///
    /// # Checks
    /// - `id` and `entity_type` are non-empty
    /// - at least one locale, no duplicates
    /// - `base_url`, when set, is a valid http(s) URL with a host
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        if self.id.trim().is_empty() {
            diag.error(FIELD_ID, "stream id must not be empty");
        }

        if self.entity_type.trim().is_empty() {
            diag.error_with_hint(
                FIELD_ENTITY_TYPE,
                "entity type must not be empty",
                "e.g.: entity-type = \"location\"",
            );
        }

        if self.locales.is_empty() {
            diag.error_with_hint(
                FIELD_LOCALES,
                "at least one locale is required",
                "e.g.: locales = [\"en\"]",
            );
        }
        for (i, locale) in self.locales.iter().enumerate() {
            if locale.trim().is_empty() {
                diag.error(FIELD_LOCALES, format!("locale #{} is empty", i + 1));
            } else if self.locales[..i].contains(locale) {
                diag.error(FIELD_LOCALES, format!("duplicate locale '{locale}'"));
            }
        }

        if let Some(url_str) = &self.base_url {
            Self::validate_base_url(url_str, &mut diag);
        }

        diag.into_result()
    }

    /// URL format check using the url crate for strict validation.
    fn validate_base_url(url_str: &str, diag: &mut ConfigDiagnostics) {
        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        FIELD_BASE_URL,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        FIELD_BASE_URL,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    FIELD_BASE_URL,
                    format!("invalid URL: {e}"),
                    "use format like https://example.com",
                );
            }
        }
    }

    /// Whether a record falls inside the declared feed scope.
    pub fn accepts(&self, record: &ContentRecord) -> bool {
        record.meta.entity_type == self.entity_type
            && self.locales.iter().any(|l| l == record.locale())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordMeta;
    use std::io::Write;

    #[test]
    fn test_default_scope() {
        let config = StreamConfig::default();
        assert_eq!(config.entity_type, "location");
        assert_eq!(config.locales, vec!["en"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_str() {
        let config = StreamConfig::from_toml_str(
            r#"
            id = "my-stream-id-1"
            entity-type = "location"
            locales = ["en"]
            base-url = "https://example.com"
            "#,
        )
        .unwrap();
        assert_eq!(config.id, "my-stream-id-1");
        assert_eq!(config.base_url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn test_empty_locales_rejected() {
        let err = StreamConfig::from_toml_str("locales = []").unwrap_err();
        assert!(format!("{err}").contains("stream.locales"));
    }

    #[test]
    fn test_duplicate_locale_rejected() {
        let err = StreamConfig::from_toml_str(r#"locales = ["en", "en"]"#).unwrap_err();
        assert!(format!("{err}").contains("duplicate locale"));
    }

    #[test]
    fn test_bad_base_url_rejected() {
        let err = StreamConfig::from_toml_str(r#"base-url = "ftp://example.com""#).unwrap_err();
        assert!(format!("{err}").contains("must be http or https"));
    }

    #[test]
    fn test_unknown_fields_do_not_fail_parse() {
        // Unknown keys warn but parsing succeeds with known values applied
        let config = StreamConfig::from_toml_str(
            r#"
            id = "s1"
            entirely-unknown-key = true
            "#,
        )
        .unwrap();
        assert_eq!(config.id, "s1");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "id = \"from-disk\"").unwrap();
        let config = StreamConfig::load(file.path()).unwrap();
        assert_eq!(config.id, "from-disk");
    }

    #[test]
    fn test_load_missing_file() {
        let err = StreamConfig::load(Path::new("/nonexistent/stream.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }

    fn record_with(entity_type: &str, locale: &str) -> ContentRecord {
        ContentRecord {
            meta: RecordMeta {
                entity_type: entity_type.into(),
                locale: Some(locale.into()),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_accepts_scope() {
        let config = StreamConfig::default();
        assert!(config.accepts(&record_with("location", "en")));
        assert!(!config.accepts(&record_with("event", "en")));
        assert!(!config.accepts(&record_with("location", "fr")));
    }

    #[test]
    fn test_accepts_locale_fallback() {
        // Record without explicit locale falls back to en
        let config = StreamConfig::default();
        let record = ContentRecord {
            meta: RecordMeta {
                entity_type: "location".into(),
                locale: None,
            },
            ..Default::default()
        };
        assert!(config.accepts(&record));
    }
}
