//! YAML support using serde-saphyr.
//!
//! API descriptions are often kept as `openapi.yml` files. This module reads them
//! into an [`ApiDocument`], and writes documents back as YAML.
//! It is only available when the `yaml` feature is enabled.
//!
//! # Example
//!
//! ```rust
//! use redoc_mount::ApiDocument;
//!
//! let document = ApiDocument::from_yaml_str(
//!     "openapi: 3.1.0\ninfo:\n  title: Cats API\n  version: 1.0.0\npaths: {}\n",
//! )?;
//! assert_eq!(document.title(), Some("Cats API"));
//! # Ok::<(), redoc_mount::DocumentError>(())
//! ```

use serde_json::Value;

use crate::{ApiDocument, DocumentError};

impl ApiDocument {
    /// Parses a document from a YAML string.
    ///
    /// # Errors
    ///
    /// Fails if the input is not valid YAML or not a mapping.
    pub fn from_yaml_str(input: &str) -> Result<Self, DocumentError> {
        let value = serde_saphyr::from_str::<Value>(input).map_err(|error| DocumentError::Yaml {
            message: error.to_string(),
        })?;
        Self::try_from(value)
    }

    /// Serializes the document as YAML.
    ///
    /// # Errors
    ///
    /// Returns a [`DocumentError::Yaml`] if serialization fails.
    pub fn to_yaml_string(&self) -> Result<String, DocumentError> {
        serde_saphyr::to_string(self).map_err(|error| DocumentError::Yaml {
            message: error.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use serde_json::json;

    #[test]
    fn should_parse_yaml_document() {
        let document = ApiDocument::from_yaml_str(
            "openapi: 3.1.0\ninfo:\n  title: Test API\n  version: 1.0.0\npaths: {}\n",
        )
        .expect("should parse YAML");

        assert_eq!(document.title(), Some("Test API"));
        assert_eq!(document.get("paths"), Some(&json!({})));
    }

    #[test]
    fn should_reject_yaml_sequence() {
        let result = ApiDocument::from_yaml_str("- cats\n- dogs\n");

        assert!(matches!(
            result,
            Err(DocumentError::NotAnObject { kind: "array" })
        ));
    }

    #[test]
    fn should_report_invalid_yaml() {
        let result = ApiDocument::from_yaml_str("info: [unclosed\n");

        assert!(matches!(result, Err(DocumentError::Yaml { .. })));
    }

    #[test]
    fn should_serialize_augmented_document_to_yaml() {
        let document = ApiDocument::try_from(json!({
            "info": { "title": "Test API", "x-logo": { "url": "https://example.com/logo.png" } }
        }))
        .expect("an object");

        let yaml = document.to_yaml_string().expect("should serialize to YAML");

        assert_snapshot!(yaml, @r"
        info:
          title: Test API
          x-logo:
            url: https://example.com/logo.png
        ");
    }
}
