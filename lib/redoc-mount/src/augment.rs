use tracing::debug;

use crate::{ApiDocument, RedocOptions};

/// Vendor extension holding the logo, under the document `info` section.
pub const LOGO_EXTENSION: &str = "x-logo";

/// Vendor extension holding the tag groups, at the document root.
pub const TAG_GROUPS_EXTENSION: &str = "x-tagGroups";

/// Adds the ReDoc vendor extensions configured in the options.
///
/// - with a logo, `info.x-logo` receives a copy of the logo descriptor
///   (the `info` section is created if the document has none),
/// - with tag groups, the document root receives `x-tagGroups`.
///
/// Nothing else in the document is touched; without logo nor tag groups this is a no-op.
pub fn add_vendor_extensions(options: &RedocOptions, document: &mut ApiDocument) {
    if let Some(logo) = &options.logo {
        match serde_json::to_value(logo) {
            Ok(value) => {
                debug!(%value, "adding {LOGO_EXTENSION}");
                document.info_mut().insert(LOGO_EXTENSION.to_string(), value);
            }
            Err(error) => debug!(?error, "skipping {LOGO_EXTENSION}"),
        }
    }

    if let Some(tag_groups) = &options.tag_groups {
        match serde_json::to_value(tag_groups) {
            Ok(value) => {
                debug!(count = tag_groups.len(), "adding {TAG_GROUPS_EXTENSION}");
                document.insert(TAG_GROUPS_EXTENSION, value);
            }
            Err(error) => debug!(?error, "skipping {TAG_GROUPS_EXTENSION}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate_options;
    use serde_json::{Value, json};

    fn has_extension(document: &ApiDocument, name: &str) -> bool {
        document.get(name).is_some()
            || document
                .info()
                .is_some_and(|info| info.contains_key(name))
    }

    fn cats_document() -> ApiDocument {
        ApiDocument::try_from(json!({
            "openapi": "3.1.0",
            "info": { "title": "Cats", "version": "1.0" },
            "paths": {}
        }))
        .expect("an object")
    }

    fn augment(raw: &Value, document: &mut ApiDocument) {
        let options = validate_options(raw, document).expect("valid options");
        add_vendor_extensions(&options, document);
    }

    #[test]
    fn should_add_logo_to_info() {
        let mut document = cats_document();

        augment(
            &json!({ "logo": { "url": "https://example.com/logo.png" } }),
            &mut document,
        );

        let info = document.info().expect("an info section");
        assert_eq!(
            info.get(LOGO_EXTENSION),
            Some(&json!({ "url": "https://example.com/logo.png" }))
        );
        assert_eq!(info.get("title"), Some(&json!("Cats")));
    }

    #[test]
    fn should_add_tag_groups_to_root() {
        let mut document = cats_document();

        augment(
            &json!({ "tagGroups": [{ "name": "Core", "tags": ["cats"] }] }),
            &mut document,
        );

        assert_eq!(
            document.get(TAG_GROUPS_EXTENSION),
            Some(&json!([{ "name": "Core", "tags": ["cats"] }]))
        );
    }

    #[test]
    fn should_not_touch_document_without_vendor_options() {
        let mut document = cats_document();
        let original = document.clone();

        augment(&json!({ "title": "Docs", "hideLoading": true }), &mut document);

        assert_eq!(document, original);
        assert!(!has_extension(&document, LOGO_EXTENSION));
        assert!(!has_extension(&document, TAG_GROUPS_EXTENSION));
    }

    #[test]
    fn should_create_info_for_logo() {
        let mut document = ApiDocument::try_from(json!({ "openapi": "3.1.0" }))
            .expect("an object");

        augment(&json!({ "logo": { "altText": "Cats" } }), &mut document);

        assert!(has_extension(&document, LOGO_EXTENSION));
    }

    #[test]
    fn should_only_add_the_two_extensions() {
        let mut document = cats_document();
        let original_keys = document.clone().into_inner().keys().cloned().collect::<Vec<_>>();

        augment(
            &json!({
                "logo": { "url": "https://example.com/logo.png" },
                "tagGroups": [{ "name": "Core", "tags": ["cats"] }]
            }),
            &mut document,
        );

        let mut added = document
            .clone()
            .into_inner()
            .keys()
            .filter(|key| !original_keys.contains(key))
            .cloned()
            .collect::<Vec<_>>();
        added.sort();
        assert_eq!(added, vec![TAG_GROUPS_EXTENSION.to_string()]);
        assert_eq!(
            document.info().map(|info| info.len()),
            Some(3),
            "title, version and x-logo"
        );
    }
}
