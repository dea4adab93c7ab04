use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Validated ReDoc options.
///
/// Instances are produced by [`validate_options`](crate::validate_options): every
/// field carries either the caller's value or its default.
///
/// | option                    | default                                                 |
/// |---------------------------|---------------------------------------------------------|
/// | `redocVersion`            | `"latest"`                                              |
/// | `title`                   | the document `info.title`, or `"Swagger documentation"` |
/// | `untrustedSpec`           | `false`                                                 |
/// | `supressWarnings`         | `true`                                                  |
/// | `hideHostname`            | `false`                                                 |
/// | `requiredPropsFirst`      | `true`                                                  |
/// | `sortPropsAlphabetically` | `true`                                                  |
/// | `showExtensions`          | `false`                                                 |
/// | `noAutoAuth`              | `true`                                                  |
/// | `pathInMiddlePanel`       | `false`                                                 |
/// | `hideLoading`             | `false`                                                 |
/// | `nativeScrollbars`        | `false`                                                 |
/// | `hideDownloadButton`      | `false`                                                 |
/// | `disableSearch`           | `false`                                                 |
/// | `onlyRequiredInSamples`   | `false`                                                 |
/// | `docName`                 | `"swagger"`                                             |
/// | `auth`                    | disabled, `admin` / `123`                               |
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedocOptions {
    /// Version of ReDoc to load (e.g. `next`, `latest`, `2.1.5`).
    pub redoc_version: String,
    /// Web page title.
    pub title: String,
    /// Web page favicon URL.
    #[serde(default)]
    pub favicon: Option<String>,
    /// Logo displayed in the side menu, added to the document as `info.x-logo`.
    #[serde(default)]
    pub logo: Option<LogoOptions>,
    /// ReDoc theme, passed through untouched.
    #[serde(default)]
    pub theme: Option<Value>,
    /// Sanitize HTML and markdown of the document.
    pub untrusted_spec: bool,
    /// Do not render warnings at the top of the documentation.
    pub supress_warnings: bool,
    /// Hide the protocol and hostname in operation definitions.
    pub hide_hostname: bool,
    /// Responses to expand by default, comma separated status codes or `all`.
    #[serde(default)]
    pub expand_responses: Option<String>,
    /// Show required properties first.
    pub required_props_first: bool,
    /// Sort properties alphabetically.
    pub sort_props_alphabetically: bool,
    /// Show `x-` fields: a boolean, or the names of the extensions to display.
    pub show_extensions: Value,
    /// Do not inject the authentication section automatically.
    pub no_auto_auth: bool,
    /// Show path and HTTP verb in the middle panel.
    pub path_in_middle_panel: bool,
    /// Do not show the loading animation.
    pub hide_loading: bool,
    /// Use the native scrollbar.
    pub native_scrollbars: bool,
    /// Hide the "Download" button.
    pub hide_download_button: bool,
    /// Disable the search bar.
    pub disable_search: bool,
    /// Only show required fields in request samples.
    pub only_required_in_samples: bool,
    /// Name of the JSON document file, served as `<docName>.json`.
    pub doc_name: String,
    /// Basic authentication of the viewer page.
    pub auth: AuthOptions,
    /// Side menu tag groups, added to the document as `x-tagGroups`.
    #[serde(default)]
    pub tag_groups: Option<Vec<TagGroupOptions>>,
}

/// Logo of the documentation, see the ReDoc `x-logo` vendor extension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoOptions {
    /// Absolute URL of the logo image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Background color, RGB hexadecimal (e.g. `#008080`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Alternative text of the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    /// Link target of the logo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// A named group of tags, see the ReDoc `x-tagGroups` vendor extension.
///
/// Tags that belong to no group are not displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagGroupOptions {
    /// Group label.
    pub name: String,
    /// Tags of the group.
    pub tags: Vec<String>,
}

/// Basic authentication of the viewer page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthOptions {
    /// Enables the authentication gate.
    pub enabled: bool,
    /// Expected user name.
    pub user: String,
    /// Expected password.
    pub password: SecretString,
}

impl Default for AuthOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            user: "admin".to_string(),
            password: SecretString::from("123"),
        }
    }
}

/// A string zeroed on drop, redacted in `Debug` output.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretString(String);

impl SecretString {
    /// Exposes the secret value.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretString([REDACTED])")
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for SecretString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self)
    }
}

/// Builder for the raw (unvalidated) options object.
///
/// This is a convenience over writing the JSON by hand; the result still goes
/// through [`validate_options`](crate::validate_options).
///
/// ```rust
/// use redoc_mount::RawOptions;
/// use serde_json::json;
///
/// let options = RawOptions::new()
///     .with_title("Cats")
///     .with("hideDownloadButton", true)
///     .with_tag_group("Core resources", ["cats"]);
///
/// assert_eq!(
///     serde_json::Value::from(options),
///     json!({
///         "title": "Cats",
///         "hideDownloadButton": true,
///         "tagGroups": [{ "name": "Core resources", "tags": ["cats"] }]
///     })
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RawOptions(Map<String, Value>);

impl RawOptions {
    /// Creates an empty options object: every option gets its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets any option by its name.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Sets the page title.
    #[must_use]
    pub fn with_title(self, title: impl Into<String>) -> Self {
        self.with("title", title.into())
    }

    /// Sets the ReDoc version to load.
    #[must_use]
    pub fn with_redoc_version(self, version: impl Into<String>) -> Self {
        self.with("redocVersion", version.into())
    }

    /// Sets the name of the served JSON document.
    #[must_use]
    pub fn with_doc_name(self, doc_name: impl Into<String>) -> Self {
        self.with("docName", doc_name.into())
    }

    /// Sets the logo URL, keeping the other logo fields.
    #[must_use]
    pub fn with_logo_url(self, url: impl Into<String>) -> Self {
        self.with_logo_field("url", url.into())
    }

    /// Sets the whole logo descriptor.
    #[must_use]
    pub fn with_logo(self, logo: &LogoOptions) -> Self {
        let fields = [
            ("url", &logo.url),
            ("backgroundColor", &logo.background_color),
            ("altText", &logo.alt_text),
            ("href", &logo.href),
        ];
        let logo = fields
            .into_iter()
            .filter_map(|(key, value)| Some((key.to_string(), Value::String(value.clone()?))))
            .collect::<Map<_, _>>();
        self.with("logo", logo)
    }

    fn with_logo_field(mut self, key: &str, value: String) -> Self {
        let logo = self
            .0
            .entry("logo")
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(logo) = logo {
            logo.insert(key.to_string(), Value::String(value));
        }
        self
    }

    /// Enables basic authentication with the given credentials.
    #[must_use]
    pub fn with_basic_auth(self, user: impl Into<String>, password: impl Into<String>) -> Self {
        let auth = serde_json::json!({
            "enabled": true,
            "user": user.into(),
            "password": password.into(),
        });
        self.with("auth", auth)
    }

    /// Appends a tag group.
    #[must_use]
    pub fn with_tag_group<I, T>(mut self, name: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let group = serde_json::json!({
            "name": name.into(),
            "tags": tags.into_iter().map(Into::into).collect::<Vec<String>>(),
        });
        let groups = self
            .0
            .entry("tagGroups")
            .or_insert_with(|| Value::Array(vec![]));
        if let Value::Array(groups) = groups {
            groups.push(group);
        }
        self
    }
}

impl From<RawOptions> for Value {
    fn from(options: RawOptions) -> Self {
        Value::Object(options.0)
    }
}
