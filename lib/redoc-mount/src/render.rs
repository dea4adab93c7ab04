use askama::Template;
use serde::Serialize;
use serde_json::Value;

use crate::{RedocError, RedocOptions};

const REDOC_CDN: &str = "https://cdn.redoc.ly/redoc";

#[derive(Template)]
#[template(path = "redoc.html")]
struct RedocPage<'a> {
    title: &'a str,
    favicon: Option<&'a str>,
    script_url: String,
    doc_url_json: String,
    options_json: String,
}

/// The options forwarded to `Redoc.init`.
///
/// This is an explicit projection of [`RedocOptions`]: only the display settings
/// understood by ReDoc are forwarded. Credentials, the document name, the logo and
/// the tag groups never reach the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerOptions<'a> {
    untrusted_spec: bool,
    suppress_warnings: bool,
    hide_hostname: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    expand_responses: Option<&'a str>,
    required_props_first: bool,
    sort_props_alphabetically: bool,
    show_extensions: &'a Value,
    no_auto_auth: bool,
    path_in_middle_panel: bool,
    hide_loading: bool,
    native_scrollbars: bool,
    hide_download_button: bool,
    disable_search: bool,
    only_required_in_samples: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    theme: Option<&'a Value>,
}

impl<'a> From<&'a RedocOptions> for ViewerOptions<'a> {
    fn from(options: &'a RedocOptions) -> Self {
        Self {
            untrusted_spec: options.untrusted_spec,
            suppress_warnings: options.supress_warnings,
            hide_hostname: options.hide_hostname,
            expand_responses: options.expand_responses.as_deref(),
            required_props_first: options.required_props_first,
            sort_props_alphabetically: options.sort_props_alphabetically,
            show_extensions: &options.show_extensions,
            no_auto_auth: options.no_auto_auth,
            path_in_middle_panel: options.path_in_middle_panel,
            hide_loading: options.hide_loading,
            native_scrollbars: options.native_scrollbars,
            hide_download_button: options.hide_download_button,
            disable_search: options.disable_search,
            only_required_in_samples: options.only_required_in_samples,
            theme: options.theme.as_ref(),
        }
    }
}

/// JSON safe to embed inside a `<script>` element.
fn script_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(value)?;
    Ok(json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029"))
}

/// Renders the ReDoc HTML page.
///
/// `doc_url` is the URL the page loads the JSON document from.
///
/// # Errors
///
/// Fails if the options cannot be serialized or the template cannot be rendered.
pub fn render_page(options: &RedocOptions, doc_url: &str) -> Result<String, RedocError> {
    let page = RedocPage {
        title: &options.title,
        favicon: options.favicon.as_deref(),
        script_url: format!(
            "{REDOC_CDN}/{}/bundles/redoc.standalone.js",
            options.redoc_version
        ),
        doc_url_json: script_json(&doc_url)?,
        options_json: script_json(&ViewerOptions::from(options))?,
    };

    let html = page.render()?;
    Ok(html)
}
