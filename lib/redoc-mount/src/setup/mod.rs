use serde_json::Value;
use tracing::{info, instrument};
use url::{PathSegmentsMut, Url};

use crate::{
    ApiDocument, BasicAuthGate, RedocError, RedocOptions, add_vendor_extensions, render_page,
    validate_options,
};

mod adapter;
#[cfg(feature = "axum")]
mod axum;

pub use self::adapter::{AdapterKind, DocsEndpoint, HttpAdapter};
#[cfg(feature = "axum")]
pub use self::axum::{AxumAdapter, RouterExt};

/// Base of the URLs used to encode the mount path.
const RESOLUTION_BASE: &str = "http://localhost/";

/// Mounts ReDoc on a host server.
#[derive(Debug, Clone, Copy)]
pub struct RedocModule;

impl RedocModule {
    /// Validates the options, augments the document, then registers the ReDoc routes.
    ///
    /// - `path`: where the viewer is served; it is percent-encoded, and extra slashes are ignored
    ///   (`docs`, `/docs` and `docs/` all mount at `/docs`),
    /// - `adapter`: the host server,
    /// - `document`: the API description, receives the vendor extensions in place,
    /// - `options`: the raw options object (see [`RedocOptions`] for defaults).
    ///
    /// Two routes are registered: the viewer at `path` (and `path/`), and the JSON
    /// document at `path/<docName>.json`.
    ///
    /// # Errors
    ///
    /// - [`RedocError::Validation`] if an option is invalid,
    /// - [`RedocError::UnsupportedAdapter`] for a [`AdapterKind::Fastify`] adapter,
    /// - [`RedocError::InvalidPath`] if the document URL cannot be resolved,
    /// - [`RedocError::Render`] or [`RedocError::Json`] if the page or the document cannot be produced.
    ///
    /// No route is registered when an error is returned.
    #[instrument(skip_all, fields(path = %path))]
    pub fn setup<A>(
        path: &str,
        adapter: &mut A,
        document: &mut ApiDocument,
        options: &Value,
    ) -> Result<(), RedocError>
    where
        A: HttpAdapter + ?Sized,
    {
        let options = validate_options(options, document)?;
        add_vendor_extensions(&options, document);

        if adapter.kind() == AdapterKind::Fastify {
            return Err(RedocError::UnsupportedAdapter);
        }

        Self::register_routes(path, adapter, document, &options)
    }

    fn register_routes<A>(
        path: &str,
        adapter: &mut A,
        document: &ApiDocument,
        options: &RedocOptions,
    ) -> Result<(), RedocError>
    where
        A: HttpAdapter + ?Sized,
    {
        let mount = mount_url(path)?;
        let doc_url = document_url(&mount, &options.doc_name, path)?;

        let html = render_page(options, &doc_url)?;
        let json = document.to_json_string()?;
        let gate = BasicAuthGate::from_options(&options.auth);
        let auth = gate.is_some();

        let page = DocsEndpoint::page(html, gate);
        for page_path in page_paths(mount.path()) {
            adapter.get(&page_path, page.clone());
        }
        adapter.get(&doc_url, DocsEndpoint::document(json));

        info!(path = %mount.path(), %doc_url, auth, "ReDoc mounted");
        Ok(())
    }
}

fn segments_mut<'a>(url: &'a mut Url, path: &str) -> Result<PathSegmentsMut<'a>, RedocError> {
    url.path_segments_mut().map_err(|()| RedocError::InvalidPath {
        path: path.to_string(),
        error: url::ParseError::RelativeUrlWithCannotBeABaseBase,
    })
}

/// The mount path as a percent-encoded URL path.
///
/// Empty segments are dropped: the path starts with a single `/` and has no
/// trailing slash, except for the root.
pub(crate) fn mount_url(path: &str) -> Result<Url, RedocError> {
    let mut url = Url::parse(RESOLUTION_BASE).map_err(|error| RedocError::InvalidPath {
        path: path.to_string(),
        error,
    })?;
    segments_mut(&mut url, path)?
        .clear()
        .extend(path.split('/').filter(|segment| !segment.is_empty()));
    Ok(url)
}

/// The viewer paths: the mount path and its trailing-slash form.
fn page_paths(mount_path: &str) -> Vec<String> {
    if mount_path == "/" {
        vec![mount_path.to_string()]
    } else {
        vec![mount_path.to_string(), format!("{mount_path}/")]
    }
}

/// The path of `<docName>.json` inside the mount directory.
pub(crate) fn document_url(mount: &Url, doc_name: &str, path: &str) -> Result<String, RedocError> {
    let mut url = mount.clone();
    segments_mut(&mut url, path)?
        .pop_if_empty()
        .push(&format!("{doc_name}.json"));
    Ok(url.path().to_string())
}
