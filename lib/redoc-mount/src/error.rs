use crate::ValidationError;

/// Errors raised while mounting ReDoc.
///
/// All of them happen during setup, before any route is registered.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum RedocError {
    /// The options failed validation.
    #[display("{_0}")]
    Validation(ValidationError),

    /// The host server adapter is not supported.
    #[display("Fastify is not implemented yet")]
    #[from(skip)]
    UnsupportedAdapter,

    /// The mount path cannot be turned into a document URL.
    #[display("Invalid mount path '{path}': {error}")]
    #[from(skip)]
    InvalidPath {
        /// The mount path, after normalization.
        path: String,
        /// The URL resolution error.
        error: url::ParseError,
    },

    /// The ReDoc page template failed to render.
    #[display("Failed to render ReDoc page: {_0}")]
    Render(askama::Error),

    /// The document or the viewer options failed to serialize.
    #[display("JSON serialization error: {_0}")]
    Json(serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_unsupported_adapter_message() {
        assert_eq!(
            RedocError::UnsupportedAdapter.to_string(),
            "Fastify is not implemented yet"
        );
    }

    #[test]
    fn test_redoc_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<RedocError>();
        assert_sync::<RedocError>();
    }
}
