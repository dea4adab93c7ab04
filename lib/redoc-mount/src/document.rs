use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Errors raised while building an [`ApiDocument`].
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum DocumentError {
    /// The document is valid JSON but not a JSON object.
    #[display("API document must be a JSON object, got: {kind}")]
    #[from(skip)]
    NotAnObject {
        /// The JSON type that was found instead.
        kind: &'static str,
    },

    /// JSON (de)serialization failure.
    #[display("Invalid JSON document: {_0}")]
    Json(serde_json::Error),

    /// YAML parsing failure.
    #[cfg(feature = "yaml")]
    #[display("Invalid YAML document: {message}")]
    #[from(skip)]
    Yaml {
        /// Description of the parsing failure.
        message: String,
    },
}

/// An API description document (OpenAPI / Swagger), held as a JSON object.
///
/// The document is owned by the caller: it is produced by whatever generates the
/// API description, then only mutated by [`add_vendor_extensions`](crate::add_vendor_extensions).
///
/// # Example
///
/// ```rust
/// use redoc_mount::ApiDocument;
/// use serde_json::json;
///
/// let document = ApiDocument::try_from(json!({
///     "openapi": "3.1.0",
///     "info": { "title": "Cats API", "version": "1.0.0" },
///     "paths": {}
/// }))?;
/// assert_eq!(document.title(), Some("Cats API"));
/// # Ok::<(), redoc_mount::DocumentError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiDocument(Map<String, Value>);

impl ApiDocument {
    /// Parses a document from a JSON string.
    ///
    /// # Errors
    ///
    /// Fails if the input is not valid JSON or not a JSON object.
    pub fn from_json_str(input: &str) -> Result<Self, DocumentError> {
        let value = serde_json::from_str::<Value>(input)?;
        Self::try_from(value)
    }

    /// The `info.title` of the document, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.info()?.get("title")?.as_str()
    }

    /// The `info` section of the document, if any.
    #[must_use]
    pub fn info(&self) -> Option<&Map<String, Value>> {
        self.0.get("info")?.as_object()
    }

    /// The `info` section, created if the document has none.
    pub fn info_mut(&mut self) -> &mut Map<String, Value> {
        let info = self
            .0
            .entry("info")
            .or_insert_with(|| Value::Object(Map::new()));
        if !info.is_object() {
            *info = Value::Object(Map::new());
        }
        match info {
            Value::Object(map) => map,
            _ => unreachable!("info was just replaced by an object"),
        }
    }

    /// Reads a top-level field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Sets a top-level field, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Serializes the document as a compact JSON string.
    ///
    /// # Errors
    ///
    /// Fails if serialization fails, which cannot happen for a JSON object.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }

    /// Consumes the document, returning the underlying JSON object.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl TryFrom<Value> for ApiDocument {
    type Error = DocumentError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(DocumentError::NotAnObject {
                kind: json_kind(&other),
            }),
        }
    }
}

impl TryFrom<&utoipa::openapi::OpenApi> for ApiDocument {
    type Error = DocumentError;

    fn try_from(openapi: &utoipa::openapi::OpenApi) -> Result<Self, Self::Error> {
        let value = serde_json::to_value(openapi)?;
        Self::try_from(value)
    }
}

impl TryFrom<utoipa::openapi::OpenApi> for ApiDocument {
    type Error = DocumentError;

    fn try_from(openapi: utoipa::openapi::OpenApi) -> Result<Self, Self::Error> {
        Self::try_from(&openapi)
    }
}

impl From<Map<String, Value>> for ApiDocument {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<ApiDocument> for Value {
    fn from(document: ApiDocument) -> Self {
        Value::Object(document.0)
    }
}
