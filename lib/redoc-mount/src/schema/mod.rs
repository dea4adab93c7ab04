//! Options validation.
//!
//! The recognized options are described by a declarative table (see `table.rs`)
//! consumed by a single generic routine. Validation follows the table order and
//! stops at the first failure.

use serde_json::{Map, Value};
use tracing::debug;
use url::Url;

use crate::{ApiDocument, RedocOptions};

mod error;
mod table;

pub use self::error::{Rule, ValidationError};

use self::table::{
    DEFAULT_TITLE, DefaultValue, FieldKind, FieldSpec, OPTIONS_FIELDS, Presence, StringFormat,
};

struct Context<'a> {
    default_title: &'a str,
}

/// Validates raw options, applying defaults.
///
/// `raw` is the loosely typed options object; `null` is handled like an empty object.
/// The document is only read to compute the default title.
///
/// # Errors
///
/// Fails on the first field violating its constraint, in declaration order.
///
/// # Example
///
/// ```rust
/// use redoc_mount::{ApiDocument, validate_options};
/// use serde_json::json;
///
/// let document = ApiDocument::default();
///
/// let options = validate_options(&json!({ "hideLoading": "true" }), &document)?;
/// assert!(options.hide_loading);
/// assert_eq!(options.title, "Swagger documentation");
///
/// let error = validate_options(&json!({ "logo": { "url": "notaUrl" } }), &document).unwrap_err();
/// assert_eq!(error.to_string(), r#""logo.url" must be a valid uri"#);
/// # Ok::<(), redoc_mount::ValidationError>(())
/// ```
pub fn validate_options(
    raw: &Value,
    document: &ApiDocument,
) -> Result<RedocOptions, ValidationError> {
    let context = Context {
        default_title: document
            .title()
            .filter(|title| !title.is_empty())
            .unwrap_or(DEFAULT_TITLE),
    };

    let empty = Map::new();
    let raw = match raw {
        Value::Null => &empty,
        Value::Object(map) => map,
        _ => return Err(ValidationError::new("value", Rule::Object)),
    };

    let validated = validate_object(raw, OPTIONS_FIELDS, "", &context)?;
    let options: RedocOptions = serde_path_to_error::deserialize(Value::Object(validated))
        .map_err(|error| {
            ValidationError::new(
                error.path().to_string(),
                Rule::Invalid(error.inner().to_string()),
            )
        })?;

    debug!(
        title = %options.title,
        doc_name = %options.doc_name,
        auth = options.auth.enabled,
        "options validated"
    );
    Ok(options)
}

fn key_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

fn validate_object(
    raw: &Map<String, Value>,
    fields: &[FieldSpec],
    prefix: &str,
    context: &Context<'_>,
) -> Result<Map<String, Value>, ValidationError> {
    let mut result = Map::new();

    for field in fields {
        let path = key_path(prefix, field.name);
        let value = match raw.get(field.name) {
            Some(value) => Some(validate_value(value, field.kind, &path, context)?),
            None => default_value(field, &path, context)?,
        };
        if let Some(value) = value {
            result.insert(field.name.to_string(), value);
        }
    }

    let unknown = raw
        .keys()
        .find(|key| !fields.iter().any(|field| field.name == key.as_str()));
    if let Some(key) = unknown {
        return Err(ValidationError::new(key_path(prefix, key), Rule::Unknown));
    }

    Ok(result)
}

fn default_value(
    field: &FieldSpec,
    path: &str,
    context: &Context<'_>,
) -> Result<Option<Value>, ValidationError> {
    let default = match field.presence {
        Presence::Optional => return Ok(None),
        Presence::Required => return Err(ValidationError::new(path, Rule::Required)),
        Presence::Default(default) => default,
    };

    let value = match (default, field.kind) {
        (DefaultValue::Bool(value), _) => Value::Bool(value),
        (DefaultValue::Str(value), _) => Value::String(value.to_string()),
        (DefaultValue::DocumentTitle, _) => Value::String(context.default_title.to_string()),
        (DefaultValue::Nested, FieldKind::Object(fields)) => {
            Value::Object(validate_object(&Map::new(), fields, path, context)?)
        }
        (DefaultValue::Nested, _) => Value::Object(Map::new()),
    };
    debug!(%path, %value, "default applied");

    Ok(Some(value))
}

fn validate_value(
    value: &Value,
    kind: FieldKind,
    path: &str,
    context: &Context<'_>,
) -> Result<Value, ValidationError> {
    match kind {
        FieldKind::Boolean => match value {
            Value::Bool(flag) => Ok(Value::Bool(*flag)),
            Value::String(text) if text.eq_ignore_ascii_case("true") => Ok(Value::Bool(true)),
            Value::String(text) if text.eq_ignore_ascii_case("false") => Ok(Value::Bool(false)),
            _ => Err(ValidationError::new(path, Rule::Boolean)),
        },
        FieldKind::String(format) => {
            let Value::String(text) = value else {
                return Err(ValidationError::new(path, Rule::String));
            };
            validate_string(text, format, path)?;
            Ok(value.clone())
        }
        FieldKind::Any => Ok(value.clone()),
        FieldKind::Object(fields) => {
            let Value::Object(map) = value else {
                return Err(ValidationError::new(path, Rule::Object));
            };
            validate_object(map, fields, path, context).map(Value::Object)
        }
        FieldKind::ObjectArray(fields) => {
            let Value::Array(items) = value else {
                return Err(ValidationError::new(path, Rule::Array));
            };
            items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    let item_path = format!("{path}[{index}]");
                    validate_value(item, FieldKind::Object(fields), &item_path, context)
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array)
        }
        FieldKind::StringArray => {
            let Value::Array(items) = value else {
                return Err(ValidationError::new(path, Rule::Array));
            };
            items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    let item_path = format!("{path}[{index}]");
                    validate_value(
                        item,
                        FieldKind::String(StringFormat::Plain),
                        &item_path,
                        context,
                    )
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array)
        }
    }
}

fn validate_string(text: &str, format: StringFormat, path: &str) -> Result<(), ValidationError> {
    if text.is_empty() {
        return Err(ValidationError::new(path, Rule::Empty));
    }

    match format {
        StringFormat::Plain => Ok(()),
        StringFormat::Uri => Url::parse(text)
            .map(|_| ())
            .map_err(|_| ValidationError::new(path, Rule::Uri)),
        StringFormat::Pattern { source, matches } => {
            if matches(text) {
                Ok(())
            } else {
                Err(ValidationError::new(
                    path,
                    Rule::Pattern {
                        value: text.to_string(),
                        pattern: source,
                    },
                ))
            }
        }
    }
}
