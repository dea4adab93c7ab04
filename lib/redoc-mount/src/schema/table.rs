use std::sync::LazyLock;

use regex::Regex;

/// Title used when neither the options nor the document provide one.
pub(super) const DEFAULT_TITLE: &str = "Swagger documentation";

const HEX_COLOR: &str = "^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$";

static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEX_COLOR).expect("a valid regex"));

fn is_hex_color(value: &str) -> bool {
    HEX_COLOR_RE.is_match(value)
}

/// One recognized option.
#[derive(Debug, Clone, Copy)]
pub(super) struct FieldSpec {
    pub(super) name: &'static str,
    pub(super) kind: FieldKind,
    pub(super) presence: Presence,
}

#[derive(Debug, Clone, Copy)]
pub(super) enum FieldKind {
    Boolean,
    String(StringFormat),
    Any,
    Object(&'static [FieldSpec]),
    ObjectArray(&'static [FieldSpec]),
    StringArray,
}

#[derive(Debug, Clone, Copy)]
pub(super) enum StringFormat {
    Plain,
    Uri,
    Pattern {
        source: &'static str,
        matches: fn(&str) -> bool,
    },
}

/// What happens when the field is absent.
#[derive(Debug, Clone, Copy)]
pub(super) enum Presence {
    Optional,
    Required,
    Default(DefaultValue),
}

#[derive(Debug, Clone, Copy)]
pub(super) enum DefaultValue {
    Bool(bool),
    Str(&'static str),
    /// The document `info.title`, or [`DEFAULT_TITLE`].
    DocumentTitle,
    /// An empty object, itself defaulted by its own fields.
    Nested,
}

impl FieldSpec {
    const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Optional,
        }
    }

    const fn boolean(name: &'static str, default: bool) -> Self {
        Self::new(name, FieldKind::Boolean).with_default(DefaultValue::Bool(default))
    }

    const fn string(name: &'static str) -> Self {
        Self::new(name, FieldKind::String(StringFormat::Plain))
    }

    const fn uri(name: &'static str) -> Self {
        Self::new(name, FieldKind::String(StringFormat::Uri))
    }

    const fn required(self) -> Self {
        Self {
            presence: Presence::Required,
            ..self
        }
    }

    const fn with_default(self, default: DefaultValue) -> Self {
        Self {
            presence: Presence::Default(default),
            ..self
        }
    }
}

const LOGO_FIELDS: &[FieldSpec] = &[
    FieldSpec::uri("url"),
    FieldSpec::new(
        "backgroundColor",
        FieldKind::String(StringFormat::Pattern {
            source: HEX_COLOR,
            matches: is_hex_color,
        }),
    ),
    FieldSpec::string("altText"),
    FieldSpec::uri("href"),
];

const AUTH_FIELDS: &[FieldSpec] = &[
    FieldSpec::boolean("enabled", false),
    FieldSpec::string("user").with_default(DefaultValue::Str("admin")),
    FieldSpec::string("password").with_default(DefaultValue::Str("123")),
];

const TAG_GROUP_FIELDS: &[FieldSpec] = &[
    FieldSpec::string("name").required(),
    FieldSpec::new("tags", FieldKind::StringArray).required(),
];

/// The recognized options, in validation order.
pub(super) const OPTIONS_FIELDS: &[FieldSpec] = &[
    FieldSpec::string("redocVersion").with_default(DefaultValue::Str("latest")),
    FieldSpec::string("title").with_default(DefaultValue::DocumentTitle),
    FieldSpec::string("favicon"),
    FieldSpec::new("logo", FieldKind::Object(LOGO_FIELDS)),
    FieldSpec::new("theme", FieldKind::Any),
    FieldSpec::boolean("untrustedSpec", false),
    FieldSpec::boolean("supressWarnings", true),
    FieldSpec::boolean("hideHostname", false),
    FieldSpec::string("expandResponses"),
    FieldSpec::boolean("requiredPropsFirst", true),
    FieldSpec::boolean("sortPropsAlphabetically", true),
    FieldSpec::new("showExtensions", FieldKind::Any).with_default(DefaultValue::Bool(false)),
    FieldSpec::boolean("noAutoAuth", true),
    FieldSpec::boolean("pathInMiddlePanel", false),
    FieldSpec::boolean("hideLoading", false),
    FieldSpec::boolean("nativeScrollbars", false),
    FieldSpec::boolean("hideDownloadButton", false),
    FieldSpec::boolean("disableSearch", false),
    FieldSpec::boolean("onlyRequiredInSamples", false),
    FieldSpec::string("docName").with_default(DefaultValue::Str("swagger")),
    FieldSpec::new("auth", FieldKind::Object(AUTH_FIELDS)).with_default(DefaultValue::Nested),
    FieldSpec::new("tagGroups", FieldKind::ObjectArray(TAG_GROUP_FIELDS)),
];
