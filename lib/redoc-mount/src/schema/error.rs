/// The constraint a field violated.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Rule {
    /// Expected a boolean (or `"true"` / `"false"`).
    #[display("must be a boolean")]
    Boolean,

    /// Expected a string.
    #[display("must be a string")]
    String,

    /// Expected a non-empty string.
    #[display("is not allowed to be empty")]
    Empty,

    /// Expected an object.
    #[display("must be of type object")]
    Object,

    /// Expected an array.
    #[display("must be an array")]
    Array,

    /// A mandatory field is missing.
    #[display("is required")]
    Required,

    /// Expected an absolute URI.
    #[display("must be a valid uri")]
    Uri,

    /// The string does not match a pattern.
    #[display("with value \"{value}\" fails to match the required pattern: /{pattern}/")]
    Pattern {
        /// The rejected value.
        value: String,
        /// The expected pattern.
        pattern: &'static str,
    },

    /// The field is not a recognized option.
    #[display("is not allowed")]
    Unknown,

    /// The defaulted object could not be read back as options.
    #[display("is invalid: {_0}")]
    Invalid(String),
}

/// An options validation failure.
///
/// The message names the offending field and the violated rule, e.g.
/// `"logo.url" must be a valid uri`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error, derive_more::Display)]
#[display("\"{path}\" {rule}")]
pub struct ValidationError {
    path: String,
    rule: Rule,
}

impl ValidationError {
    pub(crate) fn new(path: impl Into<String>, rule: Rule) -> Self {
        Self {
            path: path.into(),
            rule,
        }
    }

    /// Path of the offending field, e.g. `logo.url` or `tagGroups[0].name`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The violated rule.
    #[must_use]
    pub fn rule(&self) -> &Rule {
        &self.rule
    }
}
