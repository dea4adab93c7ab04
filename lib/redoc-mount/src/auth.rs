use headers::authorization::Basic;
use headers::{Authorization, HeaderMapExt};
use http::header::WWW_AUTHENTICATE;
use http::{HeaderMap, HeaderValue, Response, StatusCode};
use subtle::ConstantTimeEq;
use tracing::warn;

use crate::{AuthOptions, SecretString};

const CHALLENGE: &str = r#"Basic realm="Restricted""#;

/// HTTP Basic authentication check for a single user.
///
/// Credentials are compared in constant time.
#[derive(Debug, Clone)]
pub struct BasicAuthGate {
    user: String,
    password: SecretString,
}

impl BasicAuthGate {
    /// Creates a gate accepting the given credentials.
    pub fn new(user: impl Into<String>, password: impl Into<SecretString>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }

    /// Creates the gate described by the options, if authentication is enabled.
    #[must_use]
    pub fn from_options(auth: &AuthOptions) -> Option<Self> {
        auth.enabled
            .then(|| Self::new(auth.user.clone(), auth.password.clone()))
    }

    /// Checks the `Authorization` header.
    ///
    /// # Errors
    ///
    /// Returns the `401 Unauthorized` challenge response when the credentials are
    /// missing, malformed, or wrong.
    pub fn check(&self, headers: &HeaderMap) -> Result<(), Response<String>> {
        let Some(credentials) = headers.typed_get::<Authorization<Basic>>() else {
            warn!("missing or malformed basic credentials");
            return Err(Self::challenge());
        };

        let user_ok = credentials.username().as_bytes().ct_eq(self.user.as_bytes());
        let password_ok = credentials
            .password()
            .as_bytes()
            .ct_eq(self.password.expose().as_bytes());
        if bool::from(user_ok & password_ok) {
            Ok(())
        } else {
            warn!(user = credentials.username(), "rejected basic credentials");
            Err(Self::challenge())
        }
    }

    /// The `401 Unauthorized` response asking for Basic credentials.
    #[must_use]
    pub fn challenge() -> Response<String> {
        let mut response = Response::new(String::new());
        *response.status_mut() = StatusCode::UNAUTHORIZED;
        response
            .headers_mut()
            .insert(WWW_AUTHENTICATE, HeaderValue::from_static(CHALLENGE));
        response
    }
}
