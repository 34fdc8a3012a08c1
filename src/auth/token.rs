//! Token credentials for the Auto Scaling API.

use secrecy::{ExposeSecret, SecretString};

/// An API token, sent as the `X-Auth-Token` header on every request.
///
/// The token is held as a [`SecretString`] and never appears in `Debug`
/// output.
pub struct AuthToken {
    token: SecretString,
}

impl AuthToken {
    /// Wrap a token obtained from the identity service.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
        }
    }

    pub(crate) fn expose(&self) -> &str {
        self.token.expose_secret()
    }
}

impl From<&str> for AuthToken {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AuthToken {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthToken")
            .field("token", &"[REDACTED]")
            .finish()
    }
}
