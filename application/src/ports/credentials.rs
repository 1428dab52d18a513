//! Credential provider port
//!
//! The core consumes authentication only as a boolean signal plus a bearer
//! token the gateway adapter attaches to every request. Where tokens come
//! from (and the login/logout flow) is outside this crate.

/// Source of the credential attached to gateway calls.
pub trait CredentialProvider: Send + Sync {
    /// Current bearer token, if any.
    fn bearer_token(&self) -> Option<String>;

    /// Whether a credential is available.
    fn is_authenticated(&self) -> bool {
        self.bearer_token().is_some()
    }
}

/// No credential; requests go out unauthenticated.
pub struct AnonymousCredentials;

impl CredentialProvider for AnonymousCredentials {
    fn bearer_token(&self) -> Option<String> {
        None
    }
}
