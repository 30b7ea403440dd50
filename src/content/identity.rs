//! Client identity capability handed to components that stamp ownership

/// Supplies the opaque per-client token recorded as an article's owner.
///
/// Implementations decide how the token is created and persisted; callers
/// expect the same value on every call.
pub trait IdentityProvider {
    fn client_token(&self) -> String;
}

/// Fixed token, e.g. one restored from client storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticIdentity(String);

impl StaticIdentity {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl IdentityProvider for StaticIdentity {
    fn client_token(&self) -> String {
        self.0.clone()
    }
}

impl<T: IdentityProvider + ?Sized> IdentityProvider for &T {
    fn client_token(&self) -> String {
        (**self).client_token()
    }
}
