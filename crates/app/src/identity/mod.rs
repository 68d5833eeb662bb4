//! Identity Provider
//!
//! Supplies the signed-in user, if any. Sign-in itself happens elsewhere; the
//! storefront only reads the resulting identity.

use lavanya::access::Identity;
use mockall::automock;

/// Reports who is signed in.
#[automock]
pub trait IdentityProvider: Send + Sync {
    /// The signed-in user, or `None` for a guest session.
    fn current_identity(&self) -> Option<Identity>;
}

/// Identity fixed for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentityProvider {
    identity: Option<Identity>,
}

impl StaticIdentityProvider {
    #[must_use]
    pub fn new(identity: Option<Identity>) -> Self {
        Self { identity }
    }

    /// A provider with nobody signed in.
    #[must_use]
    pub fn guest() -> Self {
        Self::default()
    }

    /// Build from session settings. A blank user id means a guest session.
    #[must_use]
    pub fn from_session(
        uid: Option<String>,
        email: Option<String>,
        display_name: Option<String>,
    ) -> Self {
        let identity = uid
            .map(|uid| uid.trim().to_string())
            .filter(|uid| !uid.is_empty())
            .map(|uid| Identity {
                uid,
                email: email.filter(|email| !email.trim().is_empty()),
                display_name: display_name.filter(|name| !name.trim().is_empty()),
            });

        Self { identity }
    }
}

impl IdentityProvider for StaticIdentityProvider {
    fn current_identity(&self) -> Option<Identity> {
        self.identity.clone()
    }
}
