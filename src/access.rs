//! Access policy
//!
//! Routes fall into three classes. Public routes are open to everyone,
//! authenticated routes need a signed-in identity and admin routes need an
//! identity on the admin allow-list. Anyone who fails an admin check,
//! signed in or not, is sent home. Allow-list entries containing `@` match
//! the identity's email address case-insensitively, every other entry must
//! equal the identity's opaque id exactly.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Opaque identity-provider id
    pub uid: String,

    /// Email address, when the provider shares it
    #[serde(default)]
    pub email: Option<String>,

    /// Display name
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Access requirement of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Open to every visitor
    Public,
    /// Needs a signed-in identity
    Authenticated,
    /// Needs an allow-listed identity
    Admin,
}

/// Where a rejected visitor is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    /// The sign-in page
    Login,
    /// The storefront home page
    Home,
}

/// Outcome of an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// The visitor may proceed
    Granted,
    /// The visitor is turned away
    Redirect(Redirect),
}

impl AccessDecision {
    /// Whether access was granted.
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Admin allow-list and route gating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessPolicy {
    uids: SmallVec<[String; 2]>,
    emails: SmallVec<[String; 2]>,
}

impl AccessPolicy {
    /// Build a policy from admin ids or email addresses.
    pub fn new<I, S>(admins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut policy = Self::default();

        for admin in admins {
            let admin = admin.as_ref().trim();

            if admin.is_empty() {
                continue;
            }

            if admin.contains('@') {
                policy.emails.push(admin.to_ascii_lowercase());
            } else {
                policy.uids.push(admin.to_string());
            }
        }

        policy
    }

    /// Parse a comma separated allow-list.
    pub fn from_allow_list(list: &str) -> Self {
        Self::new(list.split(','))
    }

    /// Whether the identity is on the admin allow-list.
    pub fn is_admin(&self, identity: &Identity) -> bool {
        if self.uids.iter().any(|uid| *uid == identity.uid) {
            return true;
        }

        identity.email.as_deref().is_some_and(|email| {
            self.emails
                .iter()
                .any(|admin| admin.eq_ignore_ascii_case(email))
        })
    }

    /// Decide whether `identity` may visit a route of the given class.
    pub fn check(&self, route: RouteClass, identity: Option<&Identity>) -> AccessDecision {
        match (route, identity) {
            (RouteClass::Public, _) => AccessDecision::Granted,
            (RouteClass::Authenticated, None) => AccessDecision::Redirect(Redirect::Login),
            (RouteClass::Authenticated, Some(_)) => AccessDecision::Granted,
            (RouteClass::Admin, Some(identity)) if self.is_admin(identity) => {
                AccessDecision::Granted
            }
            (RouteClass::Admin, _) => AccessDecision::Redirect(Redirect::Home),
        }
    }

    /// Number of allow-listed admins.
    pub fn len(&self) -> usize {
        self.uids.len() + self.emails.len()
    }

    /// Check if nobody is allow-listed.
    pub fn is_empty(&self) -> bool {
        self.uids.is_empty() && self.emails.is_empty()
    }
}
