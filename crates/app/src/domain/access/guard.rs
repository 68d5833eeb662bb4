//! Route guard.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use lavanya::access::{AccessDecision, AccessPolicy, Identity, Redirect, RouteClass};
use tracing::info;

use crate::{domain::access::errors::AccessError, identity::IdentityProvider};

/// Applies the access policy to the current identity.
#[derive(Clone)]
pub struct AccessGuard {
    identity: Arc<dyn IdentityProvider>,
    policy: AccessPolicy,
}

impl AccessGuard {
    /// Create a guard over the given identity provider and policy.
    #[must_use]
    pub fn new(identity: Arc<dyn IdentityProvider>, policy: AccessPolicy) -> Self {
        Self { identity, policy }
    }

    /// Decide whether the current identity may visit `route`.
    pub fn check(&self, route: RouteClass) -> AccessDecision {
        self.policy
            .check(route, self.identity.current_identity().as_ref())
    }

    /// Require access to `route`, returning the identity that was admitted.
    ///
    /// # Errors
    ///
    /// - [`AccessError::LoginRequired`]: nobody is signed in.
    /// - [`AccessError::AdminRequired`]: the route is admin-only and the visitor
    ///   is not an allow-listed admin, whether signed in or not.
    pub fn require(&self, route: RouteClass) -> Result<Option<Identity>, AccessError> {
        let identity = self.identity.current_identity();

        match self.policy.check(route, identity.as_ref()) {
            AccessDecision::Granted => Ok(identity),
            AccessDecision::Redirect(Redirect::Login) => {
                info!(?route, "access denied: not signed in");

                Err(AccessError::LoginRequired)
            }
            AccessDecision::Redirect(Redirect::Home) => {
                info!(
                    ?route,
                    uid = identity.as_ref().map(|identity| identity.uid.as_str()),
                    "access denied: not an admin"
                );

                Err(AccessError::AdminRequired)
            }
        }
    }
}

impl Debug for AccessGuard {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AccessGuard")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
