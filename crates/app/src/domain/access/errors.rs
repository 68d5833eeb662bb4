//! Access errors.

use thiserror::Error;

/// Reasons a visitor is turned away from a route.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    /// No one is signed in; the shopper should be sent to the login view.
    #[error("please sign in to continue")]
    LoginRequired,

    /// Not on the admin allow-list; back to the home view.
    #[error("this page is only available to administrators")]
    AdminRequired,
}
