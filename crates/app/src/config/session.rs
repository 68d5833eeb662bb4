//! Session Config

use clap::Args;

/// Signed-in user for this session. Leave the user id unset to shop as a
/// guest.
#[derive(Debug, Args)]
pub struct SessionConfig {
    /// Identity provider user id
    #[arg(long, env = "LAVANYA_USER_ID")]
    pub user_id: Option<String>,

    /// Email address of the signed-in user
    #[arg(long, env = "LAVANYA_USER_EMAIL")]
    pub user_email: Option<String>,

    /// Display name of the signed-in user
    #[arg(long, env = "LAVANYA_USER_NAME")]
    pub user_name: Option<String>,
}
