//! Session type handed out by the auth gate

use serde::{Deserialize, Serialize};

/// An authenticated user session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: String,
    pub email: String,
}
