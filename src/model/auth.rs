use serde::{Deserialize, Serialize};

/// Credentials posted to the dashboard sign-in endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SigninDto {
    pub email: String,
    pub password: String,
}
