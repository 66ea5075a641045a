use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for signup. Fields default to empty so presence checks
/// happen in the handler (400) rather than at deserialization (422).
#[derive(Debug, Deserialize, ToSchema)]
pub struct SignupRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub contact_num: String,
    #[serde(default)]
    pub password: String,
}

impl SignupRequest {
    pub fn has_all_fields(&self) -> bool {
        !self.email.is_empty()
            && !self.name.is_empty()
            && !self.contact_num.is_empty()
            && !self.password.is_empty()
    }
}

/// Request body for login.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub name: String,
}
