use fake::Dummy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines the payload sent to register a new user.
///
#[derive(Clone, Dummy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub terms: bool,
}

// Password is redacted.
impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("user_name", &self.user_name)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"********")
            .field("terms", &self.terms)
            .finish()
    }
}

/// Defines the result of a registration request that received a response.
///
#[derive(Clone, Debug, PartialEq)]
pub enum ServiceResponse {
    /// The service accepted the registration. The payload is opaque.
    Accepted(serde_json::Value),
    /// The service declined the registration, optionally saying why.
    Rejected { status: u16, message: Option<String> },
}

/// Defines the structured body of a rejected request.
///
#[derive(Deserialize)]
pub(crate) struct RejectionBody {
    #[serde(default)]
    pub message: Option<String>,
}
