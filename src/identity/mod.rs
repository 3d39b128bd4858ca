mod client;
mod error;
mod resource;

pub use error::IdentityError;
pub use resource::*;

use client::Client;
use log::*;
use std::collections::HashMap;

/// Responsible for asynchronous interaction with the identity service,
/// including transformation of its responses into explicitly-defined types.
///
pub struct Identity {
    client: Client,
    register_path: String,
}

impl Identity {
    /// Returns a new instance for the given base URL, registration path, and
    /// default request headers.
    ///
    pub fn new(
        base_url: &str,
        register_path: &str,
        headers: &HashMap<String, String>,
    ) -> Result<Identity, IdentityError> {
        debug!("Initializing identity client for {}...", base_url);
        Ok(Identity {
            client: Client::new(base_url, headers)?,
            register_path: register_path.to_owned(),
        })
    }

    /// Returns the full address registrations are sent to.
    ///
    pub fn register_url(&self) -> String {
        self.client.url(&self.register_path)
    }

    /// Submit a registration. Returns the service's answer, or an error when
    /// no response could be obtained at all.
    ///
    pub async fn register(
        &mut self,
        registration: &Registration,
    ) -> Result<ServiceResponse, IdentityError> {
        debug!(
            "Requesting registration of user '{}'...",
            registration.user_name
        );
        let response = self.client.post(&self.register_path, registration).await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            // The accepted payload is opaque; only its receipt matters.
            let data = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
            return Ok(ServiceResponse::Accepted(data));
        }

        let message = serde_json::from_slice::<RejectionBody>(&body)
            .ok()
            .and_then(|rejection| rejection.message);
        warn!(
            "Identity service declined registration with status {}: {}",
            status,
            message.as_deref().unwrap_or("<no message>")
        );
        Ok(ServiceResponse::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
