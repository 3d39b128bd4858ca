use crate::identity::{Identity, Registration};
use crate::state::State;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    Register {
        attempt: u64,
        registration: Registration,
    },
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    identity: &'a mut Identity,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, identity: &'a mut Identity) -> Self {
        Handler { state, identity }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::Register {
                attempt,
                registration,
            } => self.register(attempt, registration).await?,
        }
        Ok(())
    }

    /// Send the registration to the identity service and apply the answer to
    /// state. The state lock is not held while the request is in flight.
    ///
    async fn register(&mut self, attempt: u64, registration: Registration) -> Result<()> {
        info!(
            "Submitting registration for '{}'...",
            &registration.user_name
        );
        let response = self.identity.register(&registration).await;
        let mut state = self.state.lock().await;
        state.resolve_registration(attempt, response);
        Ok(())
    }
}
