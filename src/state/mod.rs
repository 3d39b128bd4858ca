//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds all application data
//! - The registration form record, its validation, and submission lifecycle
//! - Navigation types (View, Link, Focus)
//! - State error handling

mod error;
mod form;
mod navigation;
mod register;
mod submission;

pub use error::StateError;
pub use form::{Field, FieldValue};
pub use navigation::{
    Focus, Link, View, PRIVACY_POLICY_LINK, SIGN_IN_LINK, TERMS_OF_SERVICE_LINK,
};
pub use register::RegisterPage;

// State struct, methods and Default impl are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
