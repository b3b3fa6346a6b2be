//! Application state definitions

use super::forms::Role;
use super::signup::{SignupController, SignupPolicy};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use uuid::Uuid;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Signup,
    Login,
}

/// View parameters for navigation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewParams {
    /// Set when arriving at the login view straight after a signup
    pub registered: bool,
}

/// Payload handed to the account service
#[derive(Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewAccount")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// Account returned by the account service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_params: ViewParams,
    pub view_history: Vec<(View, ViewParams)>,

    // Signup
    pub signup: SignupController,

    // Modal error dialog queue
    error_queue: VecDeque<String>,
}

impl AppState {
    pub fn new(policy: SignupPolicy) -> Self {
        Self {
            signup: SignupController::new(policy),
            ..Default::default()
        }
    }

    /// Drop the current form and start a fresh one with the same policy
    pub fn reset_signup(&mut self) {
        let policy = self.signup.policy().clone();
        self.signup = SignupController::new(policy);
    }

    pub fn push_error(&mut self, message: String) {
        tracing::warn!(%message, "error queued for display");
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// Error shown in the dialog (oldest first)
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
