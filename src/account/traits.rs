//! Trait abstraction for account creation to enable mocking in tests

use crate::state::{Account, NewAccount};
use anyhow::Result;
use async_trait::async_trait;

/// Creates user accounts on behalf of the signup form.
///
/// Any `Ok` is a successful registration. An `Err` is a failed attempt whose
/// top-level message is shown to the user verbatim.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Create a new account
    async fn create_account(&self, request: &NewAccount) -> Result<Account>;
}
