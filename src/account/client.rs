//! In-process account service
//!
//! Stands in for the real registration backend: accounts live in memory for
//! the lifetime of the process and every call waits a configurable latency
//! first so the loading state is visible.

use super::traits::AccountService;
use crate::state::{Account, NewAccount};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Simulated round-trip time when none is configured
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(800);

/// Account service backed by a map keyed by normalized email
pub struct InMemoryAccountService {
    accounts: Mutex<HashMap<String, Account>>,
    latency: Duration,
}

impl InMemoryAccountService {
    pub fn new(latency: Duration) -> Self {
        Self {
            accounts: Mutex::new(HashMap::new()),
            latency,
        }
    }

    /// Number of accounts created so far
    #[allow(dead_code)]
    pub async fn account_count(&self) -> usize {
        self.accounts.lock().await.len()
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[async_trait]
impl AccountService for InMemoryAccountService {
    async fn create_account(&self, request: &NewAccount) -> Result<Account> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let name = request.name.trim();
        if name.is_empty() {
            return Err(anyhow!("Full name is required"));
        }

        let email = request.email.trim();
        if !is_plausible_email(email) {
            return Err(anyhow!("Please enter a valid email address"));
        }

        let key = normalize_email(email);
        let mut accounts = self.accounts.lock().await;
        if accounts.contains_key(&key) {
            return Err(anyhow!("An account with this email already exists"));
        }

        let account = Account {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            role: request.role,
            created_at: Utc::now(),
        };
        tracing::info!(account_id = %account.id, role = account.role.label(), "account created");

        accounts.insert(key, account.clone());
        Ok(account)
    }
}
