//! Account creation backends

mod client;
mod traits;

pub use client::{InMemoryAccountService, DEFAULT_LATENCY};
pub use traits::AccountService;

#[cfg(test)]
pub use traits::MockAccountService;
