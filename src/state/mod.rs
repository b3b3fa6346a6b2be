//! Application state module

mod app_state;
mod forms;
mod signup;
mod signup_error;

pub use app_state::*;
pub use forms::*;
pub use signup::*;
pub use signup_error::SignupError;
