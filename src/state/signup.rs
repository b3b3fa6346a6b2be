//! Signup form controller
//!
//! Owns the registration form for one visit to the signup view, applies the
//! submission checks and drives the single account-creation call.

use super::app_state::{Account, NewAccount, View, ViewParams};
use super::forms::{FieldName, RegistrationForm, Role};
use super::signup_error::SignupError;
use crate::account::AccountService;

/// Placeholder admin verification value. Demo configuration only, not a
/// security boundary.
pub const DEFAULT_ADMIN_CODE: &str = "123456";
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

/// Tunables for the submission checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupPolicy {
    pub admin_code: String,
    pub min_password_length: usize,
}

impl Default for SignupPolicy {
    fn default() -> Self {
        Self {
            admin_code: DEFAULT_ADMIN_CODE.to_string(),
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

/// Where the app should go after a successful signup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub view: View,
    pub params: ViewParams,
}

impl Redirect {
    fn login_registered() -> Self {
        Self {
            view: View::Login,
            params: ViewParams { registered: true },
        }
    }
}

/// Result of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Registered(Redirect),
    Failed(SignupError),
    /// A submission was already in flight
    Ignored,
}

#[derive(Debug)]
pub struct SignupController {
    form: RegistrationForm,
    policy: SignupPolicy,
    loading: bool,
    admin_code_sent: bool,
    password_error: Option<SignupError>,
    error: Option<SignupError>,
}

impl SignupController {
    pub fn new(policy: SignupPolicy) -> Self {
        Self {
            form: RegistrationForm::new(),
            policy,
            loading: false,
            admin_code_sent: false,
            password_error: None,
            error: None,
        }
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    pub fn policy(&self) -> &SignupPolicy {
        &self.policy
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the (simulated) admin verification code has been issued
    pub fn admin_code_sent(&self) -> bool {
        self.admin_code_sent
    }

    pub fn password_error(&self) -> Option<&SignupError> {
        self.password_error.as_ref()
    }

    pub fn error(&self) -> Option<&SignupError> {
        self.error.as_ref()
    }

    pub fn next_focus(&mut self) {
        self.form.next_focus();
    }

    pub fn prev_focus(&mut self) {
        self.form.prev_focus();
    }

    /// Replace a field's value. Editing either password field clears the
    /// standing password error.
    pub fn update_field(&mut self, name: FieldName, value: impl Into<String>) {
        self.form.field_mut(name).set_text(value);
        if name.is_password() {
            self.password_error = None;
        }
    }

    pub fn push_char(&mut self, name: FieldName, c: char) {
        let mut value = self.form.field(name).as_text().to_string();
        value.push(c);
        self.update_field(name, value);
    }

    pub fn pop_char(&mut self, name: FieldName) {
        let mut value = self.form.field(name).as_text().to_string();
        value.pop();
        self.update_field(name, value);
    }

    pub fn select_role(&mut self, role: Role) {
        self.form.role = role;
        if role == Role::Admin && !self.admin_code_sent {
            // No delivery happens; the flag only drives the hint on the form.
            self.admin_code_sent = true;
            tracing::info!("admin verification code issued");
        }
    }

    pub fn toggle_role(&mut self) {
        self.select_role(self.form.role.toggle());
    }

    pub fn set_agreement(&mut self, agreed: bool) {
        self.form.agree_to_terms = agreed;
    }

    pub fn toggle_agreement(&mut self) {
        self.set_agreement(!self.form.agree_to_terms);
    }

    /// Run the submission checks in order, stopping at the first failure
    pub fn validate(&self) -> Result<(), SignupError> {
        let password = self.form.password.as_text();

        if password != self.form.confirm_password.as_text() {
            return Err(SignupError::PasswordMismatch);
        }

        if password.chars().count() < self.policy.min_password_length {
            return Err(SignupError::PasswordTooShort {
                min: self.policy.min_password_length,
            });
        }

        if !self.form.agree_to_terms {
            return Err(SignupError::TermsNotAccepted);
        }

        if self.form.role == Role::Admin && self.form.admin_code.as_text() != self.policy.admin_code
        {
            return Err(SignupError::InvalidAdminCode);
        }

        Ok(())
    }

    /// First half of a submission: clear errors, validate, enter loading.
    ///
    /// Returns `Ok(None)` when a submission is already in flight.
    pub fn begin_submit(&mut self) -> Result<Option<NewAccount>, SignupError> {
        if self.loading {
            tracing::debug!("signup already in flight, ignoring submit");
            return Ok(None);
        }

        self.error = None;
        self.password_error = None;

        if let Err(err) = self.validate() {
            tracing::debug!(error = %err, "signup rejected");
            self.record(err.clone());
            return Err(err);
        }

        self.loading = true;
        Ok(Some(self.new_account()))
    }

    /// Second half of a submission: leave loading and apply the service result
    pub fn finish_submit(&mut self, result: anyhow::Result<Account>) -> SubmitOutcome {
        self.loading = false;

        match result {
            Ok(account) => {
                tracing::info!(account_id = %account.id, role = account.role.label(), "signup complete");
                SubmitOutcome::Registered(Redirect::login_registered())
            }
            Err(err) => {
                let err = SignupError::AccountCreationFailed(err.to_string());
                tracing::warn!(error = %err, "account creation failed");
                self.record(err.clone());
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Validate and create the account in one step
    #[allow(dead_code)]
    pub async fn submit(&mut self, accounts: &dyn AccountService) -> SubmitOutcome {
        match self.begin_submit() {
            Ok(Some(request)) => {
                let result = accounts.create_account(&request).await;
                self.finish_submit(result)
            }
            Ok(None) => SubmitOutcome::Ignored,
            Err(err) => SubmitOutcome::Failed(err),
        }
    }

    fn record(&mut self, err: SignupError) {
        if err.is_password_error() {
            self.password_error = Some(err);
        } else {
            self.error = Some(err);
        }
    }

    fn new_account(&self) -> NewAccount {
        NewAccount {
            name: self.form.name.as_text().to_string(),
            email: self.form.email.as_text().to_string(),
            password: self.form.password.as_text().to_string(),
            role: self.form.role,
        }
    }
}

impl Default for SignupController {
    fn default() -> Self {
        Self::new(SignupPolicy::default())
    }
}
