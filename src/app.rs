//! Application state and core logic

use crate::account::{AccountService, InMemoryAccountService};
use crate::config::AppConfig;
use crate::state::{Account, AppState, FormFocus, SignupPolicy, SubmitOutcome, View, ViewParams};
use anyhow::{anyhow, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Shown when the account task dies without a message of its own
const FALLBACK_FAILURE: &str = "An error occurred during registration";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Account service the signup form submits to
    accounts: Arc<dyn AccountService>,
    /// In-flight account creation, polled every tick
    pending_submission: Option<JoinHandle<Result<Account>>>,
    /// Whether the app should quit
    quit: bool,
    /// Frame counter driving the loading spinner
    pub tick: usize,
}

impl App {
    /// Create a new App instance backed by the in-memory account service
    pub fn new(config: &AppConfig) -> Self {
        let accounts = Arc::new(InMemoryAccountService::new(config.account_latency()));
        Self::with_service(config.signup_policy(), accounts)
    }

    pub fn with_service(policy: SignupPolicy, accounts: Arc<dyn AccountService>) -> Self {
        Self {
            state: AppState::new(policy),
            accounts,
            pending_submission: None,
            quit: false,
            tick: 0,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Whether an account creation call is in flight
    pub fn is_submitting(&self) -> bool {
        self.pending_submission.is_some()
    }

    /// Advance animation state
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        match self.state.current_view {
            View::Signup => self.handle_signup_key(key),
            View::Login => self.handle_login_key(key),
        }
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View, params: ViewParams) {
        self.state.view_history.push((
            self.state.current_view.clone(),
            self.state.view_params.clone(),
        ));
        self.state.current_view = view;
        self.state.view_params = params;
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        if let Some((view, params)) = self.state.view_history.pop() {
            self.state.current_view = view;
            self.state.view_params = params;
        } else {
            self.state.current_view = View::Signup;
            self.state.view_params = ViewParams::default();
        }
    }

    /// Handle keys in Signup view
    fn handle_signup_key(&mut self, key: KeyEvent) {
        // The form is read-only while the account call is in flight
        if self.is_submitting() {
            return;
        }

        let focus = self.state.signup.form().focus;
        let field = focus.field_name();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER);

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.signup.next_focus(),
            KeyCode::BackTab | KeyCode::Up => self.state.signup.prev_focus(),
            KeyCode::Char('s') if ctrl => self.start_submission(),
            KeyCode::Enter => self.start_submission(),
            KeyCode::Esc => self.navigate(View::Login, ViewParams::default()),
            KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right if focus == FormFocus::Role => {
                self.state.signup.toggle_role();
            }
            KeyCode::Char(' ') if focus == FormFocus::Terms => {
                self.state.signup.toggle_agreement();
            }
            KeyCode::Char(c) if !ctrl => {
                if let Some(name) = field {
                    self.state.signup.push_char(name, c);
                }
            }
            KeyCode::Backspace => {
                if let Some(name) = field {
                    self.state.signup.pop_char(name);
                }
            }
            _ => {}
        }
    }

    /// Handle keys in Login view
    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Esc | KeyCode::Char('n') => self.go_back(),
            _ => {}
        }
    }

    /// Validate the form and hand the request to a background task
    fn start_submission(&mut self) {
        match self.state.signup.begin_submit() {
            Ok(Some(request)) => {
                tracing::debug!(email = %request.email, role = request.role.label(), "submitting signup");
                let accounts = Arc::clone(&self.accounts);
                self.pending_submission = Some(tokio::spawn(async move {
                    accounts.create_account(&request).await
                }));
            }
            // Already in flight, or rejected with the error shown on the form
            Ok(None) | Err(_) => {}
        }
    }

    /// Collect a finished account call, if any, and apply its outcome
    pub async fn poll_submission(&mut self) {
        let finished = self
            .pending_submission
            .as_ref()
            .is_some_and(|handle| handle.is_finished());
        if !finished {
            return;
        }
        let Some(handle) = self.pending_submission.take() else {
            return;
        };

        let result = match handle.await {
            Ok(result) => result,
            Err(err) => {
                tracing::error!(error = %err, "account creation task failed");
                self.push_error(format!("Account creation task failed: {err}"));
                Err(anyhow!(FALLBACK_FAILURE))
            }
        };

        if let SubmitOutcome::Registered(redirect) = self.state.signup.finish_submit(result) {
            self.state.reset_signup();
            self.navigate(redirect.view, redirect.params);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::MockAccountService;
    use crate::state::{FieldName, NewAccount, Role, SignupError};
    use chrono::Utc;
    use uuid::Uuid;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn account_for(request: &NewAccount) -> Account {
        Account {
            id: Uuid::new_v4(),
            name: request.name.clone(),
            email: request.email.clone(),
            role: request.role,
            created_at: Utc::now(),
        }
    }

    fn app_with(mock: MockAccountService) -> App {
        App::with_service(SignupPolicy::default(), Arc::new(mock))
    }

    fn idle_app() -> App {
        let mut mock = MockAccountService::new();
        mock.expect_create_account().never();
        app_with(mock)
    }

    /// Fill every field of a valid user signup through the keyboard
    fn fill_valid_form(app: &mut App) {
        type_text(app, "Ada Lovelace");
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "ada@example.com");
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "analytical");
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "analytical");
        app.handle_key(key(KeyCode::Tab)); // role
        app.handle_key(key(KeyCode::Tab)); // terms
        app.handle_key(key(KeyCode::Char(' ')));
        app.handle_key(key(KeyCode::Tab)); // submit
    }

    async fn settle(app: &mut App) {
        for _ in 0..100 {
            if !app.is_submitting() {
                return;
            }
            tokio::task::yield_now().await;
            app.poll_submission().await;
        }
        panic!("submission did not settle");
    }

    mod keyboard {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_fills_focused_field() {
            let mut app = idle_app();
            type_text(&mut app, "Ada");
            app.handle_key(key(KeyCode::Backspace));
            assert_eq!(app.state.signup.form().name.as_text(), "Ad");
        }

        #[test]
        fn test_fill_valid_form() {
            let mut app = idle_app();
            fill_valid_form(&mut app);
            let form = app.state.signup.form();
            assert_eq!(form.email.as_text(), "ada@example.com");
            assert_eq!(form.confirm_password.as_text(), "analytical");
            assert!(form.agree_to_terms);
            assert_eq!(form.focus, FormFocus::Submit);
        }

        #[test]
        fn test_space_on_role_selects_admin() {
            let mut app = idle_app();
            for _ in 0..4 {
                app.handle_key(key(KeyCode::Tab));
            }
            assert_eq!(app.state.signup.form().focus, FormFocus::Role);
            app.handle_key(key(KeyCode::Char(' ')));
            assert_eq!(app.state.signup.form().role, Role::Admin);
            assert!(app.state.signup.admin_code_sent());

            app.handle_key(key(KeyCode::Tab));
            assert_eq!(app.state.signup.form().focus, FormFocus::AdminCode);
            type_text(&mut app, "123456");
            assert_eq!(app.state.signup.form().admin_code.as_text(), "123456");
        }

        #[test]
        fn test_space_in_text_field_is_typed() {
            let mut app = idle_app();
            type_text(&mut app, "a b");
            assert_eq!(app.state.signup.form().name.as_text(), "a b");
        }

        #[test]
        fn test_ctrl_chars_are_not_typed() {
            let mut app = idle_app();
            app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL));
            assert_eq!(app.state.signup.form().name.as_text(), "");
        }

        #[test]
        fn test_esc_opens_login_and_back_returns() {
            let mut app = idle_app();
            type_text(&mut app, "Ada");
            app.handle_key(key(KeyCode::Esc));
            assert_eq!(app.state.current_view, View::Login);
            assert!(!app.state.view_params.registered);

            app.handle_key(key(KeyCode::Esc));
            assert_eq!(app.state.current_view, View::Signup);
            assert_eq!(app.state.signup.form().name.as_text(), "Ada");
        }

        #[test]
        fn test_q_on_login_quits() {
            let mut app = idle_app();
            app.navigate(View::Login, ViewParams::default());
            assert!(!app.should_quit());
            app.handle_key(key(KeyCode::Char('q')));
            assert!(app.should_quit());
        }

        #[test]
        fn test_go_back_empty_history_lands_on_signup() {
            let mut app = idle_app();
            app.state.current_view = View::Login;
            app.go_back();
            assert_eq!(app.state.current_view, View::Signup);
        }

        #[test]
        fn test_error_dialog_is_modal() {
            let mut app = idle_app();
            app.push_error("boom");
            type_text(&mut app, "Ada");
            assert_eq!(app.state.signup.form().name.as_text(), "");

            app.handle_key(key(KeyCode::Enter));
            assert!(!app.state.has_errors());
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_invalid_form_does_not_spawn() {
            let mut app = idle_app();
            type_text(&mut app, "Ada");
            app.handle_key(key(KeyCode::Enter));

            assert!(!app.is_submitting());
            assert_eq!(
                app.state.signup.password_error(),
                Some(&SignupError::PasswordTooShort { min: 8 })
            );
        }

        #[tokio::test]
        async fn test_success_navigates_to_login_with_registered_flag() {
            let mut mock = MockAccountService::new();
            mock.expect_create_account()
                .times(1)
                .returning(|request| Ok(account_for(request)));
            let mut app = app_with(mock);

            fill_valid_form(&mut app);
            app.handle_key(key(KeyCode::Enter));
            assert!(app.is_submitting());
            assert!(app.state.signup.is_loading());

            settle(&mut app).await;

            assert_eq!(app.state.current_view, View::Login);
            assert!(app.state.view_params.registered);
            assert!(!app.state.signup.is_loading());
            // Form is discarded after a successful signup
            assert_eq!(app.state.signup.form().name.as_text(), "");
        }

        #[tokio::test]
        async fn test_failure_stays_on_form_with_message() {
            let mut mock = MockAccountService::new();
            mock.expect_create_account()
                .times(1)
                .returning(|_| Err(anyhow!("An account with this email already exists")));
            let mut app = app_with(mock);

            fill_valid_form(&mut app);
            app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
            settle(&mut app).await;

            assert_eq!(app.state.current_view, View::Signup);
            assert_eq!(
                app.state.signup.error().map(ToString::to_string),
                Some("An account with this email already exists".to_string())
            );
            assert_eq!(
                app.state.signup.form().field(FieldName::Email).as_text(),
                "ada@example.com"
            );
            assert!(!app.state.signup.is_loading());
        }

        #[tokio::test]
        async fn test_keys_ignored_while_submitting() {
            let mut mock = MockAccountService::new();
            mock.expect_create_account()
                .times(1)
                .returning(|request| Ok(account_for(request)));
            let mut app = app_with(mock);

            fill_valid_form(&mut app);
            app.handle_key(key(KeyCode::Enter));
            // Second Enter must not start another call
            app.handle_key(key(KeyCode::Enter));
            app.handle_key(key(KeyCode::Char('x')));

            settle(&mut app).await;
            assert_eq!(app.state.current_view, View::Login);
        }

        #[tokio::test]
        async fn test_panicking_service_reports_fallback() {
            struct PanickingService;

            #[async_trait::async_trait]
            impl AccountService for PanickingService {
                async fn create_account(&self, _request: &NewAccount) -> Result<Account> {
                    panic!("service exploded");
                }
            }

            let mut app = App::with_service(SignupPolicy::default(), Arc::new(PanickingService));

            fill_valid_form(&mut app);
            app.handle_key(key(KeyCode::Enter));
            settle(&mut app).await;

            assert_eq!(app.state.current_view, View::Signup);
            assert_eq!(
                app.state.signup.error().map(ToString::to_string),
                Some(FALLBACK_FAILURE.to_string())
            );
            assert!(app.state.has_errors());
        }

        #[tokio::test]
        async fn test_poll_without_submission_is_noop() {
            let mut app = idle_app();
            app.poll_submission().await;
            assert_eq!(app.state.current_view, View::Signup);
        }
    }
}
