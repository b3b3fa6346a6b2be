//! Registration form data model and focus navigation

use super::field::{FieldName, FormField};
use serde::{Deserialize, Serialize};

/// Account type selected on the signup form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    pub fn toggle(&self) -> Self {
        match self {
            Self::User => Self::Admin,
            Self::Admin => Self::User,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Admin => "Admin",
        }
    }
}

/// Focusable rows of the signup form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Name,
    Email,
    Password,
    ConfirmPassword,
    Role,
    /// Only reachable while the Admin role is selected
    AdminCode,
    Terms,
    Submit,
}

impl FormFocus {
    const ORDER: [FormFocus; 8] = [
        Self::Name,
        Self::Email,
        Self::Password,
        Self::ConfirmPassword,
        Self::Role,
        Self::AdminCode,
        Self::Terms,
        Self::Submit,
    ];

    fn is_visible(&self, role: Role) -> bool {
        !matches!(self, Self::AdminCode) || role == Role::Admin
    }

    fn position(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    /// Next visible row (wraps around)
    pub fn next(&self, role: Role) -> Self {
        let start = self.position();
        (1..=Self::ORDER.len())
            .map(|step| Self::ORDER[(start + step) % Self::ORDER.len()])
            .find(|f| f.is_visible(role))
            .unwrap_or(*self)
    }

    /// Previous visible row (wraps around)
    pub fn prev(&self, role: Role) -> Self {
        let len = Self::ORDER.len();
        let start = self.position();
        (1..=len)
            .map(|step| Self::ORDER[(start + len - step) % len])
            .find(|f| f.is_visible(role))
            .unwrap_or(*self)
    }

    /// Text field behind this row, if any
    pub fn field_name(&self) -> Option<FieldName> {
        match self {
            Self::Name => Some(FieldName::Name),
            Self::Email => Some(FieldName::Email),
            Self::Password => Some(FieldName::Password),
            Self::ConfirmPassword => Some(FieldName::ConfirmPassword),
            Self::AdminCode => Some(FieldName::AdminCode),
            Self::Role | Self::Terms | Self::Submit => None,
        }
    }
}

/// Transient signup data, owned by the signup view for one visit
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub name: FormField,
    pub email: FormField,
    pub password: FormField,
    pub confirm_password: FormField,
    pub role: Role,
    pub admin_code: FormField,
    pub agree_to_terms: bool,
    pub focus: FormFocus,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text(FieldName::Name, "Full Name", "John Doe"),
            email: FormField::text(FieldName::Email, "Email", "john@example.com"),
            password: FormField::secret(FieldName::Password, "Password"),
            confirm_password: FormField::secret(FieldName::ConfirmPassword, "Confirm Password"),
            role: Role::User,
            admin_code: FormField::text(
                FieldName::AdminCode,
                "Admin Verification Code",
                "Enter 6-digit code sent to your email",
            ),
            agree_to_terms: false,
            focus: FormFocus::Name,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
            FieldName::AdminCode => &self.admin_code,
        }
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
            FieldName::ConfirmPassword => &mut self.confirm_password,
            FieldName::AdminCode => &mut self.admin_code,
        }
    }

    /// Text field under the cursor, if the focused row is one
    pub fn focused_field(&self) -> Option<FieldName> {
        self.focus.field_name()
    }

    pub fn next_focus(&mut self) {
        self.focus = self.focus.next(self.role);
    }

    pub fn prev_focus(&mut self) {
        self.focus = self.focus.prev(self.role);
    }

    /// Whether the admin code row is shown
    pub fn shows_admin_code(&self) -> bool {
        self.role == Role::Admin
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}
