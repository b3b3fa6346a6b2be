//! Form field value objects

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Mask character used for secret fields
const MASK_CHAR: char = '•';

/// Text fields of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Email,
    Password,
    ConfirmPassword,
    AdminCode,
}

impl FieldName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm_password",
            Self::AdminCode => "admin_code",
        }
    }

    /// Whether a change to this field invalidates a standing password error
    pub fn is_password(&self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            "confirm_password" | "confirmPassword" => Ok(Self::ConfirmPassword),
            "admin_code" | "adminCode" => Ok(Self::AdminCode),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Rendered masked, never logged
    Secret(String),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub label: String,
    pub placeholder: String,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: FieldName, label: &str, placeholder: &str) -> Self {
        Self {
            name,
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new secret (password) field
    pub fn secret(name: FieldName, label: &str) -> Self {
        Self {
            name,
            label: label.to_string(),
            placeholder: String::new(),
            value: FieldValue::Secret(String::new()),
        }
    }

    /// Get the raw value
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Secret(s) => s,
        }
    }

    #[allow(dead_code)]
    pub fn is_secret(&self) -> bool {
        matches!(self.value, FieldValue::Secret(_))
    }

    /// Replace the value, keeping the field kind
    pub fn set_text(&mut self, value: impl Into<String>) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Secret(s) => *s = value.into(),
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Secret(s) => MASK_CHAR.to_string().repeat(s.chars().count()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_field_name_parses_both_spellings() {
        assert_eq!(
            "confirmPassword".parse::<FieldName>(),
            Ok(FieldName::ConfirmPassword)
        );
        assert_eq!(
            "confirm_password".parse::<FieldName>(),
            Ok(FieldName::ConfirmPassword)
        );
        assert_eq!("adminCode".parse::<FieldName>(), Ok(FieldName::AdminCode));
        assert_eq!("email".parse::<FieldName>(), Ok(FieldName::Email));
    }

    #[test]
    fn test_unknown_field_name_is_rejected() {
        let err = "role".parse::<FieldName>().unwrap_err();
        assert_eq!(err.to_string(), "unknown form field: role");
    }

    #[test]
    fn test_is_password() {
        assert!(FieldName::Password.is_password());
        assert!(FieldName::ConfirmPassword.is_password());
        assert!(!FieldName::Email.is_password());
        assert!(!FieldName::AdminCode.is_password());
    }

    #[test]
    fn test_secret_display_is_masked() {
        let mut field = FormField::secret(FieldName::Password, "Password");
        field.set_text("hunter22");
        assert_eq!(field.as_text(), "hunter22");
        assert_eq!(field.display_value(), "••••••••");
        assert!(field.is_secret());
    }

    #[test]
    fn test_text_display_is_plain() {
        let mut field = FormField::text(FieldName::Name, "Full Name", "John Doe");
        field.set_text("Ab");
        assert_eq!(field.display_value(), "Ab");
        assert!(!field.is_secret());
    }

    #[test]
    fn test_set_text_keeps_kind() {
        let mut field = FormField::secret(FieldName::ConfirmPassword, "Confirm Password");
        field.set_text("secret");
        field.set_text("");
        assert_eq!(field.as_text(), "");
        assert!(field.is_secret());
    }
}
