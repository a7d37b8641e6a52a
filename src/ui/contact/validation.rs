// SPDX-License-Identifier: MPL-2.0
//! Contact form field validation.

/// The three contact form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// i18n key for the field label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Field::Name => "form-label-name",
            Field::Email => "form-label-email",
            Field::Message => "form-label-message",
        }
    }

    /// Widget id of the field's text input, for focus operations.
    #[must_use]
    pub fn input_id(self) -> &'static str {
        match self {
            Field::Name => "contact-name",
            Field::Email => "contact-email",
            Field::Message => "contact-message",
        }
    }
}

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Empty after trimming.
    Required,
    /// Email field with a malformed address.
    InvalidEmail,
}

impl FieldError {
    /// i18n key for the error message.
    #[must_use]
    pub fn message_key(self) -> &'static str {
        match self {
            FieldError::Required => "form-error-required",
            FieldError::InvalidEmail => "form-error-email",
        }
    }
}

/// Validates a single field value.
#[must_use]
pub fn validate(field: Field, value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        return Some(FieldError::Required);
    }
    if field == Field::Email && !is_valid_email(value) {
        return Some(FieldError::InvalidEmail);
    }
    None
}

/// Structural email check.
///
/// Accepts `local@domain` where neither part contains whitespace or a
/// second `@`, and the domain carries an inner dot (not its first or last
/// character). Intentionally permissive beyond that; the mail server is
/// the real validator.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = value.splitn(3, '@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }

    domain
        .bytes()
        .enumerate()
        .any(|(i, b)| b == b'.' && i > 0 && i < domain.len() - 1)
}
