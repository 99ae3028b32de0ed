//! Contact and newsletter form state.
//!
//! Nothing is sent anywhere; a valid submission is handed back to the
//! caller, which logs it.

use std::fmt;

use serde::Serialize;

use crate::error::FormError;

/// A contact form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Sender name
    Name,
    /// Sender email
    Email,
    /// Message subject
    Subject,
    /// Message body
    Message,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// DOM id and `name` attribute.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    /// Floating label text.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Email => "Email Address",
            Field::Subject => "Subject",
            Field::Message => "Your Message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Values typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Message subject
    pub subject: String,
    /// Message body
    pub message: String,
}

impl ContactForm {
    /// Current value of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Replace the value of `field`.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Every field is required and the email must look deliverable.
    pub fn validate(&self) -> Result<(), FormError> {
        for field in Field::ALL {
            if self.get(field).trim().is_empty() {
                return Err(FormError::Missing(field.label()));
            }
        }
        validate_email(&self.email)
    }

    /// Submission payload as JSON, for the console log.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Floating labels stay raised while the field is focused or holds text.
pub fn is_field_active(focused: Option<Field>, field: Field, value: &str) -> bool {
    focused == Some(field) || !value.is_empty()
}

/// Loose `local@domain.tld` check; browsers do the strict one.
pub fn validate_email(email: &str) -> Result<(), FormError> {
    let email = email.trim();
    let invalid = || FormError::InvalidEmail(email.to_string());
    if email.is_empty() {
        return Err(FormError::Missing(Field::Email.label()));
    }
    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Lina");
        form.set(Field::Email, "lina@example.com");
        form.set(Field::Subject, "Storefront");
        form.set(Field::Message, "We need a new site.");
        form
    }

    #[test]
    fn complete_form_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn blank_fields_are_reported_in_form_order() {
        let mut form = filled();
        form.set(Field::Subject, "   ");
        form.set(Field::Message, "");
        assert_eq!(form.validate(), Err(FormError::Missing("Subject")));
    }

    #[test]
    fn bad_email_is_rejected() {
        let mut form = filled();
        form.set(Field::Email, "lina.example.com");
        assert_eq!(
            form.validate(),
            Err(FormError::InvalidEmail("lina.example.com".into()))
        );
    }

    #[test]
    fn email_shapes() {
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("  a@b.co ").is_ok());
        assert!(validate_email("@b.co").is_err());
        assert!(validate_email("a@b").is_err());
        assert!(validate_email("a@.co").is_err());
        assert!(validate_email("a@b.").is_err());
        assert!(validate_email("a@b@c.co").is_err());
        assert!(validate_email("a b@c.co").is_err());
        assert_eq!(validate_email(""), Err(FormError::Missing("Email Address")));
    }

    #[test]
    fn labels_float_when_focused_or_filled() {
        assert!(is_field_active(Some(Field::Name), Field::Name, ""));
        assert!(is_field_active(None, Field::Name, "x"));
        assert!(!is_field_active(Some(Field::Email), Field::Name, ""));
        assert!(!is_field_active(None, Field::Name, ""));
    }

    #[test]
    fn payload_is_json() {
        let json = filled().to_json();
        assert!(json.contains(r#""email":"lina@example.com""#));
    }
}
