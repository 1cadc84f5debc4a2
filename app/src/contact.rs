//! Contact-form payload and validation, shared by the browser and the
//! server function that re-checks it before handing it to the mailer.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How long the success panel stays up before the form returns to idle.
pub const SUCCESS_RESET: Duration = Duration::from_millis(5000);

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Where a submission attempt stands. Success reverts to `Idle` on a
/// timer; `Error` waits for an explicit retry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.subject.is_none()
            && self.message.is_none()
    }
}

/// Presence checks on the three free-text fields, plus a shape check on
/// the email. Any populated field in the result blocks submission.
pub fn validate(message: &ContactMessage) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if message.name.trim().is_empty() {
        errors.name = Some(String::from("Name is required"));
    }

    let email = message.email.trim();
    if email.is_empty() {
        errors.email = Some(String::from("Email is required"));
    } else if !is_plausible_email(email) {
        errors.email = Some(String::from("Please enter a valid email address"));
    }

    if message.subject.trim().is_empty() {
        errors.subject = Some(String::from("Subject is required"));
    }

    if message.message.trim().is_empty() {
        errors.message = Some(String::from("Message is required"));
    }

    errors
}

/// `local@domain.tld` with no whitespace. Deliverability is the relay's
/// problem; this only catches obvious typos. Written out by hand because
/// this crate is also the WASM bundle and a regex engine would grow it by
/// a lot.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{validate, ContactMessage};

    fn valid_message() -> ContactMessage {
        ContactMessage {
            name: String::from("Ada Lovelace"),
            email: String::from("ada@example.com"),
            subject: String::from("Analytical engines"),
            message: String::from("Shall we collaborate?"),
        }
    }

    #[test]
    fn a_valid_message_produces_no_errors() {
        assert!(validate(&valid_message()).is_empty());
    }

    #[test]
    fn all_empty_fields_produce_four_errors() {
        let errors = validate(&ContactMessage::default());
        assert!(errors.name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.subject.is_some());
        assert!(errors.message.is_some());
    }

    #[test]
    fn whitespace_only_fields_are_treated_as_empty() {
        let message = ContactMessage {
            name: String::from("   "),
            email: String::from("\t"),
            subject: String::from(" \n"),
            message: String::from(""),
        };
        let errors = validate(&message);
        assert!(errors.name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.subject.is_some());
        assert!(errors.message.is_some());
    }

    #[test]
    fn a_malformed_email_is_the_only_error() {
        let message = ContactMessage {
            email: String::from("not-an-email"),
            ..valid_message()
        };
        let errors = validate(&message);
        assert!(errors.name.is_none());
        assert!(errors.subject.is_none());
        assert!(errors.message.is_none());
        assert_eq!(
            Some(String::from("Please enter a valid email address")),
            errors.email,
        );
    }

    #[test]
    fn email_shapes() {
        for good in ["a@b.co", "first.last@mail.example.org", "x+tag@host.io"] {
            let message = ContactMessage {
                email: String::from(good),
                ..valid_message()
            };
            assert!(validate(&message).is_empty(), "rejected {good}");
        }
        for bad in [
            "plain",
            "@missing-local.tld",
            "no-domain@",
            "no-tld@host",
            "two@@signs.example.com",
            "spaced out@example.com",
            "dot-at-end@example.",
        ] {
            let message = ContactMessage {
                email: String::from(bad),
                ..valid_message()
            };
            assert!(validate(&message).email.is_some(), "accepted {bad}");
        }
    }
}
