//! Outbound delivery for contact-form submissions.
//!
//! The `Transport` seam exists so the unit tests (and a future second
//! backend) can stand in for the SMTP relay; in production it is lettre's
//! async transport.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::sync::Arc;

use crate::contact::ContactMessage;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid mailbox `{address}': {error}")]
    Address {
        address: String,
        error: lettre::address::AddressError,
    },

    #[error("Could not assemble the message: {0}")]
    Compose(#[from] lettre::error::Error),

    #[error("Could not reach the relay: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[async_trait]
pub trait Transport: Send + Sync {
    async fn deliver(&self, message: Message) -> Result<()>;
}

#[async_trait]
impl Transport for AsyncSmtpTransport<Tokio1Executor> {
    async fn deliver(&self, message: Message) -> Result<()> {
        AsyncTransport::send(self, message)
            .await
            .map(|_response| ())
            .map_err(|error| Error::Transport(error.to_string()))
    }
}

/// Formats contact submissions and hands them to the relay. `from` is the
/// site's own mailbox (relays refuse to forge arbitrary senders); the
/// visitor's address goes into reply-to.
#[derive(Clone)]
pub struct ContactMailer {
    transport: Arc<dyn Transport>,
    from: Mailbox,
    to: Mailbox,
}

impl ContactMailer {
    pub fn new(transport: Arc<dyn Transport>, from: &str, to: &str) -> Result<Self> {
        Ok(Self {
            transport,
            from: parse_mailbox(from)?,
            to: parse_mailbox(to)?,
        })
    }

    /// Authenticated TLS relay.
    pub fn relay(
        host: &str,
        username: &str,
        password: &str,
        from: &str,
        to: &str,
    ) -> Result<Self> {
        let credentials = Credentials::new(String::from(username), String::from(password));
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(host)
            .map_err(|error| Error::Transport(error.to_string()))?
            .credentials(credentials)
            .build();
        Self::new(Arc::new(transport), from, to)
    }

    /// Unauthenticated plaintext transport for a local catcher (Mailpit
    /// and friends).
    pub fn local(host: &str, port: u16, from: &str, to: &str) -> Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();
        Self::new(Arc::new(transport), from, to)
    }

    pub async fn send(&self, submission: &ContactMessage, sent_at: &str) -> Result<()> {
        let reply_to = parse_mailbox(submission.email.trim())?;
        let body = format!(
            "From: {} <{}>\nSent: {}\n\n{}",
            submission.name.trim(),
            submission.email.trim(),
            sent_at,
            submission.message.trim(),
        );
        let message = Message::builder()
            .from(self.from.clone())
            .reply_to(reply_to)
            .to(self.to.clone())
            .subject(format!("[folio] {}", submission.subject.trim()))
            .header(ContentType::TEXT_PLAIN)
            .body(body)?;

        self.transport.deliver(message).await
    }
}

impl std::fmt::Debug for ContactMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactMailer")
            .field("from", &self.from)
            .field("to", &self.to)
            .finish_non_exhaustive()
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox> {
    address.parse::<Mailbox>().map_err(|error| Error::Address {
        address: String::from(address),
        error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingTransport {
        delivered: Mutex<Vec<Message>>,
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn deliver(&self, message: Message) -> Result<()> {
            self.delivered.lock().unwrap().push(message);
            Ok(())
        }
    }

    struct FailingTransport;

    #[async_trait]
    impl Transport for FailingTransport {
        async fn deliver(&self, _message: Message) -> Result<()> {
            Err(Error::Transport(String::from("connection refused")))
        }
    }

    fn submission() -> ContactMessage {
        ContactMessage {
            name: String::from("Ada Lovelace"),
            email: String::from("ada@example.com"),
            subject: String::from("Analytical engines"),
            message: String::from("Shall we collaborate?"),
        }
    }

    #[tokio::test]
    async fn delivers_through_the_transport() {
        let transport = Arc::new(RecordingTransport::default());
        let mailer = ContactMailer::new(
            transport.clone(),
            "Site <site@example.com>",
            "owner@example.com",
        )
        .unwrap();

        mailer
            .send(&submission(), "Monday, March 10, 2025 at 02:30 PM")
            .await
            .unwrap();

        let delivered = transport.delivered.lock().unwrap();
        assert_eq!(1, delivered.len());
        let rendered = String::from_utf8(delivered[0].formatted()).unwrap();
        assert!(rendered.contains("Subject: [folio] Analytical engines"));
        assert!(rendered.contains("Reply-To: ada@example.com"));
    }

    #[tokio::test]
    async fn rejects_an_unparseable_visitor_address() {
        let transport = Arc::new(RecordingTransport::default());
        let mailer = ContactMailer::new(
            transport.clone(),
            "site@example.com",
            "owner@example.com",
        )
        .unwrap();

        let mut bad = submission();
        bad.email = String::from("not an address");
        let result = mailer.send(&bad, "today").await;

        assert!(matches!(result, Err(Error::Address { .. })));
        assert!(transport.delivered.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn surfaces_transport_failures() {
        let mailer = ContactMailer::new(
            Arc::new(FailingTransport),
            "site@example.com",
            "owner@example.com",
        )
        .unwrap();

        let result = mailer.send(&submission(), "today").await;
        assert!(matches!(result, Err(Error::Transport(_))));
    }

    #[test]
    fn rejects_bad_configured_mailboxes() {
        let result = ContactMailer::new(
            Arc::new(RecordingTransport::default()),
            "not a mailbox",
            "owner@example.com",
        );
        assert!(matches!(result, Err(Error::Address { .. })));
    }
}
