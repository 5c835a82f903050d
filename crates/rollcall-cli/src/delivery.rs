//! Delivery boundary.
//!
//! The pipeline's obligation ends at producing a correct `(address,
//! document)` pair; everything transport-specific (relay host, credentials,
//! retry policy) lives behind [`DeliveryChannel`]. This build ships two
//! local channels; an SMTP relay is an integration implementing the trait.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// One message handed to the delivery collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Failure reported by a delivery collaborator.
#[derive(Debug, Error)]
#[error("delivery to {recipient} failed: {message}")]
pub struct DeliveryError {
    pub recipient: String,
    pub message: String,
}

/// External transport for rendered documents.
pub trait DeliveryChannel {
    fn deliver(&self, message: &OutboundMessage) -> Result<(), DeliveryError>;
}

/// Local-mode channel: accepts every message without sending anything.
#[derive(Debug, Default)]
pub struct NoopDelivery;

impl DeliveryChannel for NoopDelivery {
    fn deliver(&self, message: &OutboundMessage) -> Result<(), DeliveryError> {
        debug!(to = %message.to, "local mode, skipping delivery");
        Ok(())
    }
}

/// Writes each message into an outbox directory as a numbered HTML file.
/// Stand-in for a real relay; useful for eyeballing documents before a send.
#[derive(Debug)]
pub struct OutboxDelivery {
    dir: PathBuf,
    counter: std::cell::Cell<usize>,
}

impl OutboxDelivery {
    /// Create the outbox directory if needed.
    pub fn new(dir: &Path) -> std::io::Result<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            counter: std::cell::Cell::new(0),
        })
    }
}

impl DeliveryChannel for OutboxDelivery {
    fn deliver(&self, message: &OutboundMessage) -> Result<(), DeliveryError> {
        let sequence = self.counter.get() + 1;
        self.counter.set(sequence);
        let path = self.dir.join(format!("{sequence:04}.html"));
        std::fs::write(&path, &message.body).map_err(|err| DeliveryError {
            recipient: message.to.clone(),
            message: format!("write {}: {err}", path.display()),
        })?;
        debug!(to = %message.to, path = %path.display(), "wrote message to outbox");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(to: &str) -> OutboundMessage {
        OutboundMessage {
            to: to.to_string(),
            subject: "Registration information".to_string(),
            body: "<html><body>hi</body></html>".to_string(),
        }
    }

    #[test]
    fn noop_accepts_everything() {
        assert!(NoopDelivery.deliver(&message("a@example.com")).is_ok());
    }

    #[test]
    fn outbox_numbers_messages_in_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let outbox = OutboxDelivery::new(dir.path()).expect("create outbox");
        outbox.deliver(&message("a@example.com")).unwrap();
        outbox.deliver(&message("b@example.com")).unwrap();
        assert!(dir.path().join("0001.html").is_file());
        assert!(dir.path().join("0002.html").is_file());
    }
}
