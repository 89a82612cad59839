//! Contact submitter: delivers visitor inquiries to the form relay.
//!
//! # Responsibility
//! - Hold the visitor-entered fields and the per-submission state machine
//!   `Idle -> Submitting -> {Success, Error}`.
//! - Refuse submission before any network attempt when no relay id is
//!   configured in the document's contact section.
//!
//! # Invariants
//! - Exactly one terminal state per submission attempt; no automatic retry.
//! - Fields are cleared only on success; a failed attempt preserves them
//!   for resubmission.
//! - At most one submission is in flight per form instance.

use crate::model::ContactSection;
use log::{info, warn};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod relay;

pub use relay::HttpRelayTransport;

/// Base URL the relay identifier is appended to.
pub const RELAY_BASE_URL: &str = "https://formspree.io/f";

/// The three visitor-entered fields, serialized as the relay payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct InquiryFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Per-submission lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

/// Delivery failure reported by a relay transport.
#[derive(Debug)]
pub enum RelayError {
    /// Request never produced a response (connect/timeout/TLS).
    Transport(reqwest::Error),
    /// Relay answered with a non-success status code.
    Rejected(u16),
}

impl Display for RelayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "{err}"),
            Self::Rejected(code) => write!(f, "relay rejected the request with status {code}"),
        }
    }
}

impl Error for RelayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::Rejected(_) => None,
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

/// Precondition failures surfaced to the caller before any delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// No relay identifier is configured in the contact section.
    RelayNotConfigured,
    /// A submission from this form is already in flight.
    AlreadyInFlight,
}

impl Display for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RelayNotConfigured => {
                write!(f, "no relay form id configured in the contact section")
            }
            Self::AlreadyInFlight => write!(f, "a submission is already in flight"),
        }
    }
}

impl Error for SubmitError {}

/// Delivery seam for the outbound relay call.
pub trait RelayTransport {
    /// Posts `inquiry` as a JSON body to `endpoint`. Success means the
    /// relay acknowledged with a 2xx response.
    fn deliver(&self, endpoint: &str, inquiry: &InquiryFields) -> Result<(), RelayError>;
}

/// Visitor contact form bound to one relay transport.
pub struct ContactForm<T: RelayTransport> {
    transport: T,
    fields: InquiryFields,
    status: SubmitStatus,
}

impl<T: RelayTransport> ContactForm<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            fields: InquiryFields::default(),
            status: SubmitStatus::Idle,
        }
    }

    pub fn fields(&self) -> &InquiryFields {
        &self.fields
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    /// Edits the name field. Editing after a failure re-arms the form.
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.fields.name = value.into();
        self.clear_error();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.fields.email = value.into();
        self.clear_error();
    }

    pub fn set_message(&mut self, value: impl Into<String>) {
        self.fields.message = value.into();
        self.clear_error();
    }

    /// Re-arms the form when an edit follows a failed attempt.
    fn clear_error(&mut self) {
        if self.status == SubmitStatus::Error {
            self.status = SubmitStatus::Idle;
        }
    }

    /// Explicit "send another" action after a successful delivery.
    pub fn send_another(&mut self) {
        if self.status == SubmitStatus::Success {
            self.status = SubmitStatus::Idle;
        }
    }

    /// Attempts one delivery to `https://formspree.io/f/<id>`.
    ///
    /// Returns the terminal [`SubmitStatus`] of this attempt, or a
    /// [`SubmitError`] when the precondition fails, in which case no
    /// transport call is made and the state machine does not advance.
    pub fn submit(&mut self, contact: &ContactSection) -> Result<SubmitStatus, SubmitError> {
        if self.status == SubmitStatus::Submitting {
            return Err(SubmitError::AlreadyInFlight);
        }

        let form_id = contact.formspree_id.trim();
        if form_id.is_empty() {
            warn!("event=contact_submit module=contact status=unconfigured");
            return Err(SubmitError::RelayNotConfigured);
        }

        self.status = SubmitStatus::Submitting;
        let endpoint = format!("{RELAY_BASE_URL}/{form_id}");

        match self.transport.deliver(&endpoint, &self.fields) {
            Ok(()) => {
                self.fields = InquiryFields::default();
                self.status = SubmitStatus::Success;
                info!("event=contact_submit module=contact status=ok");
            }
            Err(err) => {
                self.status = SubmitStatus::Error;
                warn!("event=contact_submit module=contact status=error error={err}");
            }
        }

        Ok(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactForm, InquiryFields, RelayError, RelayTransport, SubmitError, SubmitStatus};
    use crate::model::ContactSection;
    use std::cell::Cell;

    struct CountingTransport {
        calls: Cell<usize>,
    }

    impl RelayTransport for &CountingTransport {
        fn deliver(&self, _endpoint: &str, _inquiry: &InquiryFields) -> Result<(), RelayError> {
            self.calls.set(self.calls.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn submit_while_in_flight_is_refused_without_a_delivery() {
        let transport = CountingTransport {
            calls: Cell::new(0),
        };
        let mut form = ContactForm::new(&transport);
        form.set_message("hi");
        // Force the in-flight state the way an async host would observe it
        // between dispatch and completion.
        form.status = SubmitStatus::Submitting;

        let contact = ContactSection {
            formspree_id: "form42".to_string(),
            ..ContactSection::default()
        };

        let err = form.submit(&contact).expect_err("in-flight submit must be refused");
        assert_eq!(err, SubmitError::AlreadyInFlight);
        assert_eq!(transport.calls.get(), 0);
        assert_eq!(form.status(), SubmitStatus::Submitting);
        assert_eq!(form.fields().message, "hi");
    }
}
