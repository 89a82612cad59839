//! Blocking HTTP relay transport.

use super::{InquiryFields, RelayError, RelayTransport};
use reqwest::blocking::Client;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Delivers inquiries over HTTPS with a bounded request timeout.
pub struct HttpRelayTransport {
    client: Client,
}

impl HttpRelayTransport {
    pub fn new() -> Result<Self, RelayError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client })
    }
}

impl RelayTransport for HttpRelayTransport {
    fn deliver(&self, endpoint: &str, inquiry: &InquiryFields) -> Result<(), RelayError> {
        let response = self.client.post(endpoint).json(inquiry).send()?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(RelayError::Rejected(status.as_u16()))
        }
    }
}
