use std::time::Duration;

use anyhow::Result;
use formrelay_common::types::outcome::Outcome;
use formrelay_common::types::submission::SubmissionPayload;
use reqwest::{redirect, Client};
use tracing::{error, warn};

use crate::config_manager::Config;

/// Sends submission payloads to the remote endpoint and classifies the HTTP
/// result into an [`Outcome`].
///
/// The client is injected so callers own connection reuse;
/// [`SubmissionForwarder::from_config`] builds one with the transport
/// behavior the relay requires: bounded timeouts and redirects disabled.
/// A redirect is the remote system's acceptance signal, so it must surface
/// as a status instead of being followed.
pub struct SubmissionForwarder {
    client: Client,
}

impl SubmissionForwarder {
    pub fn new(client: Client) -> Self {
        SubmissionForwarder { client }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(SubmissionForwarder { client })
    }

    /// Posts the payload to the endpoint as a form-urlencoded body. Exactly
    /// one request per call; calling again for the same submission issues a
    /// new, independent request.
    ///
    /// Only a redirect-class status counts as acceptance. Every other status,
    /// 200 included, is a rejection: the remote system redirects on success
    /// and answers anything else when it finds the data invalid. Transport
    /// errors never escape; they classify as [`Outcome::TransportFailure`]
    /// with the detail kept in the diagnostic log.
    pub async fn forward(&self, payload: &SubmissionPayload, endpoint_url: &str) -> Outcome {
        let response = self
            .client
            .post(endpoint_url)
            .form(payload.entries())
            .send()
            .await;

        match response {
            Ok(response) if response.status().is_redirection() => Outcome::Accepted,
            Ok(response) => {
                warn!(
                    status_code = response.status().as_u16(),
                    "remote endpoint rejected forwarded submission"
                );
                Outcome::ValidationRejected
            }
            Err(err) => {
                error!(error = %err, "failed to forward submission to remote endpoint");
                Outcome::TransportFailure
            }
        }
    }
}
