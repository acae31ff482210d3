use anyhow::{bail, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use formrelay_common::constants::{
    FORM_ERROR_FIELD, MESSAGE_SUBMISSION_BAD_RESPONSE_CODE, MESSAGE_SUBMISSION_CLIENT_EXCEPTION,
};
use formrelay_common::form_state::FormState;
use formrelay_common::types::form::FormDefinition;
use formrelay_common::types::outcome::Outcome;
use formrelay_common::types::submission::Submission;

use crate::forwarder::SubmissionForwarder;
use crate::payload::build_payload;

/// Config key under which the endpoint URL is persisted.
pub const SUBMISSION_URL_KEY: &str = "submission_url";

/// Handler metadata surfaced in the hosting framework's admin listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandlerMetadata {
    pub name: String,
    pub description: String,
    pub category: String,
}

/// One field of a handler's configuration form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigField {
    pub key: String,
    pub title: String,
    pub description: String,
    pub required: bool,
    pub default: Option<String>,
}

/// Per-form-instance configuration, persisted by the hosting framework and
/// read-only while a submission is in flight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HandlerConfig {
    pub submission_url: String,
}

impl HandlerConfig {
    /// Builds the configuration from a generic config value map. The URL is
    /// required; presence is the only validation applied to it.
    pub fn from_values(values: &Map<String, Value>) -> Result<Self> {
        let submission_url = values
            .get(SUBMISSION_URL_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .trim()
            .to_string();

        if submission_url.is_empty() {
            bail!("submission URL is required");
        }

        Ok(HandlerConfig { submission_url })
    }

    pub fn to_values(&self) -> Map<String, Value> {
        let mut values = Map::new();
        values.insert(
            SUBMISSION_URL_KEY.to_string(),
            Value::String(self.submission_url.clone()),
        );
        values
    }
}

/// Capability interface for submission handlers. The hosting framework
/// registers implementations in a [`crate::registry::HandlerRegistry`] and
/// drives them through this trait instead of a base-class extension point.
#[async_trait]
pub trait SubmissionHandler: Send + Sync {
    /// Registry identifier.
    fn kind(&self) -> &'static str;

    fn metadata(&self) -> HandlerMetadata;

    /// Fields of the handler's configuration form.
    fn config_form(&self) -> Vec<ConfigField>;

    /// Current configuration as a generic value map.
    fn config(&self) -> Map<String, Value>;

    /// Applies a saved configuration value map. Fails when a required value
    /// is absent, so an unconfigured handler never reaches the submission
    /// path through a framework save.
    fn configure(&mut self, values: &Map<String, Value>) -> Result<()>;

    /// Validation hook, invoked once per submission after the framework's
    /// own validation has passed. Returns normally in all cases; failures
    /// are reported through `state` and the returned [`Outcome`], never as
    /// an error.
    async fn validate(
        &self,
        definition: &FormDefinition,
        submission: &Submission,
        state: &mut FormState,
    ) -> Outcome;
}

/// Forwards mapped submission data to a remote form endpoint.
pub struct RelayHandler {
    config: HandlerConfig,
    forwarder: SubmissionForwarder,
}

impl RelayHandler {
    /// An unconfigured handler; [`SubmissionHandler::configure`] must run
    /// before it can forward anywhere.
    pub fn new(forwarder: SubmissionForwarder) -> Self {
        RelayHandler {
            config: HandlerConfig::default(),
            forwarder,
        }
    }

    pub fn with_config(forwarder: SubmissionForwarder, config: HandlerConfig) -> Self {
        RelayHandler { config, forwarder }
    }

    pub fn submission_url(&self) -> &str {
        &self.config.submission_url
    }
}

#[async_trait]
impl SubmissionHandler for RelayHandler {
    fn kind(&self) -> &'static str {
        "form_relay"
    }

    fn metadata(&self) -> HandlerMetadata {
        HandlerMetadata {
            name: "Form Relay".to_string(),
            description: "Send submissions to a remote form endpoint".to_string(),
            category: "Form Handler".to_string(),
        }
    }

    fn config_form(&self) -> Vec<ConfigField> {
        vec![ConfigField {
            key: SUBMISSION_URL_KEY.to_string(),
            title: "Submission URL".to_string(),
            description: "The remote form URL to which to post this form's data.".to_string(),
            required: true,
            default: (!self.config.submission_url.is_empty())
                .then(|| self.config.submission_url.clone()),
        }]
    }

    fn config(&self) -> Map<String, Value> {
        self.config.to_values()
    }

    fn configure(&mut self, values: &Map<String, Value>) -> Result<()> {
        self.config = HandlerConfig::from_values(values)?;
        Ok(())
    }

    async fn validate(
        &self,
        definition: &FormDefinition,
        submission: &Submission,
        state: &mut FormState,
    ) -> Outcome {
        let payload = build_payload(definition, submission);

        debug!(
            entries = payload.len(),
            "forwarding submission payload to remote endpoint"
        );

        let outcome = self
            .forwarder
            .forward(&payload, &self.config.submission_url)
            .await;

        match outcome {
            Outcome::Accepted => {}
            Outcome::ValidationRejected => {
                state.set_error(FORM_ERROR_FIELD, MESSAGE_SUBMISSION_BAD_RESPONSE_CODE)
            }
            Outcome::TransportFailure => {
                state.set_error(FORM_ERROR_FIELD, MESSAGE_SUBMISSION_CLIENT_EXCEPTION)
            }
        }

        outcome
    }
}
