use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{anyhow, Result};

use formrelay_common::form_state::FormState;
use formrelay_common::types::form::FormDefinition;
use formrelay_common::types::outcome::Outcome;
use formrelay_common::types::submission::Submission;

use crate::handler::SubmissionHandler;

/// Handler registry the hosting framework composes against. Handlers are
/// configured before registration and immutable afterwards; configuration
/// changes re-register a fresh instance.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<String, Arc<dyn SubmissionHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<H: SubmissionHandler + 'static>(&mut self, handler: H) -> Result<()> {
        let kind = handler.kind().to_string();
        if self.handlers.contains_key(&kind) {
            return Err(anyhow!("handler {} already registered", kind));
        }
        self.handlers.insert(kind, Arc::new(handler));
        Ok(())
    }

    pub fn get(&self, kind: &str) -> Option<Arc<dyn SubmissionHandler>> {
        self.handlers.get(kind).cloned()
    }

    pub fn list_handlers(&self) -> Vec<String> {
        self.handlers.keys().cloned().collect()
    }

    /// Runs the validation hook of the given handler for one submission.
    pub async fn validate(
        &self,
        kind: &str,
        definition: &FormDefinition,
        submission: &Submission,
        state: &mut FormState,
    ) -> Result<Outcome> {
        let handler = self
            .get(kind)
            .ok_or_else(|| anyhow!("handler {} not found", kind))?;

        Ok(handler.validate(definition, submission, state).await)
    }
}
