use formrelay_common::types::form::FormDefinition;
use formrelay_common::types::submission::{Submission, SubmissionPayload};

/// Builds the outbound payload for one submission.
///
/// Every element of the definition that carries a field mapping contributes
/// exactly one entry under its target key; elements without a mapping are
/// skipped. Pure and infallible: an unanswered mapped element contributes an
/// empty value rather than failing the submission.
pub fn build_payload(definition: &FormDefinition, submission: &Submission) -> SubmissionPayload {
    let mut payload = SubmissionPayload::new();

    for (element_name, _) in definition.elements() {
        if let Some(target_key) = definition.mappings().target_key(element_name) {
            payload.insert(target_key, submission.value(element_name));
        }
    }

    payload
}
