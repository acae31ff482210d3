use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stored answers of one form submission, keyed by element name. Values come
/// from the hosting framework and are dynamically typed; a missing answer is
/// not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    values: HashMap<String, Value>,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values(values: HashMap<String, Value>) -> Self {
        Submission { values }
    }

    pub fn insert(&mut self, element_name: &str, value: Value) {
        self.values.insert(element_name.to_string(), value);
    }

    pub fn value(&self, element_name: &str) -> Option<&Value> {
        self.values.get(element_name)
    }
}

/// Flat key/value data sent to the remote endpoint. Built fresh for each
/// submission, used once for the outbound request body, then discarded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionPayload {
    entries: BTreeMap<String, String>,
}

impl SubmissionPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value under its target-system field key. Scalars render as
    /// plain text, an absent or null answer renders as the empty string so
    /// that no mapped element is silently dropped.
    pub fn insert(&mut self, target_key: &str, value: Option<&Value>) {
        let rendered = match value {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(Value::Bool(flag)) => flag.to_string(),
            Some(Value::Number(number)) => number.to_string(),
            // Composite answers are rare; keep them readable in the body
            // rather than failing the submission.
            Some(other) => other.to_string(),
        };

        self.entries.insert(target_key.to_string(), rendered);
    }

    pub fn get(&self, target_key: &str) -> Option<&str> {
        self.entries.get(target_key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Borrow of the underlying entries in the shape reqwest expects for a
    /// form-urlencoded body.
    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
