use std::collections::{BTreeMap, HashSet};

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// One element of the decoded form definition, keyed by its element name in
/// [`FormDefinition`]. Display properties are owned by the hosting framework;
/// the relay only needs enough to identify the element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl Element {
    pub fn new(kind: &str) -> Self {
        Element {
            kind: Some(kind.to_string()),
            title: None,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }
}

/// Mapping table linking form elements to target-system field keys.
///
/// Declared statically as part of the form definition and read-only at
/// submission time. Both sides are unique: an element carries at most one
/// mapping, and no two elements share a target key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldMappings {
    by_element: BTreeMap<String, String>,
}

impl FieldMappings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut by_element = BTreeMap::new();
        let mut seen_targets = HashSet::new();

        for (element_name, target_key) in pairs {
            let element_name = element_name.into();
            let target_key = target_key.into();

            if !seen_targets.insert(target_key.clone()) {
                bail!("target key {} is mapped more than once", target_key);
            }
            if by_element
                .insert(element_name.clone(), target_key)
                .is_some()
            {
                bail!("element {} already carries a field mapping", element_name);
            }
        }

        Ok(FieldMappings { by_element })
    }

    /// Target-system field key for the given element, if it carries a mapping.
    pub fn target_key(&self, element_name: &str) -> Option<&str> {
        self.by_element.get(element_name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_element
            .iter()
            .map(|(element, target)| (element.as_str(), target.as_str()))
    }

    pub fn len(&self) -> usize {
        self.by_element.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_element.is_empty()
    }
}

/// Decoded form definition as handed over by the hosting framework: the
/// element map plus the field-mapping table declared alongside it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormDefinition {
    elements: BTreeMap<String, Element>,
    #[serde(default)]
    mappings: FieldMappings,
}

impl FormDefinition {
    pub fn new(mappings: FieldMappings) -> Self {
        FormDefinition {
            elements: BTreeMap::new(),
            mappings,
        }
    }

    pub fn insert_element(&mut self, element_name: &str, element: Element) {
        self.elements.insert(element_name.to_string(), element);
    }

    pub fn element(&self, element_name: &str) -> Option<&Element> {
        self.elements.get(element_name)
    }

    pub fn elements(&self) -> impl Iterator<Item = (&str, &Element)> {
        self.elements
            .iter()
            .map(|(name, element)| (name.as_str(), element))
    }

    pub fn mappings(&self) -> &FieldMappings {
        &self.mappings
    }
}
