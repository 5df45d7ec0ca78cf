use crate::error::CoreError;
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomField {
    pub name: String,
    pub value: String,
}

impl CustomField {
    /// Accepts a name/value pair only when both parts are non-blank.
    pub fn new(name: &str, value: &str) -> Result<Self, CoreError> {
        let name = name.trim();
        let value = value.trim();
        if name.is_empty() || value.is_empty() {
            return Err(CoreError::IncompleteCustomField);
        }
        Ok(Self {
            name: name.to_string(),
            value: value.to_string(),
        })
    }
}

impl FromStr for CustomField {
    type Err = CoreError;

    /// Parses `NAME=VALUE`; the value may itself contain `=`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (name, value) = raw
            .split_once('=')
            .ok_or(CoreError::IncompleteCustomField)?;
        Self::new(name, value)
    }
}

/// Named extra values in the order they were added.
///
/// Adding a name that is already present replaces its value and keeps its
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CustomFields(Vec<CustomField>);

impl CustomFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|field| field.name == name) {
            Some(existing) => existing.value = value,
            None => self.0.push(CustomField { name, value }),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.0.iter().position(|field| field.name == name)?;
        Some(self.0.remove(index).value)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CustomField> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Trims every entry and drops the ones with a blank name or value.
    pub(crate) fn filled(&self) -> Self {
        let mut out = Self::new();
        for field in &self.0 {
            let name = field.name.trim();
            let value = field.value.trim();
            if !name.is_empty() && !value.is_empty() {
                out.insert(name, value);
            }
        }
        out
    }
}

impl<'a> IntoIterator for &'a CustomFields {
    type Item = &'a CustomField;
    type IntoIter = std::slice::Iter<'a, CustomField>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
