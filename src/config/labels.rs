// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Free-form `key[=value]` labels attached to a configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LabelError {
    #[error("zero-length label key")]
    EmptyKey,
}

/// A key with an optional value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Ordered list of labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Labels(pub Vec<Label>);

impl Labels {
    /// Parse one `key=value` or `key:value` entry and append it.
    ///
    /// The separator is whichever of `=` and `:` comes first. An empty value
    /// is stored as `None`, and an empty entry is ignored.
    pub fn push_str(&mut self, entry: &str) -> Result<(), LabelError> {
        if entry.is_empty() {
            return Ok(());
        }

        let (key, value) = match entry.find(['=', ':']) {
            Some(idx) => (&entry[..idx], &entry[idx + 1..]),
            None => (entry, ""),
        };
        if key.is_empty() {
            return Err(LabelError::EmptyKey);
        }

        self.0.push(Label {
            key: key.to_string(),
            value: (!value.is_empty()).then(|| value.to_string()),
        });
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Label> {
        self.0.iter().find(|label| label.key == key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Labels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, label) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(&label.key)?;
            if let Some(value) = &label.value {
                write!(f, ":{value}")?;
            }
        }
        Ok(())
    }
}
