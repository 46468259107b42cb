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

//! Read-only access to environment variables.
//!
//! Everything in this crate that consults the environment goes through an
//! [`EnvReader`], so tests can hand in a map instead of mutating the process
//! environment.

use log::warn;
use std::collections::HashMap;
use std::env;

/// Source of environment variable values.
pub trait EnvReader {
    /// Returns the value of `name`, or `None` if it is not set.
    fn get(&self, name: &str) -> Option<String>;

    /// Returns the value of `name` unless it is unset or empty.
    fn get_non_empty(&self, name: &str) -> Option<String> {
        self.get(name).filter(|value| !value.is_empty())
    }
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvReader for ProcessEnv {
    /// Values that are not valid unicode are reported and treated as unset.
    fn get(&self, name: &str) -> Option<String> {
        match env::var_os(name)?.into_string() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring environment variable {name}: value is not valid unicode");
                None
            }
        }
    }
}

impl EnvReader for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

impl EnvReader for [(&str, &str)] {
    fn get(&self, name: &str) -> Option<String> {
        self.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| (*value).to_string())
    }
}

impl<const N: usize> EnvReader for [(&str, &str); N] {
    fn get(&self, name: &str) -> Option<String> {
        EnvReader::get(self.as_slice(), name)
    }
}

impl<R: EnvReader + ?Sized> EnvReader for &R {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}

/// Parse a boolean literal.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and `0`, `f`, `F`, `FALSE`,
/// `false`, `False`. Anything else, including surrounding whitespace, is
/// rejected.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
