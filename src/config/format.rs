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

//! Configuration file formats.
//!
//! The format of a file is chosen from its extension alone:
//!
//! | extension | format |
//! |-----------|--------|
//! | `.json`   | JSON   |
//! | `.yml`    | YAML   |
//! | `.toml`   | TOML   |
//! | `.hcl`    | HCL    |
//!
//! Matching is exact and case-sensitive; `.yaml` is not accepted.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// Boxed error from one of the format crates.
pub type CodecError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A supported configuration file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Yaml,
    Toml,
    Hcl,
}

impl Format {
    /// All formats, in the order used when searching a directory.
    pub const ALL: [Format; 4] = [Format::Json, Format::Yaml, Format::Toml, Format::Hcl];

    /// File extension, without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yml",
            Format::Toml => "toml",
            Format::Hcl => "hcl",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.extension() == ext)
    }

    /// Format for `path`, or `None` if its extension is missing or unknown.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Decode `bytes` into a `T`.
    pub fn decode<T: DeserializeOwned>(self, bytes: &[u8]) -> Result<T, CodecError> {
        match self {
            Format::Json => Ok(serde_json::from_slice(bytes)?),
            Format::Yaml => Ok(serde_yaml::from_slice(bytes)?),
            Format::Toml => Ok(toml::from_str(std::str::from_utf8(bytes)?)?),
            Format::Hcl => Ok(hcl::from_str(std::str::from_utf8(bytes)?)?),
        }
    }

    /// Encode `value` as text in this format.
    pub fn encode<T: Serialize>(self, value: &T) -> Result<String, CodecError> {
        match self {
            Format::Json => Ok(serde_json::to_string_pretty(value)?),
            Format::Yaml => Ok(serde_yaml::to_string(value)?),
            Format::Toml => Ok(toml::to_string_pretty(value)?),
            Format::Hcl => Ok(hcl::to_string(value)?),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Json => "JSON",
            Format::Yaml => "YAML",
            Format::Toml => "TOML",
            Format::Hcl => "HCL",
        };
        f.write_str(name)
    }
}

/// Extension of `path` as it appears in error messages, including the dot.
pub(crate) fn display_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}
