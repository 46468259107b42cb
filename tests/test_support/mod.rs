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

//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Every environment variable the loader may consult for `AppConfig`.
pub const CONFIG_ENV_VARS: [&str; 10] = [
    "A_STRING",
    "A_INTEGER",
    "A_FLOAT",
    "A_BOOLEAN",
    "A_STRUCT",
    "A_STRING_VALUE",
    "AN_INTEGER_VALUE",
    "A_FLOAT_VALUE",
    "AUTH_USER",
    "AUTH_PASSWORD",
];

/// Write `content` to `file` inside `dir` and return its path.
pub fn write_config(dir: &TempDir, file: &str, content: &str) -> PathBuf {
    let path = dir.path().join(file);
    fs::write(&path, content).expect("Failed to write config file");
    path
}

/// Run `f` with every config variable unset except the ones given.
pub fn with_config_env<R>(vars: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
    let mut overrides: Vec<(&str, Option<&str>)> =
        CONFIG_ENV_VARS.iter().map(|name| (*name, None)).collect();
    for (name, value) in vars {
        overrides.retain(|(existing, _)| existing != name);
        overrides.push((*name, Some(*value)));
    }
    temp_env::with_vars(overrides, f)
}

pub const FULL_JSON: &str = r#"{
  "a_string": "from json",
  "a_integer": 21,
  "a_float": 2.75,
  "a_boolean": false,
  "a_struct": { "username": "json-user", "password": "json-pass" },
  "labels": [{ "key": "env", "value": "prod" }, { "key": "canary" }]
}"#;

pub const FULL_YAML: &str = r#"
a_string: from yaml
a_integer: 22
a_float: 2.5
a_boolean: false
a_struct:
  username: yaml-user
  password: yaml-pass
labels:
  - key: env
    value: prod
  - key: canary
"#;

pub const FULL_TOML: &str = r#"
a_string = "from toml"
a_integer = 23
a_float = 2.25
a_boolean = false
labels = [{ key = "env", value = "prod" }, { key = "canary" }]

[a_struct]
username = "toml-user"
password = "toml-pass"
"#;

pub const FULL_HCL: &str = r#"
a_string  = "from hcl"
a_integer = 24
a_float   = 2.125
a_boolean = false
a_struct  = { username = "hcl-user", password = "hcl-pass" }
labels    = [{ key = "env", value = "prod" }, { key = "canary" }]
"#;
