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

//! Application configuration types.

use log::warn;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::env::EnvReader;
use super::fields::{EnvFields, FieldDescriptor};
use super::labels::Labels;

pub const DEFAULT_STRING: &str = "testString";
pub const DEFAULT_INTEGER: i64 = 5;
pub const DEFAULT_FLOAT: f64 = 3.12569;

/// Variables read by [`AppConfig::from_env_defaults`].
pub const STRING_DEFAULT_VAR: &str = "A_STRING_VALUE";
pub const INTEGER_DEFAULT_VAR: &str = "AN_INTEGER_VALUE";
pub const FLOAT_DEFAULT_VAR: &str = "A_FLOAT_VALUE";
pub const AUTH_USER_VAR: &str = "AUTH_USER";
pub const AUTH_PASSWORD_VAR: &str = "AUTH_PASSWORD";

/// Configuration types that can build their defaults from the environment.
pub trait EnvDefaults: Sized {
    fn from_env_defaults<E: EnvReader + ?Sized>(env: &E) -> Self;
}

/// Top-level application configuration.
///
/// Missing keys in a configuration file fall back to the built-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub a_string: String,
    pub a_integer: i64,
    pub a_float: f64,
    pub a_boolean: bool,
    pub a_struct: Credentials,
    pub labels: Labels,
}

/// Username and password pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            a_string: DEFAULT_STRING.to_string(),
            a_integer: DEFAULT_INTEGER,
            a_float: DEFAULT_FLOAT,
            a_boolean: true,
            a_struct: Credentials::default(),
            labels: Labels::default(),
        }
    }
}

impl EnvFields for AppConfig {
    fn fields() -> &'static [FieldDescriptor<Self>] {
        static FIELDS: &[FieldDescriptor<AppConfig>] = &[
            FieldDescriptor::string("a_string", |c| &mut c.a_string),
            FieldDescriptor::integer("a_integer", |c| &mut c.a_integer),
            FieldDescriptor::float("a_float", |c| &mut c.a_float),
            FieldDescriptor::boolean("a_boolean", |c| &mut c.a_boolean),
            FieldDescriptor::composite("a_struct"),
            FieldDescriptor::composite("labels"),
        ];
        FIELDS
    }
}

impl EnvDefaults for AppConfig {
    fn from_env_defaults<E: EnvReader + ?Sized>(env: &E) -> Self {
        Self {
            a_string: env
                .get_non_empty(STRING_DEFAULT_VAR)
                .unwrap_or_else(|| DEFAULT_STRING.to_string()),
            a_integer: parsed_or(env, INTEGER_DEFAULT_VAR, DEFAULT_INTEGER),
            a_float: parsed_or(env, FLOAT_DEFAULT_VAR, DEFAULT_FLOAT),
            a_boolean: true,
            a_struct: Credentials {
                username: env.get_non_empty(AUTH_USER_VAR).unwrap_or_default(),
                password: env.get_non_empty(AUTH_PASSWORD_VAR).unwrap_or_default(),
            },
            labels: Labels::default(),
        }
    }
}

fn parsed_or<E, T>(env: &E, name: &str, fallback: T) -> T
where
    E: EnvReader + ?Sized,
    T: FromStr,
{
    match env.get_non_empty(name) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("Ignoring malformed value in {name}, using the built-in default");
            fallback
        }),
        None => fallback,
    }
}
