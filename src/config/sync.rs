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

//! Environment variable overrides for top-level configuration fields.
//!
//! Every field listed by [`EnvFields::fields`] is checked against the
//! environment variable derived from its name (see [`env_name`]). When the
//! variable is set to a non-empty value, the field is overwritten:
//!
//! - string fields take the raw value
//! - integer fields take the value parsed as a base-10 `i64`
//! - boolean fields take the value parsed with [`parse_bool`]
//!
//! Float and composite fields are left alone. Nested structs are never
//! descended into.
//!
//! The first value that fails to parse aborts the pass. Fields visited before
//! the failing one keep their new values.

use std::num::ParseIntError;

use log::debug;

use super::env::{parse_bool, EnvReader, ProcessEnv};
use super::fields::{Accessor, EnvFields};
use super::naming::env_name;

/// Why an environment value could not be converted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    #[error("invalid integer: {0}")]
    InvalidInteger(#[from] ParseIntError),

    #[error("invalid boolean '{0}'")]
    InvalidBoolean(String),
}

/// Errors raised by the environment sync pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyncError {
    #[error("Failed to apply environment variable {env_name} to config field '{field}': {cause}")]
    Parse {
        field: String,
        env_name: String,
        #[source]
        cause: ValueError,
    },
}

impl SyncError {
    /// Name of the field whose value could not be applied.
    pub fn field(&self) -> &str {
        match self {
            SyncError::Parse { field, .. } => field,
        }
    }
}

/// Fields changed by a successful sync pass, in the order they were applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub overridden: Vec<&'static str>,
}

impl SyncReport {
    pub fn is_empty(&self) -> bool {
        self.overridden.is_empty()
    }
}

/// Overwrite the supported top-level fields of `cfg` from `env`.
///
/// # Errors
///
/// Returns [`SyncError::Parse`] for the first integer or boolean field whose
/// variable holds a value that cannot be parsed. `cfg` is not rolled back.
///
/// # Examples
///
/// ```
/// use confsync::config::{sync_env, AppConfig};
///
/// let mut config = AppConfig::default();
/// let env = [("A_INTEGER", "42"), ("A_BOOLEAN", "F")];
///
/// sync_env(&mut config, &env).unwrap();
/// assert_eq!(config.a_integer, 42);
/// assert!(!config.a_boolean);
/// ```
pub fn sync_env<T, E>(cfg: &mut T, env: &E) -> Result<SyncReport, SyncError>
where
    T: EnvFields,
    E: EnvReader + ?Sized,
{
    let mut report = SyncReport::default();

    for field in T::fields() {
        let var = env_name(field.name);
        let Some(value) = env.get_non_empty(&var) else {
            continue;
        };

        let parse_error = |cause| SyncError::Parse {
            field: field.name.to_string(),
            env_name: var.clone(),
            cause,
        };

        match &field.accessor {
            Accessor::String(get) => *get(cfg) = value,
            Accessor::Integer(get) => {
                *get(cfg) = value
                    .parse::<i64>()
                    .map_err(|e| parse_error(ValueError::InvalidInteger(e)))?;
            }
            Accessor::Boolean(get) => {
                *get(cfg) = parse_bool(&value)
                    .ok_or_else(|| parse_error(ValueError::InvalidBoolean(value.clone())))?;
            }
            Accessor::Float(_) | Accessor::Composite => {
                debug!(
                    "Ignoring {var} for config field '{}': {} fields are not overridden from the environment",
                    field.name,
                    field.kind()
                );
                continue;
            }
        }

        debug!("Config field '{}' overridden by environment variable {var}", field.name);
        report.overridden.push(field.name);
    }

    Ok(report)
}

/// [`sync_env`] against the environment of the running process.
pub fn sync_process_env<T: EnvFields>(cfg: &mut T) -> Result<SyncReport, SyncError> {
    sync_env(cfg, &ProcessEnv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::fields::FieldDescriptor;
    use assert_matches::assert_matches;
    use serial_test::serial;
    use std::collections::HashMap;

    #[derive(Debug, Clone, PartialEq)]
    struct Nested {
        user: String,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct TestConfig {
        a_string: String,
        a_integer: i64,
        a_float: f64,
        a_boolean: bool,
        a_struct: Nested,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self {
                a_string: "initial".to_string(),
                a_integer: 5,
                a_float: 1.5,
                a_boolean: true,
                a_struct: Nested {
                    user: "nobody".to_string(),
                },
            }
        }
    }

    impl EnvFields for TestConfig {
        fn fields() -> &'static [FieldDescriptor<Self>] {
            static FIELDS: &[FieldDescriptor<TestConfig>] = &[
                FieldDescriptor::string("AString", |c| &mut c.a_string),
                FieldDescriptor::integer("AInteger", |c| &mut c.a_integer),
                FieldDescriptor::float("AFloat", |c| &mut c.a_float),
                FieldDescriptor::boolean("ABoolean", |c| &mut c.a_boolean),
                FieldDescriptor::composite("AStruct"),
            ];
            FIELDS
        }
    }

    #[test]
    fn test_integer_override() {
        let mut config = TestConfig::default();
        let report = sync_env(&mut config, &[("A_INTEGER", "42")]).unwrap();

        assert_eq!(config.a_integer, 42);
        assert_eq!(report.overridden, vec!["AInteger"]);
    }

    #[test]
    fn test_negative_and_signed_integers() {
        let mut config = TestConfig::default();
        sync_env(&mut config, &[("A_INTEGER", "-17")]).unwrap();
        assert_eq!(config.a_integer, -17);

        sync_env(&mut config, &[("A_INTEGER", "+8")]).unwrap();
        assert_eq!(config.a_integer, 8);
    }

    #[test]
    fn test_empty_value_is_treated_as_unset() {
        let mut config = TestConfig::default();
        let report = sync_env(
            &mut config,
            &[("A_INTEGER", ""), ("A_STRING", ""), ("A_BOOLEAN", "")],
        )
        .unwrap();

        assert_eq!(config, TestConfig::default());
        assert!(report.is_empty());
    }

    #[test]
    fn test_string_and_boolean_override() {
        let mut config = TestConfig::default();
        sync_env(&mut config, &[("A_STRING", "from env"), ("A_BOOLEAN", "0")]).unwrap();

        assert_eq!(config.a_string, "from env");
        assert!(!config.a_boolean);
    }

    #[test]
    fn test_invalid_integer_aborts_after_earlier_fields() {
        let mut config = TestConfig::default();
        let env = [
            ("A_STRING", "changed"),
            ("A_INTEGER", "notanumber"),
            ("A_BOOLEAN", "false"),
        ];

        let err = sync_env(&mut config, &env).unwrap_err();

        assert_matches!(
            &err,
            SyncError::Parse { field, env_name, cause: ValueError::InvalidInteger(_) }
                if field == "AInteger" && env_name == "A_INTEGER"
        );
        assert_eq!(err.field(), "AInteger");
        // Fields before the failure keep their new values, later ones are untouched
        assert_eq!(config.a_string, "changed");
        assert_eq!(config.a_integer, 5);
        assert!(config.a_boolean);
    }

    #[test]
    fn test_invalid_boolean() {
        let mut config = TestConfig::default();
        let err = sync_env(&mut config, &[("A_BOOLEAN", "yes")]).unwrap_err();

        assert_matches!(
            err,
            SyncError::Parse { cause: ValueError::InvalidBoolean(ref v), .. } if v == "yes"
        );
        assert!(err.to_string().contains("ABoolean"));
    }

    #[test]
    fn test_float_and_composite_fields_are_skipped() {
        let mut config = TestConfig::default();
        let report = sync_env(
            &mut config,
            &[("A_FLOAT", "not even a float"), ("A_STRUCT", "ignored")],
        )
        .unwrap();

        assert_eq!(config, TestConfig::default());
        assert!(report.is_empty());
    }

    #[test]
    fn test_nested_fields_are_not_recursed() {
        let mut config = TestConfig::default();
        sync_env(&mut config, &[("USER", "root"), ("A_STRUCT_USER", "root")]).unwrap();

        assert_eq!(config.a_struct.user, "nobody");
    }

    #[test]
    fn test_map_reader() {
        let mut vars = HashMap::new();
        vars.insert("A_STRING".to_string(), "mapped".to_string());

        let mut config = TestConfig::default();
        sync_env(&mut config, &vars).unwrap();

        assert_eq!(config.a_string, "mapped");
    }

    #[test]
    #[serial]
    fn test_sync_process_env() {
        temp_env::with_vars(
            [
                ("A_STRING", Some("process")),
                ("A_INTEGER", Some("99")),
                ("A_BOOLEAN", None),
            ],
            || {
                let mut config = TestConfig::default();
                sync_process_env(&mut config).unwrap();

                assert_eq!(config.a_string, "process");
                assert_eq!(config.a_integer, 99);
                assert!(config.a_boolean);
            },
        );
    }
}
