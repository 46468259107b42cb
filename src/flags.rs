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

//! Command-line flags for every [`AppConfig`] field.
//!
//! Flags are the last configuration layer. They are applied to an already
//! loaded configuration with [`ConfigFlags::apply`] and leave every field
//! whose flag was not given untouched. Every flag is global, so it is accepted
//! both before and after a subcommand.

use clap::Args;

use crate::config::env::parse_bool;
use crate::config::labels::{Label, Labels};
use crate::config::AppConfig;

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct ConfigFlags {
    /// Override the string setting
    #[arg(long = "string", value_name = "STRING", global = true)]
    pub a_string: Option<String>,

    /// Override the integer setting
    #[arg(
        long = "integer",
        value_name = "INT",
        allow_negative_numbers = true,
        global = true
    )]
    pub a_integer: Option<i64>,

    /// Override the float setting
    #[arg(
        long = "float",
        value_name = "FLOAT",
        allow_negative_numbers = true,
        global = true
    )]
    pub a_float: Option<f64>,

    /// Override the boolean setting (a bare flag means true)
    #[arg(
        long = "boolean",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = bool_flag,
        global = true
    )]
    pub a_boolean: Option<bool>,

    /// Username for authentication
    #[arg(long = "a-struct.username", value_name = "USER", global = true)]
    pub username: Option<String>,

    /// Password for authentication
    #[arg(long = "a-struct.password", value_name = "PASSWORD", global = true)]
    pub password: Option<String>,

    /// Attach a label, as key=value or key:value (repeatable)
    #[arg(long = "label", value_name = "LABEL", value_parser = label_flag, global = true)]
    pub labels: Vec<Label>,
}

impl ConfigFlags {
    /// Overwrite the fields of `config` whose flags were given.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(value) = &self.a_string {
            config.a_string = value.clone();
        }
        if let Some(value) = self.a_integer {
            config.a_integer = value;
        }
        if let Some(value) = self.a_float {
            config.a_float = value;
        }
        if let Some(value) = self.a_boolean {
            config.a_boolean = value;
        }
        if let Some(value) = &self.username {
            config.a_struct.username = value.clone();
        }
        if let Some(value) = &self.password {
            config.a_struct.password = value.clone();
        }
        config.labels.0.extend(self.labels.iter().cloned());
    }
}

fn bool_flag(value: &str) -> Result<bool, String> {
    parse_bool(value).ok_or_else(|| format!("invalid boolean '{value}'"))
}

fn label_flag(value: &str) -> Result<Label, String> {
    let mut labels = Labels::default();
    labels.push_str(value).map_err(|e| e.to_string())?;
    labels
        .0
        .pop()
        .ok_or_else(|| "label must not be empty".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        flags: ConfigFlags,
    }

    fn parse(args: &[&str]) -> Result<ConfigFlags, clap::Error> {
        TestCli::try_parse_from(std::iter::once("test").chain(args.iter().copied()))
            .map(|cli| cli.flags)
    }

    #[test]
    fn test_no_flags_leave_config_untouched() {
        let flags = parse(&[]).unwrap();
        let mut config = AppConfig::default();
        flags.apply(&mut config);

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_flags_override_fields() {
        let flags = parse(&[
            "--string",
            "cli",
            "--integer",
            "-3",
            "--float",
            "2.5",
            "--boolean=false",
            "--a-struct.username",
            "root",
            "--a-struct.password",
            "secret",
            "--label",
            "env=dev",
            "--label",
            "canary",
        ])
        .unwrap();

        let mut config = AppConfig::default();
        flags.apply(&mut config);

        assert_eq!(config.a_string, "cli");
        assert_eq!(config.a_integer, -3);
        assert_eq!(config.a_float, 2.5);
        assert!(!config.a_boolean);
        assert_eq!(config.a_struct.username, "root");
        assert_eq!(config.a_struct.password, "secret");
        assert_eq!(config.labels.to_string(), "env:dev,canary");
    }

    #[test]
    fn test_bare_boolean_flag_means_true() {
        let flags = parse(&["--boolean"]).unwrap();
        assert_eq!(flags.a_boolean, Some(true));

        let mut config = AppConfig {
            a_boolean: false,
            ..AppConfig::default()
        };
        flags.apply(&mut config);
        assert!(config.a_boolean);
    }

    #[test]
    fn test_boolean_flag_accepts_short_literals() {
        assert_eq!(parse(&["--boolean=F"]).unwrap().a_boolean, Some(false));
        assert_eq!(parse(&["--boolean=1"]).unwrap().a_boolean, Some(true));
        assert!(parse(&["--boolean=maybe"]).is_err());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(parse(&["--integer", "ten"]).is_err());
        assert!(parse(&["--label", "=orphan"]).is_err());
    }
}
