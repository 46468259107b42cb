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

//! Configuration loading.
//!
//! A configuration value is built up in layers, each overwriting the previous
//! one where it provides a value:
//!
//! 1. Built-in literal defaults
//! 2. A few well-known environment variables read while building defaults
//! 3. A configuration file (JSON, YAML, TOML or HCL, chosen by extension)
//! 4. Environment variable overrides for every top-level scalar field
//! 5. Command-line flags, applied by the caller (see [`crate::flags`])
//!
//! # Environment Variable Overrides
//!
//! The variable for a field is its name split into words, uppercased and
//! joined with `_`: `a_integer` and `AInteger` both map to `A_INTEGER`.
//! String, integer and boolean fields are overridden; float and nested fields
//! are not. A variable set to the empty string counts as unset.
//!
//! # Examples
//!
//! ```no_run
//! use confsync::config::{self, AppConfig};
//!
//! // Reads config.json, config.yml, config.toml or config.hcl from the
//! // current directory, then applies A_STRING / A_INTEGER / A_BOOLEAN
//! let config: AppConfig = config::load_config("", "").unwrap();
//! println!("{}", config.a_integer);
//! ```

pub mod env;
pub mod fields;
pub mod format;
pub mod labels;
pub mod loader;
pub mod naming;
pub mod sync;
pub mod types;

// Re-export commonly used types
pub use env::{EnvReader, ProcessEnv};
pub use fields::{Accessor, EnvFields, FieldDescriptor, ScalarKind};
pub use format::Format;
pub use labels::{Label, LabelError, Labels};
pub use loader::{
    load_config, load_config_file, load_defaults, save_config_file, ConfigError, ConfigLoader,
};
pub use naming::env_name;
pub use sync::{sync_env, sync_process_env, SyncError, SyncReport, ValueError};
pub use types::{AppConfig, Credentials, EnvDefaults};
