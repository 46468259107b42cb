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

//! Static field tables for configuration types.
//!
//! A configuration type describes its top-level fields once, as an ordered
//! slice of [`FieldDescriptor`]s. Each descriptor pairs the field name with an
//! accessor that hands out a mutable reference to the field, which is enough
//! to both read and overwrite it.
//!
//! ```
//! use confsync::config::{EnvFields, FieldDescriptor};
//!
//! #[derive(Default)]
//! struct Server {
//!     host: String,
//!     port: i64,
//!     verbose: bool,
//! }
//!
//! impl EnvFields for Server {
//!     fn fields() -> &'static [FieldDescriptor<Self>] {
//!         static FIELDS: &[FieldDescriptor<Server>] = &[
//!             FieldDescriptor::string("host", |s| &mut s.host),
//!             FieldDescriptor::integer("port", |s| &mut s.port),
//!             FieldDescriptor::boolean("verbose", |s| &mut s.verbose),
//!         ];
//!         FIELDS
//!     }
//! }
//!
//! assert_eq!(Server::fields().len(), 3);
//! ```

use std::fmt;

/// Declared type of a configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Integer,
    Boolean,
    Float,
    /// Nested structs, lists and anything else that is not a scalar.
    Composite,
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScalarKind::String => "string",
            ScalarKind::Integer => "integer",
            ScalarKind::Boolean => "boolean",
            ScalarKind::Float => "float",
            ScalarKind::Composite => "composite",
        };
        f.pad(name)
    }
}

/// Typed access to one field of `T`.
pub enum Accessor<T> {
    String(fn(&mut T) -> &mut String),
    Integer(fn(&mut T) -> &mut i64),
    Boolean(fn(&mut T) -> &mut bool),
    Float(fn(&mut T) -> &mut f64),
    Composite,
}

impl<T> Accessor<T> {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Accessor::String(_) => ScalarKind::String,
            Accessor::Integer(_) => ScalarKind::Integer,
            Accessor::Boolean(_) => ScalarKind::Boolean,
            Accessor::Float(_) => ScalarKind::Float,
            Accessor::Composite => ScalarKind::Composite,
        }
    }
}

/// Name and accessor of one top-level field.
pub struct FieldDescriptor<T> {
    pub name: &'static str,
    pub accessor: Accessor<T>,
}

impl<T> FieldDescriptor<T> {
    pub const fn string(name: &'static str, get: fn(&mut T) -> &mut String) -> Self {
        Self {
            name,
            accessor: Accessor::String(get),
        }
    }

    pub const fn integer(name: &'static str, get: fn(&mut T) -> &mut i64) -> Self {
        Self {
            name,
            accessor: Accessor::Integer(get),
        }
    }

    pub const fn boolean(name: &'static str, get: fn(&mut T) -> &mut bool) -> Self {
        Self {
            name,
            accessor: Accessor::Boolean(get),
        }
    }

    pub const fn float(name: &'static str, get: fn(&mut T) -> &mut f64) -> Self {
        Self {
            name,
            accessor: Accessor::Float(get),
        }
    }

    pub const fn composite(name: &'static str) -> Self {
        Self {
            name,
            accessor: Accessor::Composite,
        }
    }

    pub fn kind(&self) -> ScalarKind {
        self.accessor.kind()
    }
}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .finish()
    }
}

/// Configuration types whose top-level fields can be enumerated.
///
/// Descriptors must be listed in declaration order with unique names.
pub trait EnvFields: Sized + 'static {
    fn fields() -> &'static [FieldDescriptor<Self>];
}
