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

//! Derivation of environment variable names from configuration field names.
//!
//! A field name is split into words at camel-case boundaries, each word is
//! uppercased and the words are joined with `_`:
//!
//! ```
//! use confsync::config::naming::env_name;
//!
//! assert_eq!(env_name("AppName"), "APP_NAME");
//! assert_eq!(env_name("AString"), "A_STRING");
//! assert_eq!(env_name("PDFLoader"), "PDF_LOADER");
//! assert_eq!(env_name("a_string"), "A_STRING");
//! ```

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Lower,
    Upper,
    Digit,
    Other,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_lowercase() {
            CharClass::Lower
        } else if c.is_uppercase() {
            CharClass::Upper
        } else if c.is_numeric() {
            CharClass::Digit
        } else {
            CharClass::Other
        }
    }
}

/// Split an identifier into camel-case words.
///
/// Consecutive characters of the same class (lowercase, uppercase, digit,
/// other) form a run. When an uppercase run is followed by a lowercase run, the
/// last uppercase character starts the lowercase word, so `PDFLoader` becomes
/// `["PDF", "Loader"]` and `AString` becomes `["A", "String"]`. Runs of other
/// characters (`_`, `-`, spaces) only separate words and are dropped.
pub fn split_words(ident: &str) -> Vec<String> {
    let mut runs: Vec<(CharClass, Vec<char>)> = Vec::new();
    for c in ident.chars() {
        let class = CharClass::of(c);
        match runs.last_mut() {
            Some((last, chars)) if *last == class => chars.push(c),
            _ => runs.push((class, vec![c])),
        }
    }

    for i in 0..runs.len().saturating_sub(1) {
        if runs[i].0 == CharClass::Upper && runs[i + 1].0 == CharClass::Lower {
            if let Some(moved) = runs[i].1.pop() {
                runs[i + 1].1.insert(0, moved);
            }
        }
    }

    runs.into_iter()
        .filter(|(class, chars)| *class != CharClass::Other && !chars.is_empty())
        .map(|(_, chars)| chars.into_iter().collect())
        .collect()
}

/// Derive the environment variable name for a configuration field.
///
/// Deriving from an already derived name returns it unchanged.
pub fn env_name(field: &str) -> String {
    split_words(field)
        .iter()
        .map(|word| word.to_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}
