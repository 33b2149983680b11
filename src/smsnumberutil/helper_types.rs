// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{fmt, ops::Deref};

use super::{
    errors::ExtractNumberError,
    helper_constants::{PLUS_CHAR, POST_DIAL_SEPARATORS, VISUAL_SEPARATORS},
    helper_functions::is_iso_digit,
};

/// ASCII digits optionally preceded by a single `+`.
///
/// This is the network portion of a dialed destination; every rewrite builds
/// a new string instead of mutating it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitString(String);

impl DigitString {
    /// Checks that `number` already is a network portion.
    pub fn parse(number: &str) -> Result<Self, ExtractNumberError> {
        let digits = number.strip_prefix(PLUS_CHAR).unwrap_or(number);
        if digits.is_empty() {
            return Err(ExtractNumberError::NoDigits);
        }
        let offset = number.len() - digits.len();
        if let Some((position, character)) =
            digits.char_indices().find(|(_, c)| !is_iso_digit(*c))
        {
            return Err(ExtractNumberError::InvalidCharacter {
                character,
                position: position + offset,
            });
        }
        Ok(Self(number.to_owned()))
    }

    /// Extracts the network portion of a dialed string.
    ///
    /// Decimal digits of any script are kept as ASCII digits, a `+` is kept
    /// only in front of the first digit and everything after a post-dial
    /// separator is dropped. Whitespace and visual separators are skipped.
    ///
    /// Any other character, including the dialable `*`, `#` and wild `N`,
    /// refuses the whole number. The reported position is a byte offset into
    /// `raw_number`.
    pub fn extract(raw_number: &str) -> Result<Self, ExtractNumberError> {
        let normalized = dec_from_char::normalize_decimals(raw_number);
        let mut digits = String::with_capacity(raw_number.len());
        // Normalization maps characters one to one, so indices line up.
        for ((position, _), c) in raw_number.char_indices().zip(normalized.chars()) {
            if is_iso_digit(c) {
                digits.push(c);
            } else if c == PLUS_CHAR {
                if digits.is_empty() {
                    digits.push(c);
                }
            } else if POST_DIAL_SEPARATORS.contains(&c) {
                break;
            } else if !(c.is_whitespace() || VISUAL_SEPARATORS.contains(&c)) {
                return Err(ExtractNumberError::InvalidCharacter { character: c, position });
            }
        }
        if digits.len() <= usize::from(digits.starts_with(PLUS_CHAR)) {
            return Err(ExtractNumberError::NoDigits);
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn has_plus(&self) -> bool {
        self.0.starts_with(PLUS_CHAR)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for DigitString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for DigitString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Working record of a single classification pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberEntry<'a> {
    pub number: &'a str,
    /// International dialing prefix of the current network found in front of
    /// the number.
    pub idd: Option<&'a str>,
    pub country_code: Option<u32>,
}

impl<'a> NumberEntry<'a> {
    pub fn new(number: &'a str) -> Self {
        Self { number, idd: None, country_code: None }
    }

    pub fn idd_len(&self) -> usize {
        self.idd.map_or(0, str::len)
    }
}

/// Owned outcome of a classification, for callers that want to inspect how a
/// number was understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub form: super::NumberPlanForm,
    pub idd: Option<String>,
    pub country_code: Option<u32>,
}

impl Classification {
    pub(super) fn new(form: super::NumberPlanForm, entry: &NumberEntry<'_>) -> Self {
        Self {
            form,
            idd: entry.idd.map(str::to_owned),
            country_code: entry.country_code,
        }
    }
}
