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

use super::{
    helper_constants::{DEFAULT_EXCEPTION_COUNTRY_CODES, DEFAULT_EXCEPTION_NUMBER_LENGTH},
    helper_types::NumberEntry,
};

/// A `<Country_code><Area_code><Phone Number>` number of exactly
/// `number_length` digits under `country_code` is sent without the home IDD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExceptionRule {
    pub country_code: u32,
    pub number_length: usize,
}

/// Numbers in `CC_AREA_LOCAL` notation that must not get the home IDD
/// prepended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CcAreaLocalExceptions {
    rules: Vec<ExceptionRule>,
}

impl Default for CcAreaLocalExceptions {
    /// Country codes 7, 20, 65 and 90 with twelve digit numbers.
    fn default() -> Self {
        Self {
            rules: DEFAULT_EXCEPTION_COUNTRY_CODES
                .iter()
                .map(|&country_code| ExceptionRule {
                    country_code,
                    number_length: DEFAULT_EXCEPTION_NUMBER_LENGTH,
                })
                .collect(),
        }
    }
}

impl CcAreaLocalExceptions {
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn with_rule(mut self, country_code: u32, number_length: usize) -> Self {
        let rule = ExceptionRule { country_code, number_length };
        if !self.rules.contains(&rule) {
            self.rules.push(rule);
        }
        self
    }

    pub fn rules(&self) -> &[ExceptionRule] {
        &self.rules
    }

    pub fn contains(&self, entry: &NumberEntry<'_>) -> bool {
        let Some(country_code) = entry.country_code else {
            return false;
        };
        self.rules.iter().any(|rule| {
            rule.country_code == country_code && rule.number_length == entry.number.len()
        })
    }
}
