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

use log::trace;

use super::{helper_constants::MIN_COUNTRY_AREA_LOCAL_LENGTH, lookup_tables::CountryCodeTable};

/// Finds the country calling code a `<Country_code><Area_code><Phone Number>`
/// string starts with.
///
/// The table is walked in its stored order and the first code equal to any
/// leading substring of the number (up to the longest code length) wins.
/// This is NOT a longest prefix match: with `[44, 441]` in that order,
/// `4412345678` resolves to `44`.
#[derive(Debug, Clone, Copy)]
pub struct CountryCodeResolver<'t> {
    table: &'t CountryCodeTable,
    min_length: usize,
}

impl<'t> CountryCodeResolver<'t> {
    pub fn new(table: &'t CountryCodeTable) -> Self {
        Self { table, min_length: MIN_COUNTRY_AREA_LOCAL_LENGTH }
    }

    /// Numbers shorter than `min_length` are never resolved.
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn resolve(&self, number: &str) -> Option<u32> {
        if number.len() < self.min_length || self.table.is_empty() {
            return None;
        }

        let max_length = self.table.max_length().min(number.len());
        let mut candidates = Vec::with_capacity(max_length);
        for length in 1..=max_length {
            let Some(prefix) = number.get(..length) else {
                break;
            };
            if !prefix.bytes().all(|b| b.is_ascii_digit()) {
                break;
            }
            // leading zeros are parsed away, "086" is a candidate for 86
            if let Ok(candidate) = prefix.parse::<u32>() {
                candidates.push(candidate);
            }
        }

        let found = self
            .table
            .codes()
            .iter()
            .copied()
            .find(|code| candidates.contains(code));
        if let Some(code) = found {
            trace!("Country code = {}", code);
        }
        found
    }
}
