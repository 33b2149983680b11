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

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, OnceLock, PoisonError},
};

use dashmap::DashMap;
use log::{debug, error, warn};

use crate::interfaces::LookupSource;

use super::errors::LookupError;

/// Every known country calling code in table order, together with the
/// largest number of decimal digits among them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryCodeTable {
    codes: Vec<u32>,
    max_length: usize,
}

impl CountryCodeTable {
    /// Builds the table keeping the given order. Zero is not a country
    /// calling code and is skipped.
    pub fn new(codes: impl IntoIterator<Item = u32>) -> Self {
        let mut buf = itoa::Buffer::new();
        let mut max_length = 0;
        let codes = codes
            .into_iter()
            .filter(|code| *code > 0)
            .inspect(|code| max_length = max_length.max(buf.format(*code).len()))
            .collect();
        Self { codes, max_length }
    }

    pub fn codes(&self) -> &[u32] {
        &self.codes
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// In-memory [`LookupSource`], for callers that already hold the tables.
#[derive(Debug, Clone, Default)]
pub struct StaticLookupSource {
    idds_by_mcc: HashMap<String, Vec<String>>,
    country_codes: Vec<u32>,
}

impl StaticLookupSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idds<I, T>(mut self, mcc: &str, idds: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.idds_by_mcc
            .entry(mcc.to_owned())
            .or_default()
            .extend(idds.into_iter().map(Into::into));
        self
    }

    pub fn with_country_codes(mut self, codes: impl IntoIterator<Item = u32>) -> Self {
        self.country_codes.extend(codes);
        self
    }
}

impl LookupSource for StaticLookupSource {
    fn idds_for_country(&self, mcc: &str) -> Result<Vec<String>, LookupError> {
        Ok(self.idds_by_mcc.get(mcc).cloned().unwrap_or_default())
    }

    fn all_country_codes(&self) -> Result<Vec<u32>, LookupError> {
        Ok(self.country_codes.clone())
    }
}

/// Memoizes the lookup tables of a [`LookupSource`].
///
/// Each key is loaded once: the IDD list of an MCC is populated while holding
/// the map entry, the country code table under `country_codes_lock`. Populated
/// tables are immutable and handed out as `Arc`s, so steady state reads do
/// not serialize.
pub struct LookupCache<S: LookupSource> {
    source: S,
    idds_by_mcc: DashMap<String, Arc<[String]>>,
    country_codes: OnceLock<Arc<CountryCodeTable>>,
    country_codes_lock: Mutex<()>,
}

impl<S: LookupSource> LookupCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            idds_by_mcc: DashMap::new(),
            country_codes: OnceLock::new(),
            country_codes_lock: Mutex::new(()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the international dialing prefixes for `mcc`, loading them on
    /// first use. A failing source is remembered as an empty list.
    pub fn idds_for_country(&self, mcc: &str) -> Arc<[String]> {
        if let Some(idds) = self.idds_by_mcc.get(mcc) {
            return idds.value().clone();
        }
        let entry = self
            .idds_by_mcc
            .entry(mcc.to_owned())
            .or_insert_with(|| self.load_idds(mcc));
        entry.value().clone()
    }

    fn load_idds(&self, mcc: &str) -> Arc<[String]> {
        let idds = match self.source.idds_for_country(mcc) {
            Ok(idds) => idds,
            Err(err) => {
                error!("Can't access lookup source for MCC {}: {}", mcc, err);
                Vec::new()
            }
        };
        let mut unique: Vec<String> = Vec::with_capacity(idds.len());
        for idd in idds {
            // an empty prefix would match every number
            if !idd.is_empty() && !unique.contains(&idd) {
                unique.push(idd);
            }
        }
        debug!("MCC = {}, all IDDs = {:?}", mcc, unique);
        unique.into()
    }

    /// Returns the country calling code table, loading it on first use. An
    /// empty or failing source is not remembered and is asked again next
    /// time.
    pub fn country_codes(&self) -> Arc<CountryCodeTable> {
        if let Some(table) = self.country_codes.get() {
            return table.clone();
        }
        let _guard = self
            .country_codes_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(table) = self.country_codes.get() {
            return table.clone();
        }
        match self.source.all_country_codes() {
            Ok(codes) => {
                let table = Arc::new(CountryCodeTable::new(codes));
                if table.is_empty() {
                    warn!("Lookup source has no country calling codes");
                    return table;
                }
                debug!(
                    "Loaded {} country calling codes, max length {}",
                    table.codes().len(),
                    table.max_length()
                );
                self.country_codes.get_or_init(|| table).clone()
            }
            Err(err) => {
                error!("Can't access lookup source for country codes: {}", err);
                Arc::new(CountryCodeTable::default())
            }
        }
    }
}
