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

use log::debug;

use super::helper_constants::CONVERSION_CONFIG_SEPARATOR;

/// One entry of the carrier's destination number conversion setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionRule {
    /// `"<bool>"`: applies to every SIM unless a GID1 rule matches.
    Default(bool),
    /// `"<bool>;<gid1>"`: applies to SIMs whose GID1 starts with `gid1`,
    /// compared case-insensitively.
    ForGid1 { enabled: bool, gid1: String },
}

/// Carrier setting that decides whether destination numbers are converted
/// at all.
///
/// Rules are evaluated in order. A default rule sets the decision and
/// evaluation continues; the first matching GID1 rule sets it and stops.
/// Without any applicable rule conversion is disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionConfig {
    rules: Vec<ConversionRule>,
}

impl ConversionConfig {
    /// Parses configuration entries such as `"true"` or `"true;BAE0000000000000"`.
    /// Empty entries, entries with more than two fields and GID1 rules with
    /// an empty GID1 are ignored.
    pub fn from_entries<I, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let rules = entries
            .into_iter()
            .filter_map(|entry| Self::parse_entry(entry.as_ref()))
            .collect();
        Self { rules }
    }

    fn parse_entry(entry: &str) -> Option<ConversionRule> {
        if entry.is_empty() {
            return None;
        }
        let fields: Vec<&str> = entry.split(CONVERSION_CONFIG_SEPARATOR).collect();
        match fields.as_slice() {
            [enabled] => Some(ConversionRule::Default(enabled.eq_ignore_ascii_case("true"))),
            [enabled, gid1] if !gid1.is_empty() => Some(ConversionRule::ForGid1 {
                enabled: enabled.eq_ignore_ascii_case("true"),
                gid1: (*gid1).to_owned(),
            }),
            _ => None,
        }
    }

    /// Conversion enabled for everyone.
    pub fn enabled() -> Self {
        Self { rules: vec![ConversionRule::Default(true)] }
    }

    pub fn rules(&self) -> &[ConversionRule] {
        &self.rules
    }

    /// Decides whether numbers are converted for a SIM with the given GID1.
    pub fn need_to_convert(&self, sim_gid1: Option<&str>) -> bool {
        let mut need_to_convert = false;
        for rule in &self.rules {
            match rule {
                ConversionRule::Default(enabled) => need_to_convert = *enabled,
                ConversionRule::ForGid1 { enabled, gid1 } => {
                    if gid1_matches(sim_gid1, gid1) {
                        need_to_convert = *enabled;
                        break;
                    }
                }
            }
        }
        need_to_convert
    }
}

/// Whether the SIM's GID1 starts with the service GID1, ignoring ASCII case.
/// An empty service GID1 matches every SIM.
pub fn gid1_matches(sim_gid1: Option<&str>, service_gid1: &str) -> bool {
    if service_gid1.is_empty() {
        return true;
    }
    let matches = sim_gid1
        .and_then(|gid1| gid1.get(..service_gid1.len()))
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(service_gid1));
    if !matches {
        debug!("gid1 {:?} serviceGid1 {}", sim_gid1, service_gid1);
    }
    matches
}
