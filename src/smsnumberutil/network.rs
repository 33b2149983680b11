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

use log::warn;

use super::{
    NetworkType, PhoneType,
    helper_constants::{ISO_COUNTRY_US, ISO_COUNTRY_VI, MCC_LENGTH},
};

/// Telephony state of the device at the time a message is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceState {
    /// Numeric name of the registered operator (MCC + MNC), e.g. `"310260"`.
    pub network_operator: String,
    pub phone_type: PhoneType,
    /// ISO 3166-1 country code of the registered network, lower case.
    pub operator_iso_country: String,
    /// ISO 3166-1 country code of the SIM provider, lower case.
    pub sim_iso_country: String,
    /// Group identifier level 1 of the SIM.
    pub gid1: Option<String>,
}

impl DeviceState {
    /// Mobile country code of the registered network.
    pub fn network_mcc(&self) -> Option<&str> {
        self.network_operator
            .get(..MCC_LENGTH)
            .filter(|mcc| !mcc.trim().is_empty())
    }

    pub fn is_international_roaming(&self) -> bool {
        is_international_roaming(&self.operator_iso_country, &self.sim_iso_country)
    }

    pub fn network_type(&self) -> Option<NetworkType> {
        NetworkType::detect(self.phone_type, &self.operator_iso_country, &self.sim_iso_country)
    }
}

/// The device is roaming internationally when the network and SIM countries
/// are known and differ. The US and the US Virgin Islands are treated as one
/// country.
pub fn is_international_roaming(operator_iso_country: &str, sim_iso_country: &str) -> bool {
    if operator_iso_country.is_empty()
        || sim_iso_country.is_empty()
        || sim_iso_country == operator_iso_country
    {
        return false;
    }
    match sim_iso_country {
        ISO_COUNTRY_US => operator_iso_country != ISO_COUNTRY_VI,
        ISO_COUNTRY_VI => operator_iso_country != ISO_COUNTRY_US,
        _ => true,
    }
}

impl NetworkType {
    /// Network type for the phone type and roaming state, `None` for phones
    /// that are neither GSM nor CDMA.
    pub fn detect(
        phone_type: PhoneType,
        operator_iso_country: &str,
        sim_iso_country: &str,
    ) -> Option<Self> {
        match phone_type {
            PhoneType::Gsm => Some(NetworkType::GsmUmts),
            PhoneType::Cdma => {
                if is_international_roaming(operator_iso_country, sim_iso_country) {
                    Some(NetworkType::CdmaRoaming)
                } else {
                    Some(NetworkType::CdmaHome)
                }
            }
            PhoneType::Other => {
                warn!("warning! unknown phone type {:?}", phone_type);
                None
            }
        }
    }
}
