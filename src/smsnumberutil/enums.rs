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

use strum::{EnumIter, IntoStaticStr};

/// Numbering plan notation a destination number is written in.
///
/// Variants prefixed with `Nanp` are recognized by the North American
/// Numbering Plan phase of classification; the others are recognized by the
/// international phase, after a country calling code has been resolved.
/// The names used in logs follow the `NP_*` naming of the carrier
/// requirements, e.g. `NP_NANP_NBPCD_CC_AREA_LOCAL`.
#[derive(Debug, EnumIter, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberPlanForm {
    /// No notation matched.
    #[strum(serialize = "NP_NONE")]
    None,
    /// `<NXX>-<XXXX>`, e.g. `5551234`.
    #[strum(serialize = "NP_NANP_LOCAL")]
    NanpLocal,
    /// `<Area_code>-<Phone Number>`, e.g. `8005551234`.
    #[strum(serialize = "NP_NANP_AREA_LOCAL")]
    NanpAreaLocal,
    /// `1-<Area_code>-<Phone Number>`, e.g. `18005551234`.
    #[strum(serialize = "NP_NANP_NDD_AREA_LOCAL")]
    NanpNddAreaLocal,
    /// `+1-<Area_code>-<Phone Number>`, e.g. `+18005551234`.
    #[strum(serialize = "NP_NANP_NBPCD_CC_AREA_LOCAL")]
    NanpNbpcdCcAreaLocal,
    /// `<Local_IDD>-1-<Area_code>-<Phone Number>`, e.g. `0018005551234`.
    #[strum(serialize = "NP_NANP_LOCALIDD_CC_AREA_LOCAL")]
    NanpLocalIddCcAreaLocal,
    /// `+011-1-<Area_code>-<Phone Number>`, e.g. `+01118005551234`.
    #[strum(serialize = "NP_NANP_NBPCD_HOMEIDD_CC_AREA_LOCAL")]
    NanpNbpcdHomeIddCcAreaLocal,
    /// `+011-<Country_code>-<Area_code>-<Phone Number>`, e.g. `+0118625086281234`.
    #[strum(serialize = "NP_NBPCD_HOMEIDD_CC_AREA_LOCAL")]
    NbpcdHomeIddCcAreaLocal,
    /// `011-<Country_code>-<Area_code>-<Phone Number>`, e.g. `0118625086281234`.
    #[strum(serialize = "NP_HOMEIDD_CC_AREA_LOCAL")]
    HomeIddCcAreaLocal,
    /// `+<Country_code>-<Area_code>-<Phone Number>`, e.g. `+8625086281234`.
    #[strum(serialize = "NP_NBPCD_CC_AREA_LOCAL")]
    NbpcdCcAreaLocal,
    /// `<Local_IDD>-<Country_code>-<Area_code>-<Phone Number>`, e.g. `008625086281234`.
    #[strum(serialize = "NP_LOCALIDD_CC_AREA_LOCAL")]
    LocalIddCcAreaLocal,
    /// `<Country_code>-<Area_code>-<Phone Number>`, e.g. `8625086281234`.
    #[strum(serialize = "NP_CC_AREA_LOCAL")]
    CcAreaLocal,
}

impl NumberPlanForm {
    /// Returns the `NP_*` name of the form.
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn is_nanp(self) -> bool {
        matches!(
            self,
            NumberPlanForm::NanpLocal
                | NumberPlanForm::NanpAreaLocal
                | NumberPlanForm::NanpNddAreaLocal
                | NumberPlanForm::NanpNbpcdCcAreaLocal
                | NumberPlanForm::NanpLocalIddCcAreaLocal
                | NumberPlanForm::NanpNbpcdHomeIddCcAreaLocal
        )
    }

    /// Whether a result of the NANP phase still has to go through the
    /// international phase before it can be rewritten for `network_type`.
    ///
    /// `+011-1-...` has a NANP rewrite on GSM/UMTS only; on CDMA networks the
    /// international phase decides.
    pub fn needs_international_phase(self, network_type: NetworkType) -> bool {
        match self {
            NumberPlanForm::None => true,
            NumberPlanForm::NanpNbpcdHomeIddCcAreaLocal => network_type.is_cdma(),
            _ => false,
        }
    }
}

/// Kind of network an outgoing message is sent over.
#[derive(Debug, EnumIter, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkType {
    /// **GSM/UMTS network.**
    /// Accepts numbers in `+<Country_code>...` notation.
    #[strum(serialize = "GSM_UMTS")]
    GsmUmts,
    /// **CDMA network in the home country.**
    #[strum(serialize = "CDMA_HOME")]
    CdmaHome,
    /// **CDMA network while roaming internationally.**
    #[strum(serialize = "CDMA_ROAMING")]
    CdmaRoaming,
}

impl NetworkType {
    pub fn is_cdma(self) -> bool {
        matches!(self, NetworkType::CdmaHome | NetworkType::CdmaRoaming)
    }
}

/// Radio technology of the device, as reported by the telephony stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneType {
    Gsm,
    Cdma,
    /// SIP or no phone at all. Numbers are never converted for these.
    Other,
}
