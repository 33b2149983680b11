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
    NetworkType, NumberPlanForm,
    exceptions::CcAreaLocalExceptions,
    helper_constants::{
        MIN_CC_AREA_LOCAL_LENGTH_FOR_HOME_IDD, NANP_COUNTRY_CODE, NANP_IDD, PLUS_SIGN,
    },
    helper_types::NumberEntry,
};
use crate::string_util::{replace_prefix, strip_owned_prefix};

/// How a classified number is rewritten before it is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rewrite {
    /// The number is sent as dialed.
    NoRewrite,
    /// `+...` -> `...`
    DropPlus,
    /// `+...` -> `011...`
    ReplacePlusWithHomeIdd,
    /// `<Local_IDD>...` -> `+...`
    LocalIddToPlus { idd_len: usize },
    /// `<Local_IDD>...` -> `...`
    DropLocalIdd { idd_len: usize },
    /// `<Local_IDD>...` -> `011...`
    LocalIddToHomeIdd { idd_len: usize },
    /// `...` -> `011...`
    PrependHomeIdd,
}

impl Rewrite {
    /// Picks the rewrite of a number of the given form for `network_type`.
    ///
    /// `entry` must be the entry the form was classified from: local IDD
    /// rewrites use the length of `entry.idd`, `CcAreaLocal` uses the
    /// resolved country code.
    pub fn for_form(
        form: NumberPlanForm,
        entry: &NumberEntry<'_>,
        network_type: NetworkType,
        exceptions: &CcAreaLocalExceptions,
    ) -> Self {
        use NetworkType::{CdmaHome, CdmaRoaming, GsmUmts};

        match form {
            NumberPlanForm::NanpLocal
            | NumberPlanForm::NanpAreaLocal
            | NumberPlanForm::NanpNddAreaLocal => Rewrite::NoRewrite,
            NumberPlanForm::NanpNbpcdCcAreaLocal => match network_type {
                CdmaHome | CdmaRoaming => Rewrite::DropPlus,
                GsmUmts => Rewrite::NoRewrite,
            },
            // CDMA networks send this form through the international phase
            // first, see `NumberPlanForm::needs_international_phase`.
            NumberPlanForm::NanpNbpcdHomeIddCcAreaLocal => match network_type {
                GsmUmts => Rewrite::DropPlus,
                CdmaHome | CdmaRoaming => Rewrite::NoRewrite,
            },
            NumberPlanForm::NanpLocalIddCcAreaLocal => {
                let idd_len = entry.idd_len();
                match network_type {
                    CdmaHome => Rewrite::NoRewrite,
                    GsmUmts => Rewrite::LocalIddToPlus { idd_len },
                    CdmaRoaming => Rewrite::DropLocalIdd { idd_len },
                }
            }
            NumberPlanForm::NbpcdHomeIddCcAreaLocal => match network_type {
                GsmUmts => Rewrite::DropPlus,
                CdmaHome | CdmaRoaming => Rewrite::NoRewrite,
            },
            NumberPlanForm::NbpcdCcAreaLocal => Rewrite::ReplacePlusWithHomeIdd,
            NumberPlanForm::LocalIddCcAreaLocal => match network_type {
                GsmUmts | CdmaRoaming => Rewrite::LocalIddToHomeIdd { idd_len: entry.idd_len() },
                CdmaHome => Rewrite::NoRewrite,
            },
            NumberPlanForm::CcAreaLocal => {
                if !exceptions.contains(entry)
                    && entry.number.len() >= MIN_CC_AREA_LOCAL_LENGTH_FOR_HOME_IDD
                    && entry.country_code != Some(NANP_COUNTRY_CODE)
                {
                    Rewrite::PrependHomeIdd
                } else {
                    Rewrite::NoRewrite
                }
            }
            NumberPlanForm::HomeIddCcAreaLocal => Rewrite::NoRewrite,
            // The country code is not in the lookup tables. CDMA networks still
            // need the home IDD instead of the plus sign.
            NumberPlanForm::None => {
                match entry.number.strip_prefix(PLUS_SIGN) {
                    Some(rest) if network_type.is_cdma() => {
                        if rest.starts_with(NANP_IDD) {
                            Rewrite::DropPlus
                        } else {
                            Rewrite::ReplacePlusWithHomeIdd
                        }
                    }
                    _ => Rewrite::NoRewrite,
                }
            }
        }
    }

    /// Applies the rewrite to the network portion it was chosen for.
    pub fn apply(self, number: String) -> String {
        match self {
            Rewrite::NoRewrite => number,
            Rewrite::DropPlus => strip_owned_prefix(number, PLUS_SIGN),
            Rewrite::ReplacePlusWithHomeIdd => {
                if number.starts_with(PLUS_SIGN) {
                    replace_prefix(number, PLUS_SIGN.len(), NANP_IDD)
                } else {
                    number
                }
            }
            Rewrite::LocalIddToPlus { idd_len } => replace_prefix(number, idd_len, PLUS_SIGN),
            Rewrite::DropLocalIdd { idd_len } => replace_prefix(number, idd_len, ""),
            Rewrite::LocalIddToHomeIdd { idd_len } => replace_prefix(number, idd_len, NANP_IDD),
            Rewrite::PrependHomeIdd => replace_prefix(number, 0, NANP_IDD),
        }
    }
}
