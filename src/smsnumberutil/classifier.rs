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
    NumberPlanForm,
    country_code_resolver::CountryCodeResolver,
    helper_constants::{
        NANP_IDD, NANP_LONG_LENGTH, NANP_MEDIUM_LENGTH, NANP_NDD, NANP_SHORT_LENGTH, PLUS_SIGN,
    },
    helper_functions::{is_nanp, is_nanp_local},
    helper_types::NumberEntry,
};

/// Checks whether the number is written in one of the NANP notations.
///
/// The checks are exclusive: a number of 7, 10 or 11 characters is only
/// tested against the notation of that length. When the number starts with
/// one of `idds` followed by a NANP number, the matching prefix is stored in
/// `entry.idd`; the first matching prefix in `idds` order wins.
pub fn classify_nanp<'a>(entry: &mut NumberEntry<'a>, idds: &'a [String]) -> NumberPlanForm {
    let number = entry.number;
    match number.len() {
        NANP_SHORT_LENGTH => {
            if is_nanp_local(number) {
                return NumberPlanForm::NanpLocal;
            }
        }
        NANP_MEDIUM_LENGTH => {
            if is_nanp(number) {
                return NumberPlanForm::NanpAreaLocal;
            }
        }
        NANP_LONG_LENGTH => {
            if is_nanp(number) {
                return NumberPlanForm::NanpNddAreaLocal;
            }
        }
        _ => {
            if let Some(number) = number.strip_prefix(PLUS_SIGN) {
                if number.len() == NANP_LONG_LENGTH {
                    if is_nanp(number) {
                        return NumberPlanForm::NanpNbpcdCcAreaLocal;
                    }
                } else if number.len() == NANP_LONG_LENGTH + NANP_IDD.len() {
                    if number.strip_prefix(NANP_IDD).is_some_and(is_nanp) {
                        return NumberPlanForm::NanpNbpcdHomeIddCcAreaLocal;
                    }
                }
            } else {
                for idd in idds {
                    let Some(rest) = number.strip_prefix(idd.as_str()) else {
                        continue;
                    };
                    if rest.starts_with(NANP_NDD) && is_nanp(rest) {
                        entry.idd = Some(idd.as_str());
                        return NumberPlanForm::NanpLocalIddCcAreaLocal;
                    }
                }
            }
        }
    }
    NumberPlanForm::None
}

/// Checks whether the number is written in one of the international
/// notations, i.e. whether a country calling code can be resolved after the
/// prefix of the notation. The resolved code is stored in
/// `entry.country_code`, a matching local IDD in `entry.idd`.
pub fn classify_international<'a>(
    entry: &mut NumberEntry<'a>,
    idds: &'a [String],
    home_idd: &str,
    resolver: &CountryCodeResolver<'_>,
) -> NumberPlanForm {
    let number = entry.number;

    if let Some(number_no_nbpcd) = number.strip_prefix(PLUS_SIGN) {
        // +xxxxxxxxxx
        if let Some(country_area_local) = number_no_nbpcd.strip_prefix(home_idd) {
            // +011xxxxxxxx
            if let Some(country_code) = resolver.resolve(country_area_local) {
                entry.country_code = Some(country_code);
                return NumberPlanForm::NbpcdHomeIddCcAreaLocal;
            }
        } else if let Some(country_code) = resolver.resolve(number_no_nbpcd) {
            entry.country_code = Some(country_code);
            return NumberPlanForm::NbpcdCcAreaLocal;
        }
    } else if let Some(country_area_local) = number.strip_prefix(home_idd) {
        // 011xxxxxxxxx
        if let Some(country_code) = resolver.resolve(country_area_local) {
            entry.country_code = Some(country_code);
            return NumberPlanForm::HomeIddCcAreaLocal;
        }
    } else {
        for idd in idds {
            let Some(number_no_idd) = number.strip_prefix(idd.as_str()) else {
                continue;
            };
            if let Some(country_code) = resolver.resolve(number_no_idd) {
                entry.country_code = Some(country_code);
                entry.idd = Some(idd.as_str());
                return NumberPlanForm::LocalIddCcAreaLocal;
            }
        }

        if !number.starts_with('0') {
            if let Some(country_code) = resolver.resolve(number) {
                entry.country_code = Some(country_code);
                return NumberPlanForm::CcAreaLocal;
            }
        }
    }
    NumberPlanForm::None
}
