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

use std::sync::LazyLock;

use regex::Regex;

use super::helper_constants::{
    GLOBAL_PHONE_NUMBER_PATTERN, NANP_LONG_LENGTH, NANP_MEDIUM_LENGTH, NANP_NDD,
    NANP_SHORT_LENGTH,
};

static GLOBAL_PHONE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(GLOBAL_PHONE_NUMBER_PATTERN).expect("Invalid constant pattern!"));

pub fn is_iso_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// First digit of a NANP area code or exchange code (`N` in `NXX`).
fn is_two_to_nine(c: u8) -> bool {
    matches!(c, b'2'..=b'9')
}

/// `<NXX>-<XXXX>`: seven digits, the first one in `2..=9`.
pub fn is_nanp_local(number: &str) -> bool {
    let bytes = number.as_bytes();
    bytes.len() == NANP_SHORT_LENGTH
        && is_two_to_nine(bytes[0])
        && bytes[1..].iter().all(u8::is_ascii_digit)
}

fn is_ten_digit_nanp(number: &str) -> bool {
    let bytes = number.as_bytes();
    bytes.len() == NANP_MEDIUM_LENGTH
        && is_two_to_nine(bytes[0])
        && bytes.iter().all(u8::is_ascii_digit)
}

/// Returns true for ten NANP digits, or for eleven when the first one is the
/// NANP national direct dial prefix `1`.
pub fn is_nanp(number: &str) -> bool {
    match number.len() {
        NANP_MEDIUM_LENGTH => is_ten_digit_nanp(number),
        NANP_LONG_LENGTH => number
            .strip_prefix(NANP_NDD)
            .is_some_and(is_ten_digit_nanp),
        _ => false,
    }
}

/// Whether `number` looks like a phone number that may be sent to the
/// network: digits, dots and dashes with an optional leading `+`.
pub fn is_global_phone_number(number: &str) -> bool {
    GLOBAL_PHONE_NUMBER.is_match(number)
}
