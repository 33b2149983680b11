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

/// The international prefix marker ("NBPCD").
pub const PLUS_SIGN: &str = "+";
pub const PLUS_CHAR: char = '+';

// Lengths of the NANP notations without any prefix marker:
// <NXX>-<XXXX>, <NXX>-<NXX>-<XXXX> and 1-<NXX>-<NXX>-<XXXX>.
pub const NANP_SHORT_LENGTH: usize = 7;
pub const NANP_MEDIUM_LENGTH: usize = 10;
pub const NANP_LONG_LENGTH: usize = 11;

pub const NANP_COUNTRY_CODE: u32 = 1;
/// National direct dial prefix of the NANP.
pub const NANP_NDD: &str = "1";
/// International direct dial prefix of the NANP, the "home" IDD of the
/// networks this crate formats numbers for.
pub const NANP_IDD: &str = "011";

/// Minimum length of `<Country_code><Area_code><Phone Number>` for which a
/// country calling code lookup is attempted.
pub const MIN_COUNTRY_AREA_LOCAL_LENGTH: usize = 10;

/// A `<Country_code><Area_code><Phone Number>` number shorter than this is
/// never prefixed with the home IDD.
pub const MIN_CC_AREA_LOCAL_LENGTH_FOR_HOME_IDD: usize = 11;

// Country calling codes whose 12 digit numbers are dialed without an IDD.
pub const DEFAULT_EXCEPTION_COUNTRY_CODES: [u32; 4] = [7, 20, 65, 90];
pub const DEFAULT_EXCEPTION_NUMBER_LENGTH: usize = 12;

/// The mobile country code is the first three characters of a network
/// operator numeric string (MCC + MNC).
pub const MCC_LENGTH: usize = 3;

/// Characters which start the post-dial part of a dialed string. Everything
/// after them is not sent to the network.
pub const POST_DIAL_SEPARATORS: [char; 2] = [',', ';'];

/// Punctuation people write between groups of digits. Together with
/// whitespace, the only characters dropped from a dialed string.
pub const VISUAL_SEPARATORS: [char; 8] = ['-', '.', '(', ')', '/', '[', ']', '~'];

/// A number that only contains digits, dots and dashes, optionally starting
/// with a plus sign.
pub const GLOBAL_PHONE_NUMBER_PATTERN: &str = r"^[\+]?[0-9.\-]+$";

/// Separator between the conversion flag and the GID1 in carrier config entries.
pub const CONVERSION_CONFIG_SEPARATOR: char = ';';

// ISO country codes of the two regions that share NANP service and are not
// considered international roaming for each other.
pub const ISO_COUNTRY_US: &str = "us";
pub const ISO_COUNTRY_VI: &str = "vi";
