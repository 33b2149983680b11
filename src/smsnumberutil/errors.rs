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

use thiserror::Error;

/// Reasons a destination number is refused before classification. The caller
/// is expected to send the original number unmodified.
#[derive(Debug, PartialEq, Error)]
pub enum FormatError {
    #[error("Number is empty")]
    EmptyNumber,
    #[error("Active mcc is empty")]
    EmptyMcc,
    #[error("Number is invalid: {0}")]
    InvalidNumber(#[from] ExtractNumberError),
}

#[derive(Debug, PartialEq, Error)]
pub enum ExtractNumberError {
    #[error("No dialable digits found")]
    NoDigits,
    #[error("Unexpected character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
}

/// Failure of a lookup source. Classification treats the affected table as
/// empty.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    #[error("Lookup database is unavailable: {0}")]
    Unavailable(String),
}
