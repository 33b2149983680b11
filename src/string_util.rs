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

/// Replaces the first `prefix_len` bytes of `number` with `replacement`.
///
/// Drains in place when nothing is inserted, otherwise builds the result with
/// a single allocation. Returns `number` untouched when `prefix_len` is not a
/// char boundary inside it.
pub fn replace_prefix(mut number: String, prefix_len: usize, replacement: &str) -> String {
    if !number.is_char_boundary(prefix_len) {
        return number;
    }
    if replacement.is_empty() {
        number.drain(..prefix_len);
        return number;
    }
    fast_cat::concat_str!(replacement, &number[prefix_len..])
}

/// Removes `prefix` from the start of `number` if it is there.
pub fn strip_owned_prefix(number: String, prefix: &str) -> String {
    if number.starts_with(prefix) {
        replace_prefix(number, prefix.len(), "")
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use crate::string_util::{replace_prefix, strip_owned_prefix};

    #[test]
    fn test_replace_prefix() {
        assert_eq!(replace_prefix("008613912345678".to_owned(), 2, "011"), "0118613912345678");
        assert_eq!(replace_prefix("+8613912345678".to_owned(), 1, ""), "8613912345678");
        assert_eq!(replace_prefix("8613912345678".to_owned(), 0, "011"), "0118613912345678");
        assert_eq!(replace_prefix("86".to_owned(), 5, "011"), "86");
    }

    #[test]
    fn test_strip_owned_prefix() {
        assert_eq!(strip_owned_prefix("+18005551234".to_owned(), "+"), "18005551234");
        assert_eq!(strip_owned_prefix("18005551234".to_owned(), "+"), "18005551234");
    }
}
