//! Classifier Service - Pure business logic without HTTP layer
//!
//! Splits a list of tokens into odd/even numbers, alphabetic words and
//! everything else, sums the numbers and derives the alternating-caps string
//! from the collected letters. Handlers in `api::bfhl` call this after the
//! request body has been validated.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::ClassifyError;

/// Output of a single classification run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ClassificationResult {
    pub odd_numbers: Vec<String>,
    pub even_numbers: Vec<String>,
    pub alphabets: Vec<String>,
    pub special_characters: Vec<String>,
    pub sum: String,
    pub concat_string: String,
}

impl ClassificationResult {
    /// True when every one of `input_len` tokens landed in exactly one bucket
    pub fn is_partition_of(&self, input_len: usize) -> bool {
        self.odd_numbers.len()
            + self.even_numbers.len()
            + self.alphabets.len()
            + self.special_characters.len()
            == input_len
    }
}

/// Parse a token as an integer if it is `-?[0-9]+` and fits in an `i64`
pub fn parse_numeric(token: &str) -> Option<i64> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse::<i64>().ok()
}

pub fn is_numeric(token: &str) -> bool {
    parse_numeric(token).is_some()
}

pub fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_alphabetic())
}

/// Reverse the letters, then upper-case even positions and lower-case odd ones
pub fn alternating_caps(chars: &[char]) -> String {
    chars
        .iter()
        .rev()
        .enumerate()
        .map(|(i, c)| {
            if i % 2 == 0 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

/// Classify every token in input order
pub fn classify(items: &[String]) -> Result<ClassificationResult, ClassifyError> {
    let mut result = ClassificationResult::default();
    let mut letters: Vec<char> = Vec::new();
    let mut total: i128 = 0;

    for item in items {
        if let Some(n) = parse_numeric(item) {
            total = total
                .checked_add(i128::from(n))
                .ok_or(ClassifyError::SumOverflow)?;
            if n % 2 == 0 {
                result.even_numbers.push(item.clone());
            } else {
                result.odd_numbers.push(item.clone());
            }
        } else if is_alphabetic(item) {
            result.alphabets.push(item.to_ascii_uppercase());
            letters.extend(item.chars());
        } else {
            result.special_characters.push(item.clone());
        }
    }

    result.sum = total.to_string();
    result.concat_string = alternating_caps(&letters);

    tracing::debug!(
        "Classified {} tokens: odd={}, even={}, alpha={}, special={}",
        items.len(),
        result.odd_numbers.len(),
        result.even_numbers.len(),
        result.alphabets.len(),
        result.special_characters.len()
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_example_a() {
        let result = classify(&tokens(&["a", "1", "334", "4", "R", "$"])).unwrap();
        assert_eq!(result.odd_numbers, vec!["1"]);
        assert_eq!(result.even_numbers, vec!["334", "4"]);
        assert_eq!(result.alphabets, vec!["A", "R"]);
        assert_eq!(result.special_characters, vec!["$"]);
        assert_eq!(result.sum, "339");
        assert_eq!(result.concat_string, "Ra");
    }

    #[test]
    fn test_example_b() {
        let input = tokens(&["2", "a", "y", "4", "&", "-", "*", "5", "92", "b"]);
        let result = classify(&input).unwrap();
        assert_eq!(result.odd_numbers, vec!["5"]);
        assert_eq!(result.even_numbers, vec!["2", "4", "92"]);
        assert_eq!(result.alphabets, vec!["A", "Y", "B"]);
        assert_eq!(result.special_characters, vec!["&", "-", "*"]);
        assert_eq!(result.sum, "103");
        assert_eq!(result.concat_string, "ByA");
        assert!(result.is_partition_of(input.len()));
    }

    #[test]
    fn test_example_c_multi_letter_words() {
        let result = classify(&tokens(&["A", "ABcD", "DOE"])).unwrap();
        assert!(result.odd_numbers.is_empty());
        assert!(result.even_numbers.is_empty());
        assert_eq!(result.alphabets, vec!["A", "ABCD", "DOE"]);
        assert!(result.special_characters.is_empty());
        assert_eq!(result.sum, "0");
        assert_eq!(result.concat_string, "EoDdCbAa");
    }

    #[test]
    fn test_negative_parity_and_sum() {
        let result = classify(&tokens(&["-5", "-2", "3", "0"])).unwrap();
        assert_eq!(result.odd_numbers, vec!["-5", "3"]);
        assert_eq!(result.even_numbers, vec!["-2", "0"]);
        assert_eq!(result.sum, "-4");
        assert_eq!(result.concat_string, "");
    }

    #[test]
    fn test_numeric_pattern_edges() {
        assert!(is_numeric("05"));
        assert!(is_numeric("-0"));
        assert!(is_numeric("9223372036854775807"));
        assert!(!is_numeric("9223372036854775808"));
        assert!(!is_numeric("+5"));
        assert!(!is_numeric("5.0"));
        assert!(!is_numeric("-"));
        assert!(!is_numeric("--1"));
        assert!(!is_numeric(""));
        assert!(!is_numeric("12a"));
        assert!(!is_numeric(" 1"));
        assert!(!is_numeric("١٢"));
    }

    #[test]
    fn test_leading_zero_keeps_original_token() {
        let result = classify(&tokens(&["007", "-010"])).unwrap();
        assert_eq!(result.odd_numbers, vec!["007"]);
        assert_eq!(result.even_numbers, vec!["-010"]);
        assert_eq!(result.sum, "-3");
    }

    #[test]
    fn test_alphabetic_is_ascii_only() {
        assert!(is_alphabetic("abcXYZ"));
        assert!(!is_alphabetic(""));
        assert!(!is_alphabetic("ab1"));
        assert!(!is_alphabetic("héllo"));
        assert!(!is_alphabetic("a b"));

        let result = classify(&tokens(&["héllo", "a1", " "])).unwrap();
        assert_eq!(result.special_characters, vec!["héllo", "a1", " "]);
        assert!(result.alphabets.is_empty());
    }

    #[test]
    fn test_overflowing_digits_are_special() {
        let result = classify(&tokens(&["99999999999999999999", "1"])).unwrap();
        assert_eq!(result.special_characters, vec!["99999999999999999999"]);
        assert_eq!(result.sum, "1");
    }

    #[test]
    fn test_sum_beyond_i64_uses_wide_accumulator() {
        let max = i64::MAX.to_string();
        let result = classify(&[max.clone(), max]).unwrap();
        assert_eq!(result.sum, (i128::from(i64::MAX) * 2).to_string());
    }

    #[test]
    fn test_alternating_caps_does_not_touch_input() {
        let letters = vec!['a', 'y', 'b'];
        assert_eq!(alternating_caps(&letters), "ByA");
        assert_eq!(letters, vec!['a', 'y', 'b']);
        assert_eq!(alternating_caps(&[]), "");
    }

    #[test]
    fn test_classify_is_deterministic() {
        let input = tokens(&["x", "Q", "12", "#", "zz"]);
        assert_eq!(classify(&input).unwrap(), classify(&input).unwrap());
    }
}
