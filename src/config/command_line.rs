// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Grouping of command-line tokens into pipeline stages.
//!
//! A token starting with `@` opens a stage named by the rest of the token.
//! Following tokens, up to the next `@` token, are that stage's parameters.
//! Tokens before the first `@` token belong to no stage.

use crate::record::Array;

use super::consts::{DELIMITER, DISPLAY_NAME_CAPACITY};

/// One stage as written on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct StageSpec {
    pub name: String,
    /// Parameters in command-line order, as string values.
    pub parameters: Array,
}

/// The stage at index `k`, or `None` when fewer than `k + 1` stages exist.
pub fn stage_parameters<S: AsRef<str>>(tokens: &[S], k: usize) -> Option<StageSpec> {
    let mut openers = tokens
        .iter()
        .enumerate()
        .filter_map(|(pos, token)| {
            token
                .as_ref()
                .strip_prefix(DELIMITER)
                .map(|name| (pos, name))
        });
    let (start, name) = openers.nth(k)?;

    let parameters = tokens[start + 1..]
        .iter()
        .map(AsRef::as_ref)
        .take_while(|token| !token.starts_with(DELIMITER))
        .collect();

    Some(StageSpec {
        name: name.to_string(),
        parameters,
    })
}

/// Every stage on the command line, discovered index by index.
pub fn parse_stages<S: AsRef<str>>(tokens: &[S]) -> Vec<StageSpec> {
    (0..)
        .map_while(|k| stage_parameters(tokens, k))
        .collect()
}

/// Cut `name` to the display-name capacity without splitting a character.
pub fn truncate_display_name(name: &str) -> String {
    if name.len() <= DISPLAY_NAME_CAPACITY {
        return name.to_string();
    }
    let mut end = DISPLAY_NAME_CAPACITY;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    name[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_string).collect()
    }

    fn parameter_strings(spec: &StageSpec) -> Vec<&str> {
        spec.parameters
            .iter()
            .filter_map(|value| value.as_str())
            .collect()
    }

    #[test]
    fn test_groups_parameters_by_stage() {
        let line = tokens("@random 2 2 1 @json write stdout");
        let stages = parse_stages(&line);

        assert_eq!(stages.len(), 2);
        assert_eq!(stages[0].name, "random");
        assert_eq!(parameter_strings(&stages[0]), vec!["2", "2", "1"]);
        assert_eq!(stages[1].name, "json");
        assert_eq!(parameter_strings(&stages[1]), vec!["write", "stdout"]);
    }

    #[test]
    fn test_stage_without_parameters() {
        let line = tokens("@help @print");
        let first = stage_parameters(&line, 0).unwrap();
        assert_eq!(first.name, "help");
        assert!(first.parameters.is_empty());
        assert_eq!(stage_parameters(&line, 1).unwrap().name, "print");
        assert!(stage_parameters(&line, 2).is_none());
    }

    #[test]
    fn test_leading_tokens_belong_to_no_stage() {
        let line = tokens("stray words @json read stdin");
        let stages = parse_stages(&line);
        assert_eq!(stages.len(), 1);
        assert_eq!(parameter_strings(&stages[0]), vec!["read", "stdin"]);
    }

    #[test]
    fn test_no_stages() {
        let empty: Vec<String> = Vec::new();
        assert!(parse_stages(&empty).is_empty());
        assert!(parse_stages(&tokens("just parameters")).is_empty());
    }

    #[test]
    fn test_display_name_truncation() {
        assert_eq!(truncate_display_name("json"), "json");

        let long = "p".repeat(DISPLAY_NAME_CAPACITY + 10);
        assert_eq!(truncate_display_name(&long).len(), DISPLAY_NAME_CAPACITY);

        // Two-byte characters straddle the capacity boundary.
        let wide = "é".repeat(DISPLAY_NAME_CAPACITY);
        let cut = truncate_display_name(&wide);
        assert!(cut.len() <= DISPLAY_NAME_CAPACITY);
        assert_eq!(cut.chars().count(), DISPLAY_NAME_CAPACITY / 2);
    }
}
