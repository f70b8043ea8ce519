//! Fuzzy contact-name matching using strsim.
//!
//! CHANGELOG:
//! - 10/10/2026 - Reduced to the strategies name resolution needs

use strsim::{jaro_winkler, normalized_levenshtein};

/// Minimum score for a name to count as a match (0.0 - 1.0).
pub const DEFAULT_THRESHOLD: f64 = 0.85;

/// Best similarity between `query` and `name` across strategies.
///
/// Case-insensitive. Word order is ignored by the token-sorted comparison.
pub fn name_score(query: &str, name: &str) -> f64 {
    let query = query.to_lowercase();
    let name = name.to_lowercase();

    [
        jaro_winkler(&query, &name),
        normalized_levenshtein(&query, &name),
        jaro_winkler(&sorted_tokens(&query), &sorted_tokens(&name)),
    ]
    .into_iter()
    .fold(0.0, f64::max)
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(name_score("Ada Lovelace", "Ada Lovelace") > 0.99);
    }

    #[test]
    fn test_case_insensitive() {
        assert!(name_score("ada lovelace", "Ada Lovelace") > 0.99);
    }

    #[test]
    fn test_word_order() {
        let score = name_score("Lovelace Ada", "Ada Lovelace");
        assert!(score > 0.99, "Score was {}", score);
    }

    #[test]
    fn test_unrelated_names_below_threshold() {
        let score = name_score("Grace", "Bob Smith");
        assert!(score < DEFAULT_THRESHOLD, "Score was {}", score);
    }
}
