// ABOUTME: Ingredient name normalization for case- and whitespace-insensitive comparison
// ABOUTME: Produces comparison keys only; display always keeps the raw text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MixMaster Contributors

/// Comparison key of an ingredient name: trimmed, then lower-cased
#[must_use]
pub fn normalize_ingredient(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_then_lowercases() {
        assert_eq!(normalize_ingredient("  Light Rum\t"), "light rum");
        assert_eq!(normalize_ingredient("GIN"), "gin");
    }

    #[test]
    fn test_empty_and_blank_normalize_to_empty() {
        assert_eq!(normalize_ingredient(""), "");
        assert_eq!(normalize_ingredient("   "), "");
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        assert_eq!(normalize_ingredient("Tonic  Water"), "tonic  water");
    }
}
