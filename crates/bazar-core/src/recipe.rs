//! Recipe Ingredient Extraction
//!
//! Heuristic text splitter that pulls candidate ingredient names out of a
//! pasted recipe. No grammar, no scoring: the output is whatever survives
//! the fixed rule sequence below.

use std::collections::HashSet;

/// Section headers, in priority order. The first one present wins.
pub const SECTION_MARKERS: &[&str] = &[
    "উপকরণ:",
    "ingredients:",
    "সামগ্রী:",
    "লাগবে:",
    "needed:",
    "required:",
];

/// Fragments containing any of these are instructions, not ingredients
pub const NON_INGREDIENT_MARKERS: &[&str] = &["method", "preparation", "প্রণালী", "পদ্ধতি"];

pub const MAX_CANDIDATES: usize = 20;

fn is_delimiter(c: char) -> bool {
    matches!(c, ',' | '\n' | '।' | '-')
}

/// Extract candidate ingredient names from free text
pub fn extract_ingredients(text: &str) -> Vec<String> {
    let section = ingredients_section(text);

    let candidates: Vec<&str> = section
        .split(is_delimiter)
        .map(str::trim)
        .filter(|fragment| fragment.chars().count() > 1)
        .filter(|fragment| !fragment.chars().all(|c| c.is_ascii_digit()))
        .filter(|fragment| !is_instruction(fragment))
        .take(MAX_CANDIDATES)
        .collect();

    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|fragment| seen.insert(*fragment))
        .map(str::to_string)
        .collect()
}

/// Text after the first section header, or the whole text if none
fn ingredients_section(text: &str) -> &str {
    SECTION_MARKERS
        .iter()
        .find_map(|marker| find_ignore_case(text, marker))
        .map(|end| &text[end..])
        .unwrap_or(text)
}

fn is_instruction(fragment: &str) -> bool {
    let lower = fragment.to_lowercase();
    NON_INGREDIENT_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Byte offset just past the first case-insensitive match of `needle`
fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    let needle: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return None;
    }
    haystack
        .char_indices()
        .find_map(|(start, _)| match_len(&haystack[start..], &needle).map(|len| start + len))
}

/// Length in bytes of the prefix of `rest` matching `needle`, if it does
fn match_len(rest: &str, needle: &[char]) -> Option<usize> {
    let mut expected = needle.iter();
    let mut remaining = needle.len();
    for (offset, c) in rest.char_indices() {
        for lower in c.to_lowercase() {
            match expected.next() {
                Some(&e) if e == lower => remaining -= 1,
                _ => return None,
            }
        }
        if remaining == 0 {
            return Some(offset + c.len_utf8());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_recipe() {
        let got = extract_ingredients("Ingredients: rice, 2, sugar\nMethod: boil");
        assert_eq!(got, vec!["rice", "sugar"]);
    }

    #[test]
    fn test_bengali_recipe() {
        let got = extract_ingredients("উপকরণ: চাল, চিনি।প্রণালী: রান্না করুন");
        assert_eq!(got, vec!["চাল", "চিনি"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_ingredients("").is_empty());
    }

    #[test]
    fn test_caps_at_twenty() {
        let text: Vec<String> = (0..25).map(|i| format!("item{}", i)).collect();
        let got = extract_ingredients(&text.join(", "));
        assert_eq!(got.len(), MAX_CANDIDATES);
        assert_eq!(got[0], "item0");
        assert_eq!(got[19], "item19");
    }

    #[test]
    fn test_no_marker_uses_whole_text() {
        let got = extract_ingredients("onion\ngarlic - ginger");
        assert_eq!(got, vec!["onion", "garlic", "ginger"]);
    }

    #[test]
    fn test_marker_is_case_insensitive_and_keeps_casing() {
        let got = extract_ingredients("Mom's dal\nINGREDIENTS: Masoor Dal, Turmeric");
        assert_eq!(got, vec!["Masoor Dal", "Turmeric"]);
    }

    #[test]
    fn test_dedup_after_truncation() {
        let got = extract_ingredients("salt, salt, Salt, oil");
        assert_eq!(got, vec!["salt", "Salt", "oil"]);
    }

    #[test]
    fn test_drops_short_and_numeric_fragments() {
        let got = extract_ingredients("a, 250, 1.5 kg flour, x");
        assert_eq!(got, vec!["1.5 kg flour"]);
    }

    #[test]
    fn test_marker_priority_follows_list_order() {
        // "ingredients:" outranks "needed:" even though it appears later
        let got = extract_ingredients("needed: pan\ningredients: egg");
        assert_eq!(got, vec!["egg"]);
    }

    #[test]
    fn test_find_ignore_case_offsets() {
        assert_eq!(find_ignore_case("ab NEEDED: x", "needed:"), Some(10));
        assert_eq!(find_ignore_case("চাল উপকরণ:", "উপকরণ:"), Some("চাল উপকরণ:".len()));
        assert_eq!(find_ignore_case("nothing", "needed:"), None);
    }
}
