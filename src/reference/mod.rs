// Reference data module - compiled-in province table
// Source: ISO 3166-2:CN
//
// Used two ways:
// - CSV import keeps only locationDesc tokens that are known province codes
// - The province selector lists every province, ordered by localized name

pub mod provinces;

use std::collections::HashMap;
use std::sync::OnceLock;
use provinces::{Province, PROVINCES};

/// Lazily-initialized HashMap for O(1) province lookup by code
static PROVINCE_MAP: OnceLock<HashMap<&'static str, &'static Province>> = OnceLock::new();

/// Get or initialize the province HashMap
fn get_province_map() -> &'static HashMap<&'static str, &'static Province> {
    PROVINCE_MAP.get_or_init(|| {
        let mut map = HashMap::with_capacity(PROVINCES.len());
        for province in PROVINCES {
            map.insert(province.code, province);
        }
        map
    })
}

/// Look up a province by code
pub fn lookup_province(code: &str) -> Option<&'static Province> {
    get_province_map().get(code).copied()
}

/// Check whether a token is a recognized province code
pub fn is_province_code(code: &str) -> bool {
    get_province_map().contains_key(code)
}

/// Get all provinces, ordered by code
pub fn get_all_provinces() -> &'static [Province] {
    PROVINCES
}

/// Provinces in selector order (sorted by localized name)
pub fn provinces_by_name() -> Vec<&'static Province> {
    let mut sorted: Vec<&'static Province> = PROVINCES.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(b.name));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_matches_table() {
        for p in get_all_provinces() {
            assert_eq!(lookup_province(p.code), Some(p));
        }
        assert_eq!(lookup_province("CN-AH").map(|p| p.name), Some("安徽"));
        assert!(lookup_province("US-CA").is_none());
    }

    #[test]
    fn test_codes_matched_verbatim() {
        assert!(is_province_code("CN-AH"));
        assert!(!is_province_code("cn-ah"));
        assert!(!is_province_code(" CN-AH"));
    }

    #[test]
    fn test_provinces_by_name_is_sorted() {
        let sorted = provinces_by_name();
        assert_eq!(sorted.len(), PROVINCES.len());
        assert!(sorted.windows(2).all(|w| w[0].name <= w[1].name));
    }
}
