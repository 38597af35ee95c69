// Chinese provincial-level divisions for park location matching
// Source: ISO 3166-2:CN subdivision codes, as used in POTA locationDesc fields
//
// Covers the 34 codes that appear in the CN program's park catalog export:
// 23 provinces (incl. TW), 5 autonomous regions, 4 municipalities, 2 SARs.

// =========================================================================
// PROVINCE TABLE
// =========================================================================

/// Province information for park filtering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Province {
    /// ISO 3166-2 style code, e.g. "CN-AH"
    pub code: &'static str,
    /// Localized province name
    pub name: &'static str,
}

/// All provincial-level divisions, ordered by code
pub const PROVINCES: &[Province] = &[
    Province { code: "CN-AH", name: "安徽" },
    Province { code: "CN-BJ", name: "北京" },
    Province { code: "CN-CQ", name: "重庆" },
    Province { code: "CN-FJ", name: "福建" },
    Province { code: "CN-GD", name: "广东" },
    Province { code: "CN-GS", name: "甘肃" },
    Province { code: "CN-GX", name: "广西" },
    Province { code: "CN-GZ", name: "贵州" },
    Province { code: "CN-HA", name: "河南" },
    Province { code: "CN-HB", name: "湖北" },
    Province { code: "CN-HE", name: "河北" },
    Province { code: "CN-HI", name: "海南" },
    Province { code: "CN-HK", name: "香港" },
    Province { code: "CN-HL", name: "黑龙江" },
    Province { code: "CN-HN", name: "湖南" },
    Province { code: "CN-JL", name: "吉林" },
    Province { code: "CN-JS", name: "江苏" },
    Province { code: "CN-JX", name: "江西" },
    Province { code: "CN-LN", name: "辽宁" },
    Province { code: "CN-MO", name: "澳门" },
    Province { code: "CN-NM", name: "内蒙古" },
    Province { code: "CN-NX", name: "宁夏" },
    Province { code: "CN-QH", name: "青海" },
    Province { code: "CN-SC", name: "四川" },
    Province { code: "CN-SD", name: "山东" },
    Province { code: "CN-SH", name: "上海" },
    Province { code: "CN-SN", name: "陕西" },
    Province { code: "CN-SX", name: "山西" },
    Province { code: "CN-TJ", name: "天津" },
    Province { code: "CN-TW", name: "台湾" },
    Province { code: "CN-XJ", name: "新疆" },
    Province { code: "CN-XZ", name: "西藏" },
    Province { code: "CN-YN", name: "云南" },
    Province { code: "CN-ZJ", name: "浙江" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_province_count() {
        assert_eq!(PROVINCES.len(), 34);
    }

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<_> = PROVINCES.iter().map(|p| p.code).collect();
        assert_eq!(codes.len(), PROVINCES.len());
    }

    #[test]
    fn test_codes_are_iso_style() {
        assert!(PROVINCES.iter().all(|p| p.code.len() == 5 && p.code.starts_with("CN-")));
    }
}
