// Persisted record shapes
// Both documents are written as indented UTF-8 JSON with non-ASCII kept literally.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Park record - one entry of the catalog file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Park {
    /// Unique park reference, e.g. "CN-1234" (merge key on import)
    pub reference: String,
    pub name: String,
    /// Province codes matched from locationDesc, in order of appearance
    #[serde(default)]
    pub provinces: Vec<String>,
    #[serde(default)]
    pub activated: bool,
    /// YYYY-MM-DD, present only when activated
    #[serde(default)]
    pub activation_time: Option<String>,
}

static PARK_NUMBER_RE: OnceLock<Regex> = OnceLock::new();

impl Park {
    /// New, unactivated park
    pub fn new(reference: impl Into<String>, name: impl Into<String>, provinces: Vec<String>) -> Self {
        Self {
            reference: reference.into(),
            name: name.into(),
            provinces,
            activated: false,
            activation_time: None,
        }
    }

    /// Numeric sort key of the reference
    pub fn park_number(&self) -> u64 {
        park_number(&self.reference)
    }

    /// `activation_time` is set exactly when `activated` is
    pub fn activation_is_consistent(&self) -> bool {
        self.activated == self.activation_time.is_some()
    }

    pub fn in_province(&self, code: &str) -> bool {
        self.provinces.iter().any(|p| p == code)
    }
}

/// Extract the first run of digits following a '-' ("CN-0012" -> 12).
/// References without that pattern get 0; absurdly long runs saturate.
pub fn park_number(reference: &str) -> u64 {
    let re = PARK_NUMBER_RE.get_or_init(|| Regex::new(r"-(\d+)").expect("park number pattern is valid"));
    match re.captures(reference).and_then(|c| c.get(1)) {
        Some(digits) => digits.as_str().parse().unwrap_or(u64::MAX),
        None => 0,
    }
}

/// Config document - small key-value mapping persisted between sessions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Province filter selected in the previous session (None = all provinces)
    #[serde(default)]
    pub last_province_code: Option<String>,
    /// Keys this version does not know about, kept on rewrite
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
