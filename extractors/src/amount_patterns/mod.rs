mod extractor;

pub use extractor::AmountExtractor;

use regex::Regex;

/// Numeric literal with optional thousands separators and up to two
/// decimal digits
const NUMBER: &str = r"\d+(?:,\d+)*(?:\.\d{2})?";

/// Currency marker: the rupee symbol or one of the common abbreviations
const MARKER: &str = r"(?:rs\.?|inr|₹)";

/// One entry in the ordered amount pattern list. Order is significant:
/// overlapping patterns on the same message are common and the first
/// match wins, so this stays a priority list, never a set of independent
/// checks.
pub struct AmountPattern {
    pub name: &'static str,
    pub regex: Regex,
}

impl AmountPattern {
    /// Parse the captured numeric group, stripping thousands separators
    pub fn capture(&self, text: &str) -> Option<f64> {
        let captures = self.regex.captures(text)?;
        let amount_str = captures.get(1)?.as_str();
        amount_str.replace(',', "").parse().ok()
    }
}

/// Build the fixed priority list: currency-marker anchored patterns
/// first, then keyword cues. Patterns expect lower-cased input.
pub fn create_amount_patterns() -> Vec<AmountPattern> {
    vec![
        AmountPattern {
            name: "marker_then_number",
            regex: Regex::new(&format!(r"{MARKER}\s*({NUMBER})")).unwrap(),
        },
        AmountPattern {
            name: "number_then_marker",
            regex: Regex::new(&format!(r"({NUMBER})\s*{MARKER}")).unwrap(),
        },
        AmountPattern {
            name: "amount_keyword",
            regex: Regex::new(&format!(r"amount\s*{MARKER}?\s*({NUMBER})")).unwrap(),
        },
        AmountPattern {
            name: "debited_keyword",
            regex: Regex::new(&format!(r"debited\s*{MARKER}?\s*({NUMBER})")).unwrap(),
        },
        AmountPattern {
            name: "spent_keyword",
            regex: Regex::new(&format!(r"spent\s*{MARKER}?\s*({NUMBER})")).unwrap(),
        },
    ]
}
