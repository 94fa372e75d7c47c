use super::{create_amount_patterns, AmountPattern};

/// Finds a monetary value in raw SMS text via ordered pattern matching
pub struct AmountExtractor {
    patterns: Vec<AmountPattern>,
}

impl AmountExtractor {
    pub fn new() -> Self {
        Self {
            patterns: create_amount_patterns(),
        }
    }

    /// Extract an amount from raw (non-normalized) text.
    ///
    /// The text is lower-cased but otherwise untouched: currency symbols
    /// and decimal points must survive for the patterns to anchor on.
    /// Patterns are tried in priority order anywhere in the string and
    /// the first match wins. 0.0 is the "no amount found" sentinel, not
    /// an error.
    pub fn extract(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase();

        for pattern in &self.patterns {
            if let Some(amount) = pattern.capture(&lowered) {
                return amount;
            }
        }

        0.0
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}
