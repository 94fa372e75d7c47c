use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sentinel merchant name returned when no vocabulary entry matches.
/// Absence of a merchant is an expected case, not an error.
pub const UNKNOWN_MERCHANT: &str = "Unknown Merchant";

/// Core trait that all classifier implementations must satisfy.
///
/// Implementations are loaded once, immutable afterwards, and shared
/// read-only across concurrent requests.
pub trait Classifier: Send + Sync {
    /// Predict the spending category for normalized message text.
    /// Returns exactly one label from the trained label set.
    fn predict(&self, text: &str) -> Result<String, ClassificationError>;

    /// Per-category posterior probabilities for normalized message text.
    /// Values are non-negative and sum to 1.0 within floating-point
    /// tolerance, one entry per known label.
    fn predict_proba(&self, text: &str) -> Result<HashMap<String, f64>, ClassificationError>;

    /// The fixed label set this classifier was trained on
    fn labels(&self) -> &[String];
}

/// Classification error types
#[derive(Debug, thiserror::Error)]
pub enum ClassificationError {
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    /// Input is not usable text. The serving layer's typed JSON
    /// extractor owns this path for missing or ill-typed request
    /// bodies; classifier implementations may also raise it.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Malformed probabilities: {0}")]
    MalformedProbabilities(String),
}

/// Structured record produced for every categorized SMS
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorizedSms {
    /// Label from the classifier's trained label set
    pub category: String,
    /// Maximum posterior probability across labels, rounded to 2 decimals
    pub confidence: f64,
    /// Extracted monetary value; 0.0 means no amount was found
    pub amount: f64,
    /// Matched merchant name; [`UNKNOWN_MERCHANT`] means no match
    pub merchant: String,
    /// Verbatim input message
    pub original_text: String,
    /// Unix timestamp of when this record was produced
    pub processed_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorized_sms_serialization() {
        let record = CategorizedSms {
            category: "Impulse".to_string(),
            confidence: 0.87,
            amount: 200.0,
            merchant: "Swiggy".to_string(),
            original_text: "Rs 200 spent on Swiggy order".to_string(),
            processed_at: chrono::Utc::now().timestamp(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: CategorizedSms = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, record);
        assert_eq!(deserialized.merchant, "Swiggy");
    }

    #[test]
    fn test_error_messages_are_distinct() {
        let unavailable = ClassificationError::ModelUnavailable("file missing".to_string());
        let invalid = ClassificationError::InvalidInput("not a string".to_string());
        let malformed = ClassificationError::MalformedProbabilities("empty".to_string());

        assert_eq!(unavailable.to_string(), "Model unavailable: file missing");
        assert_eq!(invalid.to_string(), "Invalid input: not a string");
        assert_eq!(malformed.to_string(), "Malformed probabilities: empty");
    }
}
