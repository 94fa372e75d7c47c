use serde::{Deserialize, Serialize};

pub mod classification;

pub use classification::{CategorizedSms, ClassificationError, Classifier, UNKNOWN_MERCHANT};

/// Error response for API endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub success: bool,
}
