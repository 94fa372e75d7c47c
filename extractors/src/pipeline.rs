use crate::amount_patterns::AmountExtractor;
use crate::merchant::MerchantExtractor;
use crate::normalizer::normalize;
use shared_types::{CategorizedSms, ClassificationError, Classifier};
use std::collections::HashMap;
use std::sync::Arc;

/// Orchestrates normalization, classification, and field extraction into
/// one structured record per message.
///
/// Stateless per call: the classifier handle is read-only after
/// construction, so a shared pipeline serves concurrent requests without
/// coordination.
pub struct SmsPipeline {
    classifier: Arc<dyn Classifier>,
    amounts: AmountExtractor,
    merchants: MerchantExtractor,
}

impl SmsPipeline {
    /// The classifier is injected fully initialized; the pipeline never
    /// holds a nullable model.
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self {
            classifier,
            amounts: AmountExtractor::new(),
            merchants: MerchantExtractor::new(),
        }
    }

    /// Label set of the injected classifier
    pub fn labels(&self) -> &[String] {
        self.classifier.labels()
    }

    /// Turn one raw message into a categorized record.
    ///
    /// Only classifier invocation can fail, and that failure propagates
    /// unmodified. Extractor misses are sentinel values inside a
    /// successful result.
    pub fn process(&self, sms_text: &str) -> Result<CategorizedSms, ClassificationError> {
        let normalized = normalize(sms_text);

        let category = self.classifier.predict(&normalized)?;
        let probabilities = self.classifier.predict_proba(&normalized)?;
        let confidence = max_probability(&probabilities)?;

        // Amount and merchant work on the raw text: normalization strips
        // the currency symbols and decimal points they anchor on.
        let amount = self.amounts.extract(sms_text);
        let merchant = self.merchants.extract(sms_text);

        Ok(CategorizedSms {
            category,
            confidence: (confidence * 100.0).round() / 100.0,
            amount,
            merchant,
            original_text: sms_text.to_string(),
            processed_at: chrono::Utc::now().timestamp(),
        })
    }
}

/// Maximum posterior across labels. An empty or non-finite probability
/// vector fails instead of being masked with a default category.
fn max_probability(probabilities: &HashMap<String, f64>) -> Result<f64, ClassificationError> {
    let mut max: Option<f64> = None;

    for value in probabilities.values() {
        if !value.is_finite() {
            return Err(ClassificationError::MalformedProbabilities(format!(
                "non-finite probability {value}"
            )));
        }
        if max.map_or(true, |current| *value > current) {
            max = Some(*value);
        }
    }

    max.ok_or_else(|| {
        ClassificationError::MalformedProbabilities("empty probability vector".to_string())
    })
}
