mod model;

pub use model::NaiveBayesModel;

use shared_types::{ClassificationError, Classifier};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// TF-IDF + multinomial naive-Bayes classifier backed by a JSON model
/// file. Immutable after loading and safe to share across requests.
#[derive(Debug)]
pub struct NaiveBayesClassifier {
    model: NaiveBayesModel,
}

impl NaiveBayesClassifier {
    /// Load and validate model parameters from a JSON file. A missing,
    /// unreadable, or dimensionally inconsistent file surfaces as
    /// `ModelUnavailable`, never as a classifier that silently defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ClassificationError> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| {
            ClassificationError::ModelUnavailable(format!("{}: {}", path.display(), e))
        })?;

        let model: NaiveBayesModel =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| {
                ClassificationError::ModelUnavailable(format!("{}: {}", path.display(), e))
            })?;

        Self::from_model(model)
    }

    /// Wrap an already-deserialized model, validating its dimensions
    pub fn from_model(model: NaiveBayesModel) -> Result<Self, ClassificationError> {
        model.validate()?;
        Ok(Self { model })
    }
}

impl Classifier for NaiveBayesClassifier {
    fn predict(&self, text: &str) -> Result<String, ClassificationError> {
        let posterior = self.model.posterior(text);

        // First label wins ties; labels are non-empty after validate().
        let mut best = 0;
        for (index, probability) in posterior.iter().enumerate() {
            if *probability > posterior[best] {
                best = index;
            }
        }

        Ok(self.model.labels[best].clone())
    }

    fn predict_proba(&self, text: &str) -> Result<HashMap<String, f64>, ClassificationError> {
        let posterior = self.model.posterior(text);
        Ok(self.model.labels.iter().cloned().zip(posterior).collect())
    }

    fn labels(&self) -> &[String] {
        &self.model.labels
    }
}
