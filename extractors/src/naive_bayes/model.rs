use serde::{Deserialize, Serialize};
use shared_types::ClassificationError;
use std::collections::HashMap;

/// Trained classifier parameters: a TF-IDF vectorizer plus a multinomial
/// naive-Bayes model, exported to JSON by the (external) training
/// pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NaiveBayesModel {
    /// Label set, in training order
    pub labels: Vec<String>,
    /// Token to feature column
    pub vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per feature column
    pub idf: Vec<f64>,
    /// Log prior per label
    pub class_log_prior: Vec<f64>,
    /// Log likelihood, one row per label, one entry per feature column
    pub feature_log_prob: Vec<Vec<f64>>,
}

impl NaiveBayesModel {
    /// Check that all parameter dimensions agree. A model that fails here
    /// must never be used for prediction.
    pub fn validate(&self) -> Result<(), ClassificationError> {
        if self.labels.is_empty() {
            return Err(ClassificationError::ModelUnavailable(
                "model has no labels".to_string(),
            ));
        }

        let columns = self.vocabulary.len();
        if self.idf.len() != columns {
            return Err(ClassificationError::ModelUnavailable(format!(
                "idf has {} entries for {} vocabulary terms",
                self.idf.len(),
                columns
            )));
        }

        for (token, &column) in &self.vocabulary {
            if column >= columns {
                return Err(ClassificationError::ModelUnavailable(format!(
                    "vocabulary term {token:?} maps to column {column}, but model has {columns} columns"
                )));
            }
        }

        if self.class_log_prior.len() != self.labels.len() {
            return Err(ClassificationError::ModelUnavailable(format!(
                "{} priors for {} labels",
                self.class_log_prior.len(),
                self.labels.len()
            )));
        }

        if self.feature_log_prob.len() != self.labels.len() {
            return Err(ClassificationError::ModelUnavailable(format!(
                "{} likelihood rows for {} labels",
                self.feature_log_prob.len(),
                self.labels.len()
            )));
        }

        for (row, likelihoods) in self.feature_log_prob.iter().enumerate() {
            if likelihoods.len() != columns {
                return Err(ClassificationError::ModelUnavailable(format!(
                    "likelihood row {row} has {} entries for {columns} columns",
                    likelihoods.len()
                )));
            }
        }

        Ok(())
    }

    /// TF-IDF transform: term counts for in-vocabulary tokens, scaled by
    /// idf and L2-normalized. Out-of-vocabulary tokens are ignored.
    /// Returns sparse (column, weight) pairs.
    fn vectorize(&self, text: &str) -> Vec<(usize, f64)> {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in text.split_whitespace() {
            if let Some(&column) = self.vocabulary.get(token) {
                *counts.entry(column).or_insert(0.0) += 1.0;
            }
        }

        let mut features: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(column, count)| (column, count * self.idf[column]))
            .collect();

        let norm = features.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, weight) in &mut features {
                *weight /= norm;
            }
        }

        features
    }

    /// Posterior distribution over labels, in label order. Computed from
    /// joint log likelihoods via log-sum-exp, so the result always sums
    /// to 1.0 within floating-point tolerance.
    pub fn posterior(&self, text: &str) -> Vec<f64> {
        let features = self.vectorize(text);

        let joint: Vec<f64> = self
            .class_log_prior
            .iter()
            .enumerate()
            .map(|(row, prior)| {
                prior
                    + features
                        .iter()
                        .map(|&(column, weight)| weight * self.feature_log_prob[row][column])
                        .sum::<f64>()
            })
            .collect();

        let max = joint.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let scaled: Vec<f64> = joint.iter().map(|j| (j - max).exp()).collect();
        let total: f64 = scaled.iter().sum();

        scaled.into_iter().map(|s| s / total).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_label_model() -> NaiveBayesModel {
        NaiveBayesModel {
            labels: vec![
                "Emergency".to_string(),
                "Essentials".to_string(),
                "Impulse".to_string(),
            ],
            vocabulary: HashMap::from([
                ("doctor".to_string(), 0),
                ("emergency".to_string(), 1),
                ("grocery".to_string(), 2),
                ("bus".to_string(), 3),
                ("swiggy".to_string(), 4),
                ("order".to_string(), 5),
            ]),
            idf: vec![1.4, 1.6, 1.2, 1.3, 1.1, 1.0],
            class_log_prior: vec![
                (1.0f64 / 3.0).ln(),
                (1.0f64 / 3.0).ln(),
                (1.0f64 / 3.0).ln(),
            ],
            feature_log_prob: vec![
                vec![-0.5, -0.4, -3.0, -3.0, -3.0, -3.0],
                vec![-3.0, -3.0, -0.5, -0.6, -3.0, -2.0],
                vec![-3.0, -3.0, -3.0, -3.0, -0.4, -0.9],
            ],
        }
    }

    #[test]
    fn test_validate_accepts_consistent_model() {
        assert!(three_label_model().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_dimension_mismatches() {
        let mut short_idf = three_label_model();
        short_idf.idf.pop();
        assert!(short_idf.validate().is_err());

        let mut extra_prior = three_label_model();
        extra_prior.class_log_prior.push(-1.0);
        assert!(extra_prior.validate().is_err());

        let mut ragged_row = three_label_model();
        ragged_row.feature_log_prob[1].pop();
        assert!(ragged_row.validate().is_err());

        let mut bad_column = three_label_model();
        bad_column.vocabulary.insert("stray".to_string(), 99);
        assert!(bad_column.validate().is_err());
    }

    #[test]
    fn test_posterior_sums_to_one() {
        let model = three_label_model();
        for text in ["emergency doctor visit", "grocery run", "", "zzz unknown"] {
            let posterior = model.posterior(text);
            let sum: f64 = posterior.iter().sum();
            assert!((sum - 1.0).abs() < 1e-6, "sum {sum} for {text:?}");
            assert!(posterior.iter().all(|p| *p >= 0.0));
        }
    }

    #[test]
    fn test_posterior_favors_matching_label() {
        let model = three_label_model();
        let posterior = model.posterior("emergency doctor fees");
        assert!(posterior[0] > posterior[1] && posterior[0] > posterior[2]);
    }

    #[test]
    fn test_unknown_tokens_fall_back_to_priors() {
        let model = three_label_model();
        let posterior = model.posterior("completely unknown words");
        for p in &posterior {
            assert!((p - 1.0 / 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_model_json_round_trip() {
        let model = three_label_model();
        let json = serde_json::to_string(&model).unwrap();
        let restored: NaiveBayesModel = serde_json::from_str(&json).unwrap();
        assert!(restored.validate().is_ok());
        assert_eq!(restored.labels, model.labels);
    }
}
