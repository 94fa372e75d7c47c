//! Extractors Crate
//!
//! This crate turns raw transactional SMS text into structured spending
//! records: deterministic normalization, ordered pattern-based amount
//! extraction, vocabulary-based merchant extraction, and the pipeline
//! that combines them with a pluggable classifier.
//!
//! # Architecture
//!
//! - **Types**: the `Classifier` trait, record types, and error taxonomy
//!   are defined in the `shared-types` crate
//! - **Implementations**: concrete extractors and classifiers are
//!   implemented in this crate
//!
//! # Example
//!
//! ```rust,ignore
//! use extractors::{NaiveBayesClassifier, SmsPipeline};
//! use std::sync::Arc;
//!
//! let classifier = Arc::new(NaiveBayesClassifier::load("sms_model.json")?);
//! let pipeline = SmsPipeline::new(classifier);
//! let result = pipeline.process("Rs 200 spent on Swiggy order")?;
//! ```

pub mod amount_patterns;
pub mod merchant;
pub mod naive_bayes;
pub mod normalizer;
pub mod pipeline;

// Re-export commonly used types
pub use amount_patterns::AmountExtractor;
pub use merchant::MerchantExtractor;
pub use naive_bayes::{NaiveBayesClassifier, NaiveBayesModel};
pub use normalizer::normalize;
pub use pipeline::SmsPipeline;

// Re-export the Classifier trait from shared-types for convenience
pub use shared_types::Classifier;
