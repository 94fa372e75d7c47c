use actix_web::{web, HttpResponse, Result as ActixResult};
use extractors::SmsPipeline;
use serde::Deserialize;
use shared_types::{ClassificationError, ErrorResponse};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Deserialize)]
pub struct CategorizeRequest {
    pub sms_text: String,
}

/// Main endpoint: categorize one SMS message
pub async fn categorize_sms(
    pipeline: web::Data<Arc<SmsPipeline>>,
    request: web::Json<CategorizeRequest>,
) -> ActixResult<HttpResponse> {
    let preview: String = request.sms_text.chars().take(50).collect();
    info!("Processing SMS: {preview}...");

    let result = match pipeline.process(&request.sms_text) {
        Ok(result) => result,
        Err(err) => {
            warn!("Classification failed: {err}");
            return Ok(error_response(&err));
        }
    };

    info!(
        "Result: {} (confidence: {:.2})",
        result.category, result.confidence
    );

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "category": result.category,
        "confidence": result.confidence,
        "amount": result.amount,
        "merchant": result.merchant,
        "original_text": result.original_text,
        "processed_at": result.processed_at,
    })))
}

/// Test endpoint: run canned sample messages through the pipeline
pub async fn test_pipeline(pipeline: web::Data<Arc<SmsPipeline>>) -> ActixResult<HttpResponse> {
    let samples = [
        "Rs 200 spent on Pizza Hut order",
        "Rs 50 paid for bus fare",
        "Rs 1500 emergency doctor fees",
    ];

    let mut results = Vec::new();
    for sms in samples {
        match pipeline.process(sms) {
            Ok(result) => results.push(serde_json::json!({
                "sms": sms,
                "category": result.category,
                "confidence": result.confidence,
            })),
            Err(e) => results.push(serde_json::json!({
                "sms": sms,
                "error": e.to_string(),
            })),
        }
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "test_results": results,
        "model_status": "working"
    })))
}

/// Error body matching the success payload's `success` flag, so clients
/// can branch on one field
fn error_response(err: &ClassificationError) -> HttpResponse {
    let body = ErrorResponse {
        error: err.to_string(),
        success: false,
    };

    match err {
        ClassificationError::ModelUnavailable(_) => {
            HttpResponse::ServiceUnavailable().json(body)
        }
        ClassificationError::InvalidInput(_) => HttpResponse::BadRequest().json(body),
        ClassificationError::MalformedProbabilities(_) => {
            HttpResponse::InternalServerError().json(body)
        }
    }
}
