use actix_cors::Cors;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use anyhow::Context;
use clap::Parser;
use extractors::{Classifier, NaiveBayesClassifier, SmsPipeline};
use std::sync::Arc;
use tracing_subscriber::prelude::*;

mod config;
mod handlers;

#[get("/")]
async fn home(pipeline: web::Data<Arc<SmsPipeline>>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "SMS Categorization API is running!",
        "status": "healthy",
        "model_loaded": true,
        "categories": pipeline.labels(),
        "time": chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    }))
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long)]
    log_file_path: Option<String>,
}

/// One-time, upfront model load. The pipeline is only ever constructed
/// around a fully initialized classifier; there is no nullable fallback.
fn build_pipeline(config: &config::ApiConfig) -> anyhow::Result<SmsPipeline> {
    let model_path = config.model_path();

    let classifier = NaiveBayesClassifier::load(&model_path)
        .with_context(|| format!("loading classifier model from {}", model_path.display()))?;

    tracing::info!("Model loaded with labels: {:?}", classifier.labels());

    Ok(SmsPipeline::new(Arc::new(classifier)))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(log_path) = args.log_file_path {
        let log_path = std::path::Path::new(&log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("kharcha-api.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard);

        tracing_subscriber::registry()
            .with(env_filter.clone())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(true)
                    .with_writer(std::io::stdout),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    // Load config
    let (config, config_path) = config::ApiConfig::load().expect("Failed to load config");
    tracing::info!("Config loaded from {:?}", config_path);

    // Load the classifier once, before serving; a missing or invalid
    // model is fatal here rather than a per-request 500
    let pipeline = Arc::new(build_pipeline(&config).expect("Failed to load classifier model"));

    // Get server config or use defaults
    let (host, port) = if let Some(server_config) = &config.server {
        (server_config.host.clone(), server_config.port)
    } else {
        ("127.0.0.1".to_string(), 5000)
    };

    tracing::info!("Server will listen on {}:{}", host, port);

    HttpServer::new(move || {
        // Configure CORS
        let cors = if let Some(cors_config) = &config.cors {
            let mut cors_builder = Cors::default();
            for origin in &cors_config.allowed_origins {
                cors_builder = cors_builder.allowed_origin(origin);
            }
            cors_builder
                .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                .allowed_headers(vec!["Authorization", "Accept", "Content-Type"])
                .max_age(3600)
        } else {
            Cors::default()
                .allow_any_origin()
                .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                .allowed_headers(vec!["Authorization", "Accept", "Content-Type"])
                .max_age(3600)
        };

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(pipeline.clone()))
            .service(home)
            .route(
                "/categorize",
                web::post().to(handlers::categorize::categorize_sms),
            )
            .route("/test", web::get().to(handlers::categorize::test_pipeline))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
