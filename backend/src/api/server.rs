//! HTTP server for the Mailblast dashboard.
//!
//! Recipient parsing is also done client-side on every keystroke; these
//! endpoints serve uploads (decoded server-side with charset detection),
//! scripted clients, and draft validation before submission.
//!
//! # API Endpoints
//!
//! | Method | Path                      | Description                          |
//! |--------|---------------------------|--------------------------------------|
//! | GET    | `/health`                 | Health check                         |
//! | POST   | `/api/recipients/parse`   | Statistics for pasted text           |
//! | POST   | `/api/recipients/upload`  | Statistics for an uploaded file      |
//! | POST   | `/api/campaigns/validate` | Schema + wizard checks for a draft   |
//! | GET    | `/api/logs`               | SSE stream for real-time logs        |

use axum::{
    extract::{DefaultBodyLimit, Multipart},
    http::{header, Method, StatusCode},
    response::{sse::Event, Json, Sse},
    routing::{get, post},
    Router,
};
use futures::stream::Stream;
use mailblast_core::parse_list;
use serde_json::{json, Value};
use std::{convert::Infallible, net::SocketAddr, time::Duration};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt as _;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use super::logs::{log_error, log_info, log_info_indent, log_success, log_warning, LOG_BROADCASTER};
use super::types::{error_response, ParseRequest, RecipientsResponse, SourceMetadata};
use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::loader::decode_bytes;
use crate::validation::{validate_campaign_draft, DraftReport};

type ApiError = (StatusCode, Json<Value>);

/// Build the application router.
pub fn router(config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .expose_headers([header::CONTENT_TYPE]);

    let api = Router::new()
        .route("/health", get(health))
        .route("/api/recipients/parse", post(parse_recipients))
        .route("/api/recipients/upload", post(upload_recipients))
        .route("/api/campaigns/validate", post(validate_campaign))
        .route("/api/logs", get(sse_logs))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(cors);

    match &config.static_dir {
        Some(dir) => api.fallback_service(ServeDir::new(dir)),
        None => api.route("/", get(health)),
    }
}

/// Start the HTTP server
pub async fn start_server(config: ServerConfig) -> ServerResult<()> {
    let app = router(&config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    println!("🚀 Mailblast server running on http://localhost:{}", config.port);
    println!("   POST /api/recipients/parse   - Parse pasted recipients");
    println!("   POST /api/recipients/upload  - Upload recipient file");
    println!("   POST /api/campaigns/validate - Validate campaign draft");
    println!("   GET  /api/logs               - SSE log stream");
    println!("   GET  /health                 - Health check");
    if let Some(dir) = &config.static_dir {
        println!("   GET  /                       - Dashboard ({})", dir.display());
    }
    println!();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "mailblast",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "parse": "POST /api/recipients/parse",
            "upload": "POST /api/recipients/upload",
            "validate": "POST /api/campaigns/validate",
            "logs": "GET /api/logs (SSE)"
        }
    }))
}

/// SSE endpoint for real-time log streaming
async fn sse_logs() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = LOG_BROADCASTER.subscribe();

    let stream = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(entry) => {
            let json = serde_json::to_string(&entry).ok()?;
            Some(Ok(Event::default().data(json)))
        }
        // Lagged receivers skip what they missed
        Err(_) => None,
    });

    Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

/// Parse pasted text
async fn parse_recipients(Json(request): Json<ParseRequest>) -> Json<RecipientsResponse> {
    let list = parse_list(request.text.as_deref().unwrap_or_default());
    let response = RecipientsResponse::from_list(&list);

    log_info(format!(
        "Parsed {} lines: {} valid, {} invalid, {} duplicates",
        response.stats.total_lines,
        response.stats.valid_count,
        response.stats.invalid_count,
        response.stats.duplicate_count
    ));

    Json(response)
}

/// Upload a recipient file
async fn upload_recipients(mut multipart: Multipart) -> Result<Json<RecipientsResponse>, ApiError> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut file_name: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        (StatusCode::BAD_REQUEST, Json(error_response(&format!("Multipart error: {}", e))))
    })? {
        if field.name() == Some("file") {
            file_name = field.file_name().map(|s| s.to_string());
            file_data = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| {
                        (StatusCode::BAD_REQUEST, Json(error_response(&format!("Read error: {}", e))))
                    })?
                    .to_vec(),
            );
        }
    }

    let bytes = file_data.ok_or_else(|| {
        log_error("Upload rejected: no file field");
        (StatusCode::BAD_REQUEST, Json(error_response("No file provided")))
    })?;

    log_info(format!(
        "📄 Upload: {} ({} bytes)",
        file_name.as_deref().unwrap_or("unknown"),
        bytes.len()
    ));

    let decoded = decode_bytes(&bytes);
    log_info_indent(format!("Encoding: {}", decoded.encoding), 1);

    let list = parse_list(&decoded.text);
    let source = SourceMetadata::from_decoded(file_name, &decoded);
    let response = RecipientsResponse::from_list(&list).with_source(source, decoded.text);

    if response.can_advance {
        log_success(format!(
            "{} valid recipients ({} invalid, {} duplicates)",
            response.stats.valid_count, response.stats.invalid_count, response.stats.duplicate_count
        ));
    } else {
        log_warning(format!(
            "No valid recipients in {} lines",
            response.stats.total_lines
        ));
    }

    Ok(Json(response))
}

/// Validate a campaign draft
async fn validate_campaign(Json(payload): Json<Value>) -> (StatusCode, Json<DraftReport>) {
    let report = validate_campaign_draft(&payload);

    if report.is_valid() {
        log_success(format!("Draft valid ({} recipients)", report.stats.valid_count));
        (StatusCode::OK, Json(report))
    } else {
        log_warning(format!(
            "Draft rejected: {} schema errors, {} problems",
            report.schema_errors.len(),
            report.problems.len()
        ));
        (StatusCode::UNPROCESSABLE_ENTITY, Json(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_parse_handler() {
        let Json(response) = parse_recipients(Json(ParseRequest {
            text: Some("x@y.com,z@w.com;bad".into()),
        }))
        .await;

        assert_eq!(response.stats.total_lines, 3);
        assert_eq!(response.stats.valid_count, 2);
        assert_eq!(response.stats.invalid_count, 1);
    }

    #[tokio::test]
    async fn test_parse_handler_null_text() {
        let Json(response) = parse_recipients(Json(ParseRequest { text: None })).await;
        assert!(response.stats.is_empty());
        assert!(!response.can_advance);
    }

    #[tokio::test]
    async fn test_validate_handler_status() {
        let (status, Json(report)) = validate_campaign(Json(json!({ "name": "x" }))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(!report.is_valid());

        let (status, _) = validate_campaign(Json(json!({
            "name": "Promo",
            "subject": "Deals",
            "recipientsText": "a@b.com",
            "body": { "contentType": "plain", "body": "Hi" }
        })))
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[test]
    fn test_router_builds() {
        let _ = router(&ServerConfig::default());
        let with_dir = ServerConfig {
            static_dir: Some("dist".into()),
            ..ServerConfig::default()
        };
        let _ = router(&with_dir);
    }
}
