//! Web API module for ColorGenerator.
//!
//! This module provides a JSON API for a browser front end: it produces the
//! per-visit initial colors and derives/exports palettes whenever the user
//! edits a base color.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/initial` - Fresh initial colors and their palette (optional ?seed=)
//! - `GET /api/presets` - List presets
//! - `POST /api/palette` - Derive a palette from base colors
//! - `POST /api/export/{format}` - Render a palette as tailwind, css, or json

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::dice::RngDice;
use crate::export::{self, ExportFormat};
use crate::generator::{derive_palette, generate_initial_base_colors, InitialSelection, Preset};
use crate::models::{BaseColors, ColorError, Palette};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<Config>,
    /// Presets resolved once from the configuration
    presets: Arc<Vec<Preset>>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        config.validate()?;
        let presets = config.presets();
        Ok(Self {
            config: Arc::new(config),
            presets: Arc::new(presets),
        })
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Query parameters for initial color generation.
#[derive(Debug, Deserialize)]
pub struct InitialQuery {
    /// Seed for reproducible colors.
    pub seed: Option<u64>,
}

/// Initial colors for a new visit.
#[derive(Debug, Serialize)]
pub struct InitialResponse {
    /// How the colors were chosen.
    pub selection: InitialSelection,
    /// Preset name when a preset was chosen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    /// The base colors.
    pub colors: BaseColors,
    /// Palette derived from `colors`.
    pub palette: Palette,
    /// Default color scheme name.
    pub name: String,
}

/// Preset list response.
#[derive(Debug, Serialize)]
pub struct PresetListResponse {
    /// Available presets, built-ins first.
    pub presets: Vec<Preset>,
}

/// Export request body.
#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    /// Base colors to derive and export.
    pub colors: BaseColors,
    /// Color scheme name (defaults to the configured name).
    #[serde(default)]
    pub name: Option<String>,
}

/// Rendered export.
#[derive(Debug, Serialize)]
pub struct ExportResponse {
    /// Format that was rendered.
    pub format: ExportFormat,
    /// Suggested download file name.
    pub file_name: String,
    /// File content.
    pub content: String,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

fn invalid_colors(err: &ColorError) -> (StatusCode, Json<ApiError>) {
    let details = std::error::Error::source(err)
        .map_or_else(|| err.to_string(), |source| format!("{err}: {source}"));
    (
        StatusCode::BAD_REQUEST,
        Json(ApiError::with_details("Invalid base colors", details)),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /api/initial - Generate initial colors for a new visit.
async fn get_initial(
    State(state): State<AppState>,
    Query(query): Query<InitialQuery>,
) -> Json<InitialResponse> {
    let mut dice = RngDice::from_seed_option(query.seed);
    let (selection, colors) = generate_initial_base_colors(&mut dice, &state.presets);
    let preset = match selection {
        InitialSelection::Preset(index) => state.presets.get(index).map(|p| p.name.clone()),
        InitialSelection::RandomHue(_) => None,
    };

    Json(InitialResponse {
        selection,
        preset,
        colors,
        palette: derive_palette(&colors),
        name: state.config.export.color_name.clone(),
    })
}

/// GET /api/presets - List presets.
async fn list_presets(State(state): State<AppState>) -> Json<PresetListResponse> {
    Json(PresetListResponse {
        presets: state.presets.as_ref().clone(),
    })
}

/// POST /api/palette - Derive a palette from base colors.
async fn derive(Json(colors): Json<BaseColors>) -> ApiResult<Palette> {
    colors.validate().map_err(|e| invalid_colors(&e))?;
    Ok(Json(derive_palette(&colors)))
}

/// POST /api/export/{format} - Render the palette of the given base colors.
async fn export_palette(
    State(state): State<AppState>,
    Path(format): Path<String>,
    Json(request): Json<ExportRequest>,
) -> ApiResult<ExportResponse> {
    let format: ExportFormat = format.parse().map_err(|e: anyhow::Error| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError::new(e.to_string())),
        )
    })?;

    request.colors.validate().map_err(|e| invalid_colors(&e))?;

    let name = request
        .name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| state.config.export.color_name.clone());

    let palette = derive_palette(&request.colors);
    let content = export::render(&palette, format, &name).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::with_details("Failed to render export", e.to_string())),
        )
    })?;

    debug!(%format, %name, "Rendered export");

    Ok(Json(ExportResponse {
        format,
        file_name: export::file_name(&name, format),
        content,
    }))
}

// ============================================================================
// Router
// ============================================================================

/// Creates the API router.
pub fn create_router(state: AppState) -> Router {
    // The API is meant to sit behind a locally served front end
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/initial", get(get_initial))
        .route("/api/presets", get(list_presets))
        .route("/api/palette", post(derive))
        .route("/api/export/{format}", post(export_palette))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Starts the web server.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::new(config)?;
    let app = create_router(state);

    info!("Starting {} web server on {}", APP_NAME, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
