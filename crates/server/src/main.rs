// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod clock;
mod live;

use axum::{
    Json, Router,
    extract::{FromRef, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use bank_holidays::{FetchTicket, Session};
use bank_holidays_api::{
    ApiError, ApiResult, FeedStatusResponse, HolidaysRequest, ListHolidaysResponse,
    ListJurisdictionsResponse, ListYearsResponse, RefreshOutcome, RefreshResponse,
    SelectionResponse, UpdateSelectionRequest, complete_fetch, feed_status, get_selection,
    list_holidays, list_jurisdictions, list_years, update_selection,
};
use bank_holidays_domain::HolidayDataset;
use bank_holidays_feed::{DEFAULT_FEED_URL, FeedConfig, FeedLoader};
use clap::Parser;
use clock::{Clock, ClockError};
use live::{LiveEvent, LiveEventBroadcaster, live_events_handler};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use time::Date;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

/// Bank Holidays Server - HTTP server for UK bank holiday dates
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: IpAddr,

    /// URL of the bank holidays feed
    #[arg(long, default_value = DEFAULT_FEED_URL)]
    feed_url: String,

    /// Seconds to wait for the feed before giving up
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// IANA timezone used to decide which day is "today"
    #[arg(long, default_value = "Europe/London")]
    timezone: String,
}

/// Application state shared across handlers.
///
/// The session is the single mutable reference to the dataset and selection.
/// Handlers hold the lock only long enough to read or replace the snapshot.
#[derive(Clone)]
struct AppState {
    /// The current session snapshot.
    session: Arc<RwLock<Session>>,
    /// The feed client.
    loader: Arc<FeedLoader>,
    /// Source of today's date.
    clock: Clock,
    /// Broadcaster for live events.
    live: Arc<LiveEventBroadcaster>,
}

impl FromRef<AppState> for Arc<LiveEventBroadcaster> {
    fn from_ref(app_state: &AppState) -> Self {
        Arc::clone(&app_state.live)
    }
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::FeedUnavailable { .. } => Self {
                status: StatusCode::SERVICE_UNAVAILABLE,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal API error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

impl From<ClockError> for HttpError {
    fn from(err: ClockError) -> Self {
        error!(error = %err, "Clock error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Clock error: {err}"),
        }
    }
}

/// Runs one fetch of the feed and applies its outcome to the session.
///
/// The lock is released while the request is in flight. If another fetch is
/// started in the meantime, this fetch's outcome is discarded.
async fn run_fetch(app_state: &AppState) -> Result<RefreshResponse, ApiError> {
    let mut session = app_state.session.write().await;
    let (next, ticket): (Session, FetchTicket) = session.begin_fetch();
    *session = next;
    drop(session);

    info!(%ticket, "Fetching bank holidays feed");
    let outcome: Result<HolidayDataset, String> =
        app_state.loader.load().await.map_err(|e| e.to_string());

    let mut session = app_state.session.write().await;
    let result: ApiResult<RefreshResponse> = complete_fetch(&session, ticket, outcome)?;
    *session = result.new_session;
    let had_data: bool = session.dataset().is_some();
    let years: Vec<i32> = list_years(&session).years;
    drop(session);

    match result.response.outcome {
        RefreshOutcome::Replaced => {
            app_state.live.broadcast(&LiveEvent::DatasetReplaced {
                fetch: ticket.value(),
                years,
            });
        }
        RefreshOutcome::Failed => {
            app_state.live.broadcast(&LiveEvent::LoadFailed {
                fetch: ticket.value(),
                reason: result.response.status.last_failure.clone().unwrap_or_default(),
                kept_previous: had_data,
            });
        }
        RefreshOutcome::Superseded => {}
    }

    Ok(result.response)
}

/// Handler for GET `/jurisdictions` endpoint.
#[allow(clippy::unused_async)]
async fn handle_list_jurisdictions() -> Json<ListJurisdictionsResponse> {
    Json(list_jurisdictions())
}

/// Handler for GET `/years` endpoint.
///
/// Lists the selectable years, newest first.
async fn handle_list_years(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListYearsResponse> {
    let session = app_state.session.read().await;
    Json(list_years(&session))
}

/// Handler for GET `/holidays` endpoint.
///
/// Lists the holidays for the requested jurisdiction and year, falling back
/// to the current selection for omitted parameters.
async fn handle_list_holidays(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<HolidaysRequest>,
) -> Result<Json<ListHolidaysResponse>, HttpError> {
    info!(
        jurisdiction = ?query.jurisdiction,
        year = ?query.year,
        "Handling list_holidays request"
    );

    let today: Date = app_state.clock.today()?;
    let session: Session = app_state.session.read().await.clone();
    let response: ListHolidaysResponse = list_holidays(&session, &query, today)?;

    Ok(Json(response))
}

/// Handler for GET `/selection` endpoint.
async fn handle_get_selection(
    AxumState(app_state): AxumState<AppState>,
) -> Json<SelectionResponse> {
    let session = app_state.session.read().await;
    Json(get_selection(&session))
}

/// Handler for POST `/selection` endpoint.
///
/// Overwrites the selected jurisdiction and/or year.
async fn handle_update_selection(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<UpdateSelectionRequest>,
) -> Result<Json<SelectionResponse>, HttpError> {
    info!(
        jurisdiction = ?req.jurisdiction,
        year = ?req.year,
        "Handling update_selection request"
    );

    let mut session = app_state.session.write().await;
    let result: ApiResult<SelectionResponse> = update_selection(&session, &req)?;
    *session = result.new_session;
    drop(session);

    app_state.live.broadcast(&LiveEvent::SelectionChanged {
        jurisdiction: result.response.jurisdiction.clone(),
        year: result.response.year,
    });

    Ok(Json(result.response))
}

/// Handler for GET `/status` endpoint.
async fn handle_feed_status(
    AxumState(app_state): AxumState<AppState>,
) -> Json<FeedStatusResponse> {
    let session = app_state.session.read().await;
    Json(feed_status(&session))
}

/// Handler for POST `/refresh` endpoint.
///
/// Fetches the feed once. A successful fetch replaces the dataset wholesale.
/// A failed fetch answers 503 and leaves any earlier dataset in place.
async fn handle_refresh(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<RefreshResponse>, HttpError> {
    info!("Handling refresh request");

    let response: RefreshResponse = run_fetch(&app_state).await?;
    if response.outcome == RefreshOutcome::Failed {
        return Err(ApiError::FeedUnavailable {
            message: response.status.last_failure.unwrap_or_default(),
        }
        .into());
    }

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/jurisdictions", get(handle_list_jurisdictions))
        .route("/years", get(handle_list_years))
        .route("/holidays", get(handle_list_holidays))
        .route("/selection", get(handle_get_selection))
        .route("/selection", post(handle_update_selection))
        .route("/status", get(handle_feed_status))
        .route("/refresh", post(handle_refresh))
        .route("/live", get(live_events_handler))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Bank Holidays Server");

    let clock: Clock = Clock::for_timezone(&args.timezone)?;
    let today: Date = clock.today()?;
    info!(timezone = %args.timezone, %today, "Resolved current date");

    let loader: FeedLoader = FeedLoader::new(FeedConfig {
        url: args.feed_url.clone(),
        timeout: Duration::from_secs(args.timeout_secs),
    })?;
    info!(url = %args.feed_url, timeout_secs = args.timeout_secs, "Configured feed");

    let app_state: AppState = AppState {
        session: Arc::new(RwLock::new(Session::new(today))),
        loader: Arc::new(loader),
        clock,
        live: Arc::new(LiveEventBroadcaster::new()),
    };

    // Initial load runs in the background; until it settles the status is loading
    let initial_state: AppState = app_state.clone();
    tokio::spawn(async move {
        match run_fetch(&initial_state).await {
            Ok(response) if response.outcome == RefreshOutcome::Failed => {
                warn!(message = %response.message, "Initial feed load failed");
            }
            Ok(response) => info!(message = %response.message, "Initial feed load finished"),
            Err(e) => error!(error = %e, "Initial feed load could not be applied"),
        }
    });

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
