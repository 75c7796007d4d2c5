//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the actual computation.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};

use super::dto::{
    round_distance_km, ForecastQuery, ForecastRequest, ForecastResponse, HealthResponse,
    MatchDonorsRequest, MatchDonorsResponse, NearestHospitalsResponse, NearestQuery,
    OutlookResponse, RankRequest, RankResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{BloodGroup, GeoPoint, HospitalId, PlatformStats, TimeSeriesPoint};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

fn parse_blood_group(raw: &str) -> Result<BloodGroup, AppError> {
    raw.parse().map_err(AppError::BadRequest)
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the
/// collaborator store is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let store = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        store,
    }))
}

// =============================================================================
// Forecast Endpoints
// =============================================================================

/// GET /v1/hospitals/{hospital_id}/stock/{blood_group}/forecast
///
/// Linear-trend forecast of one blood group's stock at one hospital.
pub async fn stock_forecast(
    State(state): State<AppState>,
    Path((hospital_id, blood_group)): Path<(i64, String)>,
    Query(query): Query<ForecastQuery>,
) -> HandlerResult<crate::api::ForecastSeries> {
    let group = parse_blood_group(&blood_group)?;
    let horizon = query
        .horizon
        .unwrap_or(state.config.forecast.default_horizon);

    let series =
        services::forecast_stock(state.repository.as_ref(), HospitalId::new(hospital_id), group, horizon)
            .await?;
    Ok(Json(series))
}

/// GET /v1/hospitals/{hospital_id}/beds/forecast
///
/// Linear-trend forecast of available beds, capped at the hospital's total
/// bed capacity.
pub async fn bed_forecast(
    State(state): State<AppState>,
    Path(hospital_id): Path<i64>,
    Query(query): Query<ForecastQuery>,
) -> HandlerResult<crate::api::ForecastSeries> {
    let horizon = query
        .horizon
        .unwrap_or(state.config.forecast.default_horizon);

    let series =
        services::forecast_beds(state.repository.as_ref(), HospitalId::new(hospital_id), horizon)
            .await?;
    Ok(Json(series))
}

/// POST /v1/forecast
///
/// Forecast over caller-supplied points. Unparseable rows are dropped and
/// counted; they never fail the request.
pub async fn inline_forecast(
    State(state): State<AppState>,
    Json(request): Json<ForecastRequest>,
) -> HandlerResult<ForecastResponse> {
    let horizon = request
        .horizon
        .unwrap_or(state.config.forecast.default_horizon);

    let mut points = Vec::with_capacity(request.points.len());
    let mut unparseable = 0usize;
    for raw in &request.points {
        match (NaiveDate::parse_from_str(&raw.date, "%Y-%m-%d"), raw.value) {
            (Ok(date), Some(value)) => points.push(TimeSeriesPoint { date, value }),
            _ => {
                tracing::warn!(series = %request.series_id, date = %raw.date, "dropping unparseable forecast point");
                unparseable += 1;
            }
        }
    }
    points.sort_by_key(|p| p.date);

    let mut series =
        services::compute_forecast(&points, horizon, 0.0, None, Utc::now().date_naive());
    series.dropped_points += unparseable;

    Ok(Json(ForecastResponse {
        series_id: request.series_id,
        series,
    }))
}

/// GET /v1/hospitals/{hospital_id}/stock/{blood_group}/outlook
///
/// Consumption-rate urgency view over the recorded stock history.
pub async fn stock_outlook(
    State(state): State<AppState>,
    Path((hospital_id, blood_group)): Path<(i64, String)>,
) -> HandlerResult<OutlookResponse> {
    let group = parse_blood_group(&blood_group)?;

    let outlook =
        services::stock_outlook(state.repository.as_ref(), HospitalId::new(hospital_id), group)
            .await?;
    Ok(Json(OutlookResponse {
        insufficient_data: outlook.is_none(),
        outlook,
    }))
}

// =============================================================================
// Proximity Endpoints
// =============================================================================

/// GET /v1/hospitals/nearest
///
/// The K nearest hospitals to the caller's position, inventory included.
pub async fn nearest_hospitals(
    State(state): State<AppState>,
    Query(query): Query<NearestQuery>,
) -> HandlerResult<NearestHospitalsResponse> {
    let (lat, lng) = match (query.lat, query.lng) {
        (Some(lat), Some(lng)) => (lat, lng),
        _ => {
            return Err(AppError::BadRequest(
                "Values lat and lng are required".to_string(),
            ))
        }
    };
    let k = query.k.unwrap_or(state.config.proximity.default_k);

    let mut hospitals = services::nearest_hospitals(
        state.repository.as_ref(),
        &GeoPoint::new(lat, lng),
        k,
    )
    .await?;
    for ranked in &mut hospitals {
        ranked.distance_km = round_distance_km(ranked.distance_km);
    }

    Ok(Json(NearestHospitalsResponse { hospitals }))
}

/// POST /v1/donors/match
///
/// The K best donors for a blood group: matching group, available, no
/// disqualifying conditions, nearest first.
pub async fn match_donors(
    State(state): State<AppState>,
    Json(request): Json<MatchDonorsRequest>,
) -> HandlerResult<MatchDonorsResponse> {
    let group = parse_blood_group(&request.blood_group)?;
    let k = request.k.unwrap_or(state.config.proximity.default_k);

    let mut donors = services::match_donors(
        state.repository.as_ref(),
        group,
        &request.origin.into(),
        k,
    )
    .await?;
    for ranked in &mut donors {
        ranked.distance_km = round_distance_km(ranked.distance_km);
    }

    Ok(Json(MatchDonorsResponse { donors }))
}

/// POST /v1/proximity/rank
///
/// Rank caller-supplied candidates around an origin with optional
/// eligibility filters. Malformed candidate rows are dropped and counted.
pub async fn rank_candidates(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> HandlerResult<RankResponse> {
    let k = request.k.unwrap_or(state.config.proximity.default_k);

    let mut candidates = Vec::with_capacity(request.candidates.len());
    let mut skipped = 0usize;
    for dto in request.candidates {
        match dto.into_candidate() {
            Ok(candidate) => candidates.push(candidate),
            Err(reason) => {
                tracing::warn!(%reason, "dropping malformed candidate row");
                skipped += 1;
            }
        }
    }

    let mut results =
        services::rank_candidates(&request.origin.into(), candidates, &request.filters, k)?;
    for ranked in &mut results {
        ranked.distance_km = round_distance_km(ranked.distance_km);
    }

    Ok(Json(RankResponse {
        results,
        skipped_candidates: skipped,
    }))
}

// =============================================================================
// Platform Stats
// =============================================================================

/// GET /v1/stats
///
/// Platform-wide totals for the dashboard.
pub async fn platform_stats(State(state): State<AppState>) -> HandlerResult<PlatformStats> {
    let stats = services::platform_stats(state.repository.as_ref()).await?;
    Ok(Json(stats))
}
