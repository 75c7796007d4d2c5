//! Linear-trend forecasting over observed stock and bed histories.
//!
//! The forecaster fits `value = a + b*index` by ordinary least squares over
//! the sample index, then extends the line across the forward horizon. It is
//! deliberately a simple, explainable extrapolation; no model confidence is
//! attached.

use chrono::{Duration, NaiveDate, Utc};

use crate::algorithms::fit_line;
use crate::api::{BloodGroup, ForecastPoint, ForecastSeries, HospitalId, TimeSeriesPoint};
use crate::db::repository::RepositoryResult;
use crate::db::FullRepository;

/// Forward horizon used when a request does not specify one.
pub const DEFAULT_HORIZON: usize = 7;

/// Drop samples a collaborator store should never have produced.
///
/// Stock and bed counts are non-negative; a negative or non-finite value is
/// a bad row, not a signal. Each dropped row is logged and counted so the
/// response metadata can surface the loss.
fn sanitize(history: &[TimeSeriesPoint]) -> (Vec<TimeSeriesPoint>, usize) {
    let mut clean = Vec::with_capacity(history.len());
    let mut dropped = 0usize;
    for point in history {
        if point.value.is_finite() && point.value >= 0.0 {
            clean.push(*point);
        } else {
            tracing::warn!(date = %point.date, value = point.value, "dropping malformed history sample");
            dropped += 1;
        }
    }
    (clean, dropped)
}

/// Compute a forecast covering the observed span plus `horizon` days.
///
/// One point per calendar day: index `i` is dated `first_observed + i` days
/// when history exists, `today + i` days otherwise. Duplicate-date samples
/// are kept as separate regression samples. Every predicted value is
/// clamped to `floor` and, when supplied, to `ceiling` (bed forecasts pass
/// the hospital's total beds).
///
/// An empty (or fully dropped) history yields a zero forecast with
/// `insufficient_data` set; that is a condition for the caller to render,
/// not an error.
pub fn compute_forecast(
    history: &[TimeSeriesPoint],
    horizon: usize,
    floor: f64,
    ceiling: Option<f64>,
    today: NaiveDate,
) -> ForecastSeries {
    let (clean, dropped_points) = sanitize(history);

    if clean.is_empty() {
        let points = (0..horizon)
            .map(|i| ForecastPoint {
                date: today + Duration::days(i as i64),
                historical_value: None,
                predicted_value: 0.0,
            })
            .collect();
        return ForecastSeries {
            insufficient_data: true,
            dropped_points,
            points,
        };
    }

    let values: Vec<f64> = clean.iter().map(|p| p.value).collect();
    let fit = fit_line(&values);
    let first_date = clean[0].date;
    let n = clean.len();

    let points = (0..n + horizon)
        .map(|i| {
            let mut predicted = fit.value_at(i).max(floor);
            if let Some(cap) = ceiling {
                predicted = predicted.min(cap);
            }
            ForecastPoint {
                date: first_date + Duration::days(i as i64),
                historical_value: clean.get(i).map(|p| p.value),
                predicted_value: predicted,
            }
        })
        .collect();

    ForecastSeries {
        insufficient_data: false,
        dropped_points,
        points,
    }
}

/// Forecast the stock of one blood group at one hospital.
pub async fn forecast_stock(
    repo: &dyn FullRepository,
    hospital: HospitalId,
    group: BloodGroup,
    horizon: usize,
) -> RepositoryResult<ForecastSeries> {
    let history = repo.fetch_stock_history(hospital, group).await?;
    Ok(compute_forecast(
        &history,
        horizon,
        0.0,
        None,
        Utc::now().date_naive(),
    ))
}

/// Forecast available beds at one hospital, capped at its total beds.
pub async fn forecast_beds(
    repo: &dyn FullRepository,
    hospital: HospitalId,
    horizon: usize,
) -> RepositoryResult<ForecastSeries> {
    let record = repo.fetch_hospital(hospital).await?;
    let history = repo.fetch_bed_history(hospital).await?;
    Ok(compute_forecast(
        &history,
        horizon,
        0.0,
        Some(record.total_beds as f64),
        Utc::now().date_naive(),
    ))
}

#[cfg(test)]
#[path = "forecast_tests.rs"]
mod forecast_tests;
