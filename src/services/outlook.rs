//! Consumption-rate heuristic for restock urgency.
//!
//! This is a deliberately separate view from the regression forecast: it
//! looks only at how fast stock has been draining and estimates how many
//! recording periods remain before the shelf is empty. The two views can
//! disagree; both are exposed to callers unreconciled.

use crate::api::{
    BloodGroup, DepletionEstimate, HospitalId, Recommendation, StockOutlook, TimeSeriesPoint,
};
use crate::db::repository::RepositoryResult;
use crate::db::FullRepository;

/// A stock expected to run out within this many periods is flagged urgent.
pub const URGENT_THRESHOLD_PERIODS: i64 = 7;

/// Number of most-recent samples the heuristic looks at.
pub const OUTLOOK_WINDOW: usize = 30;

/// Compute the urgency view over a history ordered most-recent-first.
///
/// For each adjacent pair where the value decreased, the decrease is
/// accumulated; the average over the count of decreasing transitions is the
/// consumption per recording period. With no decreasing transition the
/// stock is reported stable and no depletion estimate is made.
///
/// Returns `None` for an empty history; that is the caller's
/// insufficient-data condition, not an error.
pub fn compute_outlook(group: BloodGroup, recent_first: &[TimeSeriesPoint]) -> Option<StockOutlook> {
    let current_stock = recent_first.first()?.value;

    let mut total_decrease = 0.0;
    let mut decreasing_transitions = 0u32;
    for pair in recent_first.windows(2) {
        if pair[1].value < pair[0].value {
            total_decrease += pair[0].value - pair[1].value;
            decreasing_transitions += 1;
        }
    }

    let avg_consumption = if decreasing_transitions > 0 {
        total_decrease / decreasing_transitions as f64
    } else {
        0.0
    };

    let periods_until_empty = if avg_consumption > 0.0 {
        DepletionEstimate::Periods((current_stock / avg_consumption).round() as i64)
    } else {
        DepletionEstimate::stable()
    };

    let recommendation = match periods_until_empty.periods() {
        Some(periods) if periods < URGENT_THRESHOLD_PERIODS => Recommendation::UrgentRestockNeeded,
        _ => Recommendation::Ok,
    };

    Some(StockOutlook {
        blood_group: group,
        current_stock,
        avg_consumption,
        periods_until_empty,
        recommendation,
    })
}

/// Outlook for one blood group at one hospital, over the most recent
/// [`OUTLOOK_WINDOW`] recorded samples.
pub async fn stock_outlook(
    repo: &dyn FullRepository,
    hospital: HospitalId,
    group: BloodGroup,
) -> RepositoryResult<Option<StockOutlook>> {
    let ascending = repo.fetch_stock_history(hospital, group).await?;
    let recent_first: Vec<TimeSeriesPoint> =
        ascending.into_iter().rev().take(OUTLOOK_WINDOW).collect();
    Ok(compute_outlook(group, &recent_first))
}

#[cfg(test)]
#[path = "outlook_tests.rs"]
mod outlook_tests;
