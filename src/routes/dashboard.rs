//! Dashboard routes: aggregated statistics for the overview page.

use axum::{extract::State, Json};
use axum_extra::extract::Query;

use crate::errors::AppError;
use crate::models::OfficeQuery;
use crate::services::dashboard::{self, DashboardStats};
use crate::AppState;

/// GET /dashboard/stats?officeIds=... — aggregated dashboard statistics.
pub async fn stats(
    State(state): State<AppState>,
    Query(query): Query<OfficeQuery>,
) -> Result<Json<DashboardStats>, AppError> {
    let filter = query.to_filter()?;
    let stats = dashboard::get_stats(state.repo.as_ref(), &filter, state.clock.today()).await?;
    Ok(Json(stats))
}
