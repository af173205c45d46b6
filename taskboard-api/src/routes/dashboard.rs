/// Dashboard endpoint
///
/// # Endpoint
///
/// ```text
/// GET /dashboard
/// ```
///
/// # Response
///
/// ```json
/// {
///   "totalEmployees": 3,
///   "totalTasks": 2,
///   "pendingTasks": 1,
///   "inProgressTasks": 0,
///   "completedTasks": 1
/// }
/// ```

use crate::{
    app::AppState,
    error::{ApiResult, Json},
};
use axum::extract::State;
use taskboard_shared::models::dashboard::DashboardStats;

/// Dashboard handler
///
/// The five counts are independent reads of committed state at call time;
/// see [`DashboardStats::compute`] for the consistency contract.
pub async fn get_dashboard(State(state): State<AppState>) -> ApiResult<Json<DashboardStats>> {
    let stats = DashboardStats::compute(&state.db).await?;
    Ok(Json(stats))
}
