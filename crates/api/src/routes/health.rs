use axum::extract::State;
use axum::{routing::get, Json, Router};
use roster_db::repositories::EmployeeRepo;
use serde::Serialize;

use crate::state::AppState;

/// Readiness of the roster store.
#[derive(Serialize)]
pub struct RosterHealth {
    /// `ok` when the employees table answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    /// Rows currently on the roster; `null` when the table is unreadable.
    pub employees: Option<i64>,
}

/// GET /health
///
/// Counts the roster rather than pinging the connection, so a missing
/// `employees` table also reports `degraded`.
async fn roster_health(State(state): State<AppState>) -> Json<RosterHealth> {
    let employees = match EmployeeRepo::count(&state.pool).await {
        Ok(count) => Some(count),
        Err(e) => {
            tracing::warn!(error = %e, "Roster store is not answering");
            None
        }
    };

    Json(RosterHealth {
        status: if employees.is_some() { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        employees,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(roster_health))
}
