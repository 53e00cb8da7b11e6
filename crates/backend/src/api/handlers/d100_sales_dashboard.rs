use axum::{extract::State, http::StatusCode, Json};
use contracts::dashboards::d100_sales_dashboard::{
    DashboardOptions, DashboardPage, FilterSelection,
};
use contracts::shared::api_error::ApiError;

use crate::dashboards::d100_sales_dashboard::service::SalesDashboard;
use crate::shared::state::{AppState, DashboardState};

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

fn ready(state: &AppState) -> Result<&SalesDashboard, (StatusCode, Json<ApiError>)> {
    match state.dashboard.as_ref() {
        DashboardState::Ready(dashboard) => Ok(dashboard),
        DashboardState::Failed(message) => {
            tracing::error!("D100 Dashboard: Dataset unavailable: {}", message);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiError::load_error(message.clone())),
            ))
        }
    }
}

/// GET /api/d100/options
pub async fn get_options(State(state): State<AppState>) -> ApiResult<DashboardOptions> {
    let dashboard = ready(&state)?;
    let options = dashboard.options();
    tracing::info!(
        "D100 Dashboard: Returning options for {} rows",
        options.total_row_count
    );
    Ok(Json(options))
}

/// POST /api/d100/dashboard
pub async fn render_dashboard(
    State(state): State<AppState>,
    Json(selection): Json<FilterSelection>,
) -> ApiResult<DashboardPage> {
    let dashboard = ready(&state)?;
    let page = dashboard.render(&selection);
    tracing::info!(
        "D100 Dashboard: {} of {} rows match ({} cities, {} customer types, {} genders)",
        page.row_count,
        page.total_row_count,
        selection.cities.len(),
        selection.customer_types.len(),
        selection.genders.len()
    );
    Ok(Json(page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d100_sales_dashboard::table::fixtures::two_row_table;
    use contracts::dashboards::d100_sales_dashboard::PageConfig;

    fn ready_state() -> AppState {
        AppState::new(DashboardState::Ready(SalesDashboard::new(
            PageConfig::default(),
            two_row_table(),
        )))
    }

    #[tokio::test]
    async fn test_options_and_render() {
        let state = ready_state();
        let Json(options) = get_options(State(state.clone())).await.unwrap();
        assert_eq!(options.filters.cities, vec!["A", "B"]);

        let Json(page) = render_dashboard(State(state), Json(options.default_selection))
            .await
            .unwrap();
        assert_eq!(page.row_count, 2);
        assert_eq!(page.kpis.total_sales, 150);
    }

    #[tokio::test]
    async fn test_failed_load_is_service_unavailable() {
        let state = AppState::new(DashboardState::Failed("dataset not found: x.xlsx".into()));

        let (status, Json(body)) = get_options(State(state.clone())).await.unwrap_err();
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body.is_load_error());
        assert_eq!(body.message, "dataset not found: x.xlsx");

        let (status, _) = render_dashboard(State(state), Json(FilterSelection::default()))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
