use contracts::dashboards::d100_sales_dashboard::{DashboardOptions, DashboardPage, FilterSelection};
use contracts::shared::api_error::ApiError;
use gloo_net::http::Response;

const API_BASE: &str = "/api/d100";

/// Turns a non-2xx response into a message, preferring the server's error body
async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ApiError>().await {
        Ok(err) if err.is_load_error() => format!("Failed to load sales data: {}", err.message),
        Ok(err) => err.message,
        Err(_) => format!("HTTP error: {}", status),
    }
}

/// Get page metadata and filter options
pub async fn get_options() -> Result<DashboardOptions, String> {
    let url = format!("{}/options", API_BASE);

    let response = gloo_net::http::Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Compose the dashboard for a filter selection
pub async fn render_dashboard(selection: &FilterSelection) -> Result<DashboardPage, String> {
    let url = format!("{}/dashboard", API_BASE);

    let response = gloo_net::http::Request::post(&url)
        .json(selection)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
