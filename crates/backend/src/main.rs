pub mod api;
pub mod dashboards;
pub mod routes;
pub mod shared;
pub mod system;

use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::dashboards::d100_sales_dashboard::service::load_dashboard;
use crate::shared::state::{AppState, DashboardState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = shared::config::load_config()?;

    // Loaded once; every request re-runs the pipeline over this table
    let dashboard = match load_dashboard(&config.dataset) {
        Ok(dashboard) => DashboardState::Ready(dashboard),
        Err(e) => {
            tracing::error!("D100 Dashboard: Failed to load dataset: {}", e);
            DashboardState::Failed(e.to_string())
        }
    };

    let app = routes::configure_routes(AppState::new(dashboard));

    let port = config.server.port;
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
