// Main entry point - Dependency injection and dashboard provisioning
mod domain;
mod application;
mod infrastructure;

use std::sync::Arc;
use futures::future::join_all;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_publisher::DashboardPublisher;
use crate::infrastructure::config::{load_grafana_config, load_metrics_config};
use crate::infrastructure::grafana_client::GrafanaClient;
use crate::infrastructure::grafana_panel::TimeSeriesPanelBuilder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let grafana_config = load_grafana_config()?;
    let metrics_config = load_metrics_config()?;

    // Create adapters (infrastructure layer)
    let transport = Arc::new(GrafanaClient::new(
        grafana_config.grafana_url.clone(),
        grafana_config.api_token.clone(),
    ));
    let panel_builder = Arc::new(TimeSeriesPanelBuilder::new(grafana_config.panel.clone()));

    // Create publisher (application layer)
    let publisher = DashboardPublisher::new(transport.clone(), panel_builder, grafana_config);

    tracing::info!(
        "Provisioning {} dashboards via {}",
        metrics_config.metrics.len(),
        transport.dashboards_endpoint()
    );

    // Each publish logs its own outcome; only the tally is reported here
    let results = join_all(
        metrics_config
            .metrics
            .iter()
            .map(|metric| publisher.publish(metric, &metrics_config.datasource)),
    )
    .await;

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        tracing::warn!("{} of {} dashboards were not provisioned", failed, results.len());
    }

    Ok(())
}
