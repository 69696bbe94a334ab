// Dashboard publisher - Use case for provisioning one Grafana dashboard per metric
use crate::application::dashboard_transport::{DashboardTransport, PublishError};
use crate::application::panel_builder::PanelBuilder;
use crate::domain::dashboard::DashboardDocument;
use crate::domain::metric::{DatasourceRef, MetricDescriptor};
use crate::infrastructure::config::GrafanaConfig;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReceipt {
    pub uid: String,
    pub status: u16,
}

#[derive(Clone)]
pub struct DashboardPublisher {
    transport: Arc<dyn DashboardTransport>,
    panel_builder: Arc<dyn PanelBuilder>,
    grafana_config: GrafanaConfig,
}

impl DashboardPublisher {
    pub fn new(
        transport: Arc<dyn DashboardTransport>,
        panel_builder: Arc<dyn PanelBuilder>,
        grafana_config: GrafanaConfig,
    ) -> Self {
        Self {
            transport,
            panel_builder,
            grafana_config,
        }
    }

    pub fn build_document(
        &self,
        metric: &MetricDescriptor,
        datasource: &DatasourceRef,
    ) -> DashboardDocument {
        let panel = self.panel_builder.build_panel(metric, datasource);

        DashboardDocument::new(
            metric.id.clone(),
            metric.name.clone(),
            self.grafana_config.schema_version,
            self.grafana_config.refresh_interval.clone(),
            panel,
        )
    }

    /// Build the metric's dashboard and submit it to Grafana.
    ///
    /// Every outcome is logged here, so callers that only want best-effort
    /// provisioning can drop the result. Nothing is retried.
    pub async fn publish(
        &self,
        metric: &MetricDescriptor,
        datasource: &DatasourceRef,
    ) -> Result<PublishReceipt, PublishError> {
        let document = self.build_document(metric, datasource);
        tracing::debug!("Publishing dashboard {} ({})", document.uid(), metric.name);

        let result = match self.transport.post_dashboard(&document).await {
            Ok(status) if status >= 400 => Err(PublishError::Rejected { status }),
            Ok(status) => Ok(PublishReceipt {
                uid: metric.id.clone(),
                status,
            }),
            Err(e) => Err(e),
        };

        match &result {
            Ok(receipt) => {
                tracing::info!(
                    "📊 Grafana graphs 📊 for {} are ready!! (dashboard {}, status {})",
                    self.source_label(metric),
                    receipt.uid,
                    receipt.status
                );
            }
            Err(PublishError::Rejected { status }) => {
                tracing::error!(
                    "Error with POST request to Grafana Dashboards API in DashboardPublisher::publish (dashboard {}, status {})",
                    metric.id,
                    status
                );
            }
            Err(e) => {
                tracing::error!("Failed to publish dashboard {}: {}", metric.id, e);
            }
        }

        result
    }

    fn source_label<'a>(&'a self, metric: &'a MetricDescriptor) -> &'a str {
        self.grafana_config
            .source_name
            .as_deref()
            .unwrap_or(&metric.name)
    }
}
