// Transport trait for submitting dashboards to Grafana
use crate::domain::dashboard::DashboardDocument;
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// Grafana answered with a status >= 400
    #[error("Grafana Dashboards API rejected the dashboard with status {status}")]
    Rejected { status: u16 },

    #[error("failed to serialize dashboard: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to reach Grafana: {0}")]
    Transport(#[from] reqwest::Error),
}

#[async_trait]
pub trait DashboardTransport: Send + Sync {
    /// POST the document and return the HTTP status code, whatever it is.
    /// Only failures to send or serialize are errors here.
    async fn post_dashboard(&self, document: &DashboardDocument) -> Result<u16, PublishError>;
}
