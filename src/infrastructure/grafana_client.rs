// Grafana HTTP API client
use crate::application::dashboard_transport::{DashboardTransport, PublishError};
use crate::domain::dashboard::DashboardDocument;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

const DASHBOARDS_PATH: &str = "/api/dashboards/db";

#[derive(Debug, Clone)]
pub struct GrafanaClient {
    base_url: String,
    api_token: Option<String>,
    client: reqwest::Client,
}

impl GrafanaClient {
    pub fn new(base_url: String, api_token: Option<String>) -> Self {
        Self::with_client(base_url, api_token, reqwest::Client::new())
    }

    pub fn with_client(base_url: String, api_token: Option<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
            client,
        }
    }

    pub fn dashboards_endpoint(&self) -> String {
        format!("{}{}", self.base_url, DASHBOARDS_PATH)
    }
}

#[async_trait]
impl DashboardTransport for GrafanaClient {
    async fn post_dashboard(&self, document: &DashboardDocument) -> Result<u16, PublishError> {
        let body = serde_json::to_vec(document)?;
        let url = self.dashboards_endpoint();
        tracing::debug!("POST {} ({} bytes) for dashboard {}", url, body.len(), document.uid());

        let mut request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);

        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        Ok(response.status().as_u16())
    }
}
