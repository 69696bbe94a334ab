// Dashboard domain model, serialized as the Grafana dashboards API payload
use serde::Serialize;
use serde_json::Value;

pub const DASHBOARD_TAGS: [&str; 1] = ["templated"];
pub const DASHBOARD_TIMEZONE: &str = "browser";
pub const DASHBOARD_VERSION: u32 = 0;
pub const ROOT_FOLDER_ID: i64 = 0;

/// Body of `POST /api/dashboards/db`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDocument {
    pub dashboard: DashboardSpec,
    pub folder_id: i64,
    pub overwrite: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSpec {
    /// Always null so Grafana matches on `uid` instead
    pub id: Option<i64>,
    pub uid: String,
    pub title: String,
    pub tags: Vec<String>,
    pub timezone: String,
    pub schema_version: u32,
    pub version: u32,
    pub refresh: String,
    pub panels: Vec<Panel>,
}

/// A Grafana panel definition. Its shape belongs to whoever built it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Panel(Value);

impl Panel {
    pub fn new(definition: Value) -> Self {
        Self(definition)
    }

    #[cfg(test)]
    pub fn definition(&self) -> &Value {
        &self.0
    }
}

impl DashboardDocument {
    pub fn new(
        uid: String,
        title: String,
        schema_version: u32,
        refresh: String,
        panel: Panel,
    ) -> Self {
        Self {
            dashboard: DashboardSpec {
                id: None,
                uid,
                title,
                tags: DASHBOARD_TAGS.iter().map(|t| t.to_string()).collect(),
                timezone: DASHBOARD_TIMEZONE.to_string(),
                schema_version,
                version: DASHBOARD_VERSION,
                refresh,
                panels: vec![panel],
            },
            folder_id: ROOT_FOLDER_ID,
            overwrite: true,
        }
    }

    pub fn uid(&self) -> &str {
        &self.dashboard.uid
    }
}
