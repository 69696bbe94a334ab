use crate::domain::metric::{DatasourceRef, MetricDescriptor};
use serde::Deserialize;
use std::collections::HashMap;

const ENV_PREFIX: &str = "PROVISIONER";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GrafanaConfig {
    /// Base URL of the Grafana server, without the API path
    #[serde(default = "default_grafana_url")]
    pub grafana_url: String,
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval: String,
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub api_token: Option<String>,
    /// Name of the container or service the metrics come from
    #[serde(default)]
    pub source_name: Option<String>,
    #[serde(default)]
    pub panel: PanelConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PanelConfig {
    #[serde(default = "default_panel_kind")]
    pub kind: String,
    /// Query for the panel target; `${id}`, `${name}` and `${datasource}` are substituted
    #[serde(default = "default_query_template")]
    pub query_template: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MetricsConfig {
    pub datasource: DatasourceRef,
    #[serde(default)]
    pub metrics: Vec<MetricDescriptor>,
}

fn default_grafana_url() -> String {
    "http://localhost:32000".to_string()
}

fn default_refresh_interval() -> String {
    "10s".to_string()
}

fn default_schema_version() -> u32 {
    16
}

fn default_panel_kind() -> String {
    "timeseries".to_string()
}

fn default_query_template() -> String {
    "${name}".to_string()
}

impl Default for GrafanaConfig {
    fn default() -> Self {
        Self {
            grafana_url: default_grafana_url(),
            refresh_interval: default_refresh_interval(),
            schema_version: default_schema_version(),
            api_token: None,
            source_name: None,
            panel: PanelConfig::default(),
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            kind: default_panel_kind(),
            query_template: default_query_template(),
        }
    }
}

pub fn load_grafana_config() -> anyhow::Result<GrafanaConfig> {
    build_grafana_config(
        config::File::with_name("config/grafana").required(false),
        config::Environment::with_prefix(ENV_PREFIX),
    )
}

/// Layer `env` over `file`. Env keys use `_` after the prefix and `__` for nesting.
fn build_grafana_config<S>(file: S, env: config::Environment) -> anyhow::Result<GrafanaConfig>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .add_source(file)
        .add_source(env.prefix_separator("_").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_metrics_config() -> anyhow::Result<MetricsConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/metrics"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Replace `${key}` template variables in a query string.
/// Substituted values are never rescanned; unknown placeholders are kept as written.
pub fn prepare_query(query: &str, vars: &HashMap<String, String>) -> String {
    let mut result = String::with_capacity(query.len());
    let mut rest = query;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let key = &after[..end];
                match vars.get(key) {
                    Some(value) => result.push_str(value),
                    None => result.push_str(&rest[start..start + 2 + end + 1]),
                }
                rest = &after[end + 1..];
            }
            None => {
                result.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    result.push_str(rest);
    result
}
