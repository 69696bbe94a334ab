// Default Grafana panel: one time series target per metric
use crate::application::panel_builder::PanelBuilder;
use crate::domain::dashboard::Panel;
use crate::domain::metric::{DatasourceRef, MetricDescriptor};
use crate::infrastructure::config::{prepare_query, PanelConfig};
use serde_json::json;
use std::collections::HashMap;

const PANEL_ID: u32 = 1;
const GRID_WIDTH: u32 = 24;
const GRID_HEIGHT: u32 = 12;

#[derive(Debug, Clone)]
pub struct TimeSeriesPanelBuilder {
    panel_config: PanelConfig,
}

impl TimeSeriesPanelBuilder {
    pub fn new(panel_config: PanelConfig) -> Self {
        Self { panel_config }
    }

    fn query_for(&self, metric: &MetricDescriptor, datasource: &DatasourceRef) -> String {
        let mut vars = HashMap::new();
        vars.insert("id".to_string(), metric.id.clone());
        vars.insert("name".to_string(), metric.name.clone());
        vars.insert("datasource".to_string(), datasource.to_string());
        prepare_query(&self.panel_config.query_template, &vars)
    }
}

impl PanelBuilder for TimeSeriesPanelBuilder {
    fn build_panel(&self, metric: &MetricDescriptor, datasource: &DatasourceRef) -> Panel {
        let expr = self.query_for(metric, datasource);
        tracing::debug!("Building {} panel for {} with query {}", self.panel_config.kind, metric.id, expr);

        Panel::new(json!({
            "id": PANEL_ID,
            "type": self.panel_config.kind,
            "title": metric.name,
            "datasource": datasource.as_str(),
            "gridPos": { "x": 0, "y": 0, "w": GRID_WIDTH, "h": GRID_HEIGHT },
            "targets": [
                {
                    "refId": "A",
                    "expr": expr,
                    "legendFormat": "{{instance}}"
                }
            ]
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_panel_queries_metric_name() {
        let builder = TimeSeriesPanelBuilder::new(PanelConfig::default());
        let metric = MetricDescriptor::new("cpu-1", "process_cpu_seconds_total");

        let panel = builder.build_panel(&metric, &DatasourceRef::from("prometheus-ds"));
        let definition = panel.definition();

        assert_eq!(definition["type"], "timeseries");
        assert_eq!(definition["title"], "process_cpu_seconds_total");
        assert_eq!(definition["datasource"], "prometheus-ds");
        assert_eq!(definition["targets"][0]["expr"], "process_cpu_seconds_total");
        assert_eq!(definition["gridPos"]["w"], 24);
    }

    #[test]
    fn test_query_template_substitutes_metric_fields() {
        let builder = TimeSeriesPanelBuilder::new(PanelConfig {
            kind: "graph".to_string(),
            query_template: "rate(${name}{job=\"${id}\"}[1m])".to_string(),
        });
        let metric = MetricDescriptor::new("api", "http_requests_total");

        let panel = builder.build_panel(&metric, &DatasourceRef::from("prom"));

        assert_eq!(panel.definition()["type"], "graph");
        assert_eq!(
            panel.definition()["targets"][0]["expr"],
            "rate(http_requests_total{job=\"api\"}[1m])"
        );
    }

    #[test]
    fn test_metric_name_with_placeholders_is_inserted_verbatim() {
        let builder = TimeSeriesPanelBuilder::new(PanelConfig::default());
        let metric = MetricDescriptor::new("cpu-1", "up_${datasource}_${id}");
        let datasource = DatasourceRef::from("prom");

        let exprs: std::collections::HashSet<String> = (0..64)
            .map(|_| {
                let panel = builder.build_panel(&metric, &datasource);
                panel.definition()["targets"][0]["expr"].as_str().unwrap().to_string()
            })
            .collect();

        assert_eq!(exprs.len(), 1);
        assert!(exprs.contains("up_${datasource}_${id}"));
    }
}
