// Domain layer - Metrics and the dashboards built for them
pub mod dashboard;
pub mod metric;
