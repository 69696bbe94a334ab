// Panel builder trait - Produces the panel embedded in each dashboard
use crate::domain::dashboard::Panel;
use crate::domain::metric::{DatasourceRef, MetricDescriptor};

pub trait PanelBuilder: Send + Sync {
    /// Build the single panel shown on the metric's dashboard
    fn build_panel(&self, metric: &MetricDescriptor, datasource: &DatasourceRef) -> Panel;
}
