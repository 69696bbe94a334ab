// Metric domain model
use serde::Deserialize;
use std::fmt;

/// A metric that gets its own dashboard. `id` doubles as the dashboard uid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MetricDescriptor {
    pub id: String,
    pub name: String,
}

impl MetricDescriptor {
    #[cfg(test)]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Identifier of a Grafana datasource, passed through to the panel untouched
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct DatasourceRef(String);

impl DatasourceRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DatasourceRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for DatasourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
