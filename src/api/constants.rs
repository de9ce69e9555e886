use std::collections::BTreeMap;

use lazy_static::lazy_static;

pub const DASHBOARD_NAMESPACE: &str = "openshift-monitoring";
pub const DASHBOARD_NAME_PREFIX: &str = "grafana-dashboard-";
pub const DASHBOARDS_DIR: &str = "dashboards";
pub const OUTPUT_FILE: &str = "grafana-dashboards-configmaps.yaml";

/// Label the OpenShift Grafana operator watches for. The value must be the
/// string "1", not an integer.
pub const DISCOVERY_LABEL: &str = "grafana_dashboard";
pub const DISCOVERY_LABEL_VALUE: &str = "1";

pub const DESCRIPTION_ANNOTATION: &str = "description";

pub const HEADER: &[&str] = &[
    "# Grafana Dashboards ConfigMaps",
    "# Purpose: Official Redis Enterprise dashboards for automatic import",
    "# Source: https://github.com/redis-field-engineering/redis-enterprise-observability",
    "# Label: grafana_dashboard=1 enables automatic import in OpenShift Grafana",
];

lazy_static! {
    pub static ref DASHBOARD_LABELS: BTreeMap<String, String> = BTreeMap::from([(
        DISCOVERY_LABEL.to_string(),
        DISCOVERY_LABEL_VALUE.to_string(),
    )]);
}
