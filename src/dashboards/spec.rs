use std::fmt::Display;

/// A dashboard shipped as a ConfigMap. `file` is relative to the
/// dashboards directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardSpec {
    pub name: &'static str,
    pub file: &'static str,
    pub title: &'static str,
}

impl DashboardSpec {
    /// Key under which the dashboard body is stored in the ConfigMap data.
    pub fn data_key(&self) -> String {
        format!("{}.json", self.name)
    }
}

impl Display for DashboardSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.file)
    }
}

pub const DASHBOARDS: [DashboardSpec; 4] = [
    DashboardSpec {
        name: "redis-cluster-dashboard",
        file: "redis-cluster-dashboard.json",
        title: "Redis Enterprise Cluster Dashboard",
    },
    DashboardSpec {
        name: "redis-database-dashboard",
        file: "redis-database-dashboard.json",
        title: "Redis Enterprise Database Dashboard",
    },
    DashboardSpec {
        name: "redis-node-dashboard",
        file: "redis-node-dashboard.json",
        title: "Redis Enterprise Node Dashboard",
    },
    DashboardSpec {
        name: "redis-shard-dashboard",
        file: "redis-shard-dashboard.json",
        title: "Redis Enterprise Shard Dashboard",
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::DASHBOARDS;

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = DASHBOARDS.iter().map(|d| d.name).collect();
        assert_eq!(names.len(), DASHBOARDS.len());
    }

    #[test]
    fn data_key_uses_name() {
        assert_eq!(DASHBOARDS[0].data_key(), "redis-cluster-dashboard.json");
    }
}
