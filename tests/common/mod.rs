#![allow(dead_code)]

use std::{
    fs,
    path::PathBuf,
    process::{Command, Output},
};

use grafana_dashboard_configmaps::dashboards::spec::{DashboardSpec, DASHBOARDS};
use rstest::fixture;
use serde::Deserialize;
use serde_yaml::Value;
use tempfile::TempDir;

/// A scratch working directory with a populated `dashboards/` directory.
pub struct Workspace {
    pub root: TempDir,
}

impl Workspace {
    pub fn dashboards_dir(&self) -> PathBuf {
        self.root.path().join("dashboards")
    }

    pub fn output(&self) -> PathBuf {
        self.root.path().join("grafana-dashboards-configmaps.yaml")
    }

    pub fn write_dashboard(&self, dashboard: &DashboardSpec, body: &str) {
        fs::write(self.dashboards_dir().join(dashboard.file), body)
            .expect("unable to write dashboard");
    }

    /// Run the generator binary with the workspace as working directory.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_dashboard-configmaps"))
            .args(args)
            .current_dir(self.root.path())
            .env("RUST_LOG", "info")
            .output()
            .expect("unable to run dashboard-configmaps")
    }

    pub fn remove_dashboard(&self, dashboard: &DashboardSpec) {
        fs::remove_file(self.dashboards_dir().join(dashboard.file))
            .expect("unable to remove dashboard");
    }
}

/// Body written for each dashboard by the fixture. Multi-line and indented
/// like real Grafana exports.
pub fn sample_body(dashboard: &DashboardSpec) -> String {
    format!(
        concat!(
            "{{\n",
            "  \"title\": \"{}\",\n",
            "  \"uid\": \"{}\",\n",
            "  \"panels\": [\n",
            "    {{\"id\": 1, \"type\": \"stat\"}}\n",
            "  ]\n",
            "}}\n",
        ),
        dashboard.title, dashboard.name
    )
}

#[fixture]
pub fn workspace() -> Workspace {
    let root = tempfile::tempdir().expect("unable to create temp dir");
    fs::create_dir(root.path().join("dashboards")).expect("unable to create dashboards dir");
    let ws = Workspace { root };
    for dashboard in DASHBOARDS.iter() {
        ws.write_dashboard(dashboard, &sample_body(dashboard));
    }
    ws
}

/// Split a rendered stream into its YAML documents.
pub fn documents(stream: &str) -> Vec<Value> {
    serde_yaml::Deserializer::from_str(stream)
        .map(|doc| Value::deserialize(doc).expect("invalid yaml document"))
        .collect()
}

pub fn field<'a>(doc: &'a Value, path: &[&str]) -> &'a Value {
    path.iter().fold(doc, |v, key| &v[*key])
}
