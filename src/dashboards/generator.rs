use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use k8s_openapi::api::core::v1::ConfigMap;
use tracing::{debug, info, instrument};

use crate::{
    api::constants::{DASHBOARDS_DIR, HEADER},
    error::{GeneratorError, Result},
};

use super::{
    configmap::{content_digest, create_dashboard_config_map, ManifestView},
    spec::{DashboardSpec, DASHBOARDS},
};

/// Turns the dashboard list into a multi-document ConfigMap stream.
///
/// Nothing is written until every dashboard has been read and rendered, so a
/// missing input never leaves a partial output file behind.
pub struct Generator {
    dashboards_dir: PathBuf,
    dashboards: &'static [DashboardSpec],
}

impl Default for Generator {
    fn default() -> Self {
        Generator::new(DASHBOARDS_DIR)
    }
}

impl Generator {
    pub fn new(dashboards_dir: impl Into<PathBuf>) -> Generator {
        Generator {
            dashboards_dir: dashboards_dir.into(),
            dashboards: &DASHBOARDS,
        }
    }

    pub fn dashboards(&self) -> &'static [DashboardSpec] {
        self.dashboards
    }

    pub fn read_dashboard(&self, dashboard: &DashboardSpec) -> Result<String> {
        let path = self.dashboards_dir.join(dashboard.file);
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => GeneratorError::FileNotFound { path },
            _ => GeneratorError::Read { path, source },
        })
    }

    /// Build one ConfigMap per dashboard, in list order. `progress` is called
    /// before each dashboard is read.
    pub fn build<F>(&self, mut progress: F) -> Result<Vec<ConfigMap>>
    where
        F: FnMut(&DashboardSpec),
    {
        let mut config_maps = Vec::with_capacity(self.dashboards.len());
        for dashboard in self.dashboards {
            progress(dashboard);
            let body = self.read_dashboard(dashboard)?;
            let bytes = body.len();
            let (cm, hash) = create_dashboard_config_map(dashboard, body);
            debug!(dashboard = dashboard.name, bytes, sha256 = %hash, "dashboard loaded");
            config_maps.push(cm);
        }
        Ok(config_maps)
    }

    /// Build and render in one step.
    pub fn generate<F>(&self, progress: F) -> Result<String>
    where
        F: FnMut(&DashboardSpec),
    {
        render(&self.build(progress)?)
    }
}

/// Render ConfigMaps as a YAML stream: the comment header, then each
/// manifest as its own `---` document.
pub fn render(config_maps: &[ConfigMap]) -> Result<String> {
    let mut buffer = String::new();
    for line in HEADER {
        buffer.push_str(line);
        buffer.push('\n');
    }
    for cm in config_maps {
        buffer.push_str("---\n");
        buffer.push_str(&serde_yaml::to_string(&ManifestView::from(cm))?);
    }
    Ok(buffer)
}

#[instrument(skip(stream), fields(bytes = stream.len()))]
pub fn write(output: &Path, stream: &str) -> Result<()> {
    fs::write(output, stream).map_err(|source| GeneratorError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    info!(sha256 = %content_digest(stream), "wrote ConfigMap stream");
    Ok(())
}

/// Compare a rendered stream with the file already on disk.
pub fn check(output: &Path, stream: &str) -> Result<()> {
    let existing = match fs::read_to_string(output) {
        Ok(existing) => existing,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(GeneratorError::Stale {
                path: output.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(GeneratorError::Read {
                path: output.to_path_buf(),
                source,
            })
        }
    };
    if existing != stream {
        return Err(GeneratorError::Stale {
            path: output.to_path_buf(),
        });
    }
    debug!(path = %output.display(), "output is up to date");
    Ok(())
}
