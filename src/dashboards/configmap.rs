use std::collections::BTreeMap;

use k8s_openapi::{api::core::v1::ConfigMap, Resource};
use kube::api::ObjectMeta;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::api::constants::{
    DASHBOARD_LABELS, DASHBOARD_NAMESPACE, DASHBOARD_NAME_PREFIX, DESCRIPTION_ANNOTATION,
};

use super::spec::DashboardSpec;

/// Wraps a dashboard body in a ConfigMap. Returns the ConfigMap together with
/// the lower-hex sha256 of the body.
pub fn create_dashboard_config_map(
    dashboard: &DashboardSpec,
    body: String,
) -> (ConfigMap, String) {
    let hash = content_digest(&body);
    (
        ConfigMap {
            metadata: ObjectMeta {
                name: Some(format!("{DASHBOARD_NAME_PREFIX}{}", dashboard.name)),
                namespace: Some(DASHBOARD_NAMESPACE.to_string()),
                labels: Some(DASHBOARD_LABELS.clone()),
                annotations: Some(BTreeMap::from([(
                    DESCRIPTION_ANNOTATION.to_string(),
                    dashboard.title.to_string(),
                )])),
                ..Default::default()
            },
            data: Some(BTreeMap::from([(dashboard.data_key(), body)])),
            ..Default::default()
        },
        hash,
    )
}

pub fn content_digest(content: &str) -> String {
    let hash = Sha256::digest(content.as_bytes());
    base16ct::lower::encode_string(&hash)
}

/// Serialization view of a ConfigMap that emits keys in manifest order
/// (apiVersion, kind, metadata, data) rather than the alphabetical order of
/// the k8s-openapi field layout.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestView<'a> {
    api_version: &'static str,
    kind: &'static str,
    metadata: MetadataView<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a BTreeMap<String, String>>,
}

#[derive(Serialize)]
struct MetadataView<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    namespace: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    labels: Option<&'a BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    annotations: Option<&'a BTreeMap<String, String>>,
}

impl<'a> From<&'a ConfigMap> for ManifestView<'a> {
    fn from(cm: &'a ConfigMap) -> Self {
        ManifestView {
            api_version: ConfigMap::API_VERSION,
            kind: ConfigMap::KIND,
            metadata: MetadataView {
                name: cm.metadata.name.as_deref(),
                namespace: cm.metadata.namespace.as_deref(),
                labels: cm.metadata.labels.as_ref(),
                annotations: cm.metadata.annotations.as_ref(),
            },
            data: cm.data.as_ref(),
        }
    }
}
