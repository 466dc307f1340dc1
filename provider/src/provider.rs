use crate::data_source::{CustomResourceDataSource, DataSource};
use crate::diagnostics::Diagnostics;
use crate::error::{self, Result};
use crate::manifest::ManifestDataSource;
use crate::resource::{CustomResource, Resource};
use crate::schema::{Attribute, AttributeType, Schema};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use log::{debug, info};
use model::{
    CrdKind, RedisEnterpriseActiveActiveDatabase, RedisEnterpriseDatabase,
    RedisEnterpriseRemoteCluster,
};
use serde::Deserialize;
use serde_json::Value;
use snafu::ResultExt;
use std::path::PathBuf;

/// What configuring the provider produced, handed to every data source and resource.
#[derive(Clone, Default)]
pub struct ProviderData {
    client: Option<Client>,
}

impl ProviderData {
    pub fn new(client: Client) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Provider data without a Kubernetes client. Only manifests can be rendered with it.
    pub fn offline() -> Self {
        Self::default()
    }

    pub fn client(&self) -> Option<&Client> {
        self.client.as_ref()
    }
}

/// The provider's own configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProviderConfig {
    kubeconfig: Option<PathBuf>,
    context: Option<String>,
    offline: Option<bool>,
}

/// The provider: its configuration and the registry of every data source and resource type.
#[derive(Debug, Clone)]
pub struct Provider {
    version: String,
}

impl Default for Provider {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_VERSION"))
    }
}

impl Provider {
    pub const TYPE_NAME: &'static str = "k8s";

    pub fn new<S: Into<String>>(version: S) -> Self {
        Self {
            version: version.into(),
        }
    }

    pub fn type_name(&self) -> &str {
        Self::TYPE_NAME
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn schema(&self) -> Schema {
        Schema::new("Manages Redis Enterprise custom resources in a Kubernetes cluster.")
            .attribute(
                Attribute::provider_only("kubeconfig", AttributeType::String)
                    .optional()
                    .description(
                        "Path to the kubeconfig file. Defaults to the KUBECONFIG environment \
                        variable, then ~/.kube/config, then the in-cluster configuration.",
                    ),
            )
            .attribute(
                Attribute::provider_only("context", AttributeType::String)
                    .optional()
                    .description("The kubeconfig context to use instead of the current one."),
            )
            .attribute(
                Attribute::provider_only("offline", AttributeType::Bool)
                    .optional()
                    .description("Do not connect to a cluster. Only manifests can be rendered."),
            )
    }

    /// Validates `config` and creates the Kubernetes client it describes. Returns `None` after
    /// adding errors to `diagnostics`.
    pub async fn configure(
        &self,
        config: &Value,
        diagnostics: &mut Diagnostics,
    ) -> Option<ProviderData> {
        if !config.is_null() {
            let validation = self.schema().validate(config);
            let invalid = validation.has_error();
            diagnostics.extend(validation);
            if invalid {
                return None;
            }
        }
        match self.try_configure(config).await {
            Ok(provider_data) => Some(provider_data),
            Err(e) => {
                diagnostics.push(e.into());
                None
            }
        }
    }

    async fn try_configure(&self, config: &Value) -> Result<ProviderData> {
        let config = match config {
            Value::Null => ProviderConfig::default(),
            config => ProviderConfig::deserialize(config).context(error::UnmarshalSnafu)?,
        };
        if config.offline.unwrap_or_default() {
            info!("Provider is offline, only manifests are available");
            return Ok(ProviderData::offline());
        }
        let client = match (&config.kubeconfig, &config.context) {
            (None, None) => {
                debug!("Using the default Kubernetes configuration");
                Client::try_default().await.context(error::ClientCreateSnafu)?
            }
            (path, context) => {
                let kubeconfig = match path {
                    Some(path) => {
                        debug!("Reading kubeconfig '{}'", path.display());
                        Kubeconfig::read_from(path).context(error::KubeconfigSnafu)?
                    }
                    None => Kubeconfig::read().context(error::KubeconfigSnafu)?,
                };
                let options = KubeConfigOptions {
                    context: context.clone(),
                    ..KubeConfigOptions::default()
                };
                let config = Config::from_custom_kubeconfig(kubeconfig, &options)
                    .await
                    .context(error::KubeconfigSnafu)?;
                Client::try_from(config).context(error::ClientCreateSnafu)?
            }
        };
        Ok(ProviderData::new(client))
    }

    /// Every data source type, unconfigured: one per CRD plus one manifest per CRD.
    pub fn data_sources(&self) -> Vec<Box<dyn DataSource>> {
        let mut data_sources = Vec::new();
        push_data_sources::<RedisEnterpriseDatabase>(&mut data_sources);
        push_data_sources::<RedisEnterpriseActiveActiveDatabase>(&mut data_sources);
        push_data_sources::<RedisEnterpriseRemoteCluster>(&mut data_sources);
        data_sources
    }

    /// Every resource type, unconfigured.
    pub fn resources(&self) -> Vec<Box<dyn Resource>> {
        vec![
            Box::new(CustomResource::<RedisEnterpriseDatabase>::new(Self::TYPE_NAME)),
            Box::new(CustomResource::<RedisEnterpriseActiveActiveDatabase>::new(
                Self::TYPE_NAME,
            )),
            Box::new(CustomResource::<RedisEnterpriseRemoteCluster>::new(
                Self::TYPE_NAME,
            )),
        ]
    }

    pub fn data_source(&self, type_name: &str) -> Option<Box<dyn DataSource>> {
        self.data_sources()
            .into_iter()
            .find(|data_source| data_source.type_name() == type_name)
    }

    pub fn resource(&self, type_name: &str) -> Option<Box<dyn Resource>> {
        self.resources()
            .into_iter()
            .find(|resource| resource.type_name() == type_name)
    }
}

fn push_data_sources<K: CrdKind>(data_sources: &mut Vec<Box<dyn DataSource>>) {
    data_sources.push(Box::new(CustomResourceDataSource::<K>::new(
        Provider::TYPE_NAME,
    )));
    data_sources.push(Box::new(ManifestDataSource::<K>::new(Provider::TYPE_NAME)));
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn registry() {
        let provider = Provider::default();
        let data_sources: Vec<String> = provider
            .data_sources()
            .iter()
            .map(|d| d.type_name().to_string())
            .collect();
        assert_eq!(
            data_sources,
            vec![
                "k8s_app_redislabs_com_redis_enterprise_database_v1alpha1",
                "k8s_app_redislabs_com_redis_enterprise_database_v1alpha1_manifest",
                "k8s_app_redislabs_com_redis_enterprise_active_active_database_v1alpha1",
                "k8s_app_redislabs_com_redis_enterprise_active_active_database_v1alpha1_manifest",
                "k8s_app_redislabs_com_redis_enterprise_remote_cluster_v1alpha1",
                "k8s_app_redislabs_com_redis_enterprise_remote_cluster_v1alpha1_manifest",
            ]
        );
        assert_eq!(provider.resources().len(), 3);
        assert!(provider
            .resource("k8s_app_redislabs_com_redis_enterprise_remote_cluster_v1alpha1")
            .is_some());
        assert!(provider
            .resource("k8s_app_redislabs_com_redis_enterprise_remote_cluster_v1alpha1_manifest")
            .is_none());
        assert!(provider.data_source("k8s_nothing").is_none());
    }

    #[tokio::test]
    async fn configure_offline() {
        let mut diagnostics = Diagnostics::new();
        let provider_data = Provider::default()
            .configure(&json!({"offline": true}), &mut diagnostics)
            .await
            .unwrap();
        assert!(diagnostics.is_empty());
        assert!(provider_data.client().is_none());
    }

    #[tokio::test]
    async fn configure_with_missing_kubeconfig() {
        let mut diagnostics = Diagnostics::new();
        let provider_data = Provider::default()
            .configure(
                &json!({"kubeconfig": "/nonexistent/kubeconfig"}),
                &mut diagnostics,
            )
            .await;
        assert!(provider_data.is_none());
        assert_eq!(
            diagnostics.iter().next().unwrap().summary,
            "Unable to configure provider"
        );
    }

    #[tokio::test]
    async fn configure_rejects_unknown_arguments() {
        let mut diagnostics = Diagnostics::new();
        let provider_data = Provider::default()
            .configure(&json!({"host": "https://localhost"}), &mut diagnostics)
            .await;
        assert!(provider_data.is_none());
        assert_eq!(
            diagnostics.iter().next().unwrap().summary,
            "Unsupported argument"
        );
    }
}
