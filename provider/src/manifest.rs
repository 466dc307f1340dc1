use crate::common::{
    id_attribute, metadata_attribute, spec_attribute, to_json, type_name, typed_object, TypeFlavor,
};
use crate::data_source::DataSource;
use crate::diagnostics::Diagnostics;
use crate::error::{self, Result};
use crate::schema::{Attribute, AttributeType, Schema};
use crate::ProviderData;
use async_trait::async_trait;
use log::debug;
use model::CrdKind;
use serde_json::{json, Value};
use snafu::ResultExt;
use std::marker::PhantomData;

/// Renders the object of kind `K` described by its configuration as YAML, e.g. to hand it to
/// another tool. It never talks to the API server.
pub struct ManifestDataSource<K> {
    type_name: String,
    crd: PhantomData<K>,
}

impl<K> ManifestDataSource<K>
where
    K: CrdKind,
{
    pub fn new(provider_type_name: &str) -> Self {
        Self {
            type_name: format!("{}_manifest", type_name::<K>(provider_type_name)),
            crd: PhantomData,
        }
    }

    fn render(&self, config: &Value) -> Result<Value> {
        let schema = self.schema();
        let object: K = typed_object(schema.to_k8s(config))?;
        debug!("rendering {} '{}'", self.type_name, object.import_id());
        let yaml = object.to_yaml().context(error::YamlSnafu)?;
        let mut state = schema.from_k8s(&to_json(&object)?);
        state["id"] = json!(object.import_id());
        state["yaml"] = json!(yaml);
        Ok(state)
    }
}

#[async_trait]
impl<K> DataSource for ManifestDataSource<K>
where
    K: CrdKind,
{
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn schema(&self) -> Schema {
        Schema::new(format!("{} Renders the object as a YAML manifest.", K::DESCRIPTION))
            .attribute(id_attribute())
            .attribute(
                Attribute::provider_only("yaml", AttributeType::String)
                    .computed()
                    .description("The object as a YAML document."),
            )
            .attribute(metadata_attribute(TypeFlavor::Manifest))
            .attribute(spec_attribute::<K>(TypeFlavor::Manifest))
    }

    fn configure(&mut self, _: &ProviderData) {}

    async fn read(&self, config: &Value, diagnostics: &mut Diagnostics) -> Option<Value> {
        match self.render(config) {
            Ok(state) => Some(state),
            Err(e) => {
                diagnostics.push(e.into());
                None
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use model::{RedisEnterpriseActiveActiveDatabase, RedisEnterpriseDatabase};

    #[tokio::test]
    async fn renders_database() {
        let manifest = ManifestDataSource::<RedisEnterpriseDatabase>::new("k8s");
        assert_eq!(
            manifest.type_name(),
            "k8s_app_redislabs_com_redis_enterprise_database_v1alpha1_manifest"
        );
        let config = json!({
            "metadata": {"name": "smalldb", "namespace": "redis", "labels": {"team": "cache"}},
            "spec": {
                "memory_size": "100MB",
                "tls_mode": "enabled",
                "modules_list": [{"name": "search", "version": "2.8.4"}],
                "redis_enterprise_cluster": {"name": "rec"}
            }
        });
        assert!(manifest.schema().validate(&config).is_empty());

        let mut diagnostics = Diagnostics::new();
        let state = manifest.read(&config, &mut diagnostics).await.unwrap();
        assert!(diagnostics.is_empty());
        assert_eq!(state["id"], "redis/smalldb");
        assert_eq!(state["metadata"]["labels"], json!({"team": "cache"}));
        assert_eq!(state["metadata"]["annotations"], Value::Null);
        assert_eq!(state["spec"]["memory_size"], "100MB");
        assert_eq!(
            state["spec"]["modules_list"][0],
            json!({"name": "search", "version": "2.8.4", "config": null})
        );
        assert_eq!(state["spec"]["shard_count"], Value::Null);
        assert!(state.get("api_version").is_none());

        let rendered: Value = serde_yaml::from_str(state["yaml"].as_str().unwrap()).unwrap();
        assert_eq!(
            rendered,
            json!({
                "apiVersion": "app.redislabs.com/v1alpha1",
                "kind": "RedisEnterpriseDatabase",
                "metadata": {"name": "smalldb", "namespace": "redis", "labels": {"team": "cache"}},
                "spec": {
                    "memorySize": "100MB",
                    "tlsMode": "enabled",
                    "modulesList": [{"name": "search", "version": "2.8.4"}],
                    "redisEnterpriseCluster": {"name": "rec"}
                }
            })
        );
    }

    #[tokio::test]
    async fn missing_required_spec_fields() {
        let manifest = ManifestDataSource::<RedisEnterpriseActiveActiveDatabase>::new("k8s");
        let config = json!({"metadata": {"name": "aadb", "namespace": "redis"}});
        assert_eq!(
            manifest.schema().validate(&config).iter().next().unwrap().summary,
            "Missing required argument"
        );

        let mut diagnostics = Diagnostics::new();
        assert!(manifest.read(&config, &mut diagnostics).await.is_none());
        assert_eq!(
            diagnostics.iter().next().unwrap().summary,
            "Unable to unmarshal resource"
        );
    }
}
