use crate::common::{
    api_version_attribute, id_attribute, kind_attribute, metadata_attribute, object_key,
    spec_attribute, to_json, type_name, typed_response, TypeFlavor,
};
use crate::diagnostics::Diagnostics;
use crate::error::{self, Result};
use crate::schema::Schema;
use crate::ProviderData;
use async_trait::async_trait;
use log::debug;
use model::clients::CrdClient;
use model::CrdKind;
use serde_json::{json, Value};
use snafu::{OptionExt, ResultExt};

/// A read-only provider type.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// The full type name, e.g. `k8s_app_redislabs_com_redis_enterprise_database_v1alpha1`.
    fn type_name(&self) -> &str;

    fn schema(&self) -> Schema;

    /// Hands the data source what the provider's own configuration produced.
    fn configure(&mut self, provider_data: &ProviderData);

    /// Reads the object that `config` describes. Returns the new state, or `None` after adding
    /// an error to `diagnostics`.
    async fn read(&self, config: &Value, diagnostics: &mut Diagnostics) -> Option<Value>;
}

/// Looks up an existing object of kind `K` by namespace and name.
pub struct CustomResourceDataSource<K> {
    type_name: String,
    client: Option<CrdClient<K>>,
}

impl<K> CustomResourceDataSource<K>
where
    K: CrdKind,
{
    pub fn new(provider_type_name: &str) -> Self {
        Self {
            type_name: type_name::<K>(provider_type_name),
            client: None,
        }
    }

    async fn try_read(&self, config: &Value) -> Result<Value> {
        let client = self.client.as_ref().context(error::NotConfiguredSnafu {
            type_name: &self.type_name,
        })?;
        let (namespace, name) = object_key(config)?;
        debug!("reading {} '{}/{}'", client.kind(), namespace, name);
        let object = client
            .get(&namespace, &name)
            .await
            .context(error::GetSnafu)?;
        let object: K = typed_response(&object)?;
        let mut state = self.schema().from_k8s(&to_json(&object)?);
        state["id"] = json!(object.import_id());
        Ok(state)
    }
}

#[async_trait]
impl<K> DataSource for CustomResourceDataSource<K>
where
    K: CrdKind,
{
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn schema(&self) -> Schema {
        Schema::new(K::DESCRIPTION)
            .attribute(id_attribute())
            .attribute(api_version_attribute::<K>())
            .attribute(kind_attribute::<K>())
            .attribute(metadata_attribute(TypeFlavor::DataSource))
            .attribute(spec_attribute::<K>(TypeFlavor::DataSource))
    }

    fn configure(&mut self, provider_data: &ProviderData) {
        self.client = provider_data
            .client()
            .cloned()
            .map(CrdClient::new_from_k8s_client);
    }

    async fn read(&self, config: &Value, diagnostics: &mut Diagnostics) -> Option<Value> {
        match self.try_read(config).await {
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
    use crate::test_util::{json_response, mock_provider_data, remote_cluster, status_response};
    use http::Method;
    use model::{RedisEnterpriseDatabase, RedisEnterpriseRemoteCluster};

    fn config() -> Value {
        json!({"metadata": {"name": "rerc-east", "namespace": "redis"}})
    }

    #[test]
    fn schema() {
        let data_source = CustomResourceDataSource::<RedisEnterpriseDatabase>::new("k8s");
        assert_eq!(
            data_source.type_name(),
            "k8s_app_redislabs_com_redis_enterprise_database_v1alpha1"
        );
        let schema = data_source.schema();
        let names: Vec<&str> = schema.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["id", "api_version", "kind", "metadata", "spec"]);
        assert!(schema.get("spec").unwrap().is_read_only());
        assert!(schema.get("metadata").unwrap().required);
        assert!(schema.validate(&config()).is_empty());
    }

    #[tokio::test]
    async fn read() {
        let (provider_data, mut handle) = mock_provider_data();
        let server = tokio::spawn(async move {
            let (request, send) = handle.next_request().await.unwrap();
            assert_eq!(request.method(), Method::GET);
            assert_eq!(
                request.uri().path(),
                "/apis/app.redislabs.com/v1alpha1/namespaces/redis/redisenterpriseremoteclusters/rerc-east"
            );
            send.send_response(json_response(200, &remote_cluster("rerc-east")));
        });

        let mut data_source = CustomResourceDataSource::<RedisEnterpriseRemoteCluster>::new("k8s");
        data_source.configure(&provider_data);
        let mut diagnostics = Diagnostics::new();
        let state = data_source.read(&config(), &mut diagnostics).await.unwrap();
        server.await.unwrap();

        assert!(diagnostics.is_empty());
        assert_eq!(state["id"], "redis/rerc-east");
        assert_eq!(state["api_version"], "app.redislabs.com/v1alpha1");
        assert_eq!(state["kind"], "RedisEnterpriseRemoteCluster");
        assert_eq!(
            state["metadata"],
            json!({"name": "rerc-east", "namespace": "redis"})
        );
        assert_eq!(state["spec"]["api_fqdn_url"], "api-east.example.com");
        assert_eq!(state["spec"]["api_port"], 443);
        assert_eq!(state["spec"]["db_fqdn_suffix"], Value::Null);
        assert!(state.get("status").is_none());
    }

    #[tokio::test]
    async fn read_missing_object() {
        let (provider_data, mut handle) = mock_provider_data();
        let server = tokio::spawn(async move {
            let (_, send) = handle.next_request().await.unwrap();
            send.send_response(status_response(
                404,
                "NotFound",
                "redisenterpriseremoteclusters \"rerc-east\" not found",
            ));
        });

        let mut data_source = CustomResourceDataSource::<RedisEnterpriseRemoteCluster>::new("k8s");
        data_source.configure(&provider_data);
        let mut diagnostics = Diagnostics::new();
        assert!(data_source.read(&config(), &mut diagnostics).await.is_none());
        server.await.unwrap();

        let diagnostic = diagnostics.iter().next().unwrap();
        assert_eq!(diagnostic.summary, "Unable to GET resource");
        assert!(diagnostic.detail.contains("not found"));
    }

    #[tokio::test]
    async fn read_without_client() {
        let mut data_source = CustomResourceDataSource::<RedisEnterpriseRemoteCluster>::new("k8s");
        data_source.configure(&ProviderData::offline());
        let mut diagnostics = Diagnostics::new();
        assert!(data_source.read(&config(), &mut diagnostics).await.is_none());
        assert_eq!(
            diagnostics.iter().next().unwrap().summary,
            "Provider not configured"
        );
    }
}
