use super::HttpStatusCode;
use crate::clients::error::{self, Result};
use crate::constants::DELETION_POLL_INTERVAL;
use crate::{prune_nulls, CrdKind};
use kube::api::{DeleteParams, DynamicObject, Patch, PatchParams, PropagationPolicy};
use kube::core::ApiResource;
use kube::Api;
use log::trace;
use serde_json::Value;
use snafu::ResultExt;
use std::marker::PhantomData;
use std::time::Duration;

/// A dynamic API client for one of the Redis Enterprise CRD kinds. Objects are exchanged as
/// untyped `DynamicObject`s against the kind's group/version/resource endpoint, which leaves
/// decoding them into `K` to the caller.
///
/// # Example
///
/// ```
///# use redis_enterprise_model::clients::CrdClient;
///# use redis_enterprise_model::RedisEnterpriseDatabase;
///# async fn no_run() {
/// let k8s_client = kube::Client::try_default().await.unwrap();
/// let client = CrdClient::<RedisEnterpriseDatabase>::new_from_k8s_client(k8s_client);
/// let database = client.get("redis", "my-database").await.unwrap();
///# }
/// ```
#[derive(Clone)]
pub struct CrdClient<K> {
    k8s_client: kube::Client,
    api_resource: ApiResource,
    crd: PhantomData<K>,
}

impl<K> CrdClient<K>
where
    K: CrdKind,
{
    pub fn new_from_k8s_client(k8s_client: kube::Client) -> Self {
        Self {
            k8s_client,
            api_resource: K::api_resource(),
            crd: PhantomData,
        }
    }

    pub fn kind(&self) -> &str {
        &self.api_resource.kind
    }

    fn api(&self, namespace: &str) -> Api<DynamicObject> {
        Api::namespaced_with(self.k8s_client.clone(), namespace, &self.api_resource)
    }

    pub async fn get(&self, namespace: &str, name: &str) -> Result<DynamicObject> {
        trace!("getting {} '{}/{}'", self.kind(), namespace, name);
        Ok(self
            .api(namespace)
            .get(name)
            .await
            .context(error::KubeApiCallSnafu {
                method: "get",
                what: self.kind(),
            })?)
    }

    /// Server-side apply `object` as `field_manager`. `null` members are removed from `object`
    /// first so that only the fields that are actually set are claimed. With `force`, fields owned
    /// by other field managers are taken over instead of causing a conflict.
    pub async fn apply(
        &self,
        namespace: &str,
        name: &str,
        object: &Value,
        field_manager: &str,
        force: bool,
    ) -> Result<DynamicObject> {
        trace!(
            "applying {} '{}/{}' as '{}'",
            self.kind(),
            namespace,
            name,
            field_manager
        );
        let object = prune_nulls(object.clone());
        let mut params = PatchParams::apply(field_manager);
        if force {
            params = params.force();
        }
        Ok(self
            .api(namespace)
            .patch(name, &params, &Patch::Apply(&object))
            .await
            .context(error::KubeApiCallSnafu {
                method: "patch",
                what: self.kind(),
            })?)
    }

    /// Delete the object. Returns the object if the API server answered with it (i.e. deletion is
    /// still in progress, e.g. because of finalizers), or `None` if it answered with a `Status`.
    pub async fn delete(
        &self,
        namespace: &str,
        name: &str,
        propagation_policy: Option<PropagationPolicy>,
    ) -> Result<Option<DynamicObject>> {
        trace!("deleting {} '{}/{}'", self.kind(), namespace, name);
        let params = DeleteParams {
            propagation_policy,
            ..DeleteParams::default()
        };
        Ok(self
            .api(namespace)
            .delete(name, &params)
            .await
            .context(error::KubeApiCallSnafu {
                method: "delete",
                what: self.kind(),
            })?
            .map_right(|_| None)
            .map_left(Some)
            .into_inner())
    }

    /// Loop until `get` returns `StatusCode::NOT_FOUND`, or fail once `timeout` has passed.
    pub async fn wait_for_deletion(
        &self,
        namespace: &str,
        name: &str,
        timeout: Duration,
    ) -> Result<()> {
        let api = self.api(namespace);
        let kind = self.kind();
        let wait = async {
            loop {
                match api.get(name).await {
                    Err(e) if e.is_not_found() => return Ok(()),
                    Err(e) => {
                        return Err::<(), _>(e).context(error::KubeApiCallSnafu {
                            method: "get",
                            what: kind,
                        })
                    }
                    Ok(_) => {
                        trace!("waiting for {} '{}/{}' to be deleted", kind, namespace, name);
                        tokio::time::sleep(DELETION_POLL_INTERVAL).await;
                    }
                }
            }
        };
        match tokio::time::timeout(timeout, wait).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(error::DeletionTimeoutSnafu {
                what: kind,
                name: format!("{}/{}", namespace, name),
                timeout,
            }
            .build()
            .into()),
        }
    }
}
