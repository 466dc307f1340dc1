use crate::common::{
    api_version_attribute, id_attribute, kind_attribute, metadata_attribute, object_key,
    parse_import_id, spec_attribute, to_json, type_name, typed_object, typed_response, TypeFlavor,
};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::{self, Result};
use crate::schema::{Attribute, AttributeType, Schema, Validator};
use crate::ProviderData;
use async_trait::async_trait;
use log::{debug, warn};
use model::clients::{CrdClient, HttpStatusCode, PropagationPolicy};
use model::constants::{DEFAULT_FIELD_MANAGER, DELETION_TIMEOUT};
use model::CrdKind;
use serde::Deserialize;
use serde_json::{json, Value};
use snafu::{OptionExt, ResultExt};
use std::time::Duration;

/// A provider type that manages the lifecycle of an object.
#[async_trait]
pub trait Resource: Send + Sync {
    /// The full type name, e.g. `k8s_app_redislabs_com_redis_enterprise_database_v1alpha1`.
    fn type_name(&self) -> &str;

    fn schema(&self) -> Schema;

    /// Hands the resource what the provider's own configuration produced.
    fn configure(&mut self, provider_data: &ProviderData);

    /// Creates the object planned in `plan` and returns the new state.
    async fn create(&self, plan: &Value, diagnostics: &mut Diagnostics) -> Option<Value>;

    /// Refreshes `state`. Returns `None` when the object no longer exists, in which case it must
    /// be removed from state.
    async fn read(&self, state: &Value, diagnostics: &mut Diagnostics) -> Option<Value>;

    /// Changes the object described by `prior` into the one planned in `plan`.
    async fn update(
        &self,
        plan: &Value,
        prior: &Value,
        diagnostics: &mut Diagnostics,
    ) -> Option<Value>;

    async fn delete(&self, state: &Value, diagnostics: &mut Diagnostics);

    /// Turns an import identifier into a minimal state that `read` can complete.
    fn import_state(&self, id: &str, diagnostics: &mut Diagnostics) -> Option<Value>;
}

/// The provider-only attributes that control how objects are written and deleted.
#[derive(Debug, Default, Deserialize)]
struct Options {
    field_manager: Option<String>,
    force_conflicts: Option<bool>,
    deletion_propagation: Option<String>,
    wait_for_deletion: Option<bool>,
}

impl Options {
    fn from_value(value: &Value) -> Result<Self> {
        Ok(Options::deserialize(value).context(error::UnmarshalSnafu)?)
    }

    fn field_manager(&self) -> &str {
        self.field_manager.as_deref().unwrap_or(DEFAULT_FIELD_MANAGER)
    }

    fn propagation_policy(&self) -> Option<PropagationPolicy> {
        match self.deletion_propagation.as_deref() {
            Some("Orphan") => Some(PropagationPolicy::Orphan),
            Some("Foreground") => Some(PropagationPolicy::Foreground),
            Some("Background") => Some(PropagationPolicy::Background),
            _ => None,
        }
    }
}

/// Creates, updates and deletes objects of kind `K` with server-side apply.
pub struct CustomResource<K> {
    type_name: String,
    client: Option<CrdClient<K>>,
    deletion_timeout: Duration,
}

impl<K> CustomResource<K>
where
    K: CrdKind,
{
    pub fn new(provider_type_name: &str) -> Self {
        Self {
            type_name: type_name::<K>(provider_type_name),
            client: None,
            deletion_timeout: DELETION_TIMEOUT,
        }
    }

    fn client(&self) -> Result<&CrdClient<K>> {
        Ok(self.client.as_ref().context(error::NotConfiguredSnafu {
            type_name: &self.type_name,
        })?)
    }

    /// The state for `object`, keeping the provider-only attributes of `previous`.
    fn state(&self, object: &K, previous: &Value) -> Result<Value> {
        let schema = self.schema();
        let mut state = schema.from_k8s(&to_json(object)?);
        schema.copy_provider_attributes(previous, &mut state, &["id"]);
        schema.fill_defaults(&mut state);
        state["id"] = json!(object.import_id());
        Ok(state)
    }

    async fn apply(&self, plan: &Value) -> Result<Value> {
        let client = self.client()?;
        let schema = self.schema();
        let mut plan = plan.clone();
        schema.fill_defaults(&mut plan);
        let options = Options::from_value(&plan)?;
        let (namespace, name) = object_key(&plan)?;

        let desired: K = typed_object(schema.to_k8s(&plan))?;
        debug!(
            "applying {} '{}/{}' as '{}'",
            client.kind(),
            namespace,
            name,
            options.field_manager()
        );
        let object = client
            .apply(
                &namespace,
                &name,
                &to_json(&desired)?,
                options.field_manager(),
                options.force_conflicts.unwrap_or_default(),
            )
            .await
            .context(error::PatchSnafu)?;
        let object: K = typed_response(&object)?;
        self.state(&object, &plan)
    }

    async fn try_read(&self, state: &Value) -> Result<Option<Value>> {
        let client = self.client()?;
        let (namespace, name) = object_key(state)?;
        debug!("reading {} '{}/{}'", client.kind(), namespace, name);
        let result = client.get(&namespace, &name).await;
        if result.is_not_found() {
            return Ok(None);
        }
        let object: K = typed_response(&result.context(error::GetSnafu)?)?;
        Ok(Some(self.state(&object, state)?))
    }

    async fn try_update(&self, plan: &Value, prior: &Value) -> Result<Value> {
        if let Some(path) = self.schema().replacement_paths(plan, prior).into_iter().next() {
            return Err(error::RequiresReplacementSnafu { path }.build().into());
        }
        self.apply(plan).await
    }

    async fn try_delete(&self, state: &Value) -> Result<()> {
        let client = self.client()?;
        let options = Options::from_value(state)?;
        let (namespace, name) = object_key(state)?;
        debug!("deleting {} '{}/{}'", client.kind(), namespace, name);
        client
            .delete(&namespace, &name, options.propagation_policy())
            .await
            .context(error::DeleteSnafu)?;
        if options.wait_for_deletion.unwrap_or_default() {
            client
                .wait_for_deletion(&namespace, &name, self.deletion_timeout)
                .await
                .context(error::DeleteSnafu)?;
        }
        Ok(())
    }

    fn try_import(&self, id: &str) -> Result<Value> {
        let (namespace, name) = parse_import_id(id)?;
        let mut state = json!({
            "id": id,
            "metadata": {"name": name, "namespace": namespace},
        });
        self.schema().fill_defaults(&mut state);
        Ok(state)
    }
}

fn report<T>(result: Result<T>, diagnostics: &mut Diagnostics) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            diagnostics.push(e.into());
            None
        }
    }
}

#[async_trait]
impl<K> Resource for CustomResource<K>
where
    K: CrdKind,
{
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn schema(&self) -> Schema {
        Schema::new(K::DESCRIPTION)
            .attribute(id_attribute())
            .attribute(
                Attribute::provider_only("field_manager", AttributeType::String)
                    .optional_computed()
                    .default_value(DEFAULT_FIELD_MANAGER)
                    .description("The name of the manager used to track field ownership."),
            )
            .attribute(
                Attribute::provider_only("force_conflicts", AttributeType::Bool)
                    .optional_computed()
                    .default_value(false)
                    .description("Take over fields owned by other managers on conflicts."),
            )
            .attribute(
                Attribute::provider_only("deletion_propagation", AttributeType::String)
                    .optional()
                    .validator(Validator::one_of(["Orphan", "Foreground", "Background"]))
                    .description("Whether and how garbage collection is performed on deletion."),
            )
            .attribute(
                Attribute::provider_only("wait_for_deletion", AttributeType::Bool)
                    .optional_computed()
                    .default_value(false)
                    .description("Wait until the object is gone after it was deleted."),
            )
            .attribute(api_version_attribute::<K>())
            .attribute(kind_attribute::<K>())
            .attribute(metadata_attribute(TypeFlavor::Resource))
            .attribute(spec_attribute::<K>(TypeFlavor::Resource))
    }

    fn configure(&mut self, provider_data: &ProviderData) {
        self.client = provider_data
            .client()
            .cloned()
            .map(CrdClient::new_from_k8s_client);
    }

    async fn create(&self, plan: &Value, diagnostics: &mut Diagnostics) -> Option<Value> {
        report(self.apply(plan).await, diagnostics)
    }

    async fn read(&self, state: &Value, diagnostics: &mut Diagnostics) -> Option<Value> {
        match report(self.try_read(state).await, diagnostics) {
            Some(Some(state)) => Some(state),
            Some(None) => {
                let id = state["id"].as_str().unwrap_or_default();
                warn!("{} '{}' no longer exists", self.type_name, id);
                diagnostics.push(Diagnostic::warning(
                    "Resource not found",
                    format!(
                        "{} '{}' was not found and has been removed from state.",
                        self.type_name, id
                    ),
                ));
                None
            }
            None => None,
        }
    }

    async fn update(
        &self,
        plan: &Value,
        prior: &Value,
        diagnostics: &mut Diagnostics,
    ) -> Option<Value> {
        report(self.try_update(plan, prior).await, diagnostics)
    }

    async fn delete(&self, state: &Value, diagnostics: &mut Diagnostics) {
        report(self.try_delete(state).await, diagnostics);
    }

    fn import_state(&self, id: &str, diagnostics: &mut Diagnostics) -> Option<Value> {
        report(self.try_import(id), diagnostics)
    }
}
