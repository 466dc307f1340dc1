use crate::error::{self, Result};
use crate::schema_utils::prune_nulls;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::Serialize;
use snafu::ResultExt;

/// Provides some conveniences for querying and rendering a `kube-rs` object.
pub trait CrdExt: Serialize {
    /// Returns this objects `ObjectMeta` information (i.e. the `metadata` field). You implement
    /// this be returning `&self.metadata`. This allows the rest of this trait's functions to be
    /// implemented for you.
    fn object_meta(&self) -> &ObjectMeta;

    /// Returns the object.metadata.name field, unwrapping a potential `None` with `""`. This is
    /// named `object_name` to avoid confusion with `ResourceExt`.
    fn object_name(&self) -> &str {
        self.object_meta().name.as_deref().unwrap_or("")
    }

    /// Returns the object.metadata.namespace field, unwrapping a potential `None` with `""`.
    fn object_namespace(&self) -> &str {
        self.object_meta().namespace.as_deref().unwrap_or("")
    }

    /// The identifier used for this object in state and when importing: `namespace/name`.
    fn import_id(&self) -> String {
        format!("{}/{}", self.object_namespace(), self.object_name())
    }

    /// Returns this object's YAML representation as a String, without `null` fields.
    fn to_yaml(&self) -> Result<String> {
        let value = serde_json::to_value(self).context(error::JsonSerializationSnafu)?;
        Ok(serde_yaml::to_string(&prune_nulls(value)).context(error::YamlSerializationSnafu)?)
    }
}
