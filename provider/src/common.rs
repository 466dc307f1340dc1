//! Building blocks shared by the data source, resource and manifest types: type names, the
//! attributes every type has, and the conversions between configurations, typed CRD objects and
//! state.

use crate::error::{self, Result};
use crate::schema::{
    from_json_schema_props, snake_case, Attribute, AttributeType, SchemaMode, Validator,
};
use kube::api::DynamicObject;
use model::CrdKind;
use serde_json::{json, Value};
use snafu::{OptionExt, ResultExt};

/// A DNS-1123 subdomain, the format of Kubernetes object names.
const NAME_PATTERN: &str =
    r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?(\.[a-z0-9]([-a-z0-9]*[a-z0-9])?)*$";
/// A DNS-1123 label, the format of namespace names.
const NAMESPACE_PATTERN: &str = r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$";

/// Which kind of provider type an attribute is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TypeFlavor {
    DataSource,
    Resource,
    Manifest,
}

impl TypeFlavor {
    fn schema_mode(self) -> SchemaMode {
        match self {
            TypeFlavor::DataSource => SchemaMode::Computed,
            TypeFlavor::Resource | TypeFlavor::Manifest => SchemaMode::Configurable,
        }
    }
}

/// The type name of the data source and resource for `K`, e.g.
/// `k8s_app_redislabs_com_redis_enterprise_database_v1alpha1`.
pub(crate) fn type_name<K: CrdKind>(provider_type_name: &str) -> String {
    format!(
        "{}_{}_{}_{}",
        provider_type_name,
        K::group(&()).replace(['.', '-'], "_"),
        snake_case(&K::kind(&())),
        K::version(&())
    )
}

pub(crate) fn id_attribute() -> Attribute {
    Attribute::provider_only("id", AttributeType::String)
        .computed()
        .description("The identifier of the object, 'namespace/name'.")
}

pub(crate) fn api_version_attribute<K: CrdKind>() -> Attribute {
    Attribute::new("api_version", "apiVersion", AttributeType::String)
        .computed()
        .description(format!(
            "The API version of the object, always '{}'.",
            K::api_version(&())
        ))
}

pub(crate) fn kind_attribute<K: CrdKind>() -> Attribute {
    Attribute::new("kind", "kind", AttributeType::String)
        .computed()
        .description(format!("The kind of the object, always '{}'.", K::kind(&())))
}

pub(crate) fn metadata_attribute(flavor: TypeFlavor) -> Attribute {
    let mut name = Attribute::new("name", "name", AttributeType::String)
        .required()
        .description("The name of the object, unique within its namespace.")
        .validator(Validator::regex(NAME_PATTERN));
    let mut namespace = Attribute::new("namespace", "namespace", AttributeType::String)
        .required()
        .description("The namespace of the object.")
        .validator(Validator::regex(NAMESPACE_PATTERN));
    let mut attributes = Vec::new();
    if flavor == TypeFlavor::Resource {
        name = name.requires_replace();
        namespace = namespace.requires_replace();
    }
    attributes.push(name);
    attributes.push(namespace);
    if flavor != TypeFlavor::DataSource {
        let string_map = || AttributeType::Map(Box::new(AttributeType::String));
        attributes.push(
            Attribute::new("labels", "labels", string_map())
                .description("Map of string keys and values to organize and categorize objects."),
        );
        attributes.push(
            Attribute::new("annotations", "annotations", string_map()).description(
                "Unstructured key value map stored with the object that may be set by external \
                tools.",
            ),
        );
    }
    Attribute::new("metadata", "metadata", AttributeType::SingleNested(attributes))
        .required()
        .description("Standard object metadata.")
}

/// The `spec` attribute of `K`. It is required exactly when one of its children is.
pub(crate) fn spec_attribute<K: CrdKind>(flavor: TypeFlavor) -> Attribute {
    let (description, attributes) = match K::spec_schema() {
        Some(props) => (
            props.description.clone().unwrap_or_default(),
            from_json_schema_props(&props, flavor.schema_mode()),
        ),
        None => (String::new(), Vec::new()),
    };
    let required = attributes.iter().any(|a| a.required);
    let attribute = Attribute::new("spec", "spec", AttributeType::SingleNested(attributes))
        .description(description);
    match flavor.schema_mode() {
        SchemaMode::Computed => attribute.computed(),
        SchemaMode::Configurable if required => attribute.required(),
        SchemaMode::Configurable => attribute.optional(),
    }
}

/// The `namespace` and `name` of the object described by a configuration or state.
pub(crate) fn object_key(value: &Value) -> Result<(String, String)> {
    let metadata = &value["metadata"];
    let namespace = metadata["namespace"]
        .as_str()
        .filter(|namespace| !namespace.is_empty())
        .context(error::MissingMetadataSnafu {
            what: "metadata.namespace",
        })?;
    let name = metadata["name"]
        .as_str()
        .filter(|name| !name.is_empty())
        .context(error::MissingMetadataSnafu {
            what: "metadata.name",
        })?;
    Ok((namespace.to_string(), name.to_string()))
}

pub(crate) fn parse_import_id(id: &str) -> Result<(String, String)> {
    match id.split_once('/') {
        Some((namespace, name))
            if !namespace.is_empty() && !name.is_empty() && !name.contains('/') =>
        {
            Ok((namespace.to_string(), name.to_string()))
        }
        _ => Err(error::InvalidImportIdSnafu { id }.build().into()),
    }
}

/// Turns a configuration or plan, already converted to Kubernetes field names, into the typed
/// object it describes. `apiVersion` and `kind` always come from `K`.
pub(crate) fn typed_object<K: CrdKind>(mut object: Value) -> Result<K> {
    if let Value::Object(map) = &mut object {
        map.insert("apiVersion".to_string(), json!(K::api_version(&())));
        map.insert("kind".to_string(), json!(K::kind(&())));
        map.entry("spec").or_insert_with(|| json!({}));
    }
    Ok(serde_json::from_value(object).context(error::UnmarshalSnafu)?)
}

/// Decodes an object returned by the API server.
pub(crate) fn typed_response<K: CrdKind>(object: &DynamicObject) -> Result<K> {
    let value = serde_json::to_value(object).context(error::MarshalSnafu)?;
    Ok(serde_json::from_value(value).context(error::UnmarshalSnafu)?)
}

pub(crate) fn to_json<K: CrdKind>(object: &K) -> Result<Value> {
    Ok(serde_json::to_value(object).context(error::MarshalSnafu)?)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::schema::{AttributePath, Schema};
    use model::{
        CrdExt, RedisEnterpriseActiveActiveDatabase, RedisEnterpriseDatabase,
        RedisEnterpriseRemoteCluster,
    };

    #[test]
    fn type_names() {
        assert_eq!(
            type_name::<RedisEnterpriseDatabase>("k8s"),
            "k8s_app_redislabs_com_redis_enterprise_database_v1alpha1"
        );
        assert_eq!(
            type_name::<RedisEnterpriseActiveActiveDatabase>("k8s"),
            "k8s_app_redislabs_com_redis_enterprise_active_active_database_v1alpha1"
        );
        assert_eq!(
            type_name::<RedisEnterpriseRemoteCluster>("k8s"),
            "k8s_app_redislabs_com_redis_enterprise_remote_cluster_v1alpha1"
        );
    }

    #[test]
    fn import_ids() {
        assert_eq!(
            parse_import_id("redis/db").unwrap(),
            ("redis".to_string(), "db".to_string())
        );
        for id in ["db", "/db", "redis/", "a/b/c", ""] {
            let diagnostic = parse_import_id(id).unwrap_err().to_diagnostic();
            assert_eq!(diagnostic.summary, "Error importing resource");
        }
    }

    #[test]
    fn metadata_flavors() {
        let schema = Schema::new("test").attribute(metadata_attribute(TypeFlavor::Resource));
        let name = schema
            .find(&AttributePath::root().attribute("metadata").attribute("name"))
            .unwrap();
        assert!(name.requires_replace);
        assert!(schema
            .find(&AttributePath::root().attribute("metadata").attribute("labels"))
            .is_some());

        let schema = Schema::new("test").attribute(metadata_attribute(TypeFlavor::DataSource));
        assert!(schema
            .find(&AttributePath::root().attribute("metadata").attribute("labels"))
            .is_none());

        let diagnostics = schema.validate(&json!({
            "metadata": {"name": "My_Database", "namespace": "redis"}
        }));
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn spec_requirement_follows_children() {
        assert!(spec_attribute::<RedisEnterpriseRemoteCluster>(TypeFlavor::Resource).required);
        assert!(spec_attribute::<RedisEnterpriseDatabase>(TypeFlavor::Resource).optional);
        assert!(spec_attribute::<RedisEnterpriseRemoteCluster>(TypeFlavor::DataSource).is_read_only());
    }

    #[test]
    fn typed_objects() {
        let database: RedisEnterpriseDatabase =
            typed_object(json!({"metadata": {"name": "db", "namespace": "redis"}})).unwrap();
        assert_eq!(database.import_id(), "redis/db");
        assert_eq!(database.spec, Default::default());

        let e = typed_object::<RedisEnterpriseRemoteCluster>(json!({
            "metadata": {"name": "rerc", "namespace": "redis"},
            "spec": {"recName": "rec"}
        }))
        .unwrap_err();
        assert_eq!(e.to_diagnostic().summary, "Unable to unmarshal resource");
    }

    #[test]
    fn missing_metadata() {
        let e = object_key(&json!({"metadata": {"name": "db"}})).unwrap_err();
        assert!(e.to_string().contains("metadata.namespace"));
    }
}
