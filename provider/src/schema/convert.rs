use super::{snake_case, Attribute, AttributeType, Validator};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::{
    JSONSchemaProps, JSONSchemaPropsOrArray, JSONSchemaPropsOrBool, JSON,
};

/// Whether attributes derived from a CRD schema can be configured (resources and manifests) or
/// are only ever set by the provider (data sources).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaMode {
    Configurable,
    Computed,
}

/// Derives the attributes mirroring the properties of an OpenAPI v3 object schema.
pub fn from_json_schema_props(props: &JSONSchemaProps, mode: SchemaMode) -> Vec<Attribute> {
    let props = resolve(props);
    let required = props.required.as_deref().unwrap_or_default();
    props
        .properties
        .iter()
        .flatten()
        .map(|(json_name, child)| {
            let is_required = required.iter().any(|r| r == json_name);
            attribute_from_props(json_name, child, is_required, mode)
        })
        .collect()
}

fn attribute_from_props(
    json_name: &str,
    props: &JSONSchemaProps,
    required: bool,
    mode: SchemaMode,
) -> Attribute {
    let description = props
        .description
        .as_ref()
        .or(resolve(props).description.as_ref())
        .cloned()
        .unwrap_or_default();
    let props = resolve(props);
    let attribute = Attribute::new(snake_case(json_name), json_name, attribute_type(props, mode))
        .description(description);
    match mode {
        SchemaMode::Computed => attribute.computed(),
        SchemaMode::Configurable => {
            let attribute = if required {
                attribute.required()
            } else {
                attribute.optional()
            };
            validators(props)
                .into_iter()
                .fold(attribute, Attribute::validator)
        }
    }
}

/// A schema without a type that only wraps a single other schema (e.g. a `$ref` that was inlined
/// as `allOf`) stands for that schema.
fn resolve(props: &JSONSchemaProps) -> &JSONSchemaProps {
    if props.type_.is_none() && props.properties.is_none() {
        if let Some([single]) = props.all_of.as_deref() {
            return resolve(single);
        }
    }
    props
}

fn has_properties(props: &JSONSchemaProps) -> bool {
    props
        .properties
        .as_ref()
        .map_or(false, |properties| !properties.is_empty())
}

fn attribute_type(props: &JSONSchemaProps, mode: SchemaMode) -> AttributeType {
    if props.x_kubernetes_int_or_string == Some(true) {
        return AttributeType::String;
    }
    if props.x_kubernetes_preserve_unknown_fields == Some(true) && !has_properties(props) {
        return AttributeType::Dynamic;
    }
    match props.type_.as_deref() {
        Some("string") => AttributeType::String,
        Some("integer") => AttributeType::Int64,
        Some("number") => AttributeType::Float64,
        Some("boolean") => AttributeType::Bool,
        Some("array") => match &props.items {
            Some(JSONSchemaPropsOrArray::Schema(item)) => {
                let item = resolve(item);
                if has_properties(item) {
                    AttributeType::ListNested(from_json_schema_props(item, mode))
                } else {
                    AttributeType::List(Box::new(attribute_type(item, mode)))
                }
            }
            _ => AttributeType::List(Box::new(AttributeType::Dynamic)),
        },
        Some("object") if has_properties(props) => {
            AttributeType::SingleNested(from_json_schema_props(props, mode))
        }
        Some("object") => match &props.additional_properties {
            Some(JSONSchemaPropsOrBool::Schema(value)) => {
                AttributeType::Map(Box::new(attribute_type(resolve(value), mode)))
            }
            _ => AttributeType::Dynamic,
        },
        _ => AttributeType::Dynamic,
    }
}

fn validators(props: &JSONSchemaProps) -> Vec<Validator> {
    let mut validators = Vec::new();
    if let Some(values) = &props.enum_ {
        // Nullable enums list the string "null" as one of their values.
        let values: Vec<&str> = values
            .iter()
            .filter_map(|JSON(value)| value.as_str())
            .filter(|value| *value != "null")
            .collect();
        if !values.is_empty() {
            validators.push(Validator::one_of(values));
        }
    }
    if let Some(pattern) = &props.pattern {
        validators.push(Validator::regex(pattern.as_str()));
    }
    if props.minimum.is_some() || props.maximum.is_some() {
        validators.push(Validator::Between {
            min: props.minimum,
            max: props.maximum,
        });
    }
    validators
}
