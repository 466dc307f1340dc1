/*!

The schema of a provider type: a tree of attributes named the way Terraform names them (snake
case), each remembering the JSON name of the Kubernetes field it mirrors.

!*/

pub use convert::{from_json_schema_props, SchemaMode};
pub use naming::snake_case;
pub use path::{AttributePath, PathStep};
pub use validators::Validator;

mod convert;
mod naming;
mod path;
mod validate;
mod validators;
mod value;

use serde::Serialize;
use serde_json::Value;

/// The type of an attribute's value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "of")]
pub enum AttributeType {
    String,
    Int64,
    Float64,
    Bool,
    List(Box<AttributeType>),
    Map(Box<AttributeType>),
    /// Any JSON value, used for fields that preserve unknown fields.
    Dynamic,
    SingleNested(Vec<Attribute>),
    ListNested(Vec<Attribute>),
}

impl AttributeType {
    /// How the type is named in diagnostics.
    pub fn friendly_name(&self) -> String {
        match self {
            AttributeType::String => "string".to_string(),
            AttributeType::Int64 => "number (int64)".to_string(),
            AttributeType::Float64 => "number".to_string(),
            AttributeType::Bool => "bool".to_string(),
            AttributeType::List(element) => format!("list of {}", element.friendly_name()),
            AttributeType::Map(element) => format!("map of {}", element.friendly_name()),
            AttributeType::Dynamic => "any value".to_string(),
            AttributeType::SingleNested(_) => "object".to_string(),
            AttributeType::ListNested(_) => "list of object".to_string(),
        }
    }

    pub fn nested_attributes(&self) -> Option<&[Attribute]> {
        match self {
            AttributeType::SingleNested(attributes) | AttributeType::ListNested(attributes) => {
                Some(attributes)
            }
            _ => None,
        }
    }
}

/// A single attribute of a schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    pub name: String,
    /// The name of the mirrored field in the Kubernetes object. `None` for attributes that only
    /// exist on the provider side, such as `id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_name: Option<String>,
    #[serde(flatten)]
    pub attribute_type: AttributeType,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    /// A change of this attribute cannot be applied in place.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub requires_replace: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub validators: Vec<Validator>,
}

impl Attribute {
    /// A new optional attribute that mirrors the Kubernetes field `json_name`.
    pub fn new<S1, S2>(name: S1, json_name: S2, attribute_type: AttributeType) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self {
            json_name: Some(json_name.into()),
            ..Self::provider_only(name, attribute_type)
        }
    }

    /// A new optional attribute that has no counterpart in the Kubernetes object.
    pub fn provider_only<S>(name: S, attribute_type: AttributeType) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            json_name: None,
            attribute_type,
            description: String::new(),
            required: false,
            optional: true,
            computed: false,
            requires_replace: false,
            default: None,
            validators: Vec::new(),
        }
    }

    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = description.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self.optional = false;
        self.computed = false;
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self.optional = true;
        self
    }

    /// Only the provider sets this attribute.
    pub fn computed(mut self) -> Self {
        self.required = false;
        self.optional = false;
        self.computed = true;
        self
    }

    /// The provider fills the attribute in when the configuration leaves it unset.
    pub fn optional_computed(mut self) -> Self {
        self.required = false;
        self.optional = true;
        self.computed = true;
        self
    }

    pub fn requires_replace(mut self) -> Self {
        self.requires_replace = true;
        self
    }

    pub fn default_value<V: Into<Value>>(mut self, value: V) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    /// Computed attributes that cannot be configured.
    pub fn is_read_only(&self) -> bool {
        self.computed && !self.optional && !self.required
    }
}

/// The schema of a provider, data source or resource type.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Schema {
    pub description: String,
    pub attributes: Vec<Attribute>,
}

impl Schema {
    pub fn new<S: Into<String>>(description: S) -> Self {
        Self {
            description: description.into(),
            attributes: Vec::new(),
        }
    }

    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Finds an attribute by its path, descending into nested attributes.
    pub fn find(&self, path: &AttributePath) -> Option<&Attribute> {
        let mut attributes = self.attributes.as_slice();
        let mut found = None;
        for step in path.steps() {
            match step {
                PathStep::Attribute(name) => {
                    let attribute = attributes.iter().find(|a| &a.name == name)?;
                    attributes = attribute
                        .attribute_type
                        .nested_attributes()
                        .unwrap_or_default();
                    found = Some(attribute);
                }
                PathStep::Index(_) | PathStep::Key(_) => {}
            }
        }
        found
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn schema() -> Schema {
        Schema::new("test")
            .attribute(Attribute::provider_only("id", AttributeType::String).computed())
            .attribute(
                Attribute::new(
                    "metadata",
                    "metadata",
                    AttributeType::SingleNested(vec![Attribute::new(
                        "name",
                        "name",
                        AttributeType::String,
                    )
                    .required()]),
                )
                .required(),
            )
    }

    #[test]
    fn find_nested_attribute() {
        let schema = schema();
        let path = AttributePath::root().attribute("metadata").attribute("name");
        let attribute = schema.find(&path).unwrap();
        assert!(attribute.required);
        assert!(schema
            .find(&AttributePath::root().attribute("nope"))
            .is_none());
    }

    #[test]
    fn flags() {
        let schema = schema();
        let id = schema.get("id").unwrap();
        assert!(id.is_read_only());
        let attribute = Attribute::provider_only("field_manager", AttributeType::String)
            .optional_computed()
            .default_value("terraform");
        assert!(!attribute.is_read_only());
        assert_eq!(attribute.default, Some(Value::from("terraform")));
    }

    #[test]
    fn serialize_schema() {
        let value = serde_json::to_value(schema()).unwrap();
        assert_eq!(value["attributes"][0]["name"], "id");
        assert_eq!(value["attributes"][0]["type"], "string");
        assert_eq!(value["attributes"][1]["type"], "single_nested");
        assert_eq!(value["attributes"][1]["of"][0]["name"], "name");
    }
}
