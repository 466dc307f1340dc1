use snafu::Snafu;

#[derive(Debug, Snafu)]
pub struct Error(OpaqueError);
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub(crate) enum OpaqueError {
    #[snafu(display("Error serializing object: {}", source))]
    JsonSerialization { source: serde_json::Error },

    #[snafu(display("Error serializing object to YAML: {}", source))]
    YamlSerialization { source: serde_yaml::Error },

    #[snafu(display("Parse error: {}", source))]
    SerdePlain { source: serde_plain::Error },
}
