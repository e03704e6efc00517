use thiserror::Error;

#[derive(Debug, Error)]
pub enum TcoError {
    #[error("No consumption preset for a {0} t capacity class")]
    PresetNotFound(f64),

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to parse YAML from '{0}': {1}")]
    YamlParsing(String, #[source] serde_yaml::Error),

    #[error("Failed to serialize JSON: {0}")]
    JsonParsing(#[from] serde_json::Error),

    #[error("Failed to write CSV '{0}': {1}")]
    CsvError(String, #[source] csv::Error),
}
