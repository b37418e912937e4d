use config::Config;
use error_stack::report;
use serde::Deserialize;
use serde_path_to_error::{Deserializer as PathDeserializer, Segment, Track};

use crate::error::RegistryError;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: super::server_config::ServerConfig,
    pub sheets: super::sheets_config::SpreadsheetConfig,
}

impl AppConfig {
    /// Loads the config file named by `CONFIG_PATH` (default `Config`, any
    /// extension the `config` crate understands). Deserialization goes
    /// through `serde_path_to_error` so a bad file names the exact field.
    pub fn load() -> error_stack::Result<Self, RegistryError> {
        let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "Config".to_string());
        let config = Config::builder()
            .add_source(config::File::with_name(&config_path))
            .build()
            .map_err(|e| match e {
                config::ConfigError::NotFound(property) => {
                    report!(RegistryError::Configuration {
                        details: format!(
                            "missing property {:?} in config file '{}'",
                            property, config_path
                        ),
                    })
                }
                other => report!(RegistryError::Configuration {
                    details: format!("error reading config file '{}': {}", config_path, other),
                }),
            })?;

        let value = config
            .try_deserialize::<serde_json::Value>()
            .map_err(|e| {
                report!(RegistryError::Configuration {
                    details: format!("config file '{}' is not valid: {}", config_path, e),
                })
            })?;

        use serde::de::IntoDeserializer;
        let mut track = Track::new();
        let path_de = PathDeserializer::new(value.into_deserializer(), &mut track);
        AppConfig::deserialize(path_de).map_err(|e| {
            let path_str = track
                .path()
                .iter()
                .map(|seg| match seg {
                    Segment::Seq { index } => format!("[{}]", index),
                    Segment::Map { key } => format!(".{}", key),
                    Segment::Enum { variant } => format!("::{}", variant),
                    Segment::Unknown => String::from("<?>"),
                })
                .collect::<String>();
            report!(RegistryError::Configuration {
                details: format!(
                    "failed to deserialize config file '{}': {} (field path: {})",
                    config_path,
                    e,
                    path_str.trim_start_matches('.')
                ),
            })
        })
    }
}
