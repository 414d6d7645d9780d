use super::{MapperFactory, Registry};

use remap_core::{err, Error, Result};
use serde::Deserialize;

/// Factory-wide settings.
///
/// Deserializable, so a factory can be configured from a file:
///
/// ```
/// # use remap::FactoryConfig;
/// let config = FactoryConfig::from_json(r#"{ "map_nulls": false }"#).unwrap();
/// assert!(!config.map_nulls);
/// assert!(config.use_auto_mapping);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FactoryConfig {
    /// Copy null source values over the destination unless a class map or
    /// field says otherwise.
    pub map_nulls: bool,

    /// Derive class maps by field name for pairs nobody registered.
    pub use_auto_mapping: bool,
}

impl FactoryConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|err| {
            Error::from(anyhow::Error::from(err)).context(err!("invalid mapper factory config"))
        })
    }
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            map_nulls: true,
            use_auto_mapping: true,
        }
    }
}

#[derive(Debug, Default)]
pub struct Builder {
    config: FactoryConfig,
}

impl Builder {
    pub fn from_config(config: FactoryConfig) -> Self {
        Self { config }
    }

    /// Sets the factory-wide null policy.
    pub fn map_nulls(&mut self, map_nulls: bool) -> &mut Self {
        self.config.map_nulls = map_nulls;
        self
    }

    pub fn use_auto_mapping(&mut self, use_auto_mapping: bool) -> &mut Self {
        self.config.use_auto_mapping = use_auto_mapping;
        self
    }

    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    pub fn build(&self) -> MapperFactory {
        MapperFactory::from_registry(Registry::new(&self.config))
    }
}
