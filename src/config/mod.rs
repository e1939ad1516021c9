use config::{Config, File};
use serde::{Deserialize, Serialize};

pub mod validator;

use crate::cli::Cli;
use crate::domain::GeneratorOptions;

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub generator: GeneratorSettings,
    #[serde(default)]
    pub collection: CollectionSettings,
}

/// Schema traversal knobs.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GeneratorSettings {
    /// Array cardinality ceiling when a schema declares no maxItems
    #[serde(default = "default_max_items")]
    pub max_items: u32,
    /// Recursion cap for schema traversal
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
    /// Synthesize only `required` properties
    #[serde(default)]
    pub skip_non_required: bool,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            max_items: default_max_items(),
            max_depth: default_max_depth(),
            skip_non_required: false,
        }
    }
}

fn default_max_items() -> u32 {
    2
}

fn default_max_depth() -> u32 {
    5
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CollectionSettings {
    /// Reserved per-directory manifest file name
    #[serde(default = "default_master_file_name")]
    pub master_file_name: String,
}

impl Default for CollectionSettings {
    fn default() -> Self {
        Self {
            master_file_name: default_master_file_name(),
        }
    }
}

fn default_master_file_name() -> String {
    "master.json".to_string()
}

impl Settings {
    pub fn new() -> Result<Self, anyhow::Error> {
        Self::from_root(".")
    }

    /// Create settings from CLI arguments (config file location override).
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let s = Config::builder()
            .add_source(File::from(cli.config.clone()).required(false))
            .build()?;
        let settings: Settings = s.try_deserialize()?;
        Self::validated(settings)
    }

    pub fn from_root(root: &str) -> Result<Self, anyhow::Error> {
        let config_path = std::path::Path::new(root).join("mimus");
        let s = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()?;
        let settings: Settings = s.try_deserialize()?;
        Self::validated(settings)
    }

    fn validated(settings: Settings) -> Result<Self, anyhow::Error> {
        validator::ConfigValidator::validate(&settings).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })?;
        Ok(settings)
    }

    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            max_items: self.generator.max_items,
            max_depth: self.generator.max_depth,
            skip_non_required: self.generator.skip_non_required,
        }
    }
}
