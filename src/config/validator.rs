use thiserror::Error;

use crate::config::Settings;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if settings.generator.max_items == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "generator.max_items".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if settings.generator.max_depth == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "generator.max_depth".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if settings.collection.master_file_name.is_empty() {
            errors.push(ValidationError::MissingField(
                "collection.master_file_name".to_string(),
            ));
        } else if settings.collection.master_file_name.contains('/') {
            errors.push(ValidationError::InvalidValue {
                field: "collection.master_file_name".to_string(),
                reason: "Must be a bare file name, not a path".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CollectionSettings, GeneratorSettings, Settings};

    #[test]
    fn test_default_config_is_valid() {
        let settings = Settings::default();
        assert!(ConfigValidator::validate(&settings).is_ok());
    }

    #[test]
    fn test_zero_max_items_rejected() {
        let settings = Settings {
            generator: GeneratorSettings {
                max_items: 0,
                ..Default::default()
            },
            collection: Default::default(),
        };
        let errors = ConfigValidator::validate(&settings).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ValidationError::InvalidValue { .. }));
    }

    #[test]
    fn test_master_file_name_must_be_bare() {
        let settings = Settings {
            generator: Default::default(),
            collection: CollectionSettings {
                master_file_name: "nested/master.json".to_string(),
            },
        };
        assert!(ConfigValidator::validate(&settings).is_err());

        let settings = Settings {
            generator: Default::default(),
            collection: CollectionSettings {
                master_file_name: String::new(),
            },
        };
        let errors = ConfigValidator::validate(&settings).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::MissingField(_))));
    }
}
