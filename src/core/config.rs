//! Configuration management.
//!
//! Handles reading and validating the keyhole TOML configuration. Every section
//! is optional; an empty file yields the defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Resolver configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Names of the reserved policy fields
    #[serde(default)]
    pub fields: FieldNames,
    /// Policy switches
    #[serde(default)]
    pub policy: Policy,
    /// AWS client settings (used by the `aws` store)
    #[serde(default)]
    pub aws: AwsConfig,
}

/// Document field names that carry policy instead of secret values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldNames {
    #[serde(default = "default_events_field")]
    pub events: String,
    #[serde(default = "default_repos_field")]
    pub repos: String,
    #[serde(default = "default_branches_field")]
    pub branches: String,
}

impl FieldNames {
    /// Whether `name` is one of the reserved fields
    pub fn is_reserved(&self, name: &str) -> bool {
        name == self.events || name == self.repos || name == self.branches
    }
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            events: default_events_field(),
            repos: default_repos_field(),
            branches: default_branches_field(),
        }
    }
}

fn default_events_field() -> String {
    constants::EVENTS_FIELD.to_string()
}

fn default_repos_field() -> String {
    constants::REPOS_FIELD.to_string()
}

fn default_branches_field() -> String {
    constants::BRANCHES_FIELD.to_string()
}

/// Policy switches for the two ambiguous cases of resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    #[serde(default)]
    pub reserved_names: ReservedNames,
    #[serde(default)]
    pub missing_field: MissingField,
}

/// Whether reserved field names may be requested as ordinary secrets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReservedNames {
    /// Requests naming a reserved field are invalid
    #[default]
    Reject,
    /// Reserved fields are readable like any other field
    Allow,
}

/// What to disclose when the requested field is absent from the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingField {
    /// Disclose an empty value
    #[default]
    Empty,
    /// Fail with `NotFound` once the policy filters have passed
    NotFound,
}

/// AWS client settings. Credentials always come from the default provider chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsConfig {
    /// Region override (e.g. `us-east-1`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Endpoint override, for local stacks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file cannot be read,
    /// `ConfigError::Parse` if the TOML is malformed, or
    /// `ConfigError::InvalidValue` if validation fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config");

        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;

        debug!(
            events = %config.fields.events,
            repos = %config.fields.repos,
            branches = %config.fields.branches,
            reserved_names = ?config.policy.reserved_names,
            missing_field = ?config.policy.missing_field,
            "config loaded"
        );

        Ok(config)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self).map_err(ConfigError::Serialize)?)
    }

    /// Validate the configuration
    ///
    /// Checks:
    /// - Reserved field names are non-empty and carry no surrounding whitespace
    /// - Reserved field names are distinct from each other and from `value`
    /// - The endpoint override, if any, is an http(s) URL
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` on validation failure.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("fields.events", &self.fields.events),
            ("fields.repos", &self.fields.repos),
            ("fields.branches", &self.fields.branches),
        ];

        for (field, name) in fields {
            if name.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must not be empty".to_string(),
                }
                .into());
            }
            if name.trim() != name.as_str() {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("'{}' has surrounding whitespace", name),
                }
                .into());
            }
            if name.as_str() == constants::VALUE_FIELD {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("'{}' is used for non-JSON payloads", constants::VALUE_FIELD),
                }
                .into());
            }
        }

        for (i, (field, name)) in fields.iter().enumerate() {
            if fields[..i].iter().any(|(_, other)| other == name) {
                return Err(ConfigError::InvalidValue {
                    field: *field,
                    reason: format!("'{}' is already used by another reserved field", name),
                }
                .into());
            }
        }

        if let Some(url) = &self.aws.endpoint_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidValue {
                    field: "aws.endpoint_url",
                    reason: format!("not an http(s) URL: {}", url),
                }
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.fields.events, "X-Drone-Events");
        assert_eq!(config.policy.reserved_names, ReservedNames::Reject);
        assert_eq!(config.policy.missing_field, MissingField::Empty);
    }

    #[test]
    fn test_parse_all_sections() {
        let config = Config::from_toml(
            r#"
            [fields]
            events = "allow-events"

            [policy]
            reserved_names = "allow"
            missing_field = "not-found"

            [aws]
            region = "eu-west-1"
            endpoint_url = "http://localhost:4566"
            "#,
        )
        .unwrap();

        assert_eq!(config.fields.events, "allow-events");
        assert_eq!(config.fields.repos, "X-Drone-Repos");
        assert_eq!(config.policy.reserved_names, ReservedNames::Allow);
        assert_eq!(config.policy.missing_field, MissingField::NotFound);
        assert_eq!(config.aws.region.as_deref(), Some("eu-west-1"));
    }

    #[test]
    fn test_roundtrip() {
        let mut config = Config::default();
        config.policy.missing_field = MissingField::NotFound;
        config.aws.region = Some("us-east-1".to_string());

        let toml = config.to_toml().unwrap();
        assert_eq!(Config::from_toml(&toml).unwrap(), config);
    }

    #[test]
    fn test_rejects_unknown_policy_value() {
        let result = Config::from_toml("[policy]\nmissing_field = \"explode\"\n");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }

    #[test]
    fn test_rejects_empty_field_name() {
        let result = Config::from_toml("[fields]\nrepos = \"\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "fields.repos",
                ..
            }))
        ));
    }

    #[test]
    fn test_rejects_duplicate_field_names() {
        let result = Config::from_toml("[fields]\nevents = \"X-Drone-Repos\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "fields.repos",
                ..
            }))
        ));
    }

    #[test]
    fn test_rejects_value_as_field_name() {
        let result = Config::from_toml("[fields]\nbranches = \"value\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_padded_field_name() {
        let result = Config::from_toml("[fields]\nevents = \" events \"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_bad_endpoint() {
        let result = Config::from_toml("[aws]\nendpoint_url = \"localhost:4566\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "aws.endpoint_url",
                ..
            }))
        ));
    }

    #[test]
    fn test_is_reserved() {
        let names = FieldNames::default();
        assert!(names.is_reserved("X-Drone-Branches"));
        assert!(!names.is_reserved("x-drone-branches"));
        assert!(!names.is_reserved("API_KEY"));
    }
}
