use crate::{env_or_default, ConfigError, FromEnv};

/// Region every operation of the service is deployed to.
pub const DEFAULT_REGION: &str = "southamerica-east1";

/// Fixed deployment region.
///
/// Set once per deployment through `FUNCTION_REGION`; callers cannot pick a
/// region per request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionConfig {
    pub region: String,
}

impl RegionConfig {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.region
    }
}

impl FromEnv for RegionConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let region = env_or_default("FUNCTION_REGION", DEFAULT_REGION);
        if region.trim().is_empty() {
            return Err(ConfigError::ParseError {
                key: "FUNCTION_REGION".to_string(),
                details: "region cannot be empty".to_string(),
            });
        }
        Ok(Self { region })
    }
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_REGION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_defaults_to_sao_paulo() {
        temp_env::with_var_unset("FUNCTION_REGION", || {
            let config = RegionConfig::from_env().unwrap();
            assert_eq!(config.as_str(), "southamerica-east1");
        });
    }

    #[test]
    fn test_region_override() {
        temp_env::with_var("FUNCTION_REGION", Some("europe-west1"), || {
            let config = RegionConfig::from_env().unwrap();
            assert_eq!(config, RegionConfig::new("europe-west1"));
        });
    }

    #[test]
    fn test_region_rejects_blank() {
        temp_env::with_var("FUNCTION_REGION", Some("  "), || {
            let err = RegionConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("FUNCTION_REGION"));
        });
    }
}
