use std::fs::read_to_string;
use std::path::Path;

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use crate::bundle::{DEFAULT_VERSION, Meta};
use crate::errors::{VmcError, VmcResult};

/// What [`crate::BundleBuilder::finish`] does with child identifiers that point
/// at entities missing from the bundle.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReferencePolicy {
    Allow,
    #[default]
    Warn,
    Deny,
}

/// Bundle settings, usually read from a TOML file:
///
/// ```toml
/// version = "0"
/// generated_at = "2017-06-07T06:13:59.380Z"
/// references = "deny"
/// ```
///
/// Every key is optional. Leaving `generated_at` out stamps bundles with the
/// time they are built.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BundleConfig {
    pub version: String,
    pub generated_at: Option<DateTime<Utc>>,
    pub references: ReferencePolicy,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            generated_at: None,
            references: ReferencePolicy::default(),
        }
    }
}

impl BundleConfig {
    pub fn from_toml_str(toml_str: &str) -> VmcResult<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Provenance for a bundle built under this config.
    pub fn meta(&self) -> Meta {
        Meta::new(self.generated_at.unwrap_or_else(Utc::now), self.version.clone())
    }
}

impl TryFrom<&Path> for BundleConfig {
    type Error = VmcError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config = BundleConfig::from_toml_str(&toml_str)?;
        info!("Loaded bundle config from {}", path.display());
        Ok(config)
    }
}
