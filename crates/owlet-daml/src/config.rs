//! DAML model configuration

use crate::DamlError;
use serde::{Deserialize, Serialize};

/// Settings carried by a [`crate::DamlModel`] and consulted on every
/// equivalence-sensitive operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DamlConfig {
    /// Master switch for equivalence reasoning. When off, iterators built over
    /// the model behave as plain traversals even if asked to use equivalence.
    pub use_equivalence: bool,
    /// Also treat `owl:equivalentClass`, `owl:equivalentProperty` and
    /// `owl:sameAs` as equivalence declarations
    pub include_owl_equivalence: bool,
}

impl Default for DamlConfig {
    fn default() -> Self {
        Self {
            use_equivalence: true,
            include_owl_equivalence: true,
        }
    }
}

impl DamlConfig {
    /// Configuration with equivalence reasoning switched off
    pub fn without_equivalence() -> Self {
        Self {
            use_equivalence: false,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, DamlError> {
        serde_json::from_str(json).map_err(|e| DamlError::Config(e.to_string()))
    }

    pub fn to_json_string(&self) -> Result<String, DamlError> {
        serde_json::to_string_pretty(self).map_err(|e| DamlError::Config(e.to_string()))
    }
}
