//! Engine configuration.
//!
//! Every knob the engine reads at request time lives in `EngineConfig`.
//! The config is built once at startup (from defaults, builder calls, or a
//! TOML file) and passed explicitly to the components that need it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::Result;

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Phrase that marks an effect as cancelling its targets.
    /// Matched case-insensitively against the card's effect text.
    pub cancel_phrase: String,

    /// Controllers assigned by index parity when no actions are supplied.
    pub default_controllers: [String; 2],

    /// Number of ranked passages handed to the reasoning service.
    pub explanation_passages: usize,

    /// Fail the request instead of degrading when reasoning is unavailable.
    pub require_narrative: bool,

    /// Maximum characters of a synthesized summary before truncation.
    pub summary_chars: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cancel_phrase: "counter target".to_string(),
            default_controllers: ["Player 1".to_string(), "Player 2".to_string()],
            explanation_passages: 8,
            require_narrative: false,
            summary_chars: 200,
        }
    }
}

impl EngineConfig {
    /// Parse a config from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Use a different cancellation phrase.
    #[must_use]
    pub fn with_cancel_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.cancel_phrase = phrase.into();
        self
    }

    /// Use different default controller names.
    #[must_use]
    pub fn with_default_controllers(
        mut self,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        self.default_controllers = [first.into(), second.into()];
        self
    }

    /// Hand a different number of passages to the reasoning service.
    #[must_use]
    pub fn with_explanation_passages(mut self, k: usize) -> Self {
        self.explanation_passages = k;
        self
    }

    /// Require a narrative from the reasoning service.
    #[must_use]
    pub fn with_require_narrative(mut self, required: bool) -> Self {
        self.require_narrative = required;
        self
    }

    /// Controller name for the card at `index` of a bare card list.
    #[must_use]
    pub fn default_controller(&self, index: usize) -> &str {
        &self.default_controllers[index % 2]
    }
}
