//! Model value object representing a hosted LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Hosted LLM models (Value Object)
///
/// Identifies the model the answer generator talks to. Names that are not
/// known here are carried through unchanged as [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // Llama models
    Llama31_8bInstant,
    Llama33_70bVersatile,
    // Gemma models
    Gemma2_9b,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Llama31_8bInstant => "llama-3.1-8b-instant",
            Model::Llama33_70bVersatile => "llama-3.3-70b-versatile",
            Model::Gemma2_9b => "gemma2-9b-it",
            Model::Custom(s) => s,
        }
    }

    /// Check if this is a Llama model
    pub fn is_llama(&self) -> bool {
        matches!(self, Model::Llama31_8bInstant | Model::Llama33_70bVersatile)
    }
}

impl Default for Model {
    /// Returns the default model (llama-3.1-8b-instant)
    fn default() -> Self {
        Model::Llama31_8bInstant
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "llama-3.1-8b-instant" => Model::Llama31_8bInstant,
            "llama-3.3-70b-versatile" => Model::Llama33_70bVersatile,
            "gemma2-9b-it" => Model::Gemma2_9b,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(model) = s.parse::<Model>();
        Ok(model)
    }
}
