//! Personal data profiles saved as JSON.
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name, nickname and birthdate of a target.
///
/// Every field is optional when loading so partial
/// profiles can be completed interactively.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Full name.
    #[serde(default)]
    pub name: Option<String>,
    /// Nickname.
    #[serde(default)]
    pub nick: Option<String>,
    /// Birthdate, conventionally `DDMMYYYY`.
    #[serde(default)]
    pub dob: Option<String>,
}

impl Profile {
    /// Load a profile from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let buffer = std::fs::read(path)?;
        Ok(serde_json::from_slice(&buffer)?)
    }

    /// Save this profile to a JSON file, replacing
    /// any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let buffer = serde_json::to_vec_pretty(self)?;
        std::fs::write(path, buffer)?;
        Ok(())
    }

    /// Copy of this profile with spaces removed
    /// from every field.
    pub fn sanitized(&self) -> Self {
        let strip = |value: &Option<String>| {
            value.as_ref().map(|v| v.replace(' ', ""))
        };
        Self {
            name: strip(&self.name),
            nick: strip(&self.nick),
            dob: strip(&self.dob),
        }
    }
}
