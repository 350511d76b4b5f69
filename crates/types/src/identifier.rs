use crate::{EntityKind, IdError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// A hierarchical openBIS identifier such as `/SPACE`, `/SPACE/PROJECT`,
/// `/SPACE/PROJECT/CODE` or the space-level sample form `/SPACE/CODE`.
///
/// Identifiers are stored exactly as given; use [`Identifier::normalize`] to
/// accept the sloppier forms users type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier {
    components: Vec<String>,
}

impl Identifier {
    /// Parse from a string like "/DEFAULT/PROJ/S1"
    ///
    /// The identifier must start with '/' and contain between one and three
    /// non-empty components.
    pub fn parse(text: &str) -> Result<Self, IdError> {
        let Some(rest) = text.strip_prefix('/') else {
            return Err(IdError::InvalidIdentifier(format!(
                "Identifier must start with '/': '{}'",
                text
            )));
        };

        let components: Vec<&str> = rest.split('/').collect();
        if components.iter().any(|c| c.is_empty()) {
            return Err(IdError::EmptyComponent);
        }
        if components.len() > 3 {
            return Err(IdError::InvalidIdentifier(format!(
                "Expected at most 3 components, got {} in '{}'",
                components.len(),
                text
            )));
        }

        Ok(Self {
            components: components.into_iter().map(str::to_string).collect(),
        })
    }

    /// Parse an identifier the way users tend to write it.
    ///
    /// A missing leading '/' is added and codes are upper-cased. For samples
    /// the ELN style `/SPACE/PROJECT/EXPERIMENT/CODE` is accepted and the
    /// experiment segment dropped.
    pub fn normalize(kind: EntityKind, text: &str) -> Result<Self, IdError> {
        let trimmed = text.trim();
        let mut ident = if trimmed.starts_with('/') {
            trimmed.to_uppercase()
        } else {
            format!("/{}", trimmed.to_uppercase())
        };

        if kind == EntityKind::Sample && ident.matches('/').count() == 4 {
            let codes: Vec<&str> = ident.split('/').collect();
            ident = [codes[0], codes[1], codes[2], codes[4]].join("/");
        }

        Self::parse(&ident)
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

    pub fn space(&self) -> &str {
        &self.components[0]
    }

    /// The project segment of a `/SPACE/PROJECT/CODE` identifier.
    pub fn project(&self) -> Option<&str> {
        match self.components.len() {
            3 => Some(&self.components[1]),
            _ => None,
        }
    }

    /// The trailing code (the space code for a bare `/SPACE`).
    pub fn code(&self) -> &str {
        self.components
            .last()
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Whether `text` looks like a server generated perm id (`20130412105232616-2`).
pub fn is_perm_id(text: &str) -> bool {
    static PERM_ID: OnceLock<Regex> = OnceLock::new();
    PERM_ID
        .get_or_init(|| Regex::new(r"^\d{17}-\d+$").expect("perm id pattern is valid"))
        .is_match(text)
}

impl FromStr for Identifier {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Identifier {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for component in &self.components {
            write!(f, "/{}", component)?;
        }
        Ok(())
    }
}
