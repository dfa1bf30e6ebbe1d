//! Availability flag of a menu item.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::shared::DomainError;

/// Whether a menu item can currently be ordered.
///
/// Stored as the text `Yes` or `No`. Rows written by other tools may hold
/// any text; those read back as [`Availability::Unrecognized`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Availability {
    /// Item can be ordered.
    #[default]
    Yes,
    /// Item is off the menu for now.
    No,
    /// Stored text outside the fixed options.
    Unrecognized(String),
}

impl Availability {
    /// Options offered by the availability selector.
    pub const OPTIONS: &'static [&'static str] = &["Yes", "No"];

    /// Text written to storage.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Unrecognized(text) => text,
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parsing used at the form boundary.
impl FromStr for Availability {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Yes" => Ok(Self::Yes),
            "No" => Ok(Self::No),
            other => Err(DomainError::InvalidEnum {
                field: "availability",
                value: other.to_string(),
                allowed: Self::OPTIONS,
            }),
        }
    }
}

/// Lenient conversion used when reading stored rows.
impl From<String> for Availability {
    fn from(value: String) -> Self {
        value.parse().unwrap_or(Self::Unrecognized(value))
    }
}

impl From<Availability> for String {
    fn from(value: Availability) -> Self {
        match value {
            Availability::Unrecognized(text) => text,
            known => known.as_str().to_string(),
        }
    }
}
