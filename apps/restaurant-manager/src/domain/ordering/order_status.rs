//! Order status in the lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::shared::DomainError;

/// Lifecycle marker of an order.
///
/// New orders are always `Pending`. Storage accepts any status text, so a
/// row may carry a value outside the two fixed options; it reads back as
/// [`OrderStatus::Unrecognized`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum OrderStatus {
    /// Placed, not yet served.
    #[default]
    Pending,
    /// Served.
    Completed,
    /// Stored text outside the fixed options.
    Unrecognized(String),
}

impl OrderStatus {
    /// Options offered by the status selector.
    pub const OPTIONS: &'static [&'static str] = &["Pending", "Completed"];

    /// Text written to storage.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
            Self::Unrecognized(text) => text,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parsing used at the form boundary.
impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Completed" => Ok(Self::Completed),
            other => Err(DomainError::InvalidEnum {
                field: "status",
                value: other.to_string(),
                allowed: Self::OPTIONS,
            }),
        }
    }
}

/// Lenient conversion used when reading stored rows.
impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        value.parse().unwrap_or(Self::Unrecognized(value))
    }
}

impl From<OrderStatus> for String {
    fn from(value: OrderStatus) -> Self {
        match value {
            OrderStatus::Unrecognized(text) => text,
            known => known.as_str().to_string(),
        }
    }
}
