//! Strongly-typed row identifiers.
//!
//! Both tables use SQLite `INTEGER PRIMARY KEY AUTOINCREMENT`, so ids are
//! assigned by storage and never chosen by callers.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw row id.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Get the raw row id.
            #[must_use]
            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(MenuItemId, "Row id of a menu item.");
define_id!(OrderId, "Row id of a placed order.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_item_id_new_and_display() {
        let id = MenuItemId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(format!("{id}"), "42");
    }

    #[test]
    fn order_id_serializes_transparently() {
        let id = OrderId::new(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        let parsed: OrderId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn ids_order_numerically() {
        assert!(OrderId::new(2) < OrderId::new(10));
    }
}
