//! Strongly-typed ID wrappers for all entity types
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! entity types at compile time. IDs are small sequential integers allocated
//! by the owning repository (max existing + 1), never reused within a file.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create an ID from a raw integer
            pub fn from_raw(raw: i64) -> Self {
                Self(raw)
            }

            /// Get the underlying integer
            pub fn raw(&self) -> i64 {
                self.0
            }

            /// The next sequential ID
            pub fn next(&self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Accept both a bare integer and the prefixed display form
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(s.parse::<i64>()?))
            }
        }
    };
}

define_id!(BudgetId, "bud-");
define_id!(ExpenseId, "exp-");
define_id!(CategoryId, "cat-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = BudgetId::from_raw(7);
        assert_eq!(format!("{}", id), "bud-7");
    }

    #[test]
    fn test_id_next() {
        let id = ExpenseId::from_raw(3);
        assert_eq!(id.next(), ExpenseId::from_raw(4));
    }

    #[test]
    fn test_id_parse() {
        assert_eq!("5".parse::<CategoryId>().unwrap(), CategoryId::from_raw(5));
        assert_eq!(
            "cat-12".parse::<CategoryId>().unwrap(),
            CategoryId::from_raw(12)
        );
        assert!("cat-xyz".parse::<CategoryId>().is_err());
    }

    #[test]
    fn test_id_serialization() {
        let id = BudgetId::from_raw(42);
        let json = serde_json::to_string(&id).unwrap();
        // Transparent: serializes as a bare integer
        assert_eq!(json, "42");
        let deserialized: BudgetId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_id_ordering() {
        let a = BudgetId::from_raw(1);
        let b = BudgetId::from_raw(2);
        assert!(a < b);
    }
}
