//! User roles.
//!
//! Roles are a fixed lookup table seeded by the initial migration. The numeric
//! ids below must match the rows in `roles`.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Name of a role as it appears in tokens and in the `roles` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoleName {
    Customer,
    Admin,
}

impl RoleName {
    /// Primary key of the role row.
    pub const fn id(self) -> i32 {
        match self {
            RoleName::Customer => 1,
            RoleName::Admin => 2,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            RoleName::Customer => "CUSTOMER",
            RoleName::Admin => "ADMIN",
        }
    }

    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            1 => Some(RoleName::Customer),
            2 => Some(RoleName::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_ids_match_seed_rows() {
        assert_eq!(RoleName::Customer.id(), 1);
        assert_eq!(RoleName::Admin.id(), 2);
        assert_eq!(RoleName::from_id(2), Some(RoleName::Admin));
        assert_eq!(RoleName::from_id(3), None);
    }

    #[test]
    fn test_role_serializes_uppercase() {
        let json = serde_json::to_string(&RoleName::Admin).unwrap();
        assert_eq!(json, r#""ADMIN""#);

        let role: RoleName = serde_json::from_str(r#""CUSTOMER""#).unwrap();
        assert_eq!(role, RoleName::Customer);
    }
}
