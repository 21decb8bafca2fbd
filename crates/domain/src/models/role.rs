//! Role models and the fixed role catalog.

/// Identifier of the built-in administrator role.
pub const ROLE_ADMIN: &str = "role_admin";
/// Identifier of the built-in service-staff role.
pub const ROLE_STAFF: &str = "role_staff";
/// Identifier of the built-in owner role.
pub const ROLE_OWNER: &str = "role_owner";

/// Permission tier attached to a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionLevel {
    Admin,
    Staff,
    Owner,
}

impl PermissionLevel {
    /// Small-integer code stored in the `permission_level` column.
    pub fn code(&self) -> i16 {
        match self {
            PermissionLevel::Admin => 1,
            PermissionLevel::Staff => 2,
            PermissionLevel::Owner => 3,
        }
    }

    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            1 => Some(PermissionLevel::Admin),
            2 => Some(PermissionLevel::Staff),
            3 => Some(PermissionLevel::Owner),
            _ => None,
        }
    }
}

/// A user role row.
#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub role_id: String,
    pub role_name: String,
    pub permission_level: PermissionLevel,
}
