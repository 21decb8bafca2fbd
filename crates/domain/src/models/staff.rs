//! Staff catalog and staff member models.

use super::AccountStatus;

/// A staff type catalog row (concierge, security guard, cleaner, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct StaffType {
    pub staff_type_id: String,
    pub type_name: String,
    pub description: String,
}

/// A staff member row. Exactly one per staff user account.
#[derive(Debug, Clone, PartialEq)]
pub struct Staff {
    pub staff_id: String,
    /// References a user whose role is `role_staff`.
    pub user_id: String,
    pub staff_type_id: String,
    /// Epoch seconds.
    pub hire_date: i64,
    pub status: AccountStatus,
}
