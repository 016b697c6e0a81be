/// Default page number for list endpoints
pub const DEFAULT_PAGE: i64 = 1;

/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// ROLE & PERMISSION CONSTANTS
// =============================================================================

/// Super admin role - holds every permission
pub const ROLE_SUPER_ADMIN: &str = "super_admin";

/// Admin role - manages reference data
pub const ROLE_ADMIN: &str = "admin";

/// Permission required to create, update or delete reference data
pub const PERMISSION_MANAGE_USERS: &str = "manageUsers";

/// Permission granted for read access to user data
pub const PERMISSION_GET_USERS: &str = "getUsers";

/// Permissions implied by a role, in addition to those carried by the token
pub fn role_permissions(role: &str) -> &'static [&'static str] {
    match role {
        ROLE_SUPER_ADMIN | ROLE_ADMIN => &[PERMISSION_GET_USERS, PERMISSION_MANAGE_USERS],
        _ => &[],
    }
}
