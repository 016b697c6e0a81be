use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::role_permissions;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub account_id: String,
    pub sub: String,
    pub roles: Vec<String>,
    /// Permissions granted directly by the token
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl AuthenticatedUser {
    /// Check if user holds a permission, either from the token or implied by a role
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
            || self
                .roles
                .iter()
                .any(|role| role_permissions(role).contains(&permission))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomClaims {
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::{
        PERMISSION_GET_USERS, PERMISSION_MANAGE_USERS, ROLE_ADMIN, ROLE_SUPER_ADMIN,
    };

    fn user(roles: &[&str], permissions: &[&str]) -> AuthenticatedUser {
        AuthenticatedUser {
            account_id: "acc".to_string(),
            sub: "sub".to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_admin_roles_imply_manage_permission() {
        assert!(user(&[ROLE_ADMIN], &[]).has_permission(PERMISSION_MANAGE_USERS));
        assert!(user(&[ROLE_SUPER_ADMIN], &[]).has_permission(PERMISSION_MANAGE_USERS));
        assert!(user(&[ROLE_ADMIN], &[]).has_permission(PERMISSION_GET_USERS));
    }

    #[test]
    fn test_token_permission_is_honoured() {
        let u = user(&["user"], &[PERMISSION_MANAGE_USERS]);
        assert!(u.has_permission(PERMISSION_MANAGE_USERS));
        assert!(!u.has_permission(PERMISSION_GET_USERS));
    }

    #[test]
    fn test_plain_user_lacks_manage_permission() {
        assert!(!user(&["user"], &[]).has_permission(PERMISSION_MANAGE_USERS));
    }
}
