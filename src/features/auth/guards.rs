//! Permission guards for mutating endpoints.
//!
//! The auth middleware attaches an [`AuthenticatedUser`] to the request when a
//! valid bearer token is supplied. Guards read it back and reject the request
//! before the handler body runs: no identity is 401, an identity without the
//! required permission is 403.

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;
use crate::shared::constants::PERMISSION_MANAGE_USERS;
use axum::{extract::FromRequestParts, http::request::Parts};

fn authenticated_user(parts: &Parts) -> Result<&AuthenticatedUser, AppError> {
    parts
        .extensions
        .get::<AuthenticatedUser>()
        .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))
}

/// Guard for create, update and delete on reference data.
///
/// Requires the `manageUsers` permission.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireManageUsers(user): RequireManageUsers) { ... }
/// ```
pub struct RequireManageUsers(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireManageUsers
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = authenticated_user(parts)?;

        if !user.has_permission(PERMISSION_MANAGE_USERS) {
            return Err(AppError::Forbidden(
                "manageUsers permission required".to_string(),
            ));
        }

        Ok(RequireManageUsers(user.clone()))
    }
}
