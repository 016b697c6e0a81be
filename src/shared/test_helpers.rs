#[cfg(test)]
use crate::features::auth::model::AuthenticatedUser;

#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};

#[cfg(test)]
use crate::shared::constants::ROLE_ADMIN;

#[cfg(test)]
pub fn create_admin_user() -> AuthenticatedUser {
    AuthenticatedUser {
        account_id: "test-account-id".to_string(),
        sub: "test-sub".to_string(),
        roles: vec![ROLE_ADMIN.to_string()],
        permissions: Vec::new(),
    }
}

#[cfg(test)]
pub fn create_regular_user() -> AuthenticatedUser {
    AuthenticatedUser {
        account_id: "test-user-id".to_string(),
        sub: "test-user-sub".to_string(),
        roles: vec!["user".to_string()],
        permissions: Vec::new(),
    }
}

/// Inject `user` into request extensions, standing in for the JWT middleware
#[cfg(test)]
pub fn with_user(router: Router, user: AuthenticatedUser) -> Router {
    router.layer(axum::middleware::from_fn(
        move |mut request: Request, next: Next| {
            let user = user.clone();
            async move {
                request.extensions_mut().insert(user);
                let response: Response = next.run(request).await;
                response
            }
        },
    ))
}

#[cfg(test)]
pub fn with_admin_auth(router: Router) -> Router {
    with_user(router, create_admin_user())
}
