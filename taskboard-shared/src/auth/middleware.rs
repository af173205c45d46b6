/// Authentication middleware for Axum
///
/// Two guards compose to form the authorization gate:
///
/// 1. [`authenticate`] validates the `Authorization: Bearer <token>` header
///    and attaches a [`CurrentUser`] to the request extensions.
/// 2. [`require_admin`] runs after `authenticate` on admin-gated routes and
///    rejects non-admin callers.
///
/// # Response contract
///
/// - Missing token: `401` with an empty body
/// - Present but invalid/expired token: `403` with an empty body
/// - Valid token, insufficient role: `403` with the JSON body
///   `{"message": "Access Denied: Admins Only!"}`
///
/// Clients distinguish re-login from denied access by the presence of the
/// body, so the asymmetry above must not change.
///
/// # Example
///
/// ```no_run
/// use axum::{middleware, routing::delete, Router};
/// use taskboard_shared::auth::middleware::{create_auth_middleware, require_admin};
///
/// let app: Router = Router::new()
///     .route(
///         "/tasks/:id",
///         delete(|| async { "deleted" }).layer(middleware::from_fn(require_admin)),
///     )
///     .layer(middleware::from_fn(create_auth_middleware("your-jwt-secret")));
/// ```

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use super::jwt::{validate_token, Claims};
use crate::models::user::Role;

/// Authenticated caller attached to request extensions
///
/// Handlers extract it with Axum's `Extension` extractor:
///
/// ```
/// use axum::Extension;
/// use taskboard_shared::auth::middleware::CurrentUser;
///
/// async fn handler(Extension(user): Extension<CurrentUser>) -> String {
///     format!("User: {}", user.user_id)
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Authenticated user ID
    pub user_id: Uuid,

    /// Role decoded from the token
    pub role: Role,
}

impl CurrentUser {
    /// Builds the request context from validated token claims
    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            user_id: claims.sub,
            role: claims.role,
        }
    }

    /// Whether this caller holds the admin role
    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

/// Error type for the authorization gate
#[derive(Debug)]
pub enum AuthError {
    /// No bearer token on the request
    Unauthenticated,

    /// Token present but failed validation (bad signature, malformed,
    /// or expired)
    InvalidToken,

    /// Valid token but the caller is not an admin
    AdminOnly,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            // No body: the client cannot distinguish why authentication
            // failed, only that it must log in
            AuthError::Unauthenticated => StatusCode::UNAUTHORIZED.into_response(),
            AuthError::InvalidToken => StatusCode::FORBIDDEN.into_response(),
            AuthError::AdminOnly => (
                StatusCode::FORBIDDEN,
                Json(json!({ "message": "Access Denied: Admins Only!" })),
            )
                .into_response(),
        }
    }
}

/// Authentication middleware
///
/// Validates the bearer token from the `Authorization` header and attaches
/// a [`CurrentUser`] to the request extensions on success.
///
/// # Errors
///
/// - `401` (empty body) when the header or token part is missing
/// - `403` (empty body) when the token fails validation
pub async fn authenticate(
    secret: String,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::Unauthenticated)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::Unauthenticated)?;

    let claims = validate_token(token, &secret).map_err(|_| AuthError::InvalidToken)?;

    req.extensions_mut().insert(CurrentUser::from_claims(&claims));

    Ok(next.run(req).await)
}

/// Admin-only middleware
///
/// Must be composed inside [`authenticate`]; it reads the [`CurrentUser`]
/// that `authenticate` attached. A request reaching this guard without one
/// is treated as unauthenticated.
///
/// # Errors
///
/// `403` with `{"message": "Access Denied: Admins Only!"}` for non-admin
/// callers.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AuthError> {
    let user = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or(AuthError::Unauthenticated)?;

    if !user.is_admin() {
        return Err(AuthError::AdminOnly);
    }

    Ok(next.run(req).await)
}

/// Creates an authentication middleware closure
///
/// Helper that captures the signing secret and returns a function usable
/// with `axum::middleware::from_fn`.
pub fn create_auth_middleware(
    secret: impl Into<String>,
) -> impl Fn(
    Request,
    Next,
) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, AuthError>> + Send>>
       + Clone {
    let secret = secret.into();
    move |req, next| {
        let secret = secret.clone();
        Box::pin(authenticate(secret, req, next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_user_from_claims() {
        let claims = Claims::new(Uuid::new_v4(), Role::Admin);
        let user = CurrentUser::from_claims(&claims);

        assert_eq!(user.user_id, claims.sub);
        assert_eq!(user.role, Role::Admin);
        assert!(user.is_admin());

        let claims = Claims::new(Uuid::new_v4(), Role::User);
        assert!(!CurrentUser::from_claims(&claims).is_admin());
    }

    #[tokio::test]
    async fn test_unauthenticated_response_has_no_body() {
        let response = AuthError::Unauthenticated.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_token_response_has_no_body() {
        let response = AuthError::InvalidToken.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_admin_only_response_body() {
        let response = AuthError::AdminOnly.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!({ "message": "Access Denied: Admins Only!" }));
    }
}
