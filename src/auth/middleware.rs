use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use super::claims::Claims;
use super::error::AuthError;
use super::verifier::TokenVerifier;

/// Per-route middleware state: which permission the route demands.
#[derive(Clone)]
pub struct PermissionGate {
    verifier: Arc<TokenVerifier>,
    permission: &'static str,
}

impl PermissionGate {
    pub fn new(verifier: Arc<TokenVerifier>, permission: &'static str) -> Self {
        Self { verifier, permission }
    }
}

/// Token verification + permission check middleware. Attached per
/// method-route with `route_layer(middleware::from_fn_with_state(..))`,
/// so each route names its own required permission.
pub async fn authorize(
    State(gate): State<PermissionGate>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let header = match request.headers().get(AUTHORIZATION) {
        Some(value) => Some(value.to_str().map_err(|_| {
            AuthError::invalid_header("Authorization header must be bearer token")
        })?),
        None => None,
    };

    let claims = gate.verifier.verify(header).await?;
    check_permissions(&claims, gate.permission)?;

    // Handlers can read the verified claims when they need the subject.
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

/// Pure membership test; no hierarchy, no wildcards.
fn check_permissions(claims: &Claims, permission: &str) -> Result<(), AuthError> {
    let permissions = claims
        .permissions
        .as_ref()
        .ok_or_else(|| AuthError::invalid_claims("Permissions not included in JWT"))?;

    if !permissions.iter().any(|p| p == permission) {
        return Err(AuthError::unauthorized("Permission not found"));
    }

    Ok(())
}
