pub mod claims;
pub mod error;
pub mod jwks;
pub mod middleware;
pub mod verifier;

pub use claims::Claims;
pub use error::AuthError;
pub use jwks::JwksCache;
pub use middleware::{authorize, PermissionGate};
pub use verifier::TokenVerifier;
