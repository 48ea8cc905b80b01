use std::time::Duration;

use jsonwebtoken::jwk::{AlgorithmParameters, Jwk, JwkSet, KeyAlgorithm};
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};

use super::claims::Claims;
use super::error::AuthError;
use super::jwks::{JwksCache, JwksError};

/// Verifies RS256-family bearer tokens against the provider's published
/// signing keys.
pub struct TokenVerifier {
    jwks: JwksCache,
    issuer: String,
    audience: String,
}

impl TokenVerifier {
    pub fn new(domain: &str, audience: &str, jwks_ttl: Duration) -> Result<Self, JwksError> {
        Ok(Self {
            jwks: JwksCache::remote(domain, jwks_ttl)?,
            issuer: issuer_for(domain),
            audience: audience.to_string(),
        })
    }

    /// Verifier over a pinned key set; never fetches.
    pub fn with_static_keys(domain: &str, audience: &str, keys: JwkSet) -> Self {
        Self {
            jwks: JwksCache::pinned(keys),
            issuer: issuer_for(domain),
            audience: audience.to_string(),
        }
    }

    /// Runs the whole verification pipeline over the raw `Authorization`
    /// header value: header shape, token structure, key lookup, then
    /// signature and claims validation.
    pub async fn verify(&self, header: Option<&str>) -> Result<Claims, AuthError> {
        let token = extract_bearer(header)?;

        let token_header = decode_header(token)
            .map_err(|_| AuthError::invalid_header("Unable to parse authentication token"))?;

        // A fetch failure fails closed: no key set, no verification.
        let keys = match self.jwks.keys().await {
            Ok(keys) => keys,
            Err(err) => {
                tracing::error!("JWKS fetch failed: {}", err);
                return Err(AuthError::invalid_header("unable to find the appropriate key"));
            }
        };
        if keys.keys.is_empty() {
            return Err(AuthError::invalid_header("unable to find the appropriate key"));
        }

        let jwk = token_header
            .kid
            .as_deref()
            .and_then(|kid| keys.find(kid))
            .ok_or_else(|| AuthError::invalid_header("Unable to find appropriate key"))?;

        let (key, algorithm) = decoding_key(jwk)?;

        let mut validation = Validation::new(algorithm);
        validation.set_audience(&[self.audience.as_str()]);
        validation.set_issuer(&[self.issuer.as_str()]);

        let data = decode::<Claims>(token, &key, &validation).map_err(map_decode_error)?;
        Ok(data.claims)
    }
}

fn issuer_for(domain: &str) -> String {
    format!("https://{}/", domain)
}

/// Splits the header value into exactly `Bearer <token>`.
fn extract_bearer(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or(AuthError::HeaderMissing)?;

    let mut parts = header.split_ascii_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) => {
            if scheme != "Bearer" {
                return Err(AuthError::invalid_header(
                    "Authorization header must start with Bearer",
                ));
            }
            Ok(token)
        }
        _ => Err(AuthError::invalid_header("Authorization header must be bearer token")),
    }
}

// Only RSA keys can carry RS256-family signatures; anything else in the
// set is unusable here.
fn decoding_key(jwk: &Jwk) -> Result<(DecodingKey, Algorithm), AuthError> {
    let rsa = match &jwk.algorithm {
        AlgorithmParameters::RSA(rsa) => rsa,
        _ => return Err(AuthError::invalid_header("unable to find the appropriate key")),
    };

    let key = DecodingKey::from_rsa_components(&rsa.n, &rsa.e)
        .map_err(|_| AuthError::invalid_header("unable to find the appropriate key"))?;

    let algorithm = match jwk.common.key_algorithm {
        Some(KeyAlgorithm::RS384) => Algorithm::RS384,
        Some(KeyAlgorithm::RS512) => Algorithm::RS512,
        _ => Algorithm::RS256,
    };

    Ok((key, algorithm))
}

fn map_decode_error(err: jsonwebtoken::errors::Error) -> AuthError {
    use jsonwebtoken::errors::ErrorKind;

    match err.kind() {
        ErrorKind::ExpiredSignature => AuthError::token_expired(),
        ErrorKind::InvalidAudience | ErrorKind::InvalidIssuer => {
            AuthError::invalid_claims("incorrect claims, please check the audience and issuer")
        }
        _ => AuthError::invalid_header("Unable to parse authentication token"),
    }
}
