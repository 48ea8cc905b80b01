use std::time::{Duration, Instant};

use jsonwebtoken::jwk::JwkSet;
use thiserror::Error;
use tokio::sync::RwLock;
use url::Url;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum JwksError {
    #[error("invalid JWKS endpoint: {0}")]
    Url(#[from] url::ParseError),
    #[error("JWKS fetch failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// TTL-cached source of the identity provider's signing keys.
///
/// Remote mode fetches `https://{domain}/.well-known/jwks.json` and keeps
/// the parsed set for `ttl`. Pinned mode serves a fixed set and never
/// touches the network.
#[derive(Debug)]
pub struct JwksCache {
    source: Source,
    ttl: Duration,
    cached: RwLock<Option<Cached>>,
}

#[derive(Debug)]
enum Source {
    Remote { url: Url, client: reqwest::Client },
    Pinned(JwkSet),
}

#[derive(Debug)]
struct Cached {
    fetched_at: Instant,
    keys: JwkSet,
}

impl JwksCache {
    pub fn remote(domain: &str, ttl: Duration) -> Result<Self, JwksError> {
        let url = Url::parse(&format!("https://{}/.well-known/jwks.json", domain))?;
        let client = reqwest::Client::builder().timeout(FETCH_TIMEOUT).build()?;

        Ok(Self {
            source: Source::Remote { url, client },
            ttl,
            cached: RwLock::new(None),
        })
    }

    pub fn pinned(keys: JwkSet) -> Self {
        Self {
            source: Source::Pinned(keys),
            ttl: Duration::ZERO,
            cached: RwLock::new(None),
        }
    }

    /// Current key set, refetched once the cached copy is older than the
    /// TTL. Concurrent refreshes may fetch twice; last write wins.
    pub async fn keys(&self) -> Result<JwkSet, JwksError> {
        let (url, client) = match &self.source {
            Source::Pinned(keys) => return Ok(keys.clone()),
            Source::Remote { url, client } => (url, client),
        };

        if let Some(cached) = self.cached.read().await.as_ref() {
            if cached.fetched_at.elapsed() < self.ttl {
                return Ok(cached.keys.clone());
            }
        }

        let keys = client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?
            .json::<JwkSet>()
            .await?;

        *self.cached.write().await = Some(Cached {
            fetched_at: Instant::now(),
            keys: keys.clone(),
        });

        Ok(keys)
    }
}
