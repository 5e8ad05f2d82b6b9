//! Authentication API service.
//!
//! Composes the typed [`StoreClient`] with the token and profile slots.
//! Login and signup persist the issued token before resolving, so callers
//! may assume the credential is durable once these return. Logout is split
//! in two: a synchronous local invalidation that always succeeds, and a
//! best-effort server notification whose outcome is discarded.

use crate::config;
use crate::storage::StorageBackend;
use playforge_http::types::{AuthResponse, LoginRequest, SignupRequest, UserProfile};
use playforge_http::{ClientError, StoreClient};

use super::profile::ProfileCache;
use super::token::TokenStore;

/// Authentication API service
#[derive(Clone, Debug)]
pub struct AuthService {
    client: StoreClient,
    tokens: TokenStore,
    profiles: ProfileCache,
}

// Equality is what Yew props need: same endpoint, same storage identity.
impl PartialEq for AuthService {
    fn eq(&self, other: &Self) -> bool {
        self.client.base_url() == other.client.base_url()
            && self.tokens == other.tokens
            && self.profiles == other.profiles
    }
}

impl AuthService {
    /// Service wired for the browser: backend detected once, base URL from
    /// the window origin
    pub fn new() -> Result<Self, ClientError> {
        let client = StoreClient::new(config::base_url())?;
        Ok(Self::with_parts(client, StorageBackend::detect()))
    }

    /// Service with explicit collaborators, used by tests and embedders
    pub fn with_parts(client: StoreClient, backend: StorageBackend) -> Self {
        Self {
            client,
            tokens: TokenStore::new(backend.clone()),
            profiles: ProfileCache::new(backend),
        }
    }

    /// The token slot this service owns
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Create an account; the issued token is persisted before returning
    pub async fn signup(&self, request: SignupRequest) -> Result<AuthResponse, ClientError> {
        let response = self.client.signup(&request).await?;
        self.remember(&response);
        Ok(response)
    }

    /// Authenticate; the issued token is persisted before returning
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, ClientError> {
        let response = self.client.login(&request).await?;
        self.remember(&response);
        Ok(response)
    }

    fn remember(&self, response: &AuthResponse) {
        self.tokens.set(&response.token);
        self.profiles.save(&UserProfile::from(response));
    }

    /// Overwrite the cached profile snapshot
    pub fn remember_profile(&self, profile: &UserProfile) {
        self.profiles.save(profile);
    }

    /// Drop the local session: token and cached profile are cleared.
    ///
    /// Always succeeds and returns the revoked token so the server can still
    /// be told about it afterwards.
    pub fn sign_out_local(&self) -> Option<String> {
        let revoked = self.tokens.get();
        self.tokens.clear();
        self.profiles.clear();
        revoked
    }

    /// Best-effort server-side logout; the result never reaches the caller
    pub async fn notify_logout(&self, revoked: Option<String>) {
        if let Err(error) = self.client.logout(revoked.as_deref()).await {
            tracing::warn!(%error, "logout notification failed; local session already cleared");
        }
    }

    /// True iff a token is present locally. Never consults the network.
    pub fn is_authenticated(&self) -> bool {
        self.tokens.get().is_some()
    }

    /// Placeholder for server-side token verification.
    ///
    /// Non-authoritative: today this is the same presence check as
    /// [`Self::is_authenticated`] and says nothing about whether the server
    /// still honors the token.
    pub fn validate_token(&self) -> bool {
        self.is_authenticated()
    }

    /// Cached profile snapshot, only observable while a token is held.
    ///
    /// If the token slot is empty the stale profile is purged and `None` is
    /// returned, keeping the two slots consistent.
    pub fn cached_profile(&self) -> Option<UserProfile> {
        if self.tokens.get().is_none() {
            self.profiles.clear();
            return None;
        }
        self.profiles.load()
    }
}
