//! Typed `/auth/*` endpoints

use super::{StoreClient, error::ClientError};
use crate::types::{AuthResponse, LoginRequest, SignupRequest};

impl StoreClient {
    /// Create an account (public endpoint)
    ///
    /// The response carries the issued bearer token; persisting it is the
    /// caller's job.
    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/auth/signup")
            .json(request);
        self.execute(req).await
    }

    /// Authenticate with username-or-email and password (public endpoint)
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/auth/login")
            .json(request);
        self.execute(req).await
    }

    /// Tell the server a session ended
    ///
    /// The token is the one being retired; it may already be gone from local
    /// storage by the time this is sent, so it is passed explicitly. The
    /// response body is ignored by contract.
    pub async fn logout(&self, token: Option<&str>) -> Result<(), ClientError> {
        let req = match token {
            Some(token) => self.authorized_request(reqwest::Method::POST, "/auth/logout", token),
            None => self.request(reqwest::Method::POST, "/auth/logout"),
        };
        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<crate::types::ApiErrorBody>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| status.to_string());
            return Err(ClientError::from_status(status, message));
        }
        Ok(())
    }
}
