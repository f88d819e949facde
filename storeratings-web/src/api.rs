use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use shared::models::{
    AddStoreRequest, AddUserRequest, AdminStats, AuthResponse, ErrorResponse, LoginRequest,
    MyRating, OwnerDashboard, RatingRequest, SignupRequest, StoreListItem, UpdatePasswordRequest,
    User,
};
use std::sync::{Arc, Mutex};
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "/api";

/// Shown when a rejected response carries no usable `message` body.
pub(crate) const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

thread_local! {
    static SHARED_CLIENT: OnceCell<StoreRatingsClient> = OnceCell::new();
}

/// Failure of an API operation, ready to display as a single alert.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("Unable to connect to server")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("{message}")]
    Rejected {
        /// Status code of the rejected response.
        status: StatusCode,
        /// Server-supplied message, or the generic fallback.
        message: String,
    },
}

/// Lightweight API client for the store-ratings backend.
///
/// All authenticated traffic goes through one shared instance so a session
/// change is observed by every request constructed afterwards.
#[derive(Clone, Debug)]
pub struct StoreRatingsClient {
    base_url: String,
    client: Client,
    bearer_token: Arc<Mutex<Option<String>>>,
}

impl StoreRatingsClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            bearer_token: Arc::new(Mutex::new(None)),
        }
    }

    /// The process-wide client used by every screen.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| cell.get_or_init(|| Self::new(DEFAULT_BASE_URL)).clone())
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Install or remove the bearer token carried by subsequent requests.
    pub fn set_bearer_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.bearer_token.lock() {
            *guard = token;
        }
    }

    /// The bearer token subsequent requests will carry, if any.
    pub fn current_bearer_token(&self) -> Option<String> {
        self.bearer_token
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().cloned())
    }

    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(token) = self.current_bearer_token() {
            request.bearer_auth(token)
        } else {
            request
        }
    }

    async fn accept(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.json::<ErrorResponse>().await.ok();
        Err(ApiError::Rejected {
            status,
            message: rejection_message(body),
        })
    }

    /// Authenticate with email/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let url = self.api_url("auth/login");
        let response = self.client.post(url).json(payload).send().await?;
        Ok(Self::accept(response).await?.json().await?)
    }

    /// Register a new account.
    pub async fn signup(&self, payload: &SignupRequest) -> Result<AuthResponse, ApiError> {
        let url = self.api_url("auth/signup");
        let response = self.client.post(url).json(payload).send().await?;
        Ok(Self::accept(response).await?.json().await?)
    }

    /// Change the password of the authenticated account.
    pub async fn update_password(&self, payload: &UpdatePasswordRequest) -> Result<(), ApiError> {
        let url = self.api_url("auth/update-password");
        let response = self
            .apply_auth(self.client.post(url))
            .json(payload)
            .send()
            .await?;
        Self::accept(response).await?;
        Ok(())
    }

    /// Fetch the full store listing.
    pub async fn list_stores(&self) -> Result<Vec<StoreListItem>, ApiError> {
        let url = self.api_url("stores/list");
        let response = self.apply_auth(self.client.get(url)).send().await?;
        Ok(Self::accept(response).await?.json().await?)
    }

    /// Search stores by name and/or address; empty filters are omitted.
    pub async fn search_stores(
        &self,
        name: &str,
        address: &str,
    ) -> Result<Vec<StoreListItem>, ApiError> {
        let url = self.api_url("stores/search");
        let mut query: Vec<(&str, &str)> = Vec::new();
        if !name.trim().is_empty() {
            query.push(("name", name));
        }
        if !address.trim().is_empty() {
            query.push(("address", address));
        }
        let response = self
            .apply_auth(self.client.get(url).query(&query))
            .send()
            .await?;
        Ok(Self::accept(response).await?.json().await?)
    }

    /// Fetch the caller's own ratings.
    pub async fn my_ratings(&self) -> Result<Vec<MyRating>, ApiError> {
        let url = self.api_url("stores/my-ratings");
        let response = self.apply_auth(self.client.get(url)).send().await?;
        Ok(Self::accept(response).await?.json().await?)
    }

    /// Submit a first-time rating for a store.
    pub async fn rate_store(&self, payload: &RatingRequest) -> Result<(), ApiError> {
        let url = self.api_url("stores/rate");
        let response = self
            .apply_auth(self.client.post(url))
            .json(payload)
            .send()
            .await?;
        Self::accept(response).await?;
        Ok(())
    }

    /// Overwrite an existing rating for a store.
    pub async fn update_rating(&self, payload: &RatingRequest) -> Result<(), ApiError> {
        let url = self.api_url("stores/update-rating");
        let response = self
            .apply_auth(self.client.post(url))
            .json(payload)
            .send()
            .await?;
        Self::accept(response).await?;
        Ok(())
    }

    /// Fetch the platform-wide counters for the admin dashboard.
    pub async fn admin_dashboard(&self) -> Result<AdminStats, ApiError> {
        let url = self.api_url("admin/dashboard");
        let response = self.apply_auth(self.client.get(url)).send().await?;
        Ok(Self::accept(response).await?.json().await?)
    }

    /// Fetch the admin user listing with the given filter/sort query.
    pub async fn admin_users(&self, query: &[(String, String)]) -> Result<Vec<User>, ApiError> {
        let url = self.api_url("admin/users");
        let response = self
            .apply_auth(self.client.get(url).query(query))
            .send()
            .await?;
        Ok(Self::accept(response).await?.json().await?)
    }

    /// Fetch the admin store listing with the given filter/sort query.
    pub async fn admin_stores(
        &self,
        query: &[(String, String)],
    ) -> Result<Vec<StoreListItem>, ApiError> {
        let url = self.api_url("admin/stores");
        let response = self
            .apply_auth(self.client.get(url).query(query))
            .send()
            .await?;
        Ok(Self::accept(response).await?.json().await?)
    }

    /// Create a user account on behalf of an admin.
    pub async fn add_user(&self, payload: &AddUserRequest) -> Result<(), ApiError> {
        let url = self.api_url("admin/add-user");
        let response = self
            .apply_auth(self.client.post(url))
            .json(payload)
            .send()
            .await?;
        Self::accept(response).await?;
        Ok(())
    }

    /// Register a store, optionally assigned to an owner account.
    pub async fn add_store(&self, payload: &AddStoreRequest) -> Result<(), ApiError> {
        let url = self.api_url("admin/add-store");
        let response = self
            .apply_auth(self.client.post(url))
            .json(payload)
            .send()
            .await?;
        Self::accept(response).await?;
        Ok(())
    }

    /// Fetch aggregate ratings for every store owned by the caller.
    pub async fn owner_dashboard(&self) -> Result<OwnerDashboard, ApiError> {
        let url = self.api_url("owner/dashboard");
        let response = self.apply_auth(self.client.get(url)).send().await?;
        Ok(Self::accept(response).await?.json().await?)
    }
}

/// The message to surface for a rejected response: the server's `message`
/// when present and non-blank, otherwise the generic fallback.
pub(crate) fn rejection_message(body: Option<ErrorResponse>) -> String {
    match body {
        Some(body) if !body.message.trim().is_empty() => body.message,
        _ => FALLBACK_ERROR_MESSAGE.to_string(),
    }
}
