//! Auth gateway: credential-bearing requests against the backend API.
//!
//! The gateway owns no session state. Each operation is a single outbound
//! call plus response classification; the Basic auth header is rebuilt from
//! the supplied identity on every call, never cached, so a credential change
//! is immediately reflected. No retries, batching, or de-duplication.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::session::Identity;

/// Registration endpoint path.
pub const REGISTER_PATH: &str = "/api/auth/register";

/// The three tiered test endpoints the client can probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeTier {
    /// No authentication required.
    Public,
    /// Requires valid Basic auth for any user.
    Secured,
    /// Requires valid Basic auth and the admin role.
    Admin,
}

impl ProbeTier {
    pub fn path(self) -> &'static str {
        match self {
            ProbeTier::Public => "/api/test/public",
            ProbeTier::Secured => "/api/test/secured",
            ProbeTier::Admin => "/api/test/admin",
        }
    }

    /// Lowercase name used in status messages ("admin endpoint" etc).
    pub fn name(self) -> &'static str {
        match self {
            ProbeTier::Public => "public",
            ProbeTier::Secured => "secured",
            ProbeTier::Admin => "admin",
        }
    }

    /// Capitalized label for success messages.
    pub fn label(self) -> &'static str {
        match self {
            ProbeTier::Public => "Public",
            ProbeTier::Secured => "Secured",
            ProbeTier::Admin => "Admin",
        }
    }

    /// Whether the Basic auth header should be attached.
    pub fn requires_auth(self) -> bool {
        !matches!(self, ProbeTier::Public)
    }
}

/// Classified result of one gateway call. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointOutcome {
    /// HTTP 200; `message` comes from the response body's `message` field.
    Success { message: String },
    /// Error response with a status code (bad credentials, failed
    /// registration, unexpected server error).
    AuthFailure { status: u16, message: Option<String> },
    /// 401/403 on a probe: valid request shape, insufficient privilege.
    AuthzFailure { message: String },
    /// No response at all (connection refused, DNS failure, timeout).
    NetworkFailure { detail: String },
}

/// Builds the `Authorization` header value for HTTP Basic auth.
///
/// The single encoding site for credentials; all call sites go through here.
pub fn basic_auth_header(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    password: &'a str,
    email: &'a str,
}

/// Body shape of successful probe responses: `{"message": "..."}`.
#[derive(Debug, Deserialize)]
struct MessageBody {
    #[serde(default)]
    message: Option<String>,
}

/// Body shape of registration errors: `{"error": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Stateless client for the backend API.
pub struct AuthGateway {
    base_url: String,
    http: reqwest::Client,
}

impl AuthGateway {
    /// Creates a gateway against the given base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Verifies credentials by requesting the secured probe path.
    ///
    /// 200 means the server accepted the credentials; any other status is an
    /// authentication failure carrying the numeric code.
    pub async fn login(&self, username: &str, password: &str) -> EndpointOutcome {
        let url = format!("{}{}", self.base_url, ProbeTier::Secured.path());
        let result = self
            .http
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, basic_auth_header(username, password))
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) => return self.network_failure(&e),
        };

        let status = response.status();
        tracing::debug!(%status, "login response");
        if status.is_success() {
            EndpointOutcome::Success {
                message: read_message(response).await.unwrap_or_default(),
            }
        } else {
            EndpointOutcome::AuthFailure {
                status: status.as_u16(),
                message: status.canonical_reason().map(str::to_string),
            }
        }
    }

    /// Registers a new account.
    ///
    /// Error responses carry the server's `error` field when the body
    /// parses, else the status reason phrase.
    pub async fn register(&self, username: &str, password: &str, email: &str) -> EndpointOutcome {
        let url = format!("{}{}", self.base_url, REGISTER_PATH);
        let result = self
            .http
            .post(&url)
            .json(&RegisterRequest {
                username,
                password,
                email,
            })
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) => return self.network_failure(&e),
        };

        let status = response.status();
        tracing::debug!(%status, "register response");
        if status.is_success() {
            return EndpointOutcome::Success {
                message: read_message(response).await.unwrap_or_default(),
            };
        }

        let server_error = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error);
        EndpointOutcome::AuthFailure {
            status: status.as_u16(),
            message: server_error.or_else(|| status.canonical_reason().map(str::to_string)),
        }
    }

    /// Probes one of the tiered test endpoints.
    ///
    /// The header is attached only when an identity is supplied; the public
    /// tier passes none. 401/403 classify as authorization failures.
    pub async fn probe(&self, tier: ProbeTier, identity: Option<&Identity>) -> EndpointOutcome {
        let url = format!("{}{}", self.base_url, tier.path());
        let mut request = self.http.get(&url);
        if let Some(identity) = identity {
            request = request.header(
                reqwest::header::AUTHORIZATION,
                basic_auth_header(&identity.username, &identity.password),
            );
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => return self.network_failure(&e),
        };

        let status = response.status();
        tracing::debug!(%status, tier = tier.name(), "probe response");
        if status.is_success() {
            return EndpointOutcome::Success {
                message: read_message(response).await.unwrap_or_default(),
            };
        }

        if matches!(status.as_u16(), 401 | 403) {
            let message = read_message(response)
                .await
                .unwrap_or_else(|| "Access denied".to_string());
            return EndpointOutcome::AuthzFailure { message };
        }

        EndpointOutcome::AuthFailure {
            status: status.as_u16(),
            message: status.canonical_reason().map(str::to_string),
        }
    }

    fn network_failure(&self, error: &reqwest::Error) -> EndpointOutcome {
        let detail = if error.is_connect() || error.is_timeout() {
            format!(
                "Cannot connect to server at {}. Check that the backend is running.",
                self.base_url
            )
        } else {
            error.to_string()
        };
        tracing::warn!("request failed: {detail}");
        EndpointOutcome::NetworkFailure { detail }
    }
}

async fn read_message(response: reqwest::Response) -> Option<String> {
    response
        .json::<MessageBody>()
        .await
        .ok()
        .and_then(|body| body.message)
}
