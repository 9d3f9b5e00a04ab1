//! Client layer: the smsmode notification channel and its HTTP contract.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use tracing::debug;

use crate::domain::{ApiKey, RecipientRoutable, SenderId, SmsmodeNotification, ValidationError};

/// Base URL of the smsmode SMS API.
pub const DEFAULT_ENDPOINT: &str = "https://rest.smsmode.com/sms/v1";

/// Routing key asked first from [`RecipientRoutable::route_for`].
pub const CHANNEL_NAME: &str = "smsmode";

/// Routing key asked when [`CHANNEL_NAME`] yields no recipient.
pub const CHANNEL_TYPE_NAME: &str = concat!(env!("CARGO_PKG_NAME"), "::SmsmodeChannel");

/// Boxed `Send` future returned by [`HttpClient`] implementations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Error type of [`HttpClient`] failures.
pub type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Raw HTTP response, handed back without interpretation.
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq)]
/// Per-request options passed to [`HttpClient::request`].
pub struct RequestOptions {
    /// Serialized as the request body with `Content-Type: application/json`.
    pub json: serde_json::Value,
}

/// HTTP capability the channel delegates to.
///
/// Implementations attach whatever authentication the provider needs; the channel only
/// chooses the method, URL and JSON body.
pub trait HttpClient: Send + Sync {
    /// Issue one request with `options.json` as body and return the raw response.
    fn request<'a>(
        &'a self,
        method: Method,
        url: &'a str,
        options: RequestOptions,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
/// [`HttpClient`] backed by `reqwest`.
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Wrap a preconfigured `reqwest` client (default headers, proxies, TLS, ...).
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpClient for ReqwestClient {
    fn request<'a>(
        &'a self,
        method: Method,
        url: &'a str,
        options: RequestOptions,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let response = self
                .client
                .request(method, url)
                .json(&options.json)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsmodeChannel`] and [`SmsmodeChannelBuilder`].
///
/// Missing recipients or payloads are not errors; see [`SendOutcome`].
pub enum SmsmodeError {
    /// HTTP client failure (DNS, TLS, timeouts, etc), passed through as the source.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The request body could not be encoded as JSON.
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),

    /// One of the configuration constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// What [`SmsmodeChannel::send`] did.
pub enum SendOutcome {
    /// One request was issued; the response is returned as received, whatever its status.
    Sent(HttpResponse),
    /// The notifiable has no smsmode route; nothing was sent.
    NoRecipient,
    /// The notification produced nothing for smsmode; nothing was sent.
    NoPayload,
}

#[derive(Debug, Clone)]
/// Builder for a [`SmsmodeChannel`] backed by `reqwest`.
///
/// The built HTTP client sends `X-Api-Key`, `Content-Type: application/json` and
/// `Accept: application/json` on every request.
pub struct SmsmodeChannelBuilder {
    api_key: ApiKey,
    sender: SenderId,
    endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SmsmodeChannelBuilder {
    /// Create a builder with the default endpoint and no timeout/user-agent override.
    pub fn new(api_key: ApiKey, sender: SenderId) -> Self {
        Self {
            api_key,
            sender,
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the API base URL (requests go to `{endpoint}/messages` and its scoped variants).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`SmsmodeChannel`].
    pub fn build(self) -> Result<SmsmodeChannel, SmsmodeError> {
        let endpoint = normalize_endpoint(self.endpoint)?;

        let mut api_key = HeaderValue::from_str(self.api_key.as_str()).map_err(|_| {
            ValidationError::InvalidHeaderValue {
                field: ApiKey::HEADER,
            }
        })?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static("x-api-key"), api_key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SmsmodeError::Transport(Box::new(err)))?;

        Ok(SmsmodeChannel {
            sender: self.sender,
            endpoint,
            http: Arc::new(ReqwestClient::new(client)),
        })
    }
}

#[derive(Clone)]
/// Notification channel delivering SMS through smsmode.
///
/// Holds only immutable configuration, so one instance can serve concurrent sends.
/// Each [`SmsmodeChannel::send`] resolves a recipient and a message, then issues exactly
/// one `POST` to:
/// - `{endpoint}/messages`
/// - `{endpoint}/channels/{channel}/messages`
/// - `{endpoint}/campaigns/{campaign}/messages`
/// - `{endpoint}/channels/{channel}/campaigns/{campaign}/messages`
pub struct SmsmodeChannel {
    sender: SenderId,
    endpoint: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for SmsmodeChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmsmodeChannel")
            .field("sender", &self.sender)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl SmsmodeChannel {
    /// Create a channel around an already configured HTTP client.
    ///
    /// The client is expected to authenticate its requests itself. For the
    /// `reqwest`-backed default, use [`SmsmodeChannel::builder`].
    pub fn new(
        http: Arc<dyn HttpClient>,
        sender: SenderId,
        endpoint: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            sender,
            endpoint: normalize_endpoint(endpoint.into())?,
            http,
        })
    }

    /// Start building a `reqwest`-backed channel.
    pub fn builder(api_key: ApiKey, sender: SenderId) -> SmsmodeChannelBuilder {
        SmsmodeChannelBuilder::new(api_key, sender)
    }

    /// Default sender used when a message does not set one.
    pub fn sender(&self) -> &SenderId {
        &self.sender
    }

    /// API base URL, without trailing slash.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send `notification` to `notifiable`.
    ///
    /// Returns [`SendOutcome::NoRecipient`] or [`SendOutcome::NoPayload`] without any
    /// request when there is nothing to send. Otherwise the response is returned as
    /// received; non-2xx statuses are not turned into errors.
    ///
    /// Errors:
    /// - [`SmsmodeError::Transport`] when the HTTP client fails,
    /// - [`SmsmodeError::Encode`] when the body cannot be serialized.
    pub async fn send<N, T>(
        &self,
        notifiable: &N,
        notification: &T,
    ) -> Result<SendOutcome, SmsmodeError>
    where
        N: RecipientRoutable + ?Sized,
        T: SmsmodeNotification<N> + ?Sized,
    {
        let Some(to) = notifiable
            .route_for(CHANNEL_NAME)
            .or_else(|| notifiable.route_for(CHANNEL_TYPE_NAME))
        else {
            debug!("no {CHANNEL_NAME} route for notifiable, skipping");
            return Ok(SendOutcome::NoRecipient);
        };

        let Some(payload) = notification.to_smsmode(notifiable) else {
            debug!(to = to.as_str(), "notification has no {CHANNEL_NAME} payload, skipping");
            return Ok(SendOutcome::NoPayload);
        };
        let message = payload.into_message();

        let url = crate::transport::messages_url(&self.endpoint, &message);
        let json = crate::transport::encode_send_message_json(&to, &message, &self.sender)?;

        debug!(%url, to = to.as_str(), "posting SMS to smsmode");
        let response = self
            .http
            .request(Method::POST, &url, RequestOptions { json })
            .await
            .map_err(SmsmodeError::Transport)?;
        debug!(status = response.status, "smsmode responded");

        Ok(SendOutcome::Sent(response))
    }
}

fn normalize_endpoint(endpoint: String) -> Result<String, ValidationError> {
    let trimmed = endpoint.trim();
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);

    let parsed = url::Url::parse(trimmed).map_err(|_| ValidationError::InvalidEndpoint {
        input: endpoint.clone(),
    })?;
    if parsed.cannot_be_a_base() {
        return Err(ValidationError::InvalidEndpoint { input: endpoint });
    }

    Ok(trimmed.to_owned())
}
