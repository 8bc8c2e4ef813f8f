//! Nanonets async client implementation.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::multipart::Form;
use reqwest::{Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::de;
use crate::endpoint::Endpoint;
use crate::{Documents, Error, Moderation, Result, Workflows};

/// Tracing target for client operations.
pub const TRACING_TARGET: &str = "nanonets::client";

/// Root of the Nanonets v4 REST API.
pub const DEFAULT_BASE_URL: &str = "https://app.nanonets.com/api/v4";

const API_KEY_ENV: &str = "NANONETS_API_KEY";
const BASE_URL_ENV: &str = "NANONETS_BASE_URL";
const USER_AGENT_VALUE: &str = concat!("nanonets-client/", env!("CARGO_PKG_VERSION"));

/// Body attached to a request by [`Client::execute`].
#[derive(Debug)]
pub enum RequestBody {
    /// Pre-serialized JSON, sent as `application/json`.
    Json(Vec<u8>),
    /// Multipart form, sent with the form's own boundary content type.
    Multipart(Form),
}

impl RequestBody {
    /// Serialize `value` into a JSON body.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        serde_json::to_vec(value)
            .map(Self::Json)
            .map_err(Error::Encode)
    }
}

struct ClientInner {
    http: reqwest::Client,
    api_key: String,
    base_url: Url,
    proxy: Option<String>,
}

/// Async client for the Nanonets document extraction API.
///
/// Cloning is cheap and clones share one connection pool. The client holds no
/// per-call state, so any number of requests may be in flight at once.
///
/// Use [`Client::new`] for defaults or [`Client::builder`] for custom settings
/// like a proxy, a timeout, or a different base URL.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.base_url.as_str())
            .field("proxy", &self.inner.proxy)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// Create a client for the public Nanonets API with default settings.
    ///
    /// # Examples
    /// ```no_run
    /// # use nanonets::Client;
    /// # fn main() -> Result<(), nanonets::Error> {
    /// let client = Client::new("YOUR_API_KEY")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new(api_key).build()
    }

    /// API root every endpoint path is appended to.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Get the proxy URL if one was configured.
    pub fn proxy(&self) -> Option<&str> {
        self.inner.proxy.as_deref()
    }

    /// Workflow management endpoints.
    pub fn workflows(&self) -> Workflows<'_> {
        Workflows::new(self)
    }

    /// Document management endpoints.
    pub fn documents(&self) -> Documents<'_> {
        Documents::new(self)
    }

    /// Human-review (moderation) endpoints.
    pub fn moderation(&self) -> Moderation<'_> {
        Moderation::new(self)
    }

    /// Send a single authenticated request and return the raw response body.
    ///
    /// Every endpoint method goes through here. Basic auth is attached with the
    /// API key as username and an empty password. Any `2xx` status yields the
    /// body bytes unchanged; any other status yields [`Error::Api`] with the
    /// status and the full body text. Transport failures surface as
    /// [`Error::Request`].
    ///
    /// # Examples
    /// ```no_run
    /// # use nanonets::Client;
    /// # use reqwest::{Method, Url};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::new("YOUR_API_KEY")?;
    /// let url = Url::parse("https://app.nanonets.com/api/v4/workflows/types")?;
    /// let bytes = client.execute(Method::GET, url, None).await?;
    /// println!("{}", String::from_utf8_lossy(&bytes));
    /// # Ok(())
    /// # }
    /// ```
    pub async fn execute(
        &self,
        method: Method,
        url: Url,
        body: Option<RequestBody>,
    ) -> Result<Vec<u8>> {
        let started = Instant::now();

        let mut request = self
            .inner
            .http
            .request(method.clone(), url.clone())
            .basic_auth(&self.inner.api_key, None::<&str>);

        request = match body {
            Some(RequestBody::Json(bytes)) => request
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(bytes),
            Some(RequestBody::Multipart(form)) => request.multipart(form),
            None => request,
        };

        let response = request.send().await.inspect_err(|err| {
            tracing::debug!(
                target: TRACING_TARGET,
                %method,
                %url,
                error = %err,
                "Request failed before a response was received"
            );
        })?;

        let status = response.status();
        let bytes = response.bytes().await?;

        tracing::debug!(
            target: TRACING_TARGET,
            %method,
            %url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis(),
            "Request completed"
        );

        if !status.is_success() {
            tracing::warn!(
                target: TRACING_TARGET,
                %method,
                %url,
                status = status.as_u16(),
                "Nanonets API returned an error status"
            );
            return Err(Error::api(status, String::from_utf8_lossy(&bytes)));
        }

        Ok(bytes.to_vec())
    }

    /// JSON request body, JSON object response.
    pub(crate) async fn send<B, R>(&self, endpoint: Endpoint, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let bytes = self.call(endpoint, Some(RequestBody::json(body)?)).await?;
        de::object(&bytes)
    }

    /// No request body, JSON object response.
    pub(crate) async fn fetch<R: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<R> {
        let bytes = self.call(endpoint, None).await?;
        de::object(&bytes)
    }

    /// No request body, JSON array response. A `null` body is an empty list.
    pub(crate) async fn fetch_list<R>(&self, endpoint: Endpoint) -> Result<Vec<R>>
    where
        R: DeserializeOwned,
    {
        let bytes = self.call(endpoint, None).await?;
        de::list(&bytes)
    }

    /// JSON request body, response body ignored.
    pub(crate) async fn send_unit<B>(&self, endpoint: Endpoint, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.call(endpoint, Some(RequestBody::json(body)?)).await?;
        Ok(())
    }

    /// No request body, response body ignored.
    pub(crate) async fn fetch_unit(&self, endpoint: Endpoint) -> Result<()> {
        self.call(endpoint, None).await?;
        Ok(())
    }

    /// No request body, raw response bytes.
    pub(crate) async fn fetch_bytes(&self, endpoint: Endpoint) -> Result<Vec<u8>> {
        self.call(endpoint, None).await
    }

    /// Multipart request body, JSON response.
    pub(crate) async fn upload<R: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        form: Form,
    ) -> Result<R> {
        let bytes = self
            .call(endpoint, Some(RequestBody::Multipart(form)))
            .await?;
        de::object(&bytes)
    }

    async fn call(&self, endpoint: Endpoint, body: Option<RequestBody>) -> Result<Vec<u8>> {
        let url = endpoint.url(&self.inner.base_url);
        self.execute(endpoint.method, url, body).await
    }
}

/// Builder for configuring a Nanonets client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Clone)]
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    proxy: Option<String>,
    user_agent: String,
    timeout: Option<Duration>,
    http: Option<reqwest::Client>,
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("base_url", &self.base_url)
            .field("proxy", &self.proxy)
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .field("custom_http_client", &self.http.is_some())
            .finish_non_exhaustive()
    }
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - Base URL [`DEFAULT_BASE_URL`]
    /// - No proxy
    /// - No request timeout
    /// - User agent `nanonets-client/<version>`
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            proxy: None,
            user_agent: USER_AGENT_VALUE.to_string(),
            timeout: None,
            http: None,
        }
    }

    /// Create a builder from `NANONETS_API_KEY` and, if set, `NANONETS_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| Error::config(format!("{API_KEY_ENV} is not set")))?;

        let mut builder = Self::new(api_key);
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            builder = builder.base_url(base_url);
        }
        Ok(builder)
    }

    /// Override the API root.
    ///
    /// Useful for testing or for routing through a gateway.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set a proxy URL (e.g., "socks5://127.0.0.1:9050").
    ///
    /// This uses reqwest's proxy support for all requests.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Apply a total timeout to every request. There is none by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use an existing reqwest client as the transport.
    ///
    /// Proxy, user agent and timeout settings on this builder are ignored
    /// when a transport is supplied.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the client.
    ///
    /// Fails with [`Error::Config`] if the API key is empty or the base URL
    /// cannot carry path segments, and with [`Error::Request`] if the HTTP
    /// transport cannot be created (for example, a malformed proxy URL).
    ///
    /// # Examples
    /// ```no_run
    /// # use nanonets::Client;
    /// # use std::time::Duration;
    /// # fn main() -> Result<(), nanonets::Error> {
    /// let client = Client::builder("YOUR_API_KEY")
    ///     .user_agent("my-app/1.0")
    ///     .timeout(Duration::from_secs(60))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn build(self) -> Result<Client> {
        if self.api_key.trim().is_empty() {
            return Err(Error::config("API key must not be empty"));
        }

        let base_url = Url::parse(&self.base_url)
            .map_err(|err| Error::config(format!("invalid base URL {:?}: {err}", self.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "base URL {:?} cannot carry a path",
                self.base_url
            )));
        }

        let http = match self.http {
            Some(http) => http,
            None => {
                let mut builder = reqwest::Client::builder().user_agent(&self.user_agent);
                if let Some(proxy_url) = &self.proxy {
                    builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
                }
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build()?
            }
        };

        tracing::debug!(
            target: TRACING_TARGET,
            base_url = %base_url,
            proxy = self.proxy.is_some(),
            "Nanonets client created"
        );

        Ok(Client {
            inner: Arc::new(ClientInner {
                http,
                api_key: self.api_key,
                base_url,
                proxy: self.proxy,
            }),
        })
    }
}
