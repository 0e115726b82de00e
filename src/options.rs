//! Generic options structures for service and transport configuration.

use std::collections::HashMap;
use std::time::Duration;

/// Version date sent with every request unless overridden.
pub const DEFAULT_VERSION: &str = "2017-02-27";

/// Base URL of the public service gateway.
pub const DEFAULT_API_BASE: &str =
    "https://gateway.watsonplatform.net/natural-language-understanding/api";

/// A secret string type for sensitive data like passwords and API keys.
/// Prevents accidental logging or display of secrets.
#[derive(Clone)]
pub struct SecretString(String);

impl SecretString {
    /// Create a new secret string.
    pub fn new(s: String) -> Self {
        Self(s)
    }

    /// Get the underlying secret value.
    pub fn expose_secret(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretString([REDACTED])")
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self::new(s.to_string())
    }
}

/// Credentials accepted by the service.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// HTTP basic authentication with a service username and password.
    Basic {
        username: String,
        password: SecretString,
    },
    /// An API key, sent as basic auth with the fixed username `apikey`.
    ApiKey(SecretString),
}

impl Credentials {
    pub fn basic(username: impl Into<String>, password: impl Into<SecretString>) -> Self {
        Credentials::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn api_key(key: impl Into<SecretString>) -> Self {
        Credentials::ApiKey(key.into())
    }

    /// Username and password pair for the `Authorization: Basic` header.
    pub fn basic_auth(&self) -> (&str, &str) {
        match self {
            Credentials::Basic { username, password } => (username.as_str(), password.expose_secret()),
            Credentials::ApiKey(key) => ("apikey", key.expose_secret()),
        }
    }
}

/// Options describing which service endpoint and API version to talk to.
///
/// # Example
/// ```rust
/// use nlu::options::ServiceOptions;
///
/// let options = ServiceOptions::default().with_version("2018-03-16");
/// assert_eq!(options.version, "2018-03-16");
/// ```
#[derive(Debug, Clone)]
pub struct ServiceOptions {
    /// API version date, sent as the `version` query parameter
    pub version: String,

    /// Base URL for the service; `/v1/analyze` is appended
    pub base_url: String,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl ServiceOptions {
    /// Set the API version date.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Path and query of the analyze endpoint, relative to the base URL.
    pub fn analyze_path(&self) -> String {
        format!("/v1/analyze?version={}", self.version)
    }
}

/// Generic transport options containing truly generic transport fields
/// and transport-specific configuration.
///
/// # Type Parameters
/// - `T`: Transport-specific options type
///
/// # Example
/// ```rust
/// use nlu::options::{Credentials, HttpTransport, TransportOptions};
/// use std::time::Duration;
///
/// let options = TransportOptions {
///     timeout: Some(Duration::from_secs(30)),
///     provider: HttpTransport::new(Credentials::basic("user", "secret")),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct TransportOptions<T> {
    /// Request timeout (applies to all transports)
    pub timeout: Option<Duration>,

    /// Transport-specific options
    pub provider: T,
}

impl<T> TransportOptions<T> {
    /// Create new transport options with transport-specific configuration.
    pub fn new(provider: T) -> Self {
        Self {
            timeout: None,
            provider,
        }
    }

    /// Set the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// HTTP-specific transport options.
/// Used as the provider field in `TransportOptions<HttpTransport>`.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    /// Credentials for authentication
    pub credentials: Option<Credentials>,

    /// HTTP proxy URL
    pub proxy: Option<String>,

    /// Additional HTTP headers to include in requests
    pub extra_headers: Option<HashMap<String, String>>,
}

impl HttpTransport {
    /// Create new HTTP transport options with credentials.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials: Some(credentials),
            proxy: None,
            extra_headers: None,
        }
    }

    /// Set the proxy URL.
    pub fn with_proxy(mut self, proxy: String) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// Set extra headers.
    pub fn with_extra_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.extra_headers = Some(headers);
        self
    }

    /// Add a single extra header.
    pub fn with_header(mut self, key: String, value: String) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key, value);
        self
    }
}
