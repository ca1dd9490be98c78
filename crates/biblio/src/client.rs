use biblio_common::ClientContext;
use smol_str::SmolStr;
use std::fmt;
use url::Url;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.bibliocommons.com/v1/";

/// Environment variable holding the API key read by [`Client::from_env`].
pub const API_KEY_VAR: &str = "BIBLIOCOMMONS_API_KEY";

/// Environment variable overriding the API root in [`Client::from_env`].
pub const BASE_URL_VAR: &str = "BIBLIOCOMMONS_BASE_URL";

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid")
}

/// Connection settings for the BiblioCommons API
///
/// This is the [`ClientContext`] handed to entity constructors. It carries configuration
/// only; making requests is left to whatever HTTP stack the caller brings.
///
/// ```rust
/// use biblio::client::Client;
/// use biblio::ClientContext;
///
/// let client = Client::new().api_key("demo-key").build();
/// assert_eq!(
///     client.endpoint(&["lists", "170722491"]).as_str(),
///     "https://api.bibliocommons.com/v1/lists/170722491"
/// );
/// ```
#[derive(Clone, bon::Builder)]
#[builder(start_fn = new)]
pub struct Client {
    /// API key sent with every request
    #[builder(into)]
    api_key: SmolStr,
    /// Versioned API root
    #[builder(default = default_base_url())]
    base_url: Url,
}

impl Client {
    /// Reads settings from `BIBLIOCOMMONS_API_KEY` and, optionally,
    /// `BIBLIOCOMMONS_BASE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its value.
    ///
    /// Blank values count as unset. The base URL must be hierarchical (`http:`, `https:`...)
    /// so endpoints can be resolved below it.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = match lookup(BASE_URL_VAR) {
            Some(raw) if !raw.trim().is_empty() => {
                let url = Url::parse(raw.trim()).map_err(|source| {
                    ConfigError::InvalidBaseUrl {
                        value: raw.clone(),
                        source,
                    }
                })?;
                if url.cannot_be_a_base() {
                    return Err(ConfigError::NotABaseUrl { value: raw });
                }
                url
            }
            _ => default_base_url(),
        };

        Ok(Self::new().api_key(api_key).base_url(base_url).build())
    }

    /// The configured API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl ClientContext for Client {
    fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

/// Errors raised while loading client configuration
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    /// No API key was configured
    #[error("no API key configured")]
    #[diagnostic(
        code(biblio::config::missing_api_key),
        help("set BIBLIOCOMMONS_API_KEY")
    )]
    MissingApiKey,

    /// The API root override is not a valid URL
    #[error("invalid base URL {value:?}: {source}")]
    #[diagnostic(code(biblio::config::invalid_base_url))]
    InvalidBaseUrl {
        /// The rejected value
        value: String,
        /// Why it was rejected
        #[source]
        source: url::ParseError,
    },

    /// The API root override cannot have paths below it, e.g. `mailto:` URLs
    #[error("base URL {value:?} cannot have endpoint paths below it")]
    #[diagnostic(
        code(biblio::config::not_a_base_url),
        help("use an http(s) URL such as https://api.bibliocommons.com/v1/")
    )]
    NotABaseUrl {
        /// The rejected value
        value: String,
    },
}
