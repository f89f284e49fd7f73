mod diagnostics;
mod helpers;
pub mod types;

pub use diagnostics::{DiagnosticSink, LookupFailure, SilentSink, TracingSink};
pub use helpers::PathEncoding;

use std::env;
use std::fmt;
use std::sync::Arc;

use reqwest::Client;
use tracing::debug;

use helpers::{entry_url, normalize_base_url, parse_flag};
use types::{Entry, LookupResult};

const API_BASE: &str = "https://api.dictionaryapi.dev/api/v2/entries";

/// Failures a lookup does not recover from.
///
/// A non-2xx status is not one of them: it comes back as a [`LookupResult`]
/// without entries.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed dictionary response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Look up `word` in `language` using a default client.
///
/// Shorthand for `DictionaryClient::new(Client::new()).lookup(word, language)`.
pub async fn lookup(word: &str, language: &str) -> Result<LookupResult, LookupError> {
    DictionaryClient::new(Client::new())
        .lookup(word, language)
        .await
}

/// HTTP client for the dictionaryapi.dev entries endpoint.
///
/// Configuration via environment variables (see [`DictionaryClient::from_env`]):
/// - `DICTIONARY_API_URL`: alternate base URL, e.g. a self-hosted mirror
/// - `DICTIONARY_ESCAPE_PATH`: percent-encode the word and language code
#[derive(Clone)]
pub struct DictionaryClient {
    http: Client,
    base_url: String,
    path_encoding: PathEncoding,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl fmt::Debug for DictionaryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DictionaryClient")
            .field("base_url", &self.base_url)
            .field("path_encoding", &self.path_encoding)
            .finish_non_exhaustive()
    }
}

impl DictionaryClient {
    pub fn new(http: Client) -> Self {
        Self {
            http,
            base_url: API_BASE.to_string(),
            path_encoding: PathEncoding::default(),
            diagnostics: Arc::new(TracingSink),
        }
    }

    pub fn from_env(http: Client) -> Self {
        Self::from_vars(http, |key| env::var(key).ok())
    }

    fn from_vars(http: Client, var: impl Fn(&str) -> Option<String>) -> Self {
        let mut client = Self::new(http);
        if let Some(base_url) = var("DICTIONARY_API_URL").and_then(|v| normalize_base_url(&v)) {
            debug!(%base_url, "using configured dictionary API base URL");
            client.base_url = base_url;
        }
        if var("DICTIONARY_ESCAPE_PATH").is_some_and(|v| parse_flag(&v)) {
            client.path_encoding = PathEncoding::Escaped;
        }
        client
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_path_encoding(mut self, path_encoding: PathEncoding) -> Self {
        self.path_encoding = path_encoding;
        self
    }

    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = sink;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn path_encoding(&self) -> PathEncoding {
        self.path_encoding
    }

    /// The URL a lookup of `word` in `language` requests.
    pub fn url_for(&self, word: &str, language: &str) -> String {
        entry_url(&self.base_url, language, word, self.path_encoding)
    }

    /// Fetch the entries for `word` in `language` with a single GET.
    ///
    /// The word and language are used exactly as given. On a non-2xx status
    /// the body is handed to the diagnostic sink and the result carries no
    /// entries. Transport failures and unparseable 2xx bodies are errors.
    pub async fn lookup(&self, word: &str, language: &str) -> Result<LookupResult, LookupError> {
        let url = self.url_for(word, language);
        debug!(word, language, "dictionary lookup");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            self.diagnostics.report(&LookupFailure {
                status: status.as_u16(),
                word,
                language,
                body: &body,
            });
            return Ok(LookupResult {
                status_code: status.as_u16(),
                entries: None,
                queried_word: word.to_string(),
            });
        }

        let entries: Vec<Entry> = serde_json::from_str(&body)?;
        debug!(word, status = status.as_u16(), entries = entries.len(), "dictionary lookup complete");

        Ok(LookupResult {
            status_code: status.as_u16(),
            entries: Some(entries),
            queried_word: word.to_string(),
        })
    }
}
