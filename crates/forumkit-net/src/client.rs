//! HTTP client built on a reusable [`ureq::Agent`].

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;
use ureq::{Agent, Body};

use crate::error::FetchError;

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Synchronous HTTP client with connection pooling and a global timeout.
///
/// Cheap to clone is not a goal; construct one and pass it by reference.
/// Statuses are checked manually so error bodies can be captured into
/// [`FetchError::Status`].
pub struct HttpClient {
    agent: Agent,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_TIMEOUT))
    }
}

impl HttpClient {
    /// Create a client whose requests all share `timeout`.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self { agent }
    }

    /// GET a URL and return the response body as text.
    pub fn get_text(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {url}");
        let mut body = check_status(self.agent.get(url).call()?)?;
        Ok(body.read_to_string()?)
    }

    /// GET a URL and return the raw response body.
    pub fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        debug!("GET {url}");
        let mut body = check_status(self.agent.get(url).call()?)?;
        Ok(body.read_to_vec()?)
    }

    /// GET a URL and deserialize the JSON response body.
    pub fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!("GET {url}");
        let mut body = check_status(self.agent.get(url).call()?)?;
        Ok(body.read_json()?)
    }

    /// POST a urlencoded form and deserialize the JSON response body.
    ///
    /// `headers` are applied to the request as-is, e.g. an `Authorization`
    /// header for key-authenticated APIs.
    pub fn post_form_json<T: DeserializeOwned>(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        form: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        debug!("POST {url}");
        let mut request = self.agent.post(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send_form(form.iter().copied())?;
        let mut body = check_status(response)?;
        Ok(body.read_json()?)
    }
}

/// Turn error statuses into [`FetchError::Status`], reading the error body
/// for diagnostics; pass successful responses through as their body.
fn check_status(response: ureq::http::Response<Body>) -> Result<Body, FetchError> {
    let status = response.status().as_u16();
    let mut body = response.into_body();

    if status >= 400 {
        let error_body = body
            .read_to_string()
            .unwrap_or_else(|_| "(unable to read error body)".to_owned());
        return Err(FetchError::Status {
            status,
            body: error_body,
        });
    }

    Ok(body)
}
