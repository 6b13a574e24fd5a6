use graphsh_core::Querier;
use graphsh_core::TransportError;
use reqwest::header::CONTENT_TYPE;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderName;
use reqwest::header::HeaderValue;

/// Sends query documents to a GraphQL endpoint as `{"query": ...}` JSON POST
/// requests.
#[derive(Debug)]
pub(crate) struct HttpQuerier {
    client: reqwest::blocking::Client,
    endpoint: String,
    headers: HeaderMap,
}
impl HttpQuerier {
    pub fn new(endpoint: &str, raw_headers: &[String]) -> Result<Self, TransportError> {
        let mut headers = parse_headers(raw_headers)?;
        headers
            .entry(CONTENT_TYPE)
            .or_insert(HeaderValue::from_static("application/json"));

        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|err| TransportError::Request(err.to_string()))?;

        log::debug!(
            "Configured HTTP transport for `{endpoint}` with {} header(s).",
            headers.len(),
        );
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            headers,
        })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    #[cfg(test)]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

#[inherent::inherent]
impl Querier for HttpQuerier {
    /// Non-2xx responses are returned like any other; GraphQL servers report
    /// errors in the body.
    pub fn query(&self, text: &str) -> Result<Vec<u8>, TransportError> {
        let body = serde_json::to_vec(&serde_json::json!({ "query": text }))
            .map_err(|err| TransportError::Other(err.to_string()))?;

        log::trace!("POST {} ({} bytes)", self.endpoint, body.len());
        let response = self.client
            .post(self.endpoint.as_str())
            .headers(self.headers.clone())
            .body(body)
            .send()
            .map_err(|err| TransportError::Request(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            log::debug!("Endpoint responded with HTTP status {status}.");
        }

        let bytes = response
            .bytes()
            .map_err(|err| TransportError::Request(err.to_string()))?;
        Ok(bytes.to_vec())
    }
}

/// Parse `Name: value` header flags. Each flag is split on its first colon and
/// both halves are trimmed; repeated names are all sent.
pub(crate) fn parse_headers(raw_headers: &[String]) -> Result<HeaderMap, TransportError> {
    let mut headers = HeaderMap::new();
    for raw in raw_headers {
        let invalid = || TransportError::InvalidHeader {
            header: raw.to_string(),
        };

        let (name, value) = raw.split_once(':').ok_or_else(invalid)?;
        let name = HeaderName::from_bytes(name.trim().as_bytes())
            .map_err(|_| invalid())?;
        let value = HeaderValue::from_str(value.trim())
            .map_err(|_| invalid())?;
        headers.append(name, value);
    }
    Ok(headers)
}
