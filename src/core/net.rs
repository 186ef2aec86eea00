// src/core/net.rs
// Blocking HTTP GET. One attempt, no retries.

use reqwest::blocking::Client;

use crate::config::{FetchOptions, consts::USER_AGENT};
use crate::error::Result;

/// Where page text comes from. The real implementation talks HTTP; tests
/// hand in canned bodies.
pub trait Transport {
    fn get_text(&self, url: &str, headers: &[(&str, &str)]) -> Result<String>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(options: &FetchOptions) -> Result<Self> {
        let client = Client::builder()
            .timeout(options.timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get_text(&self, url: &str, headers: &[(&str, &str)]) -> Result<String> {
        let mut req = self.client.get(url);
        for (name, value) in headers {
            req = req.header(*name, *value);
        }
        let resp = req.send()?.error_for_status()?;
        logd!("GET {} → {}", url, resp.status());
        Ok(resp.text()?)
    }
}
