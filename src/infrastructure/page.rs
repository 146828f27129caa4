use crate::error::Result;
use reqwest::Client;
use std::future::Future;

/// Opaque "fetch rendered page" capability. The pipeline only needs the final
/// markup for a URL; how it is obtained stays behind this seam.
pub trait PageSource: Clone + Send + Sync {
    fn fetch_page(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Plain HTTP page source. The statistics site serves complete markup, so a
/// GET with a desktop user agent is enough. The client carries the
/// per-navigation timeout; a timed-out navigation surfaces as a network error
/// for the owning candidate only.
#[derive(Clone)]
pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl PageSource for HttpPageSource {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}
