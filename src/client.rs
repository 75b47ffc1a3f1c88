use std::time::Duration;

use log::{debug, info};
use url::Url;

use crate::error::FetchError;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Something that turns an address into raw markup.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}

pub struct HttpClient {
    reqwest: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, FetchError> {
        let reqwest = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .connection_verbose(true)
            .build()?;
        Ok(Self { reqwest })
    }
}

impl PageSource for HttpClient {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        info!("Fetching {url}");
        let response = self.reqwest.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }
        let text = response.text().await?;
        debug!("Received {} bytes from {url} ({status})", text.len());
        Ok(text)
    }
}
