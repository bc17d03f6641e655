use crate::config::Config;
use crate::errors::{AppError, AppResult};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HOST, USER_AGENT};
use tracing::{error, info};

const FETCH_USER_AGENT: &str = "curl/8.5.0";

/// Something that returns the raw results page.
pub trait PageSource {
    fn fetch(&self) -> AppResult<String>;
}

/// Blocking HTTP GET against the configured URL.
pub struct HttpSource {
    client: Client,
    url: String,
    host: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, host: impl Into<String>) -> AppResult<Self> {
        Ok(Self {
            client: Client::builder().build()?,
            url: url.into(),
            host: host.into(),
        })
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Self::new(cfg.url.clone(), cfg.host.clone())
    }
}

impl PageSource for HttpSource {
    fn fetch(&self) -> AppResult<String> {
        info!(url = %self.url, "Fetching flight data");

        let response = self
            .client
            .get(&self.url)
            .header(HOST, &self.host)
            .header(USER_AGENT, FETCH_USER_AGENT)
            .header(ACCEPT, "*/*")
            .send()?;

        let status = response.status();
        if status.as_u16() != 200 {
            error!(status = status.as_u16(), "failed to fetch flight data");
            return Err(AppError::HttpStatus {
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }

        let body = response.text()?;
        info!("Flight data fetched successfully.");
        Ok(body)
    }
}

impl<T: PageSource + ?Sized> PageSource for &T {
    fn fetch(&self) -> AppResult<String> {
        (**self).fetch()
    }
}
