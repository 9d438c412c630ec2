use std::io::{self, Write};

use log::debug;
use log::info;
use log::warn;
use reqwest::header;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;

use crate::config::SiteConfig;
use crate::schema::Region;

pub struct SnowClient {
    client: reqwest::Client,
    config: SiteConfig,
}

impl SnowClient {
    pub fn new(config: SiteConfig) -> reqwest::Result<Self> {
        Ok(Self {
            client: reqwest_client()?,
            config,
        })
    }

    /// The region is appended as is, without any percent-encoding.
    pub fn region_url(&self, region: &Region) -> String {
        format!("{}{}{}", self.config.base_url, self.config.state_path, region)
    }

    /// Returns the page body only for a `200` response declared as HTML.
    /// The requested URL and any transport error are written to `out`;
    /// a transport error also ends up as `None`.
    pub async fn fetch_region_page<W: Write>(
        &self,
        region: &Region,
        out: &mut W,
    ) -> io::Result<Option<String>> {
        let url = self.region_url(region);
        info!("Fetching {url}");
        writeln!(out, "{url}")?;
        match self.fetch_html(&url).await {
            Ok(content) => Ok(content),
            Err(e) => {
                warn!("Request to {url} failed: {e:?}");
                writeln!(out, "Error during requests to {url} : {e}")?;
                Ok(None)
            }
        }
    }

    async fn fetch_html(&self, url: &str) -> reqwest::Result<Option<String>> {
        let response = self.client.get(url).send().await?;
        debug!(
            "Server returned {:?} with content type {:?}",
            response.status(),
            response.headers().get(header::CONTENT_TYPE)
        );
        if !is_html_success(response.status(), response.headers()) {
            return Ok(None);
        }
        Ok(Some(response.text().await?))
    }
}

pub fn is_html_success(status: StatusCode, headers: &HeaderMap) -> bool {
    status == StatusCode::OK
        && headers
            .get(header::CONTENT_TYPE)
            .and_then(|x| x.to_str().ok())
            .map_or(false, |x| x.to_lowercase().contains("html"))
}

fn reqwest_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().connection_verbose(true).build()
}
