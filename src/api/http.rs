//! HTTP Gateway
//!
//! `BeerGateway` over the REST backend using reqwest (browser fetch on wasm32).

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Request;
use serde::de::DeserializeOwned;

use super::{with_deadline, BeerGateway};
use crate::config::AppConfig;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{Beer, BeerPatch};

const JSON: &str = "application/json";

#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    config: AppConfig,
}

impl HttpGateway {
    pub fn new(config: AppConfig) -> Self {
        Self { client: reqwest::Client::new(), config }
    }

    /// `GET {base}/beers`
    fn list_request(&self) -> CatalogResult<Request> {
        let request = self.client.get(self.config.beers_url()).header(ACCEPT, JSON).build()?;
        Ok(request)
    }

    /// `PATCH {base}/beers/{id}` with a JSON body
    fn patch_request(&self, id: u32, patch: &BeerPatch<'_>) -> CatalogResult<Request> {
        let request = self
            .client
            .patch(self.config.beer_url(id))
            .header(ACCEPT, JSON)
            .json(patch)
            .build()?;
        Ok(request)
    }

    async fn send<T: DeserializeOwned>(&self, request: Request) -> CatalogResult<T> {
        log::debug!("{} {}", request.method(), request.url());
        let url = request.url().to_string();
        let client = self.client.clone();
        let exchange = async move {
            let response = client.execute(request).await?;
            check_status(response.status().as_u16(), &url)?;
            let body = response.text().await?;
            decode(&body)
        };
        with_deadline(self.config.request_timeout_ms, exchange).await
    }
}

#[async_trait(?Send)]
impl BeerGateway for HttpGateway {
    async fn list_all(&self) -> CatalogResult<Vec<Beer>> {
        self.send(self.list_request()?).await
    }

    async fn update_description(&self, id: u32, text: &str) -> CatalogResult<Beer> {
        self.send(self.patch_request(id, &BeerPatch::description(text))?).await
    }

    async fn update_reviews(&self, id: u32, reviews: &[String]) -> CatalogResult<Beer> {
        self.send(self.patch_request(id, &BeerPatch::reviews(reviews))?).await
    }
}

fn check_status(status: u16, url: &str) -> CatalogResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(CatalogError::Status { status, url: url.to_string() })
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> CatalogResult<T> {
    Ok(serde_json::from_str(body)?)
}
