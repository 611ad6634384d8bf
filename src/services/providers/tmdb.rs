/// Catalog provider backed by the TMDB v3 API
///
/// Person lookups append `combined_credits` and `tagged_images`, production
/// lookups append `credits` and `aggregate_credits`, so a single request
/// carries everything the insights need. Both person and production records
/// are cached in Redis for a week.
use crate::{
    cached,
    db::{Cache, CacheKey},
    error::{AppError, AppResult},
    models::{CreditKey, PersonDetail, ProductionDetail},
    services::providers::CatalogProvider,
};
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;

const CATALOG_CACHE_TTL: u64 = 604800; // 1 week
const PERSON_APPEND: &str = "combined_credits,tagged_images";
/// Movies ignore `aggregate_credits`; series return both
const PRODUCTION_APPEND: &str = "credits,aggregate_credits";

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_token: String,
    api_url: String,
    cache: Cache,
}

impl TmdbProvider {
    pub fn new(cache: Cache, api_token: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_token,
            api_url: api_url.trim_end_matches('/').to_string(),
            cache,
        }
    }

    fn person_url(&self, person_id: u64) -> String {
        format!("{}/person/{}", self.api_url, person_id)
    }

    fn production_url(&self, key: CreditKey) -> String {
        format!("{}/{}/{}", self.api_url, key.media_kind, key.id)
    }

    /// Maps a non-success catalog response to an error
    fn status_error(status: StatusCode, body: &str, resource: &str) -> AppError {
        if status == StatusCode::NOT_FOUND {
            AppError::NotFound(format!("{} not found in catalog", resource))
        } else {
            AppError::ExternalApi(format!(
                "Catalog API returned status {} for {}: {}",
                status, resource, body
            ))
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
        resource: &str,
    ) -> AppResult<T> {
        tracing::debug!(url = %url, "Fetching from catalog API");

        let response = self
            .http_client
            .get(url)
            .bearer_auth(&self.api_token)
            .query(query)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                resource = %resource,
                status = %status,
                body = %body,
                "Catalog API request failed"
            );
            return Err(Self::status_error(status, &body, resource));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, resource = %resource, "Failed to parse catalog response");
            AppError::ExternalApi(format!("Failed to parse catalog response for {}: {}", resource, e))
        })
    }
}

#[async_trait::async_trait]
impl CatalogProvider for TmdbProvider {
    async fn fetch_person(&self, person_id: u64) -> AppResult<PersonDetail> {
        cached!(
            self.cache,
            CacheKey::Person(person_id),
            CATALOG_CACHE_TTL,
            async move {
                let resource = format!("person {}", person_id);
                let person: PersonDetail = self
                    .get_json(
                        &self.person_url(person_id),
                        &[("append_to_response", PERSON_APPEND)],
                        &resource,
                    )
                    .await?;

                tracing::info!(
                    person_id = person_id,
                    cast_credits = person.combined_credits.cast.len(),
                    crew_credits = person.combined_credits.crew.len(),
                    tagged_images = person.tagged_images.results.len(),
                    provider = "tmdb",
                    "Person fetched"
                );

                Ok::<_, AppError>(person)
            }
        )
    }

    async fn fetch_production(&self, key: CreditKey) -> AppResult<ProductionDetail> {
        cached!(
            self.cache,
            CacheKey::Production(key),
            CATALOG_CACHE_TTL,
            async move {
                let resource = format!("production {}", key);
                let detail: ProductionDetail = self
                    .get_json(
                        &self.production_url(key),
                        &[("append_to_response", PRODUCTION_APPEND)],
                        &resource,
                    )
                    .await?;

                tracing::debug!(
                    production = %key,
                    genres = detail.genres.len(),
                    has_credits = detail.credits.is_some(),
                    has_aggregate_credits = detail.aggregate_credits.is_some(),
                    "Production fetched"
                );

                Ok::<_, AppError>(detail)
            }
        )
    }

    fn clone_for_task(&self) -> Box<dyn CatalogProvider> {
        Box::new(self.clone())
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
