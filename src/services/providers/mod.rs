/// Catalog data provider abstraction
///
/// The insights only need two lookups from the movie/TV catalog: a person's
/// detail with combined credits, and a production's detail for its genres
/// and date. Implementations are expected to cache.
use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::{
    error::{AppError, AppResult},
    models::{CreditKey, PersonDetail, ProductionDetail},
};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Upper bound on catalog requests in flight for one batch
pub const MAX_CONCURRENT_FETCHES: usize = 10;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Person detail including combined credits and tagged images
    async fn fetch_person(&self, person_id: u64) -> AppResult<PersonDetail>;

    /// Movie or series detail
    async fn fetch_production(&self, key: CreditKey) -> AppResult<ProductionDetail>;

    /// Fetch several productions in parallel
    ///
    /// At most [`MAX_CONCURRENT_FETCHES`] lookups run at once. Individual
    /// failures are logged and skipped. Fails only when every lookup failed.
    async fn fetch_productions_batch(
        &self,
        keys: Vec<CreditKey>,
    ) -> AppResult<Vec<(CreditKey, ProductionDetail)>> {
        let permits = Arc::new(Semaphore::new(MAX_CONCURRENT_FETCHES));
        let mut tasks = Vec::new();

        for key in keys {
            let provider = self.clone_for_task();
            let permits = Arc::clone(&permits);
            let task = tokio::spawn(async move {
                // The semaphore is never closed, so acquiring cannot fail
                let _permit = permits.acquire_owned().await;
                (key, provider.fetch_production(key).await)
            });
            tasks.push(task);
        }

        let mut results = Vec::new();
        let mut errors = Vec::new();

        for task in tasks {
            match task.await {
                Ok((key, Ok(detail))) => results.push((key, detail)),
                Ok((key, Err(e))) => {
                    tracing::warn!(error = %e, production = %key, "Production fetch failed");
                    errors.push(e);
                }
                Err(e) => {
                    tracing::error!(error = %e, "Task join error");
                    errors.push(AppError::Internal(e.to_string()));
                }
            }
        }

        if !errors.is_empty() {
            tracing::warn!(
                provider = self.name(),
                success_count = results.len(),
                error_count = errors.len(),
                "Partial production fetch failure"
            );
        }

        if results.is_empty() && !errors.is_empty() {
            return Err(AppError::ExternalApi(
                "Failed to fetch any production details".to_string(),
            ));
        }

        Ok(results)
    }

    /// Clone provider for parallel task execution
    fn clone_for_task(&self) -> Box<dyn CatalogProvider>;

    /// Provider name for logging
    fn name(&self) -> &'static str;
}
