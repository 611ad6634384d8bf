use crate::{
    db::UserListStore,
    error::AppResult,
    models::{
        CreditKey, GenreYearStat, KnownForEntry, ListKind, ListQuery, PredictionResult, WatchEntry,
    },
    services::{known_for, prediction, providers::CatalogProvider},
};

/// Ranks the productions a person is best known for
pub async fn known_for(
    catalog: &dyn CatalogProvider,
    person_id: u64,
) -> AppResult<Vec<KnownForEntry>> {
    let person = catalog.fetch_person(person_id).await?;

    let entries = known_for::rank(
        &person.combined_credits.cast,
        &person.combined_credits.crew,
        &person.known_for_department,
    );

    tracing::info!(
        person_id = person_id,
        department = %person.known_for_department,
        entries = entries.len(),
        "Known-for ranking computed"
    );

    Ok(entries)
}

/// Predicts where a user has seen a person, from the user's seen-it list
///
/// Genres and years of the seen titles come from the catalog; titles whose
/// detail cannot be fetched are left out of the statistics rather than
/// failing the prediction.
pub async fn predict_for_user(
    catalog: &dyn CatalogProvider,
    lists: &dyn UserListStore,
    user_id: &str,
    person_id: u64,
) -> AppResult<PredictionResult> {
    let person = catalog.fetch_person(person_id).await?;
    let seen = lists
        .list(user_id, ListKind::SeenIt, &ListQuery::default())
        .await?;

    let watch_list: Vec<WatchEntry> = seen.iter().map(WatchEntry::from).collect();
    let genre_stats = watch_history_stats(catalog, &watch_list).await;

    let result = prediction::predict(
        &person.combined_credits.cast,
        &watch_list,
        &genre_stats,
        &person.production_images(),
    );

    tracing::info!(
        person_id = person_id,
        watch_list_size = result.watch_list_size,
        history_stats = genre_stats.len(),
        confirmed = result.confirmed.len(),
        likely = result.likely.len(),
        possible = result.possible.len(),
        "Recognition prediction computed"
    );

    Ok(result)
}

async fn watch_history_stats(
    catalog: &dyn CatalogProvider,
    watch_list: &[WatchEntry],
) -> Vec<GenreYearStat> {
    if watch_list.is_empty() {
        return Vec::new();
    }

    let keys: Vec<CreditKey> = watch_list.iter().map(WatchEntry::key).collect();

    match catalog.fetch_productions_batch(keys).await {
        Ok(details) => details
            .iter()
            .map(|(_, detail)| detail.genre_year_stat())
            .collect(),
        Err(e) => {
            tracing::warn!(error = %e, "No watch history details available, predicting without them");
            Vec::new()
        }
    }
}
