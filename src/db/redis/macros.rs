/// Read-through caching for catalog lookups.
///
/// Returns the record cached under `$key` if there is one. Otherwise awaits
/// `$fetch`, queues the result for write-back with `$ttl` seconds to live and
/// returns it. A failed cache read is logged and treated as a miss; errors
/// from the fetch propagate with `?`.
///
/// # Example
/// ```rust,ignore
/// let person: PersonDetail = cached!(self.cache, CacheKey::Person(id), CATALOG_CACHE_TTL, async move {
///     self.request_person(id).await
/// })?;
/// ```
#[macro_export]
macro_rules! cached {
    ($cache:expr, $key:expr, $ttl:expr, $fetch:expr) => {{
        let key = $key;
        let hit = match $cache.get_from_cache(&key).await {
            Ok(hit) => hit,
            Err(e) => {
                tracing::warn!(error = %e, key = %key, "Cache read failed, fetching from source");
                None
            }
        };
        if let Some(hit) = hit {
            Ok(hit)
        } else {
            let fresh = $fetch.await?;
            tracing::debug!(key = %key, ttl = $ttl, "Caching catalog record");
            $cache.set_in_background(&key, &fresh, $ttl);
            Ok(fresh)
        }
    }};
}
