use crate::impact_analysis::domain::{AnalysisRequest, AnalysisResult};
use chrono::{DateTime, Utc};
use dashmap::DashMap;

const MILLIS_PER_MINUTE: u64 = 60_000;

#[derive(Debug, Clone)]
struct CacheEntry {
    result: AnalysisResult,
    stored_at: DateTime<Utc>,
}

/// In-memory result cache keyed by model id and the serialized request
///
/// Expiry is checked on read only. Stale entries stay until they are
/// superseded or the cache is cleared.
#[derive(Debug, Default)]
pub struct ResultCache {
    entries: DashMap<String, CacheEntry>,
}

impl ResultCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the lookup key `"{model_id}:{request as JSON}"`
    pub fn key(model_id: &str, request: &AnalysisRequest) -> String {
        let serialized =
            serde_json::to_string(request).unwrap_or_else(|_| format!("{:?}", request));
        format!("{}:{}", model_id, serialized)
    }

    /// Returns the cached result if it is younger than `expiry_minutes`
    pub fn get(
        &self,
        key: &str,
        now: DateTime<Utc>,
        expiry_minutes: u64,
    ) -> Option<AnalysisResult> {
        let entry = self.entries.get(key)?;
        let age_ms = (now - entry.stored_at).num_milliseconds();
        let ttl_ms =
            i64::try_from(expiry_minutes.saturating_mul(MILLIS_PER_MINUTE)).unwrap_or(i64::MAX);

        if age_ms < ttl_ms {
            Some(entry.result.clone())
        } else {
            None
        }
    }

    /// Stores a result, replacing any older entry under the same key
    pub fn insert(&self, key: String, result: AnalysisResult, now: DateTime<Utc>) {
        self.entries.insert(
            key,
            CacheEntry {
                result,
                stored_at: now,
            },
        );
    }

    /// Removes every entry, fresh or stale
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Number of stored entries, including expired ones
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impact_analysis::domain::{ArchitectureType, ChangeRequestRef};
    use crate::impact_analysis::services::ReportSynthesizer;
    use chrono::TimeDelta;

    fn request(text: &str) -> AnalysisRequest {
        AnalysisRequest::builder(ArchitectureType::Monolithic)
            .change_request(ChangeRequestRef::text(text))
            .build()
            .unwrap()
    }

    #[test]
    fn test_key_separates_models_and_requests() {
        let a = request("Add caching layer");
        let b = request("Drop caching layer");
        assert_ne!(ResultCache::key("m1", &a), ResultCache::key("m2", &a));
        assert_ne!(ResultCache::key("m1", &a), ResultCache::key("m1", &b));
        assert_eq!(ResultCache::key("m1", &a), ResultCache::key("m1", &a.clone()));
        assert!(ResultCache::key("m1", &a).starts_with("m1:{"));
    }

    #[test]
    fn test_entry_expires_at_ttl() {
        let cache = ResultCache::new();
        let stored_at = Utc::now();
        cache.insert("k".to_string(), ReportSynthesizer::fallback("m"), stored_at);

        let just_before = stored_at + TimeDelta::milliseconds(59_999);
        let at_ttl = stored_at + TimeDelta::minutes(1);
        assert!(cache.get("k", just_before, 1).is_some());
        assert!(cache.get("k", at_ttl, 1).is_none());
        // stale entries are not evicted on read
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear() {
        let cache = ResultCache::new();
        cache.insert("k".to_string(), ReportSynthesizer::fallback("m"), Utc::now());
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get("k", Utc::now(), 60).is_none());
    }
}
