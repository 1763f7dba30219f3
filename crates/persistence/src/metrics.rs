//! Query metrics collection.

use metrics::histogram;
use std::time::Instant;

/// Record the duration of a repository query.
pub fn record_query_duration(query_name: &str, duration_secs: f64) {
    histogram!(
        "contacts_query_duration_seconds",
        "query" => query_name.to_string()
    )
    .record(duration_secs);
}

/// Times a repository query and records its duration histogram.
///
/// Usage:
/// ```ignore
/// let timer = QueryTimer::new("find_contact_by_id");
/// let result = sqlx::query_as::<_, ContactEntity>(...).fetch_optional(&pool).await;
/// timer.record();
/// result
/// ```
pub struct QueryTimer {
    query_name: String,
    start: Instant,
}

impl QueryTimer {
    /// Create a new timer for the given query name.
    pub fn new(query_name: impl Into<String>) -> Self {
        Self {
            query_name: query_name.into(),
            start: Instant::now(),
        }
    }

    /// Record the elapsed duration to metrics.
    pub fn record(self) {
        let duration = self.start.elapsed().as_secs_f64();
        record_query_duration(&self.query_name, duration);
    }
}
