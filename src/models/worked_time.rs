use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

/// Result of a worked-time reconstruction: the aggregate over the whole input
/// window plus the per-day breakdown. Derived data only; never persisted or
/// cached, always recomputed from the current event rows.
#[derive(Debug, Clone)]
pub struct WorkedTime {
    pub total: Duration,
    pub per_day: BTreeMap<NaiveDate, Duration>,
}

impl Default for WorkedTime {
    fn default() -> Self {
        Self {
            total: Duration::zero(),
            per_day: BTreeMap::new(),
        }
    }
}

impl WorkedTime {
    pub fn total_minutes(&self) -> i64 {
        self.total.num_minutes()
    }

    pub fn minutes_on(&self, day: NaiveDate) -> i64 {
        self.per_day
            .get(&day)
            .map(|d| d.num_minutes())
            .unwrap_or(0)
    }
}
