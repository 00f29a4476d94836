//! Per-day summaries of the admin login attempt log.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::LoginAttempt;

/// Login attempt counts for one UTC calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyAttempts {
    pub date: NaiveDate,
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Group attempts by the UTC date of `created_at`, oldest day first.
pub fn daily_summary(attempts: &[LoginAttempt]) -> Vec<DailyAttempts> {
    let mut days: BTreeMap<NaiveDate, DailyAttempts> = BTreeMap::new();

    for attempt in attempts {
        let date = attempt.created_at.date_naive();
        let day = days.entry(date).or_insert(DailyAttempts {
            date,
            total: 0,
            succeeded: 0,
            failed: 0,
        });
        day.total += 1;
        if attempt.success {
            day.succeeded += 1;
        } else {
            day.failed += 1;
        }
    }

    days.into_values().collect()
}
