//! Sidebar projector
//!
//! Pure derivation of the sidebar grouping from an index snapshot: newest
//! first, partitioned by the UTC calendar day of `updated_at`. Same snapshot
//! in, same grouping out: there is no hidden state, which is what makes the
//! sidebar testable without a UI harness.

use crate::conversation::entities::ConversationSummary;
use chrono::{DateTime, NaiveDate, Utc};

/// One labeled day of sidebar entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarGroup {
    pub label: String,
    pub entries: Vec<ConversationSummary>,
}

/// Group `summaries` by calendar day relative to the current time.
pub fn project(summaries: &[ConversationSummary]) -> Vec<SidebarGroup> {
    project_at(Utc::now(), summaries)
}

/// Group `summaries` by calendar day relative to `now`.
///
/// 1. Sort descending by `updated_at`.
/// 2. Partition by the UTC date (date-only comparison, not timestamp).
/// 3. Label: today, yesterday, otherwise weekday/month/day.
/// 4. Groups ordered descending by the date they represent; entries within a
///    group keep the step-1 order.
pub fn project_at(now: DateTime<Utc>, summaries: &[ConversationSummary]) -> Vec<SidebarGroup> {
    let mut sorted: Vec<&ConversationSummary> = summaries.iter().collect();
    sorted.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

    let mut days: Vec<(NaiveDate, Vec<ConversationSummary>)> = Vec::new();
    for summary in sorted {
        let day = summary.updated_at.date_naive();
        match days.iter_mut().find(|(d, _)| *d == day) {
            Some((_, entries)) => entries.push(summary.clone()),
            None => days.push((day, vec![summary.clone()])),
        }
    }

    // Descending by represented date, not by insertion order.
    days.sort_by(|a, b| b.0.cmp(&a.0));

    let today = now.date_naive();
    days.into_iter()
        .map(|(day, entries)| SidebarGroup {
            label: label_for(today, day),
            entries,
        })
        .collect()
}

fn label_for(today: NaiveDate, day: NaiveDate) -> String {
    match today.signed_duration_since(day).num_days() {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        // e.g. "Saturday, Aug 23"
        _ => day.format("%A, %b %-d").to_string(),
    }
}
