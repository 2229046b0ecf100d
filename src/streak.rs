use chrono::{DateTime, Datelike, Duration, FixedOffset};

use crate::models::ActivityEvent;

/// Event kinds that count as a contribution.
const QUALIFYING_KINDS: [&str; 3] = ["PushEvent", "PullRequestEvent", "IssuesEvent"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakTotals {
    pub total_contributions: u64,
    pub current_streak: u64,
    pub longest_streak: u64,
}

/// Walk the event feed in the order received and derive contribution totals.
///
/// Events are filtered to the qualifying kinds, timestamps that fail RFC3339
/// parsing are skipped, and the streak advances only when an event lands on a
/// new calendar day (by day-of-year). A gap of at most 24 hours from the
/// previous counted day extends the streak; anything larger resets it to 1.
/// The feed is taken as-is: no reordering, so an out-of-order feed can produce
/// negative gaps that still extend the streak.
pub fn compute(events: &[ActivityEvent]) -> StreakTotals {
    let mut totals = StreakTotals::default();
    let mut last_contribution: Option<DateTime<FixedOffset>> = None;

    for event in events {
        if !QUALIFYING_KINDS.contains(&event.kind.as_str()) {
            continue;
        }
        let Some(raw) = event.created_at.as_deref() else {
            continue;
        };
        let Ok(date) = DateTime::parse_from_rfc3339(raw) else {
            continue;
        };

        totals.total_contributions += 1;

        let new_day = last_contribution.map_or(true, |prev| date.ordinal() != prev.ordinal());
        if !new_day {
            continue;
        }

        match last_contribution {
            Some(prev) if date.signed_duration_since(prev) <= Duration::hours(24) => {
                totals.current_streak += 1;
                if totals.current_streak > totals.longest_streak {
                    totals.longest_streak = totals.current_streak;
                }
            }
            _ => totals.current_streak = 1,
        }
        last_contribution = Some(date);
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(kind: &str, created_at: &str) -> ActivityEvent {
        ActivityEvent {
            kind: kind.to_string(),
            created_at: Some(created_at.to_string()),
        }
    }

    #[test]
    fn test_empty_feed() {
        assert_eq!(compute(&[]), StreakTotals::default());
    }

    #[test]
    fn test_same_day_events_keep_initial_streak() {
        // All events on one day: the first starts the streak at 1 and the
        // rest fall on the same day-of-year, so neither counter advances.
        let events = vec![
            event("PushEvent", "2024-03-01T09:00:00Z"),
            event("PushEvent", "2024-03-01T12:00:00Z"),
            event("IssuesEvent", "2024-03-01T18:00:00Z"),
        ];
        let totals = compute(&events);
        assert_eq!(totals.total_contributions, 3);
        assert_eq!(totals.current_streak, 1);
        // longest_streak only moves on a <=24h extension, never on the reset.
        assert_eq!(totals.longest_streak, 0);
    }

    #[test]
    fn test_consecutive_days_extend_streak() {
        let events = vec![
            event("PushEvent", "2024-03-01T20:00:00Z"),
            event("PushEvent", "2024-03-02T10:00:00Z"),
            event("PullRequestEvent", "2024-03-03T09:00:00Z"),
        ];
        let totals = compute(&events);
        assert_eq!(totals.total_contributions, 3);
        assert_eq!(totals.current_streak, 3);
        assert_eq!(totals.longest_streak, 3);
    }

    #[test]
    fn test_gap_over_24_hours_resets_streak() {
        let events = vec![
            event("PushEvent", "2024-03-01T09:00:00Z"),
            event("PushEvent", "2024-03-02T08:00:00Z"),
            event("PushEvent", "2024-03-05T08:00:00Z"),
        ];
        let totals = compute(&events);
        assert_eq!(totals.current_streak, 1);
        assert_eq!(totals.longest_streak, 2);
    }

    #[test]
    fn test_exact_24_hour_gap_extends_streak() {
        let events = vec![
            event("PushEvent", "2024-03-01T09:00:00Z"),
            event("PushEvent", "2024-03-02T09:00:00Z"),
        ];
        let totals = compute(&events);
        assert_eq!(totals.current_streak, 2);
        assert_eq!(totals.longest_streak, 2);
    }

    #[test]
    fn test_reverse_chronological_feed_still_extends() {
        // The feed is walked as received; a newest-first feed yields negative
        // gaps, which pass the <=24h check and extend the streak.
        let events = vec![
            event("PushEvent", "2024-03-03T09:00:00Z"),
            event("PushEvent", "2024-03-02T09:00:00Z"),
            event("PushEvent", "2024-03-01T09:00:00Z"),
        ];
        let totals = compute(&events);
        assert_eq!(totals.current_streak, 3);
        assert_eq!(totals.longest_streak, 3);
    }

    #[test]
    fn test_non_qualifying_and_unparseable_events_skipped() {
        let events = vec![
            event("WatchEvent", "2024-03-01T09:00:00Z"),
            event("PushEvent", "not-a-timestamp"),
            ActivityEvent {
                kind: "PushEvent".to_string(),
                created_at: None,
            },
            event("PushEvent", "2024-03-02T09:00:00Z"),
        ];
        let totals = compute(&events);
        assert_eq!(totals.total_contributions, 1);
        assert_eq!(totals.current_streak, 1);
    }
}
