use chrono::Duration;
use chrono::NaiveDateTime;

use serde::Deserialize;
use serde::Serialize;

use super::COOLDOWN_DAYS;

/// Kind of a tracked action.
#[derive(PartialEq, Eq, Debug, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Urge,
    Relapse,
}

/// A single tracked action at a point in time. Immutable once appended.
/// Timestamps are naive local datetimes serialized as ISO-8601 strings,
/// which is the format the document has always used on disk.
#[derive(PartialEq, Eq, Debug, Serialize, Deserialize, Clone)]
pub struct EventEntity {
    pub timestamp: NaiveDateTime,
    #[serde(rename = "type")]
    pub kind: EventKind,
}

/// The whole persisted document. `logs` keeps insertion order; chronological
/// order is assumed by callers but not enforced.
#[derive(PartialEq, Eq, Debug, Serialize, Deserialize, Clone, Default)]
pub struct TrackerState {
    #[serde(default)]
    pub last_relapse: Option<NaiveDateTime>,
    #[serde(default)]
    pub next_allowed_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub logs: Vec<EventEntity>,
}

impl TrackerState {
    /// Appends an event at `now`. A relapse also moves `last_relapse` and
    /// restarts the cooldown window.
    pub fn append_event(&mut self, kind: EventKind, now: NaiveDateTime) {
        self.logs.push(EventEntity { timestamp: now, kind });
        if kind == EventKind::Relapse {
            self.last_relapse = Some(now);
            self.next_allowed_date = Some(now + Duration::days(COOLDOWN_DAYS));
        }
    }

    /// Relapse timestamps in the order they were appended.
    pub fn relapse_times(&self) -> impl Iterator<Item = NaiveDateTime> + '_ {
        self.logs
            .iter()
            .filter(|v| v.kind == EventKind::Relapse)
            .map(|v| v.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};

    use super::{EventKind, TrackerState};

    fn moment(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_relapse_sets_cooldown_fields() {
        let mut state = TrackerState::default();
        state.append_event(EventKind::Relapse, moment(1, 0));

        assert_eq!(state.last_relapse, Some(moment(1, 0)));
        assert_eq!(state.next_allowed_date, Some(moment(3, 0)));
        assert_eq!(state.logs.len(), 1);
    }

    #[test]
    fn test_urge_leaves_cooldown_fields_alone() {
        let mut state = TrackerState::default();
        state.append_event(EventKind::Urge, moment(1, 12));

        assert_eq!(state.last_relapse, None);
        assert_eq!(state.next_allowed_date, None);
        assert_eq!(state.logs[0].kind, EventKind::Urge);
    }

    #[test]
    fn test_document_format_matches_legacy_files() {
        // Documents written by earlier versions of the tracker must parse
        // unchanged.
        let raw = r#"{
            "last_relapse": "2024-01-01T00:00:00",
            "next_allowed_date": "2024-01-03T00:00:00",
            "logs": [
                {"timestamp": "2023-12-30T08:15:00", "type": "urge"},
                {"timestamp": "2024-01-01T00:00:00", "type": "relapse"}
            ]
        }"#;

        let state: TrackerState = serde_json::from_str(raw).unwrap();
        assert_eq!(state.last_relapse, Some(moment(1, 0)));
        assert_eq!(state.next_allowed_date, Some(moment(1, 0) + Duration::days(2)));
        assert_eq!(state.logs.len(), 2);
        assert_eq!(state.logs[0].kind, EventKind::Urge);
        assert_eq!(state.logs[1].kind, EventKind::Relapse);

        let serialized = serde_json::to_string(&state).unwrap();
        assert!(serialized.contains("\"2024-01-03T00:00:00\""));
        assert!(serialized.contains("\"type\":\"relapse\""));
    }

    #[test]
    fn test_empty_document_defaults() {
        let state: TrackerState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, TrackerState::default());
    }
}
