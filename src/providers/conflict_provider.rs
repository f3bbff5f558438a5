use std::collections::HashMap;

use crate::types::db::event;
use crate::types::internal::schedule::ConflictGroup;

/// Half-open interval overlap; back-to-back events do not overlap
pub fn overlaps(a: &event::Model, b: &event::Model) -> bool {
    a.start_time < b.end_time && b.start_time < a.end_time
}

/// Find every event that overlaps another event at the same location
///
/// Locations are compared verbatim. Events without a location never
/// conflict. Groups are ordered by start time, as is each conflict list.
pub fn detect_conflicts(events: &[event::Model]) -> Vec<ConflictGroup> {
    let mut by_location: HashMap<&str, Vec<&event::Model>> = HashMap::new();
    for event in events {
        if let Some(location) = event.location.as_deref() {
            by_location.entry(location).or_default().push(event);
        }
    }

    let mut groups = Vec::new();

    for (_, mut bucket) in by_location {
        bucket.sort_by_key(|e| (e.start_time, e.id));

        let mut hits: Vec<Vec<usize>> = vec![Vec::new(); bucket.len()];
        for i in 0..bucket.len() {
            for j in (i + 1)..bucket.len() {
                // Sorted by start: nothing further can begin before i ends
                if bucket[j].start_time >= bucket[i].end_time {
                    break;
                }
                if bucket[i].id == bucket[j].id || !overlaps(bucket[i], bucket[j]) {
                    continue;
                }
                hits[i].push(j);
                hits[j].push(i);
            }
        }

        for (i, mut others) in hits.into_iter().enumerate() {
            if others.is_empty() {
                continue;
            }
            others.sort_unstable();
            groups.push(ConflictGroup {
                event: bucket[i].clone(),
                conflicts_with: others.into_iter().map(|j| bucket[j].clone()).collect(),
            });
        }
    }

    groups.sort_by_key(|g| (g.event.start_time, g.event.id));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, hour, minute, 0).unwrap()
    }

    fn event(id: i32, location: Option<&str>, start: DateTime<Utc>, end: DateTime<Utc>) -> event::Model {
        event::Model {
            id,
            title: format!("Event {}", id),
            description: None,
            event_type: "training".to_string(),
            start_time: start,
            end_time: end,
            location: location.map(str::to_string),
            campus: "oahu".to_string(),
            max_participants: None,
            current_participants: Some(0),
            is_required: Some(false),
            created_by: "staff-1".to_string(),
            created_at: start,
            updated_at: start,
        }
    }

    fn ids(group: &ConflictGroup) -> Vec<i32> {
        group.conflicts_with.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_gym_chain() {
        let events = vec![
            event(1, Some("Gym"), at(9, 0), at(10, 0)),
            event(2, Some("Gym"), at(9, 30), at(10, 30)),
            event(3, Some("Gym"), at(10, 0), at(11, 0)),
        ];

        let groups = detect_conflicts(&events);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].event.id, 1);
        assert_eq!(ids(&groups[0]), vec![2]);
        assert_eq!(groups[1].event.id, 2);
        assert_eq!(ids(&groups[1]), vec![1, 3]);
        assert_eq!(groups[2].event.id, 3);
        assert_eq!(ids(&groups[2]), vec![2]);
    }

    #[test]
    fn test_back_to_back_does_not_conflict() {
        let events = vec![
            event(1, Some("Field"), at(8, 0), at(9, 0)),
            event(2, Some("Field"), at(9, 0), at(10, 0)),
        ];
        assert!(detect_conflicts(&events).is_empty());
    }

    #[test]
    fn test_locations_compared_verbatim() {
        let events = vec![
            event(1, Some("Gym"), at(9, 0), at(10, 0)),
            event(2, Some("gym"), at(9, 0), at(10, 0)),
            event(3, None, at(9, 0), at(10, 0)),
            event(4, None, at(9, 0), at(10, 0)),
        ];
        assert!(detect_conflicts(&events).is_empty());
    }

    #[test]
    fn test_same_id_never_conflicts_with_itself() {
        let events = vec![
            event(7, Some("Hall"), at(9, 0), at(10, 0)),
            event(7, Some("Hall"), at(9, 0), at(10, 0)),
        ];
        assert!(detect_conflicts(&events).is_empty());
    }

    #[test]
    fn test_long_event_spans_several_short_ones() {
        let events = vec![
            event(1, Some("Hall"), at(8, 0), at(12, 0)),
            event(2, Some("Hall"), at(8, 30), at(9, 0)),
            event(3, Some("Hall"), at(10, 0), at(10, 30)),
            event(4, Some("Hall"), at(12, 0), at(13, 0)),
        ];

        let groups = detect_conflicts(&events);
        assert_eq!(groups[0].event.id, 1);
        assert_eq!(ids(&groups[0]), vec![2, 3]);
        assert_eq!(groups.len(), 3);
    }

    fn brute_force(events: &[event::Model]) -> Vec<(i32, Vec<i32>)> {
        let mut sorted: Vec<&event::Model> = events.iter().collect();
        sorted.sort_by_key(|e| (e.start_time, e.id));

        sorted
            .iter()
            .filter_map(|a| {
                let a_loc = a.location.as_deref()?;
                let hits: Vec<i32> = sorted
                    .iter()
                    .filter(|b| b.id != a.id && b.location.as_deref() == Some(a_loc) && overlaps(a, b))
                    .map(|b| b.id)
                    .collect();
                (!hits.is_empty()).then_some((a.id, hits))
            })
            .collect()
    }

    #[test]
    fn test_sweep_matches_pairwise_comparison() {
        // Deterministic LCG so failures are reproducible
        let mut seed: u64 = 0x5eed;
        let mut next = move |bound: u64| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (seed >> 33) % bound
        };

        let locations = [Some("Gym"), Some("Hall"), Some("Field"), None];
        let base = at(6, 0);

        for _ in 0..50 {
            let events: Vec<event::Model> = (1..=25)
                .map(|id| {
                    let start = base + Duration::minutes(next(16 * 60) as i64);
                    let end = start + Duration::minutes(next(180) as i64);
                    event(id, locations[next(4) as usize], start, end)
                })
                .collect();

            let sweep: Vec<(i32, Vec<i32>)> = detect_conflicts(&events)
                .iter()
                .map(|g| (g.event.id, ids(g)))
                .collect();

            assert_eq!(sweep, brute_force(&events));
        }
    }
}
