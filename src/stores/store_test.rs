use chrono::{Duration, Utc};
use sea_orm::Set;

use super::*;
use crate::test::utils::{application_request, at, cadet_request, event_request, setup_test_db};
use crate::types::internal::{ActivityIntent, ActivityType, ApplicationStatus, CadetStatus, Campus};

async fn seed_cadet(
    db: &sea_orm::DatabaseConnection,
    name: &str,
    campus: Campus,
    status: CadetStatus,
    service_hours: Option<i32>,
) -> crate::types::db::cadet::Model {
    let mut model = cadet_request(name, campus, status).into_active_model(Utc::now());
    model.service_hours = Set(service_hours);
    CadetStore::new().insert(db, model).await.unwrap()
}

#[tokio::test]
async fn test_cohort_counts_scoped_to_campus() {
    let db = setup_test_db().await;
    seed_cadet(&db, "Ana", Campus::Oahu, CadetStatus::Active, Some(10)).await;
    seed_cadet(&db, "Ben", Campus::Oahu, CadetStatus::Active, Some(5)).await;
    seed_cadet(&db, "Cal", Campus::Oahu, CadetStatus::Graduated, None).await;
    seed_cadet(&db, "Dee", Campus::Hilo, CadetStatus::Active, Some(100)).await;

    let counts = MetricsStore::new().cohort_counts(&db, Some(Campus::Oahu)).await.unwrap();

    assert_eq!(counts.total_cadets, 3);
    assert_eq!(counts.active_cadets, 2);
    assert_eq!(counts.graduated_cadets, 1);
    assert_eq!(counts.service_hours, 15);
    assert_eq!(counts.pending_applications, 0);
}

#[tokio::test]
async fn test_cohort_counts_on_empty_database() {
    let db = setup_test_db().await;

    let counts = MetricsStore::new().cohort_counts(&db, None).await.unwrap();

    assert_eq!(counts, Default::default());
}

#[tokio::test]
async fn test_pending_applications_use_preferred_campus() {
    let db = setup_test_db().await;
    let store = ApplicationStore::new();
    store
        .insert(&db, application_request("Kai", Campus::Hilo).into_active_model(Utc::now()))
        .await
        .unwrap();
    let reviewed = store
        .insert(&db, application_request("Lei", Campus::Hilo).into_active_model(Utc::now()))
        .await
        .unwrap();
    let mut approved: crate::types::db::application::ActiveModel = reviewed.into();
    approved.status = Set(ApplicationStatus::Approved.as_str().to_string());
    store.update(&db, approved).await.unwrap();

    let metrics = MetricsStore::new();
    assert_eq!(metrics.cohort_counts(&db, Some(Campus::Hilo)).await.unwrap().pending_applications, 1);
    assert_eq!(metrics.cohort_counts(&db, Some(Campus::Oahu)).await.unwrap().pending_applications, 0);

    let pending = store.list(&db, Some(ApplicationStatus::Pending), None).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].first_name, "Kai");
}

#[tokio::test]
async fn test_cadet_list_newest_first_and_filtered() {
    let db = setup_test_db().await;
    let store = CadetStore::new();
    let first = seed_cadet(&db, "First", Campus::Oahu, CadetStatus::Active, None).await;
    let second = seed_cadet(&db, "Second", Campus::Oahu, CadetStatus::Active, None).await;
    seed_cadet(&db, "Elsewhere", Campus::Hilo, CadetStatus::Active, None).await;

    let oahu = store.list(&db, Some(Campus::Oahu)).await.unwrap();
    let ids: Vec<i32> = oahu.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    assert_eq!(store.list(&db, None).await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_missing_cadet_is_not_found() {
    let db = setup_test_db().await;

    let result = CadetStore::new().get(&db, 404).await;

    assert!(matches!(
        result,
        Err(crate::errors::InternalError::Record(crate::errors::internal::RecordError::NotFound { .. }))
    ));
}

#[tokio::test]
async fn test_progress_scores_follow_scope() {
    let db = setup_test_db().await;
    seed_cadet(&db, "Ana", Campus::Oahu, CadetStatus::Active, Some(12)).await;
    seed_cadet(&db, "Dee", Campus::Hilo, CadetStatus::Active, Some(4)).await;

    let scores = CadetStore::new().progress_scores(&db, Some(Campus::Hilo)).await.unwrap();

    assert_eq!(scores.len(), 1);
    assert_eq!(scores[0].service_hours, Some(4));
    assert_eq!(scores[0].academic, Some(0.0));
}

#[tokio::test]
async fn test_event_filter_bounds() {
    let db = setup_test_db().await;
    let store = EventStore::new();
    let early = at(2025, 3, 10, 8, 0);
    for (title, start, hours) in [("Early", early, 2), ("Late", early + Duration::hours(6), 1)] {
        let request = event_request(title, Some("Gym"), Campus::Oahu, start, start + Duration::hours(hours));
        store
            .insert(&db, request.into_active_model("staff-1", Utc::now()))
            .await
            .unwrap();
    }

    let all = store.list(&db, &EventFilter::default()).await.unwrap();
    assert_eq!(all.iter().map(|e| e.title.as_str()).collect::<Vec<_>>(), vec!["Early", "Late"]);

    let filter = EventFilter {
        ends_after: Some(early + Duration::hours(3)),
        ..Default::default()
    };
    let still_running = store.list(&db, &filter).await.unwrap();
    assert_eq!(still_running.len(), 1);
    assert_eq!(still_running[0].title, "Late");

    let filter = EventFilter {
        campus: Some(Campus::Hilo),
        ..Default::default()
    };
    assert!(store.list(&db, &filter).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_activity_feed_is_newest_first_and_limited() {
    let db = setup_test_db().await;
    let store = ActivityStore::new();
    for title in ["one", "two", "three"] {
        let intent = ActivityIntent {
            activity_type: ActivityType::SystemEvent,
            title: title.to_string(),
            description: None,
            related_id: None,
            related_type: None,
            campus: Some("oahu".to_string()),
        };
        store.record(&db, intent, "staff-1").await.unwrap();
    }

    let recent = store.recent(&db, Some(Campus::Oahu), 2).await.unwrap();

    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].title, "three");
    assert_eq!(recent[1].title, "two");
    assert_eq!(recent[0].performed_by.as_deref(), Some("staff-1"));
    assert!(store.recent(&db, Some(Campus::Hilo), 10).await.unwrap().is_empty());
}
