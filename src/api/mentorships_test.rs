use poem_openapi::param::Query;

use super::*;
use crate::coordinators::CadetCoordinator;
use crate::test::utils::{cadet_request, setup_test_app_data, staff_auth};
use crate::types::internal::{CadetStatus, Campus, RequestContext};

async fn enroll(app_data: &Arc<AppData>, name: &str) -> i32 {
    CadetCoordinator::new(app_data.clone())
        .create(&RequestContext::for_cli("seed"), cadet_request(name, Campus::Oahu, CadetStatus::Active))
        .await
        .unwrap()
        .id
}

fn mentor_request(cadet_id: i32, mentor_name: &str) -> CreateMentorshipRequest {
    CreateMentorshipRequest {
        cadet_id,
        mentor_name: mentor_name.to_string(),
        mentor_email: Some("mentor@example.org".to_string()),
        mentor_phone: None,
        assigned_date: None,
        status: None,
        meeting_frequency: Some("weekly".to_string()),
        last_meeting_date: None,
        next_meeting_date: None,
        notes: None,
    }
}

async fn assign(api: &MentorshipsApi, app_data: &AppData, request: CreateMentorshipRequest) -> MentorshipResponse {
    let CreateMentorshipResponse::Created(Json(mentorship)) =
        api.assign(staff_auth(app_data, None), Json(request)).await.unwrap();
    mentorship
}

#[tokio::test]
async fn test_assign_defaults_to_active_today() {
    let app_data = setup_test_app_data().await;
    let cadet_id = enroll(&app_data, "Ana").await;
    let api = MentorshipsApi::new(app_data.clone());

    let mentorship = assign(&api, &app_data, mentor_request(cadet_id, "Sgt. Akana")).await;

    assert_eq!(mentorship.cadet_id, cadet_id);
    assert_eq!(mentorship.status, "active");
    assert_eq!(mentorship.assigned_date, mentorship.created_at.date_naive());
    assert_eq!(mentorship.meeting_frequency.as_deref(), Some("weekly"));
}

#[tokio::test]
async fn test_list_filters_by_cadet_newest_first() {
    let app_data = setup_test_app_data().await;
    let ana = enroll(&app_data, "Ana").await;
    let ben = enroll(&app_data, "Ben").await;
    let api = MentorshipsApi::new(app_data.clone());
    let first = assign(&api, &app_data, mentor_request(ana, "Sgt. Akana")).await;
    assign(&api, &app_data, mentor_request(ben, "Lt. Mahoe")).await;
    let second = assign(&api, &app_data, mentor_request(ana, "Capt. Nakoa")).await;

    let for_ana = api.list(staff_auth(&app_data, None), Query(Some(ana))).await.unwrap();
    let ids: Vec<i32> = for_ana.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    let everyone = api.list(staff_auth(&app_data, None), Query(None)).await.unwrap();
    assert_eq!(everyone.len(), 3);
}

#[tokio::test]
async fn test_assign_to_missing_cadet_is_not_found() {
    let app_data = setup_test_app_data().await;
    let api = MentorshipsApi::new(app_data.clone());

    let err = api
        .assign(staff_auth(&app_data, None), Json(mentor_request(404, "Sgt. Akana")))
        .await
        .err()
        .unwrap();

    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn test_blank_mentor_name_is_rejected() {
    let app_data = setup_test_app_data().await;
    let cadet_id = enroll(&app_data, "Ana").await;
    let api = MentorshipsApi::new(app_data.clone());

    let err = api
        .assign(staff_auth(&app_data, None), Json(mentor_request(cadet_id, "  ")))
        .await
        .err()
        .unwrap();

    assert_eq!(err.status_code(), 400);
    assert_eq!(err.fields()[0].field, "mentor_name");
}
