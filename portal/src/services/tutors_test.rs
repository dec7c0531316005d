use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::http::Method;
use crate::testing::{client, ok};

#[test]
fn query_path_includes_only_set_filters() {
    assert_eq!(TutorQuery::default().to_path(), "/tutors");
    let query = TutorQuery {
        status: Some(TutorStatus::Pending),
        category_id: Some("c1".to_owned()),
        page: None,
        limit: Some(10),
    };
    assert_eq!(query.to_path(), "/tutors?status=pending&categoryId=c1&limit=10");
}

#[test]
fn list_decodes_tutors() {
    let (client, transport) = client();
    transport.respond(
        200,
        ok(json!([{
            "_id": "t1",
            "fullName": "Grace Hopper",
            "subjects": ["COBOL"],
            "hourlyRate": 40.5,
            "status": "approved"
        }])),
    );
    let tutors = block_on(list(&client, &TutorQuery::default())).unwrap();
    assert_eq!(tutors[0].full_name, "Grace Hopper");
    assert_eq!(tutors[0].status, TutorStatus::Approved);
    assert_eq!(tutors[0].hourly_rate, Some(40.5));
}

#[test]
fn unknown_status_is_malformed() {
    let (client, transport) = client();
    transport.respond(200, ok(json!({ "id": "t1", "fullName": "X", "status": "banished" })));
    assert!(matches!(block_on(get(&client, "t1")), Err(ApiError::Malformed(_))));
}

#[test]
fn set_status_patches_status_subresource() {
    let (client, transport) = client();
    transport.respond(200, ok(json!({ "id": "t1", "fullName": "X", "status": "suspended" })));
    let tutor = block_on(set_status(&client, "t1", TutorStatus::Suspended)).unwrap();
    assert_eq!(tutor.status, TutorStatus::Suspended);

    let sent = &transport.requests()[0];
    assert_eq!(sent.method, Method::Patch);
    assert_eq!(sent.url, "https://api.test/tutors/t1/status");
    assert_eq!(sent.body, Some(json!({ "status": "suspended" })));
}

#[test]
fn category_filter_is_encoded_as_one_value() {
    let (client, transport) = client();
    transport.respond(200, ok(json!([])));
    let query = TutorQuery { category_id: Some("c1&status=approved".to_owned()), ..TutorQuery::default() };

    block_on(list(&client, &query)).unwrap();

    assert_eq!(transport.requests()[0].url, "https://api.test/tutors?categoryId=c1%26status%3Dapproved");
}
