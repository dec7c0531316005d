use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::testing::{client, ok};

#[test]
fn query_path_encodes_filters() {
    let query = CourseQuery { category_id: None, tutor_id: Some("t1".to_owned()), published: Some(true) };
    assert_eq!(query.to_path(), "/courses?tutorId=t1&published=true");
}

#[test]
fn get_decodes_course_level() {
    let (client, transport) = client();
    transport.respond(200, ok(json!({ "id": "k1", "title": "Algebra I", "level": "beginner", "price": 0 })));
    let course = block_on(get(&client, "k1")).unwrap();
    assert_eq!(course.level, Some(CourseLevel::Beginner));
    assert_eq!(course.price, Some(0.0));
    assert!(!course.is_published);
}
