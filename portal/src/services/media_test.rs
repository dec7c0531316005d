use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::testing::{client, ok};

#[test]
fn list_active_filters_and_orders() {
    let (client, transport) = client();
    transport.respond(
        200,
        ok(json!([
            { "id": "m1", "title": "B", "mediaType": "video", "url": "u1", "position": 2 },
            { "id": "m2", "title": "Hidden", "mediaType": "image", "url": "u2", "isActive": false },
            { "id": "m3", "title": "A", "mediaType": "image", "url": "u3", "position": 1 }
        ])),
    );
    let items = block_on(list_active(&client)).unwrap();
    let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, ["m3", "m1"]);
    assert_eq!(transport.requests()[0].url, "https://api.test/featured-media?active=true");
}

#[test]
fn media_type_must_be_known() {
    let (client, transport) = client();
    transport.respond(200, ok(json!([{ "id": "m1", "title": "x", "mediaType": "hologram", "url": "u" }])));
    assert!(matches!(block_on(list(&client)), Err(ApiError::Malformed(_))));
}
