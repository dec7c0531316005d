use portal::services::categories::Category;
use portal::services::media::{FeaturedMedia, MediaKind};

use super::*;

fn category(name: &str, active: bool) -> Category {
    Category {
        id: name.to_lowercase(),
        name: name.to_owned(),
        description: None,
        icon: None,
        is_active: active,
        tutor_count: 0,
        created_at: None,
    }
}

fn media(kind: MediaKind, thumbnail: Option<&str>) -> FeaturedMedia {
    FeaturedMedia {
        id: "m1".to_owned(),
        title: "Intro".to_owned(),
        kind,
        url: "https://cdn.test/intro".to_owned(),
        thumbnail_url: thumbnail.map(str::to_owned),
        link_url: None,
        position: 0,
        is_active: true,
    }
}

#[test]
fn visible_categories_drops_inactive_and_sorts_by_name() {
    let visible = visible_categories(vec![
        category("physics", true),
        category("Art", false),
        category("Biology", true),
    ]);
    let names: Vec<_> = visible.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Biology", "physics"]);
}

#[test]
fn image_previews_use_their_url() {
    assert_eq!(preview_src(&media(MediaKind::Image, None)), "https://cdn.test/intro");
}

#[test]
fn video_previews_use_thumbnail() {
    assert_eq!(preview_src(&media(MediaKind::Video, Some("https://cdn.test/t.jpg"))), "https://cdn.test/t.jpg");
    assert_eq!(preview_src(&media(MediaKind::Video, None)), "");
}

#[test]
fn tutor_count_label_pluralizes() {
    assert_eq!(tutor_count_label(0), "No tutors yet");
    assert_eq!(tutor_count_label(1), "1 tutor");
    assert_eq!(tutor_count_label(12), "12 tutors");
}
