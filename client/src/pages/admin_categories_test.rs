use portal::services::categories::Category;

use super::*;

#[test]
fn blank_form_creates_active_categories() {
    let form = CategoryForm::blank();
    assert!(form.editing.is_none());
    assert!(form.is_active);
}

#[test]
fn category_input_trims_and_drops_blank_optionals() {
    let form = CategoryForm { name: "  Chemistry ".to_owned(), description: "   ".to_owned(), ..CategoryForm::blank() };
    let input = category_input(&form).unwrap();
    assert_eq!(input.name, "Chemistry");
    assert_eq!(input.description, None);
    assert_eq!(input.icon, None);
    assert!(input.is_active);
}

#[test]
fn category_input_requires_name() {
    assert_eq!(category_input(&CategoryForm::blank()), Err("Enter a category name."));
}

#[test]
fn edit_prefills_from_category() {
    let category = Category {
        id: "c1".to_owned(),
        name: "Math".to_owned(),
        description: Some("Numbers".to_owned()),
        icon: None,
        is_active: false,
        tutor_count: 3,
        created_at: None,
    };
    let form = CategoryForm::edit(&category);
    assert_eq!(form.editing.as_deref(), Some("c1"));
    assert_eq!(form.description, "Numbers");
    assert!(!form.is_active);
}

#[test]
fn poll_interval_is_thirty_seconds() {
    assert_eq!(POLL_INTERVAL_SECS, 30);
}
